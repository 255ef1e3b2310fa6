pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, error_card};
pub use layouts::desktop::desktop_layout;
