pub mod home;
pub mod mot_report;
pub mod valuation_report;

pub use home::home_page;
pub use mot_report::mot_report_page;
pub use valuation_report::valuation_report_page;
