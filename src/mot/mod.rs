pub mod defects;
pub mod history;
pub mod models;

pub use defects::{DefectStatus, DefectSummary};
pub use history::{
    build_mot_history_report, mot_history_report_from_json, MotHistoryReport, TestSummary,
};
pub use models::RawMotPayload;
