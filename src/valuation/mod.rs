pub mod models;
pub mod report;

pub use models::RawValuationPayload;
pub use report::{
    build_valuation_report, valuation_report_from_json, FinancialBreakdown, SubScore,
    ValuationReport,
};
