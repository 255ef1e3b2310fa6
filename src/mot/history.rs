// src/mot/history.rs

use crate::domain::VehicleDescriptor;
use crate::errors::ReportError;
use crate::mot::defects::DefectSummary;
use crate::mot::models::{MotTestRecord, RawMotPayload};

/// One entry of the history timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSummary {
    /// Position in the upstream list; 0 is the latest test.
    pub index: usize,
    pub record: MotTestRecord,
    pub defects: DefectSummary,
}

impl TestSummary {
    pub fn passed(&self) -> bool {
        self.record.test_result == "PASSED"
    }

    /// True when the raw defect list was non-empty, whatever its types.
    pub fn has_recorded_defects(&self) -> bool {
        !self.record.rfr_and_comments.is_empty()
    }

    /// Stable element id for the collapsible detail block.
    pub fn detail_id(&self) -> String {
        format!("test-{}", self.index)
    }
}

/// Normalized view of a vehicle's MOT history.
#[derive(Debug, Clone, PartialEq)]
pub struct MotHistoryReport {
    pub registration: String,
    pub vehicle: VehicleDescriptor,
    pub latest_test: MotTestRecord,
    pub latest_defects: DefectSummary,
    pub total_test_count: usize,
    /// Same order as the payload, nothing dropped or merged.
    pub timeline: Vec<TestSummary>,
}

/// Builds the history report. The payload is trusted to list tests most
/// recent first; no re-sorting happens here.
pub fn build_mot_history_report(payload: &RawMotPayload) -> Result<MotHistoryReport, ReportError> {
    let tests = &payload.data.mot_tests;
    let latest = tests.first().ok_or(ReportError::EmptyHistory)?;

    tracing::debug!(
        registration = %payload.registration,
        tests = tests.len(),
        latest_defects = latest.rfr_and_comments.len(),
        "building MOT history report"
    );

    let timeline: Vec<TestSummary> = tests
        .iter()
        .enumerate()
        .map(|(index, record)| TestSummary {
            index,
            record: record.clone(),
            defects: DefectSummary::partition(&record.rfr_and_comments),
        })
        .collect();

    Ok(MotHistoryReport {
        registration: payload.registration.clone(),
        vehicle: VehicleDescriptor::new(
            payload.data.make.as_deref(),
            payload.data.model.as_deref(),
            payload.data.primary_colour.as_deref(),
        ),
        latest_test: latest.clone(),
        latest_defects: timeline[0].defects.clone(),
        total_test_count: tests.len(),
        timeline,
    })
}

/// Parses a raw JSON body and builds the report in one step.
pub fn mot_history_report_from_json(body: &[u8]) -> Result<MotHistoryReport, ReportError> {
    let payload: RawMotPayload = serde_json::from_slice(body)?;
    build_mot_history_report(&payload)
}
