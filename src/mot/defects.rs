use crate::mot::models::DefectItem;

/// Which bucket a defect type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectClass {
    Failure,
    Advisory,
    /// Types outside both known sets. Kept out of the visible lists.
    Unclassified,
}

impl DefectClass {
    /// Exact, case-sensitive match on the upstream type string.
    pub fn of(defect_type: &str) -> Self {
        match defect_type {
            "FAIL" | "PRS" | "MAJOR" | "DANGEROUS" => DefectClass::Failure,
            "ADVISORY" | "USER ENTERED" | "MINOR" => DefectClass::Advisory,
            _ => DefectClass::Unclassified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectStatus {
    /// The test carried no defect items at all.
    NoneRecorded,
    /// Items were recorded but none were failures or advisories.
    NoIssues,
    Issues,
}

/// A test's defect list split by class. Every input item lands in exactly
/// one of the three lists, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefectSummary {
    pub failures: Vec<DefectItem>,
    pub advisories: Vec<DefectItem>,
    pub unclassified: Vec<DefectItem>,
}

impl DefectSummary {
    pub fn partition(items: &[DefectItem]) -> Self {
        let mut summary = DefectSummary::default();

        for item in items {
            let bucket = match DefectClass::of(&item.defect_type) {
                DefectClass::Failure => &mut summary.failures,
                DefectClass::Advisory => &mut summary.advisories,
                DefectClass::Unclassified => &mut summary.unclassified,
            };
            bucket.push(item.clone());
        }

        summary
    }

    pub fn recorded(&self) -> usize {
        self.failures.len() + self.advisories.len() + self.unclassified.len()
    }

    pub fn status(&self) -> DefectStatus {
        if self.recorded() == 0 {
            DefectStatus::NoneRecorded
        } else if self.failures.is_empty() && self.advisories.is_empty() {
            DefectStatus::NoIssues
        } else {
            DefectStatus::Issues
        }
    }

    pub fn has_dangerous(&self) -> bool {
        self.failures.iter().any(|d| d.dangerous)
    }
}
