// src/domain/recommendation.rs

/// Display severity shared by badges, markers and factor lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Badge severity for a raw MOT test result.
pub fn result_severity(test_result: &str) -> Severity {
    match test_result {
        "PASSED" => Severity::Success,
        "FAILED" => Severity::Danger,
        _ => Severity::Warning,
    }
}

/// Purchase verdict from the valuation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    AcceptableWithCaution,
    Risky,
    NotRecommended,
    InsufficientData,
}

impl Recommendation {
    #[cfg(test)]
    pub const ALL: [Recommendation; 6] = [
        Recommendation::HighlyRecommended,
        Recommendation::Recommended,
        Recommendation::AcceptableWithCaution,
        Recommendation::Risky,
        Recommendation::NotRecommended,
        Recommendation::InsufficientData,
    ];

    /// Exact, case-sensitive tag lookup. Unknown or missing tags never fail;
    /// they resolve to `InsufficientData`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("highly_recommended") => Recommendation::HighlyRecommended,
            Some("recommended") => Recommendation::Recommended,
            Some("acceptable_with_caution") => Recommendation::AcceptableWithCaution,
            Some("risky") => Recommendation::Risky,
            Some("not_recommended") => Recommendation::NotRecommended,
            _ => Recommendation::InsufficientData,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Recommendation::HighlyRecommended => "highly_recommended",
            Recommendation::Recommended => "recommended",
            Recommendation::AcceptableWithCaution => "acceptable_with_caution",
            Recommendation::Risky => "risky",
            Recommendation::NotRecommended => "not_recommended",
            Recommendation::InsufficientData => "insufficient_data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::HighlyRecommended => "Highly Recommended",
            Recommendation::Recommended => "Recommended",
            Recommendation::AcceptableWithCaution => "Acceptable with Caution",
            Recommendation::Risky => "Risky Purchase",
            Recommendation::NotRecommended => "Not Recommended",
            Recommendation::InsufficientData => "Insufficient Data",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Recommendation::HighlyRecommended | Recommendation::Recommended => Severity::Success,
            Recommendation::NotRecommended => Severity::Danger,
            Recommendation::AcceptableWithCaution
            | Recommendation::Risky
            | Recommendation::InsufficientData => Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips() {
        for rec in Recommendation::ALL {
            assert_eq!(Recommendation::from_tag(Some(rec.tag())), rec);
        }
    }

    #[test]
    fn unknown_tags_fall_back() {
        assert_eq!(
            Recommendation::from_tag(Some("foobar")),
            Recommendation::InsufficientData
        );
        assert_eq!(
            Recommendation::from_tag(Some("Recommended")),
            Recommendation::InsufficientData
        );
        assert_eq!(Recommendation::from_tag(None), Recommendation::InsufficientData);
    }

    #[test]
    fn severities() {
        assert_eq!(Recommendation::Risky.label(), "Risky Purchase");
        assert_eq!(Recommendation::Risky.severity(), Severity::Warning);
        assert_eq!(Recommendation::NotRecommended.severity().css_class(), "danger");
        assert_eq!(result_severity("PASSED"), Severity::Success);
        assert_eq!(result_severity("FAILED"), Severity::Danger);
        assert_eq!(result_severity("ABORTED"), Severity::Warning);
    }
}
