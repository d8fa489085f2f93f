mod config;
mod policy;
mod rules;

pub use config::*;
pub use policy::RejectReason;

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{ApplicantRecord, ApplicantStatus};
use policy::decide_outcome;

/// Stateless classifier applying the configured thresholds to a validated applicant.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassificationConfig,
}

impl Classifier {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Classify an applicant that already passed validation, evaluating felony
    /// windows relative to `today`.
    pub fn classify(&self, applicant: &ApplicantRecord, today: NaiveDate) -> ApplicantStatus {
        let signals = rules::collect_signals(applicant, &self.config, today);

        debug!(
            age_and_residency = signals.acceptance.age_and_residency,
            gpa = signals.acceptance.gpa,
            standardized_test = signals.acceptance.standardized_test,
            reject_reason = ?signals.reject_reason,
            "collected classification signals"
        );

        decide_outcome(&signals)
    }
}
