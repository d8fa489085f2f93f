use serde::{Deserialize, Serialize};

use super::super::domain::ApplicantStatus;
use super::rules::ClassificationSignals;

/// Disqualifiers that force an instant reject, in evaluation priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectReason {
    RecentFelonies {
        acceptable: usize,
        lookback_years: u32,
    },
    GpaBelowMinimum {
        minimum_percent: f64,
    },
    NegativeAge,
    FirstNameCapitalization,
    LastNameCapitalization,
}

impl RejectReason {
    pub fn summary(&self) -> String {
        match self {
            RejectReason::RecentFelonies {
                acceptable,
                lookback_years,
            } => format!(
                "Applicant cannot have {} or more felonies over the past {} years",
                acceptable + 1,
                lookback_years
            ),
            RejectReason::GpaBelowMinimum { minimum_percent } => format!(
                "Applicant cannot have GPA below {:.0}%",
                minimum_percent * 100.0
            ),
            RejectReason::NegativeAge => "Applicant cannot have a negative age".to_string(),
            RejectReason::FirstNameCapitalization => {
                "Applicant must have a first name with the first letter capitalized, the rest lower case"
                    .to_string()
            }
            RejectReason::LastNameCapitalization => {
                "Applicant must have a last name with the first letter capitalized, the rest lower case"
                    .to_string()
            }
        }
    }
}

/// Reject always wins over accept; otherwise accept needs every sub-test.
pub(crate) fn decide_outcome(signals: &ClassificationSignals) -> ApplicantStatus {
    if let Some(reason) = &signals.reject_reason {
        return ApplicantStatus::instant_reject(reason.summary());
    }

    if signals.acceptance.all_met() {
        return ApplicantStatus::instant_accept();
    }

    ApplicantStatus::further_review()
}
