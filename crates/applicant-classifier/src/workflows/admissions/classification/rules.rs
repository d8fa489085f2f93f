use chrono::{Months, NaiveDate};

use super::super::domain::ApplicantRecord;
use super::config::ClassificationConfig;
use super::policy::RejectReason;

/// Result of each instant accept sub-test, kept separate for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AcceptanceChecks {
    pub age_and_residency: bool,
    pub gpa: bool,
    pub standardized_test: bool,
}

impl AcceptanceChecks {
    pub fn all_met(&self) -> bool {
        self.age_and_residency && self.gpa && self.standardized_test
    }
}

pub(crate) struct ClassificationSignals {
    pub acceptance: AcceptanceChecks,
    pub reject_reason: Option<RejectReason>,
}

pub(crate) fn collect_signals(
    applicant: &ApplicantRecord,
    config: &ClassificationConfig,
    today: NaiveDate,
) -> ClassificationSignals {
    let acceptance = AcceptanceChecks {
        age_and_residency: meets_age_requirement(applicant, config),
        gpa: applicant.gpa_percent() >= config.minimum_accept_gpa_percent,
        standardized_test: meets_test_requirement(applicant, config),
    };

    ClassificationSignals {
        acceptance,
        reject_reason: find_reject_reason(applicant, config, today),
    }
}

fn meets_age_requirement(applicant: &ApplicantRecord, config: &ClassificationConfig) -> bool {
    let in_state_band = applicant.state == config.in_state
        && (config.minimum_in_state_age..=config.maximum_in_state_age).contains(&applicant.age);

    in_state_band || applicant.age >= config.minimum_any_state_age
}

fn meets_test_requirement(applicant: &ApplicantRecord, config: &ClassificationConfig) -> bool {
    let sat = applicant
        .sat_score
        .is_some_and(|score| score >= config.minimum_sat_score);
    let act = applicant
        .act_score
        .is_some_and(|score| score >= config.minimum_act_score);

    sat || act
}

/// First matching disqualifier in priority order.
fn find_reject_reason(
    applicant: &ApplicantRecord,
    config: &ClassificationConfig,
    today: NaiveDate,
) -> Option<RejectReason> {
    if recent_felonies(applicant, config, today) > config.acceptable_felonies {
        return Some(RejectReason::RecentFelonies {
            acceptable: config.acceptable_felonies,
            lookback_years: config.felony_lookback_years,
        });
    }

    if applicant.gpa_percent() < config.minimum_gpa_percent {
        return Some(RejectReason::GpaBelowMinimum {
            minimum_percent: config.minimum_gpa_percent,
        });
    }

    if applicant.age < 0 {
        return Some(RejectReason::NegativeAge);
    }

    if !is_capitalized(&applicant.first_name) {
        return Some(RejectReason::FirstNameCapitalization);
    }

    if !is_capitalized(&applicant.last_name) {
        return Some(RejectReason::LastNameCapitalization);
    }

    None
}

/// Felonies dated strictly after the start of the lookback window.
fn recent_felonies(
    applicant: &ApplicantRecord,
    config: &ClassificationConfig,
    today: NaiveDate,
) -> usize {
    let window_start = today
        .checked_sub_months(Months::new(config.felony_lookback_years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    applicant
        .felony_dates
        .iter()
        .filter(|date| **date > window_start)
        .count()
}

/// First letter not lower case, every following letter not upper case.
pub(crate) fn is_capitalized(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => false,
        Some(_) => !chars.any(char::is_uppercase),
        None => false,
    }
}
