use applicant_classifier::workflows::admissions::{ApplicantRepository, ClassifiedApplicant};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Store that records each classified applicant as a tracing event and retains nothing.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoggingApplicantRepository;

impl ApplicantRepository for LoggingApplicantRepository {
    fn save(&self, applicant: ClassifiedApplicant) {
        info!(
            applicant = %applicant.applicant.full_name(),
            classification = %applicant.status.classification,
            reason = applicant.status.reason.as_deref().unwrap_or(""),
            "stored classified applicant"
        );
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
