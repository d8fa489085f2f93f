use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::classification::{ClassificationConfig, Classifier};
use super::domain::{ApplicantRecord, ApplicantStatus, ClassifiedApplicant};
use super::repository::ApplicantRepository;
use super::validation::{ApplicantValidator, ValidationError};

/// Service composing the validator, classifier, and applicant store.
pub struct ApplicantService<R> {
    validator: ApplicantValidator,
    classifier: Arc<Classifier>,
    repository: Arc<R>,
}

impl<R> ApplicantService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ClassificationConfig) -> Self {
        Self {
            validator: ApplicantValidator,
            classifier: Arc::new(Classifier::new(config)),
            repository,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Validate, classify, and store an applicant using the local calendar date.
    pub fn process_applicant(
        &self,
        applicant: ApplicantRecord,
    ) -> Result<ApplicantStatus, ValidationError> {
        self.process_applicant_on(applicant, Local::now().date_naive())
    }

    /// Same as [`Self::process_applicant`] with an explicit evaluation date.
    ///
    /// Validation failures are returned unchanged and nothing is stored.
    pub fn process_applicant_on(
        &self,
        applicant: ApplicantRecord,
        today: NaiveDate,
    ) -> Result<ApplicantStatus, ValidationError> {
        if let Err(error) = self.validator.validate(&applicant) {
            warn!(%error, "applicant failed validation");
            return Err(error);
        }

        let status = self.classifier.classify(&applicant, today);

        info!(
            applicant = %applicant.full_name(),
            classification = %status.classification,
            reason = status.reason.as_deref().unwrap_or(""),
            "classified applicant"
        );

        self.repository.save(ClassifiedApplicant {
            applicant,
            status: status.clone(),
        });

        Ok(status)
    }
}
