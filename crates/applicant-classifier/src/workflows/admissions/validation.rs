use super::domain::ApplicantRecord;

/// Structural problems that stop an application before classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("GPA cannot be greater than GPA Scale")]
    GpaExceedsScale,
    #[error("Must contain SAT Score, ACT Score, or both")]
    MissingTestScores,
    #[error("First Name cannot be null or empty")]
    MissingFirstName,
    #[error("Last Name cannot be null or empty")]
    MissingLastName,
}

/// Precondition checks run ahead of the classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicantValidator;

impl ApplicantValidator {
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// - the GPA must not exceed the GPA scale;
    /// - an SAT score, an ACT score, or both must be present;
    /// - the first name must not be empty;
    /// - the last name must not be empty.
    pub fn validate(&self, applicant: &ApplicantRecord) -> Result<(), ValidationError> {
        if applicant.gpa_scale < applicant.gpa {
            return Err(ValidationError::GpaExceedsScale);
        }

        if applicant.sat_score.is_none() && applicant.act_score.is_none() {
            return Err(ValidationError::MissingTestScores);
        }

        if applicant.first_name.is_empty() {
            return Err(ValidationError::MissingFirstName);
        }

        if applicant.last_name.is_empty() {
            return Err(ValidationError::MissingLastName);
        }

        Ok(())
    }
}
