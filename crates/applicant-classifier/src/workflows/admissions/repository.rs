use super::domain::ClassifiedApplicant;

/// Storage hook receiving every classified applicant exactly once.
///
/// Implementations own any failure handling; the classifier never observes one.
pub trait ApplicantRepository: Send + Sync {
    fn save(&self, applicant: ClassifiedApplicant);
}
