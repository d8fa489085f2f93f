//! College applicant intake: validation, instant accept/reject classification, and storage
//! hand-off.

pub mod classification;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classification::{ClassificationConfig, Classifier, RejectReason};
pub use domain::{
    ApplicantRecord, ApplicantRecordBuilder, ApplicantStatus, Classification, ClassifiedApplicant,
    ResidencyState, UnknownResidencyState,
};
pub use repository::ApplicantRepository;
pub use router::applicant_router;
pub use service::ApplicantService;
pub use validation::{ApplicantValidator, ValidationError};
