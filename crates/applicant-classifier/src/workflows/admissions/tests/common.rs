use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::admissions::{
    ApplicantRecord, ApplicantRepository, ApplicantService, ClassificationConfig, Classifier,
    ClassifiedApplicant, ResidencyState,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

/// Applicant that neither qualifies for instant accept nor trips a disqualifier.
pub(super) fn review_applicant() -> ApplicantRecord {
    ApplicantRecord::builder()
        .first_name("Joe")
        .last_name("Smith")
        .state(ResidencyState::Maryland)
        .age(18)
        .gpa(3.0)
        .gpa_scale(4.0)
        .sat_score(Some(1920))
        .act_score(Some(27))
        .build()
}

/// In-state applicant that meets every instant accept criterion.
pub(super) fn accept_applicant() -> ApplicantRecord {
    ApplicantRecord::builder()
        .first_name("Ana")
        .last_name("Lopez")
        .state(ResidencyState::California)
        .age(17)
        .gpa(3.6)
        .gpa_scale(4.0)
        .sat_score(Some(1921))
        .build()
}

pub(super) fn classifier() -> Classifier {
    Classifier::new(ClassificationConfig::default())
}

pub(super) fn build_service() -> (ApplicantService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ApplicantService::new(repository.clone(), ClassificationConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    saved: Arc<Mutex<Vec<ClassifiedApplicant>>>,
}

impl MemoryRepository {
    pub(super) fn saved(&self) -> Vec<ClassifiedApplicant> {
        self.saved.lock().expect("repository mutex poisoned").clone()
    }
}

impl ApplicantRepository for MemoryRepository {
    fn save(&self, applicant: ClassifiedApplicant) {
        self.saved
            .lock()
            .expect("repository mutex poisoned")
            .push(applicant);
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
