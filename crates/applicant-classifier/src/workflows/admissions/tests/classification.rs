use chrono::{Duration, NaiveDate};

use super::common::*;
use crate::workflows::admissions::{
    ApplicantStatus, Classification, ClassificationConfig, Classifier, ResidencyState,
};

const FELONY_REASON: &str = "Applicant cannot have 1 or more felonies over the past 5 years";
const GPA_REASON: &str = "Applicant cannot have GPA below 70%";
const AGE_REASON: &str = "Applicant cannot have a negative age";
const FIRST_NAME_REASON: &str =
    "Applicant must have a first name with the first letter capitalized, the rest lower case";
const LAST_NAME_REASON: &str =
    "Applicant must have a last name with the first letter capitalized, the rest lower case";

fn assert_rejected(status: &ApplicantStatus, reason: &str) {
    assert_eq!(status.classification, Classification::InstantReject);
    assert_eq!(status.reason.as_deref(), Some(reason));
}

fn assert_classified(status: &ApplicantStatus, classification: Classification) {
    assert_eq!(status.classification, classification);
    assert!(status.reason.is_none(), "unexpected reason {status:?}");
}

#[test]
fn further_review_when_neither_accept_nor_reject() {
    let status = classifier().classify(&review_applicant(), today());

    assert_eq!(status, ApplicantStatus::further_review());
}

#[test]
fn instant_accept_for_qualified_in_state_applicant() {
    let status = classifier().classify(&accept_applicant(), today());

    assert_eq!(status, ApplicantStatus::instant_accept());
}

#[test]
fn rejects_felony_dated_today() {
    let mut applicant = review_applicant();
    applicant.felony_dates = vec![today()];

    assert_rejected(&classifier().classify(&applicant, today()), FELONY_REASON);
}

#[test]
fn felony_window_boundary_is_exclusive() {
    let boundary = NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date");

    let mut applicant = review_applicant();
    applicant.felony_dates = vec![boundary];
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );

    applicant.felony_dates = vec![boundary + Duration::days(1)];
    assert_rejected(&classifier().classify(&applicant, today()), FELONY_REASON);
}

#[test]
fn felony_reason_reflects_configured_thresholds() {
    let config = ClassificationConfig {
        acceptable_felonies: 1,
        felony_lookback_years: 10,
        ..ClassificationConfig::default()
    };
    let classifier = Classifier::new(config);
    let mut applicant = review_applicant();
    applicant.felony_dates = vec![today(), today() - Duration::days(400)];

    assert_rejected(
        &classifier.classify(&applicant, today()),
        "Applicant cannot have 2 or more felonies over the past 10 years",
    );

    applicant.felony_dates.pop();
    assert_classified(
        &classifier.classify(&applicant, today()),
        Classification::FurtherReview,
    );
}

#[test]
fn gpa_reject_boundary_on_four_point_scale() {
    let mut applicant = review_applicant();
    applicant.gpa = 2.7;
    assert_rejected(&classifier().classify(&applicant, today()), GPA_REASON);

    applicant.gpa = 2.8;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );
}

#[test]
fn gpa_reject_boundary_on_five_point_scale() {
    let mut applicant = review_applicant();
    applicant.gpa_scale = 5.0;
    applicant.gpa = 3.4;
    assert_rejected(&classifier().classify(&applicant, today()), GPA_REASON);

    applicant.gpa = 3.5;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );
}

#[test]
fn gpa_accept_boundary() {
    let mut applicant = accept_applicant();
    applicant.gpa = 3.5;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );

    applicant.gpa = 4.5;
    applicant.gpa_scale = 5.0;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::InstantAccept,
    );
}

#[test]
fn gpa_just_below_reject_threshold_is_rejected() {
    for (gpa, gpa_scale) in [(2.79, 4.0), (3.49, 5.0), (2.7999, 4.0)] {
        let mut applicant = review_applicant();
        applicant.gpa = gpa;
        applicant.gpa_scale = gpa_scale;
        assert_rejected(&classifier().classify(&applicant, today()), GPA_REASON);
    }
}

#[test]
fn gpa_just_below_accept_threshold_is_not_accepted() {
    for (gpa, gpa_scale) in [(3.59, 4.0), (4.49, 5.0), (3.5999, 4.0)] {
        let mut applicant = accept_applicant();
        applicant.gpa = gpa;
        applicant.gpa_scale = gpa_scale;
        assert_classified(
            &classifier().classify(&applicant, today()),
            Classification::FurtherReview,
        );
    }

    let mut applicant = accept_applicant();
    applicant.gpa = 3.6;
    applicant.gpa_scale = 4.0;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::InstantAccept,
    );
}

#[test]
fn rejects_negative_age_but_not_zero() {
    let mut applicant = review_applicant();
    applicant.age = -20;
    assert_rejected(&classifier().classify(&applicant, today()), AGE_REASON);

    applicant.age = 0;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );
}

#[test]
fn rejects_miscapitalized_names() {
    for first_name in ["joe", "JOE", "joE"] {
        let mut applicant = review_applicant();
        applicant.first_name = first_name.to_string();
        assert_rejected(&classifier().classify(&applicant, today()), FIRST_NAME_REASON);
    }

    for last_name in ["smith", "SMITH", "smiTh"] {
        let mut applicant = review_applicant();
        applicant.last_name = last_name.to_string();
        assert_rejected(&classifier().classify(&applicant, today()), LAST_NAME_REASON);
    }
}

#[test]
fn single_letter_names_pass_capitalization() {
    let mut applicant = review_applicant();
    applicant.first_name = "J".to_string();
    applicant.last_name = "S".to_string();

    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );
}

#[test]
fn reject_reasons_follow_priority_order() {
    let mut applicant = review_applicant();
    applicant.felony_dates = vec![today()];
    applicant.gpa = 1.0;
    applicant.age = -1;
    applicant.first_name = "joe".to_string();
    applicant.last_name = "smith".to_string();
    assert_rejected(&classifier().classify(&applicant, today()), FELONY_REASON);

    applicant.felony_dates.clear();
    assert_rejected(&classifier().classify(&applicant, today()), GPA_REASON);

    applicant.gpa = 3.0;
    assert_rejected(&classifier().classify(&applicant, today()), AGE_REASON);

    applicant.age = 18;
    assert_rejected(&classifier().classify(&applicant, today()), FIRST_NAME_REASON);

    applicant.first_name = "Joe".to_string();
    assert_rejected(&classifier().classify(&applicant, today()), LAST_NAME_REASON);
}

#[test]
fn reject_overrides_accept_eligibility() {
    let mut applicant = accept_applicant();
    applicant.felony_dates = vec![today() - Duration::days(30)];
    assert_rejected(&classifier().classify(&applicant, today()), FELONY_REASON);

    let mut applicant = accept_applicant();
    applicant.last_name = "LOPEZ".to_string();
    assert_rejected(&classifier().classify(&applicant, today()), LAST_NAME_REASON);
}

#[test]
fn in_state_age_band_is_inclusive() {
    for (age, expected) in [
        (16, Classification::FurtherReview),
        (17, Classification::InstantAccept),
        (25, Classification::InstantAccept),
        (26, Classification::FurtherReview),
        (80, Classification::FurtherReview),
        (81, Classification::InstantAccept),
    ] {
        let mut applicant = accept_applicant();
        applicant.age = age;
        assert_classified(&classifier().classify(&applicant, today()), expected);
    }
}

#[test]
fn out_of_state_applicants_only_qualify_from_eighty_one() {
    for (age, expected) in [
        (18, Classification::FurtherReview),
        (80, Classification::FurtherReview),
        (81, Classification::InstantAccept),
        (95, Classification::InstantAccept),
    ] {
        let mut applicant = accept_applicant();
        applicant.state = ResidencyState::Maryland;
        applicant.age = age;
        assert_classified(&classifier().classify(&applicant, today()), expected);
    }
}

#[test]
fn standardized_test_accepts_either_score() {
    let mut applicant = accept_applicant();
    applicant.sat_score = Some(1920);
    applicant.act_score = None;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );

    applicant.act_score = Some(27);
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::FurtherReview,
    );

    applicant.act_score = Some(28);
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::InstantAccept,
    );

    applicant.sat_score = None;
    assert_classified(
        &classifier().classify(&applicant, today()),
        Classification::InstantAccept,
    );
}

#[test]
fn configured_in_state_changes_age_band_jurisdiction() {
    let config = ClassificationConfig {
        in_state: ResidencyState::Maryland,
        ..ClassificationConfig::default()
    };
    let classifier = Classifier::new(config);

    let mut applicant = accept_applicant();
    assert_classified(
        &classifier.classify(&applicant, today()),
        Classification::FurtherReview,
    );

    applicant.state = ResidencyState::Maryland;
    assert_classified(
        &classifier.classify(&applicant, today()),
        Classification::InstantAccept,
    );
}
