use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Applicant supplied snapshot evaluated by the admissions classifier.
///
/// Records are built once through [`ApplicantRecord::builder`] and never mutated afterwards;
/// validation is a separate explicit step performed by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub first_name: String,
    pub last_name: String,
    pub state: ResidencyState,
    pub age: i32,
    #[serde(deserialize_with = "non_negative")]
    pub gpa: f64,
    #[serde(deserialize_with = "non_negative")]
    pub gpa_scale: f64,
    #[serde(default)]
    pub sat_score: Option<u32>,
    #[serde(default)]
    pub act_score: Option<u32>,
    #[serde(default)]
    pub felony_dates: Vec<NaiveDate>,
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative number, found {value}"
        )));
    }
    Ok(value)
}

impl ApplicantRecord {
    pub fn builder() -> ApplicantRecordBuilder {
        ApplicantRecordBuilder::default()
    }

    /// GPA normalized to the 0-1 scale of the submitted grading scale.
    pub fn gpa_percent(&self) -> f64 {
        self.gpa / self.gpa_scale
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Value builder for [`ApplicantRecord`]; unset fields take neutral defaults.
#[derive(Debug, Clone, Default)]
pub struct ApplicantRecordBuilder {
    first_name: String,
    last_name: String,
    state: ResidencyState,
    age: i32,
    gpa: f64,
    gpa_scale: f64,
    sat_score: Option<u32>,
    act_score: Option<u32>,
    felony_dates: Vec<NaiveDate>,
}

impl ApplicantRecordBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn state(mut self, state: ResidencyState) -> Self {
        self.state = state;
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    pub fn gpa_scale(mut self, gpa_scale: f64) -> Self {
        self.gpa_scale = gpa_scale;
        self
    }

    pub fn sat_score(mut self, sat_score: Option<u32>) -> Self {
        self.sat_score = sat_score;
        self
    }

    pub fn act_score(mut self, act_score: Option<u32>) -> Self {
        self.act_score = act_score;
        self
    }

    pub fn felony_dates(mut self, felony_dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.felony_dates = felony_dates.into_iter().collect();
        self
    }

    pub fn felony_date(mut self, felony_date: NaiveDate) -> Self {
        self.felony_dates.push(felony_date);
        self
    }

    pub fn build(self) -> ApplicantRecord {
        ApplicantRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            state: self.state,
            age: self.age,
            gpa: self.gpa,
            gpa_scale: self.gpa_scale,
            sat_score: self.sat_score,
            act_score: self.act_score,
            felony_dates: self.felony_dates,
        }
    }
}

/// Outcome assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    InstantAccept,
    InstantReject,
    FurtherReview,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::InstantAccept => "instant_accept",
            Classification::InstantReject => "instant_reject",
            Classification::FurtherReview => "further_review",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result attached to an applicant. `reason` is only set for rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantStatus {
    pub classification: Classification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ApplicantStatus {
    pub fn instant_accept() -> Self {
        Self {
            classification: Classification::InstantAccept,
            reason: None,
        }
    }

    pub fn instant_reject(reason: impl Into<String>) -> Self {
        Self {
            classification: Classification::InstantReject,
            reason: Some(reason.into()),
        }
    }

    pub fn further_review() -> Self {
        Self {
            classification: Classification::FurtherReview,
            reason: None,
        }
    }

    pub fn summary(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{}: {}", self.classification.label(), reason),
            None => self.classification.label().to_string(),
        }
    }
}

/// Record handed to the store once classification completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedApplicant {
    pub applicant: ApplicantRecord,
    pub status: ApplicantStatus,
}

macro_rules! residency_states {
    ($($variant:ident => ($code:literal, $label:literal)),+ $(,)?) => {
        /// Residency jurisdiction declared on the application.
        ///
        /// Serializes as snake_case; deserializes from anything [`FromStr`] accepts.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case", try_from = "String")]
        pub enum ResidencyState {
            $($variant),+
        }

        impl ResidencyState {
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

residency_states! {
    Alabama => ("AL", "Alabama"),
    Alaska => ("AK", "Alaska"),
    Arizona => ("AZ", "Arizona"),
    Arkansas => ("AR", "Arkansas"),
    California => ("CA", "California"),
    Colorado => ("CO", "Colorado"),
    Connecticut => ("CT", "Connecticut"),
    Delaware => ("DE", "Delaware"),
    DistrictOfColumbia => ("DC", "District of Columbia"),
    Florida => ("FL", "Florida"),
    Georgia => ("GA", "Georgia"),
    Hawaii => ("HI", "Hawaii"),
    Idaho => ("ID", "Idaho"),
    Illinois => ("IL", "Illinois"),
    Indiana => ("IN", "Indiana"),
    Iowa => ("IA", "Iowa"),
    Kansas => ("KS", "Kansas"),
    Kentucky => ("KY", "Kentucky"),
    Louisiana => ("LA", "Louisiana"),
    Maine => ("ME", "Maine"),
    Maryland => ("MD", "Maryland"),
    Massachusetts => ("MA", "Massachusetts"),
    Michigan => ("MI", "Michigan"),
    Minnesota => ("MN", "Minnesota"),
    Mississippi => ("MS", "Mississippi"),
    Missouri => ("MO", "Missouri"),
    Montana => ("MT", "Montana"),
    Nebraska => ("NE", "Nebraska"),
    Nevada => ("NV", "Nevada"),
    NewHampshire => ("NH", "New Hampshire"),
    NewJersey => ("NJ", "New Jersey"),
    NewMexico => ("NM", "New Mexico"),
    NewYork => ("NY", "New York"),
    NorthCarolina => ("NC", "North Carolina"),
    NorthDakota => ("ND", "North Dakota"),
    Ohio => ("OH", "Ohio"),
    Oklahoma => ("OK", "Oklahoma"),
    Oregon => ("OR", "Oregon"),
    Pennsylvania => ("PA", "Pennsylvania"),
    RhodeIsland => ("RI", "Rhode Island"),
    SouthCarolina => ("SC", "South Carolina"),
    SouthDakota => ("SD", "South Dakota"),
    Tennessee => ("TN", "Tennessee"),
    Texas => ("TX", "Texas"),
    Utah => ("UT", "Utah"),
    Vermont => ("VT", "Vermont"),
    Virginia => ("VA", "Virginia"),
    Washington => ("WA", "Washington"),
    WestVirginia => ("WV", "West Virginia"),
    Wisconsin => ("WI", "Wisconsin"),
    Wyoming => ("WY", "Wyoming"),
}

impl Default for ResidencyState {
    fn default() -> Self {
        Self::California
    }
}

impl fmt::Display for ResidencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when free text does not name a known jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown residency state '{0}'")]
pub struct UnknownResidencyState(pub String);

impl FromStr for ResidencyState {
    type Err = UnknownResidencyState;

    /// Accepts two-letter codes or full names in any case, with spaces or underscores.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .split(|ch: char| ch.is_whitespace() || ch == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self::all()
            .iter()
            .copied()
            .find(|state| {
                state.code().eq_ignore_ascii_case(&normalized)
                    || state.label().eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| UnknownResidencyState(value.to_string()))
    }
}

impl TryFrom<String> for ResidencyState {
    type Error = UnknownResidencyState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
