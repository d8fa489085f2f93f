//! CSV roster import producing applicant records for batch classification.

mod parser;

use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

use crate::workflows::admissions::{ApplicantRecord, ResidencyState, UnknownResidencyState};
use parser::RosterRow;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read applicant roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    State {
        row: usize,
        #[source]
        source: UnknownResidencyState,
    },
    #[error("row {row}: invalid {field} '{value}'")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows are numbered from 1, excluding the header line, in error messages.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, RosterImportError> {
        parser::parse_rows(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| applicant_from_row(index + 1, row))
            .collect()
    }
}

fn applicant_from_row(row: usize, raw: RosterRow) -> Result<ApplicantRecord, RosterImportError> {
    let state = raw
        .state
        .parse::<ResidencyState>()
        .map_err(|source| RosterImportError::State { row, source })?;

    let sat_score = parse_score(row, "SAT Score", raw.sat_score.as_deref())?;
    let act_score = parse_score(row, "ACT Score", raw.act_score.as_deref())?;

    let felony_dates = match raw.felony_dates.as_deref() {
        Some(dates) => dates
            .split(';')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    RosterImportError::InvalidValue {
                        row,
                        field: "Felony Dates",
                        value: value.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(ApplicantRecord::builder()
        .first_name(raw.first_name)
        .last_name(raw.last_name)
        .state(state)
        .age(raw.age)
        .gpa(raw.gpa)
        .gpa_scale(raw.gpa_scale)
        .sat_score(sat_score)
        .act_score(act_score)
        .felony_dates(felony_dates)
        .build())
}

fn parse_score(
    row: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<u32>, RosterImportError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| RosterImportError::InvalidValue {
                    row,
                    field,
                    value: raw.to_string(),
                })
        })
        .transpose()
}
