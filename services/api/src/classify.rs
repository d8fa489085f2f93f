use crate::infra::LoggingApplicantRepository;
use applicant_classifier::config::AppConfig;
use applicant_classifier::error::AppError;
use applicant_classifier::workflows::admissions::{
    ApplicantRecord, ApplicantRepository, ApplicantService, Classification,
};
use applicant_classifier::workflows::roster::RosterImporter;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Applicant roster CSV export
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Evaluation date for felony lookback windows (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Per-row outcome for the roster listing.
#[derive(Debug)]
pub(crate) struct RosterLine {
    pub(crate) row: usize,
    pub(crate) name: String,
    pub(crate) outcome: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RosterTotals {
    pub(crate) instant_accept: usize,
    pub(crate) instant_reject: usize,
    pub(crate) further_review: usize,
    pub(crate) invalid: usize,
}

impl RosterTotals {
    fn record(&mut self, classification: Classification) {
        match classification {
            Classification::InstantAccept => self.instant_accept += 1,
            Classification::InstantReject => self.instant_reject += 1,
            Classification::FurtherReview => self.further_review += 1,
        }
    }
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs { roster, today } = args;

    let config = AppConfig::load()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let applicants = RosterImporter::from_path(&roster)?;

    let service = ApplicantService::new(
        Arc::new(LoggingApplicantRepository),
        config.classification,
    );
    let (lines, totals) = classify_roster(&service, applicants, today);

    println!("Applicant classification");
    println!("Roster: {} (evaluated {})", roster.display(), today);
    println!();
    for line in &lines {
        println!("- #{} {}: {}", line.row, line.name, line.outcome);
    }

    println!(
        "\nTotals: {} instant accept, {} instant reject, {} further review, {} invalid",
        totals.instant_accept, totals.instant_reject, totals.further_review, totals.invalid
    );

    Ok(())
}

pub(crate) fn classify_roster<R: ApplicantRepository + 'static>(
    service: &ApplicantService<R>,
    applicants: Vec<ApplicantRecord>,
    today: NaiveDate,
) -> (Vec<RosterLine>, RosterTotals) {
    let mut lines = Vec::with_capacity(applicants.len());
    let mut totals = RosterTotals::default();

    for (index, applicant) in applicants.into_iter().enumerate() {
        let name = applicant.full_name();
        let outcome = match service.process_applicant_on(applicant, today) {
            Ok(status) => {
                totals.record(status.classification);
                status.summary()
            }
            Err(error) => {
                totals.invalid += 1;
                format!("invalid ({error})")
            }
        };

        lines.push(RosterLine {
            row: index + 1,
            name,
            outcome,
        });
    }

    (lines, totals)
}
