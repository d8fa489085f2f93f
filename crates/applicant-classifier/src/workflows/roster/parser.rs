use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct RosterRow {
    #[serde(rename = "First Name", default)]
    pub(crate) first_name: String,
    #[serde(rename = "Last Name", default)]
    pub(crate) last_name: String,
    #[serde(rename = "State")]
    pub(crate) state: String,
    #[serde(rename = "Age")]
    pub(crate) age: i32,
    #[serde(rename = "GPA")]
    pub(crate) gpa: f64,
    #[serde(rename = "GPA Scale")]
    pub(crate) gpa_scale: f64,
    #[serde(
        rename = "SAT Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) sat_score: Option<String>,
    #[serde(
        rename = "ACT Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) act_score: Option<String>,
    #[serde(
        rename = "Felony Dates",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) felony_dates: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
