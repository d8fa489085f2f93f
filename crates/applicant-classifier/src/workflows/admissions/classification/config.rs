use serde::{Deserialize, Serialize};

use super::super::domain::ResidencyState;

pub const DEFAULT_IN_STATE: ResidencyState = ResidencyState::California;
pub const DEFAULT_MINIMUM_IN_STATE_AGE: i32 = 17;
pub const DEFAULT_MAXIMUM_IN_STATE_AGE: i32 = 25;
pub const DEFAULT_MINIMUM_ANY_STATE_AGE: i32 = 81;
pub const DEFAULT_MINIMUM_ACCEPT_GPA_PERCENT: f64 = 0.9;
pub const DEFAULT_MINIMUM_SAT_SCORE: u32 = 1921;
pub const DEFAULT_MINIMUM_ACT_SCORE: u32 = 28;
pub const DEFAULT_ACCEPTABLE_FELONIES: usize = 0;
pub const DEFAULT_FELONY_LOOKBACK_YEARS: u32 = 5;
pub const DEFAULT_MINIMUM_GPA_PERCENT: f64 = 0.7;

/// Thresholds driving the instant accept and instant reject rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub in_state: ResidencyState,
    pub minimum_in_state_age: i32,
    pub maximum_in_state_age: i32,
    pub minimum_any_state_age: i32,
    pub minimum_accept_gpa_percent: f64,
    pub minimum_sat_score: u32,
    pub minimum_act_score: u32,
    pub acceptable_felonies: usize,
    pub felony_lookback_years: u32,
    pub minimum_gpa_percent: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            in_state: DEFAULT_IN_STATE,
            minimum_in_state_age: DEFAULT_MINIMUM_IN_STATE_AGE,
            maximum_in_state_age: DEFAULT_MAXIMUM_IN_STATE_AGE,
            minimum_any_state_age: DEFAULT_MINIMUM_ANY_STATE_AGE,
            minimum_accept_gpa_percent: DEFAULT_MINIMUM_ACCEPT_GPA_PERCENT,
            minimum_sat_score: DEFAULT_MINIMUM_SAT_SCORE,
            minimum_act_score: DEFAULT_MINIMUM_ACT_SCORE,
            acceptable_felonies: DEFAULT_ACCEPTABLE_FELONIES,
            felony_lookback_years: DEFAULT_FELONY_LOOKBACK_YEARS,
            minimum_gpa_percent: DEFAULT_MINIMUM_GPA_PERCENT,
        }
    }
}
