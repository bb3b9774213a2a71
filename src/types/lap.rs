use serde::{Deserialize, Serialize};

/// Tire compound fitted for a lap.
///
/// Source data carries free-form compound names; anything outside the fixed
/// vocabulary is preserved verbatim in [`TireCompound::Unknown`] so it
/// survives a round trip through the document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    /// Unrecognized compound name, kept as-is
    Unknown(String),
}

impl TireCompound {
    /// Single-letter abbreviation used in the tower's tires column
    pub fn letter(&self) -> char {
        match self {
            TireCompound::Soft => 'S',
            TireCompound::Medium => 'M',
            TireCompound::Hard => 'H',
            TireCompound::Intermediate => 'I',
            TireCompound::Wet => 'W',
            TireCompound::Unknown(_) => '?',
        }
    }
}

impl Default for TireCompound {
    fn default() -> Self {
        TireCompound::Unknown(String::new())
    }
}

impl From<String> for TireCompound {
    fn from(name: String) -> Self {
        match name.as_str() {
            "SOFT" => TireCompound::Soft,
            "MEDIUM" => TireCompound::Medium,
            "HARD" => TireCompound::Hard,
            "INTERMEDIATE" => TireCompound::Intermediate,
            "WET" => TireCompound::Wet,
            _ => TireCompound::Unknown(name),
        }
    }
}

impl From<TireCompound> for String {
    fn from(compound: TireCompound) -> Self {
        match compound {
            TireCompound::Soft => "SOFT".to_string(),
            TireCompound::Medium => "MEDIUM".to_string(),
            TireCompound::Hard => "HARD".to_string(),
            TireCompound::Intermediate => "INTERMEDIATE".to_string(),
            TireCompound::Wet => "WET".to_string(),
            TireCompound::Unknown(name) => name,
        }
    }
}

/// One lap boundary record for one participant.
///
/// All offsets are session time in seconds. A lap still being driven has no
/// `completion`; `duration` requires `completion` (enforced once at load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub lap_number: u32,

    /// Session time at which the lap began
    pub start: f64,

    /// Session time at which the lap ended, if it has
    #[serde(default)]
    pub completion: Option<f64>,

    /// Recorded lap duration in seconds, if the lap completed cleanly
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub compound: TireCompound,

    /// Laps already run on the fitted tire set
    #[serde(default)]
    pub tire_age: Option<u32>,
}
