use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

pub const MAX_PARTY_SIZE: u32 = 50;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Plan {
    #[serde(rename = "dateFrom")]
    pub date_from: String,
    #[serde(rename = "dateTo")]
    pub date_to: String,
    pub location: String,
    #[serde(rename = "numPeople")]
    pub num_people: u32,
    pub budget: String,
    pub mood: String,
}

impl Plan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location.trim().is_empty() {
            return Err(ValidationError::Empty { field: "location" });
        }
        if self.num_people == 0 {
            return Err(ValidationError::OutOfRange {
                field: "numPeople",
                min: 1,
                max: u32::MAX,
            });
        }
        Ok(())
    }

    /// Stricter rules for stored planning records: bounded party size and a known mood.
    pub fn validate_record(&self) -> Result<Mood, ValidationError> {
        self.validate()?;
        if self.num_people > MAX_PARTY_SIZE {
            return Err(ValidationError::OutOfRange {
                field: "numPeople",
                min: 1,
                max: MAX_PARTY_SIZE,
            });
        }
        self.mood.parse()
    }

    pub fn date_range(&self) -> String {
        format!("{} to {}", self.date_from, self.date_to)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Chill,
    Energetic,
    Adventurous,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Adventurous => "adventurous",
        }
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "chill" => Ok(Mood::Chill),
            "energetic" => Ok(Mood::Energetic),
            "adventurous" => Ok(Mood::Adventurous),
            _ => Err(ValidationError::UnknownMood(value.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PlanRecord {
    pub id: u64,
    pub mood: Mood,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PlanFilter {
    pub mood: Option<Mood>,
    pub location: Option<String>,
    pub min_people: Option<u32>,
    pub max_people: Option<u32>,
}

impl PlanFilter {
    pub fn matches(&self, record: &PlanRecord) -> bool {
        if let Some(mood) = self.mood {
            if record.mood != mood {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !record
                .plan
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_people {
            if record.plan.num_people < min {
                return false;
            }
        }
        if let Some(max) = self.max_people {
            if record.plan.num_people > max {
                return false;
            }
        }
        true
    }
}
