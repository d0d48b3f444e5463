use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::draft::{require, Draft, DraftError};
use crate::model::ids::SeriesId;

/// Where a series sits relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesPhase {
    Upcoming,
    Ongoing,
    Finished,
}

impl SeriesPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SeriesPhase::Upcoming => "Upcoming",
            SeriesPhase::Ongoing => "Ongoing",
            SeriesPhase::Finished => "Finished",
        }
    }
}

/// A tour or tournament grouping a set of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Series {
    #[must_use]
    pub fn from_draft(id: SeriesId, draft: &SeriesDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    #[must_use]
    pub fn to_draft(&self) -> SeriesDraft {
        SeriesDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    #[must_use]
    pub fn phase_on(&self, day: NaiveDate) -> SeriesPhase {
        if day < self.start_date {
            SeriesPhase::Upcoming
        } else if day > self.end_date {
            SeriesPhase::Finished
        } else {
            SeriesPhase::Ongoing
        }
    }
}

/// Admin form payload for a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDraft {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Draft for SeriesDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require(&self.name, "name")?;
        if self.end_date < self.start_date {
            return Err(DraftError::DateRange);
        }
        Ok(())
    }
}
