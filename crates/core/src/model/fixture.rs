use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::draft::{require, Draft, DraftError};
use crate::model::ids::{MatchId, SeriesId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::Scheduled,
        MatchStatus::Live,
        MatchStatus::Completed,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A single match within a series. Served from the `matches` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: MatchId,
    pub series_id: SeriesId,
    pub team_a: String,
    pub team_b: String,
    pub venue: String,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub result: Option<String>,
}

impl Fixture {
    #[must_use]
    pub fn from_draft(id: MatchId, draft: &FixtureDraft) -> Self {
        Self {
            id,
            series_id: draft.series_id,
            team_a: draft.team_a.trim().to_string(),
            team_b: draft.team_b.trim().to_string(),
            venue: draft.venue.trim().to_string(),
            match_date: draft.match_date,
            status: draft.status,
            result: draft
                .result
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }

    #[must_use]
    pub fn to_draft(&self) -> FixtureDraft {
        FixtureDraft {
            series_id: self.series_id,
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
            venue: self.venue.clone(),
            match_date: self.match_date,
            status: self.status,
            result: self.result.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }
}

/// Admin form payload for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDraft {
    pub series_id: SeriesId,
    pub team_a: String,
    pub team_b: String,
    pub venue: String,
    pub match_date: NaiveDate,
    pub status: MatchStatus,
    pub result: Option<String>,
}

impl Draft for FixtureDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require(&self.team_a, "first team")?;
        require(&self.team_b, "second team")?;
        if self.team_a.trim().eq_ignore_ascii_case(self.team_b.trim()) {
            return Err(DraftError::SameTeams);
        }
        require(&self.venue, "venue")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FixtureDraft {
        FixtureDraft {
            series_id: SeriesId::new(1),
            team_a: "India".into(),
            team_b: "Australia".into(),
            venue: "MCG".into(),
            match_date: NaiveDate::from_ymd_opt(2025, 12, 26).unwrap(),
            status: MatchStatus::Scheduled,
            result: Some("   ".into()),
        }
    }

    #[test]
    fn teams_must_differ() {
        let mut d = draft();
        d.team_b = " india ".into();
        assert_eq!(d.validate(), Err(DraftError::SameTeams));
    }

    #[test]
    fn blank_result_is_dropped() {
        let fixture = Fixture::from_draft(MatchId::new(4), &draft());
        assert_eq!(fixture.result, None);
        assert_eq!(fixture.title(), "India vs Australia");
    }

    #[test]
    fn status_labels_round_trip() {
        for status in MatchStatus::ALL {
            assert_eq!(MatchStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(MatchStatus::from_label("abandoned"), None);
    }
}
