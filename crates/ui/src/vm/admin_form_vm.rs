//! Form state for the admin editors.
//!
//! Forms hold raw text exactly as typed. `to_draft` parses it; the draft is
//! then validated by the resource service before anything is sent.

use chrono::NaiveDate;

use api::{AdminResource, MatchResource, QuestionResource, SeriesResource, VideoResource};
use cricket_core::model::{
    Fixture, FixtureDraft, MatchStatus, QuestionDraft, QuizQuestion, Series, SeriesDraft,
    SeriesId, Video, VideoDraft,
};

use crate::views::ViewError;
use crate::vm::time_fmt::date_input_value;

pub type RecordOf<F> = <<F as RecordForm>::Resource as AdminResource>::Record;
pub type DraftOf<F> = <<F as RecordForm>::Resource as AdminResource>::Draft;
pub type IdOf<F> = <<F as RecordForm>::Resource as AdminResource>::Id;

pub trait RecordForm: Clone + PartialEq + 'static {
    type Resource: AdminResource;

    /// Empty form for a new record.
    fn blank(today: NaiveDate) -> Self;

    fn from_record(record: &RecordOf<Self>) -> Self;

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` when a field cannot be parsed.
    fn to_draft(&self) -> Result<DraftOf<Self>, ViewError>;
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, ViewError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ViewError::Invalid(format!("{field} must be a date like 2026-03-21")))
}

fn parse_series_id(raw: &str) -> Result<Option<SeriesId>, ViewError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse::<SeriesId>()
        .map(Some)
        .map_err(|_| ViewError::Invalid("series id must be a number".to_string()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl RecordForm for SeriesForm {
    type Resource = SeriesResource;

    fn blank(today: NaiveDate) -> Self {
        Self {
            start_date: date_input_value(today),
            end_date: date_input_value(today),
            ..Self::default()
        }
    }

    fn from_record(record: &Series) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            start_date: date_input_value(record.start_date),
            end_date: date_input_value(record.end_date),
        }
    }

    fn to_draft(&self) -> Result<SeriesDraft, ViewError> {
        Ok(SeriesDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: parse_date(&self.start_date, "start date")?,
            end_date: parse_date(&self.end_date, "end date")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureForm {
    pub series_id: String,
    pub team_a: String,
    pub team_b: String,
    pub venue: String,
    pub match_date: String,
    pub status: MatchStatus,
    pub result: String,
}

impl RecordForm for FixtureForm {
    type Resource = MatchResource;

    fn blank(today: NaiveDate) -> Self {
        Self {
            match_date: date_input_value(today),
            ..Self::default()
        }
    }

    fn from_record(record: &Fixture) -> Self {
        Self {
            series_id: record.series_id.to_string(),
            team_a: record.team_a.clone(),
            team_b: record.team_b.clone(),
            venue: record.venue.clone(),
            match_date: date_input_value(record.match_date),
            status: record.status,
            result: record.result.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> Result<FixtureDraft, ViewError> {
        let series_id = parse_series_id(&self.series_id)?
            .ok_or_else(|| ViewError::Invalid("series id is required".to_string()))?;
        Ok(FixtureDraft {
            series_id,
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
            venue: self.venue.clone(),
            match_date: parse_date(&self.match_date, "match date")?,
            status: self.status,
            result: Some(self.result.clone()).filter(|r| !r.trim().is_empty()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoForm {
    pub title: String,
    pub description: String,
    pub url: String,
    pub series_id: String,
}

impl RecordForm for VideoForm {
    type Resource = VideoResource;

    fn blank(_today: NaiveDate) -> Self {
        Self::default()
    }

    fn from_record(record: &Video) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            series_id: record.series_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> Result<VideoDraft, ViewError> {
        Ok(VideoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.trim().to_string(),
            series_id: parse_series_id(&self.series_id)?,
        })
    }
}

/// Options are edited one per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub question: String,
    pub options: String,
    pub correct_answer: String,
}

impl RecordForm for QuestionForm {
    type Resource = QuestionResource;

    fn blank(_today: NaiveDate) -> Self {
        Self::default()
    }

    fn from_record(record: &QuizQuestion) -> Self {
        Self {
            question: record.question().to_string(),
            options: record.options().join("\n"),
            correct_answer: record.correct_answer().to_string(),
        }
    }

    fn to_draft(&self) -> Result<QuestionDraft, ViewError> {
        Ok(QuestionDraft {
            question: self.question.clone(),
            options: self
                .options
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.trim().to_string())
                .collect(),
            correct_answer: self.correct_answer.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::model::{Draft, MatchId};

    #[test]
    fn series_form_rejects_unparseable_dates() {
        let form = SeriesForm {
            name: "Ashes".into(),
            start_date: "21/11/2025".into(),
            end_date: "2026-01-08".into(),
            ..SeriesForm::default()
        };
        let err = form.to_draft().unwrap_err();
        assert_eq!(
            err,
            ViewError::Invalid("start date must be a date like 2026-03-21".into())
        );
    }

    #[test]
    fn fixture_form_round_trips_through_a_record() {
        let fixture = Fixture {
            id: MatchId::new(9),
            series_id: SeriesId::new(2),
            team_a: "England".into(),
            team_b: "India".into(),
            venue: "Lord's".into(),
            match_date: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            status: MatchStatus::Completed,
            result: Some("Drawn".into()),
        };
        let form = FixtureForm::from_record(&fixture);
        assert_eq!(form.match_date, "2026-07-10");
        assert_eq!(form.to_draft().unwrap(), fixture.to_draft());
    }

    #[test]
    fn blank_result_and_series_become_none() {
        let form = FixtureForm {
            series_id: String::new(),
            ..FixtureForm::blank(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        };
        assert!(matches!(form.to_draft(), Err(ViewError::Invalid(_))));

        let video = VideoForm {
            title: "Nets".into(),
            url: " https://example.com/nets ".into(),
            series_id: "  ".into(),
            ..VideoForm::default()
        };
        let draft = video.to_draft().unwrap();
        assert_eq!(draft.series_id, None);
        assert_eq!(draft.url, "https://example.com/nets");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn question_options_are_one_per_line() {
        let form = QuestionForm {
            question: "Who bowls the first over?".into(),
            options: "Opener\n\n  Spinner \nKeeper".into(),
            correct_answer: "Opener".into(),
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.options, ["Opener", "Spinner", "Keeper"]);
        assert!(draft.validate().is_ok());
    }
}
