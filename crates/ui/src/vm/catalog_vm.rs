use chrono::NaiveDate;

use cricket_core::model::{Fixture, QuizQuestion, Series, Video};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesCardVm {
    pub id: u64,
    pub name: String,
    pub dates_label: String,
    pub phase_label: &'static str,
    pub description_html: String,
}

#[must_use]
pub fn map_series_cards(items: &[Series], today: NaiveDate) -> Vec<SeriesCardVm> {
    items
        .iter()
        .map(|series| SeriesCardVm {
            id: series.id.value(),
            name: series.name.clone(),
            dates_label: format!(
                "{} to {}",
                format_date(series.start_date),
                format_date(series.end_date)
            ),
            phase_label: series.phase_on(today).label(),
            description_html: markdown_to_html(&series.description),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoCardVm {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub series_label: Option<String>,
    pub description_html: String,
}

#[must_use]
pub fn map_video_cards(items: &[Video]) -> Vec<VideoCardVm> {
    items
        .iter()
        .map(|video| VideoCardVm {
            id: video.id.value(),
            title: video.title.clone(),
            url: video.url.clone(),
            series_label: video.series_id.map(|id| format!("Series #{id}")),
            description_html: markdown_to_html(&video.description),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureRowVm {
    pub id: u64,
    pub title: String,
    pub series_label: String,
    pub venue: String,
    pub date_label: String,
    pub status_label: &'static str,
    pub result: String,
}

#[must_use]
pub fn map_fixture_rows(items: &[Fixture]) -> Vec<FixtureRowVm> {
    items
        .iter()
        .map(|fixture| FixtureRowVm {
            id: fixture.id.value(),
            title: fixture.title(),
            series_label: format!("#{}", fixture.series_id),
            venue: fixture.venue.clone(),
            date_label: format_date(fixture.match_date),
            status_label: fixture.status.label(),
            result: fixture.result.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub id: String,
    pub question: String,
    pub options_label: String,
    pub correct_answer: String,
}

#[must_use]
pub fn map_question_rows(items: &[QuizQuestion]) -> Vec<QuestionRowVm> {
    items
        .iter()
        .map(|question| QuestionRowVm {
            id: question.id().as_str().to_string(),
            question: question.question().to_string(),
            options_label: question.options().join(" / "),
            correct_answer: question.correct_answer().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::model::{MatchId, MatchStatus, SeriesId};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn series_cards_carry_phase_and_rendered_description() {
        let series = Series {
            id: SeriesId::new(4),
            name: "Asia Cup".into(),
            description: "**Eight** teams".into(),
            start_date: day(9, 1),
            end_date: day(9, 20),
        };
        let cards = map_series_cards(&[series], day(9, 10));
        assert_eq!(cards[0].phase_label, "Ongoing");
        assert_eq!(cards[0].dates_label, "01 Sep 2026 to 20 Sep 2026");
        assert!(cards[0].description_html.contains("<strong>Eight</strong>"));
    }

    #[test]
    fn fixture_rows_fill_missing_results() {
        let fixture = Fixture {
            id: MatchId::new(2),
            series_id: SeriesId::new(4),
            team_a: "India".into(),
            team_b: "Sri Lanka".into(),
            venue: "Dubai".into(),
            match_date: day(9, 3),
            status: MatchStatus::Live,
            result: None,
        };
        let rows = map_fixture_rows(&[fixture]);
        assert_eq!(rows[0].title, "India vs Sri Lanka");
        assert_eq!(rows[0].status_label, "Live");
        assert_eq!(rows[0].result, "-");
        assert_eq!(rows[0].series_label, "#4");
    }
}
