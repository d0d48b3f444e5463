use chrono::NaiveDate;

use cricket_core::model::{
    FixtureDraft, MatchStatus, QuestionDraft, SeriesDraft, SeriesId, VideoDraft,
};

use crate::memory::InMemoryApi;
use crate::repository::ApiError;
use crate::resource::{MatchResource, QuestionResource, SeriesResource, VideoResource};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn question(text: &str, options: [&str; 4], correct: &str) -> QuestionDraft {
    QuestionDraft {
        question: text.into(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        correct_answer: correct.into(),
    }
}

fn fixture(
    series_id: SeriesId,
    teams: (&str, &str),
    venue: &str,
    match_date: NaiveDate,
    status: MatchStatus,
    result: Option<&str>,
) -> FixtureDraft {
    FixtureDraft {
        series_id,
        team_a: teams.0.into(),
        team_b: teams.1.into(),
        venue: venue.into(),
        match_date,
        status,
        result: result.map(str::to_string),
    }
}

/// Fill `backend` with a small amount of sample content for offline use.
///
/// # Errors
///
/// Returns `ApiError::Connection` if the backing store is unusable.
pub fn seed(backend: &InMemoryApi) -> Result<(), ApiError> {
    let ashes = backend.insert::<SeriesResource>(&SeriesDraft {
        name: "The Ashes".into(),
        description: "England and Australia contest the urn over five Tests.".into(),
        start_date: day(2025, 11, 21),
        end_date: day(2026, 1, 8),
    })?;
    let ipl = backend.insert::<SeriesResource>(&SeriesDraft {
        name: "Indian Premier League".into(),
        description: "Ten franchises, seventy league games and the playoffs.".into(),
        start_date: day(2026, 3, 20),
        end_date: day(2026, 5, 31),
    })?;
    let t20 = backend.insert::<SeriesResource>(&SeriesDraft {
        name: "T20 World Cup".into(),
        description: "Twenty teams chasing the short-format title.".into(),
        start_date: day(2026, 2, 7),
        end_date: day(2026, 3, 8),
    })?;

    let fixtures = [
        fixture(
            ashes,
            ("Australia", "England"),
            "Perth Stadium",
            day(2025, 11, 21),
            MatchStatus::Completed,
            Some("Australia won by 8 wickets"),
        ),
        fixture(
            ashes,
            ("Australia", "England"),
            "The Gabba",
            day(2025, 12, 4),
            MatchStatus::Completed,
            Some("Australia won by 8 wickets"),
        ),
        fixture(
            ashes,
            ("Australia", "England"),
            "Sydney Cricket Ground",
            day(2026, 1, 4),
            MatchStatus::Completed,
            None,
        ),
        fixture(
            t20,
            ("India", "Pakistan"),
            "R. Premadasa Stadium",
            day(2026, 2, 15),
            MatchStatus::Completed,
            None,
        ),
        fixture(
            ipl,
            ("Mumbai Indians", "Chennai Super Kings"),
            "Wankhede Stadium",
            day(2026, 4, 12),
            MatchStatus::Scheduled,
            None,
        ),
    ];
    for draft in &fixtures {
        backend.insert::<MatchResource>(draft)?;
    }

    let videos = [
        VideoDraft {
            title: "Ashes highlights: Perth".into(),
            description: "Day-by-day highlights from the first Test.".into(),
            url: "https://www.youtube.com/watch?v=ashes-perth".into(),
            series_id: Some(ashes),
        },
        VideoDraft {
            title: "How to bowl a yorker".into(),
            description: "Grip, run-up and release explained.".into(),
            url: "https://www.youtube.com/watch?v=yorker-masterclass".into(),
            series_id: None,
        },
        VideoDraft {
            title: "IPL season preview".into(),
            description: String::new(),
            url: "https://www.youtube.com/watch?v=ipl-preview".into(),
            series_id: Some(ipl),
        },
    ];
    for draft in &videos {
        backend.insert::<VideoResource>(draft)?;
    }

    let questions = [
        question(
            "How many players are on the field for one side?",
            ["9", "10", "11", "12"],
            "11",
        ),
        question(
            "How many balls make up a standard over?",
            ["4", "5", "6", "8"],
            "6",
        ),
        question(
            "Which country won the first men's Cricket World Cup in 1975?",
            ["Australia", "West Indies", "England", "India"],
            "West Indies",
        ),
        question(
            "What is the length of a cricket pitch in yards?",
            ["20", "22", "24", "26"],
            "22",
        ),
        question(
            "Who holds the record for the highest individual Test score?",
            ["Brian Lara", "Don Bradman", "Sachin Tendulkar", "Matthew Hayden"],
            "Brian Lara",
        ),
        question(
            "What does LBW stand for?",
            ["Leg before wicket", "Long ball wide", "Left behind wicket", "Line ball wide"],
            "Leg before wicket",
        ),
        question(
            "Which ground is known as the Home of Cricket?",
            ["Eden Gardens", "The Oval", "Lord's", "MCG"],
            "Lord's",
        ),
    ];
    for draft in &questions {
        backend.insert::<QuestionResource>(draft)?;
    }

    log::debug!(
        "seeded {} fixtures, {} videos and {} questions",
        fixtures.len(),
        videos.len(),
        questions.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::repository::{QuestionSource, ResourceRepository};
    use cricket_core::PageRequest;
    use cricket_core::model::Draft;

    #[tokio::test]
    async fn seeded_content_is_valid_and_playable() {
        let backend = InMemoryApi::new(Arc::new(MemoryTokenStore::default()));
        seed(&backend).unwrap();

        let series = ResourceRepository::<SeriesResource>::list(&backend, PageRequest::first(50))
            .await
            .unwrap();
        assert_eq!(series.items.len(), 3);
        assert!(series.items.iter().all(|s| s.to_draft().validate().is_ok()));

        let matches = ResourceRepository::<MatchResource>::list(&backend, PageRequest::first(50))
            .await
            .unwrap();
        assert!(matches.items.iter().all(|m| m.to_draft().validate().is_ok()));

        let batch = backend.fetch_random_questions().await.unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|q| q.has_option(q.correct_answer())));
    }
}
