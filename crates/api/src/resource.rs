use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use cricket_core::model::{
    Draft, Fixture, FixtureDraft, MatchId, QuestionDraft, QuestionId, QuizQuestion, Series,
    SeriesDraft, SeriesId, Video, VideoDraft, VideoId,
};

/// A record type managed through the admin CRUD endpoints.
///
/// Implementors are zero-sized markers that tie a record, its draft and its id
/// to an endpoint path.
pub trait AdminResource: Send + Sync + 'static {
    type Record: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Draft: Draft + Clone + fmt::Debug + Serialize + Send + Sync + 'static;
    type Id: Clone + fmt::Debug + fmt::Display + Eq + Hash + Send + Sync + 'static;

    /// Path segment under the API base URL, e.g. `series` for `/series`.
    const PATH: &'static str;
    /// Human-readable singular name.
    const LABEL: &'static str;

    fn id_of(record: &Self::Record) -> Self::Id;

    /// Build a record from a draft once an id has been assigned.
    fn materialize(id: Self::Id, draft: &Self::Draft) -> Self::Record;

    /// Id for the `seq`-th record created by a local backend.
    fn id_from_seq(seq: u64) -> Self::Id;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesResource;

impl AdminResource for SeriesResource {
    type Record = Series;
    type Draft = SeriesDraft;
    type Id = SeriesId;

    const PATH: &'static str = "series";
    const LABEL: &'static str = "series";

    fn id_of(record: &Series) -> SeriesId {
        record.id
    }

    fn materialize(id: SeriesId, draft: &SeriesDraft) -> Series {
        Series::from_draft(id, draft)
    }

    fn id_from_seq(seq: u64) -> SeriesId {
        SeriesId::new(seq)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchResource;

impl AdminResource for MatchResource {
    type Record = Fixture;
    type Draft = FixtureDraft;
    type Id = MatchId;

    const PATH: &'static str = "matches";
    const LABEL: &'static str = "match";

    fn id_of(record: &Fixture) -> MatchId {
        record.id
    }

    fn materialize(id: MatchId, draft: &FixtureDraft) -> Fixture {
        Fixture::from_draft(id, draft)
    }

    fn id_from_seq(seq: u64) -> MatchId {
        MatchId::new(seq)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoResource;

impl AdminResource for VideoResource {
    type Record = Video;
    type Draft = VideoDraft;
    type Id = VideoId;

    const PATH: &'static str = "videos";
    const LABEL: &'static str = "video";

    fn id_of(record: &Video) -> VideoId {
        record.id
    }

    fn materialize(id: VideoId, draft: &VideoDraft) -> Video {
        Video::from_draft(id, draft)
    }

    fn id_from_seq(seq: u64) -> VideoId {
        VideoId::new(seq)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionResource;

impl AdminResource for QuestionResource {
    type Record = QuizQuestion;
    type Draft = QuestionDraft;
    type Id = QuestionId;

    const PATH: &'static str = "quiz";
    const LABEL: &'static str = "quiz question";

    fn id_of(record: &QuizQuestion) -> QuestionId {
        record.id().clone()
    }

    fn materialize(id: QuestionId, draft: &QuestionDraft) -> QuizQuestion {
        QuizQuestion::from_draft(id, draft)
    }

    fn id_from_seq(seq: u64) -> QuestionId {
        QuestionId::new(seq.to_string())
    }
}
