mod draft;
mod fixture;
mod ids;
mod question;
mod result;
mod series;
mod video;

pub use draft::{Draft, DraftError};
pub use fixture::{Fixture, FixtureDraft, MatchStatus};
pub use ids::{MatchId, ParseIdError, QuestionId, SeriesId, VideoId};
pub use question::{PartialQuestion, QUIZ_LENGTH, QuestionDraft, QuizQuestion};
pub use result::QuestionResult;
pub use series::{Series, SeriesDraft, SeriesPhase};
pub use video::{Video, VideoDraft};
