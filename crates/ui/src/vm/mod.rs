mod admin_form_vm;
mod catalog_vm;
mod markdown_vm;
mod quiz_summary_vm;
mod quiz_vm;
mod time_fmt;

pub use admin_form_vm::{
    DraftOf, FixtureForm, IdOf, QuestionForm, RecordForm, RecordOf, SeriesForm, VideoForm,
};
pub use catalog_vm::{
    FixtureRowVm, QuestionRowVm, SeriesCardVm, VideoCardVm, map_fixture_rows, map_question_rows,
    map_series_cards, map_video_cards,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_summary_vm::{QuizResultRowVm, QuizSummaryVm, map_quiz_summary};
pub use quiz_vm::{QuizIntent, QuizOptionVm, QuizQuestionVm, QuizScreenVm, map_quiz_screen};
pub use time_fmt::{date_input_value, format_date, format_datetime};
