use dioxus::prelude::*;

use crate::vm::QuizIntent;

use super::test_harness::{
    ViewKind, drive_dom, failing_api, forbidden_api, setup_view_harness, setup_view_harness_with_api,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_tiles_and_offline_notice() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to Cricket Corner"), "missing title in {html}");
    assert!(html.contains("offline demo"), "missing offline notice in {html}");
    assert!(html.contains("Open Quiz"), "missing quiz tile in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn series_view_smoke_renders_seeded_cards() {
    let mut harness = setup_view_harness(ViewKind::Series);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("The Ashes"), "missing series in {html}");
    assert!(html.contains("Page 1 of 1"), "missing pager label in {html}");
    assert!(html.contains("3 items"), "missing total in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn videos_view_smoke_renders_watch_links() {
    let mut harness = setup_view_harness(ViewKind::Videos);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("How to bowl a yorker"), "missing video in {html}");
    assert!(html.contains("Watch"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_renders_bundled_markdown() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("About Cricket Corner"), "missing heading in {html}");
    assert!(html.contains("<strong>+20</strong>"), "markdown not rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_view_smoke_follows_token_state() {
    let mut harness = setup_view_harness(ViewKind::SignIn);
    harness.rebuild();
    assert!(harness.render().contains("Access token"));

    let mut harness = setup_view_harness(ViewKind::SignIn);
    harness.services.sign_in("editor-token");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("You are signed in"), "missing signed-in state in {html}");
    assert!(html.contains("Sign out"), "missing sign out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_plays_through_to_celebration() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.settle().await;
    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    assert!(html.contains("Skip"), "submit should read Skip before a pick in {html}");

    for _ in 0..5 {
        let correct = harness
            .dom
            .in_runtime(|| {
                handles
                    .session()
                    .peek()
                    .state()
                    .and_then(|state| state.current_question())
                    .map(|question| question.correct_answer().to_string())
            })
            .expect("current question");
        harness
            .dom
            .in_runtime(|| handles.dispatch().call(QuizIntent::Select(correct)));
        harness
            .dom
            .in_runtime(|| handles.dispatch().call(QuizIntent::Submit));
        drive_dom(&mut harness.dom);
    }

    let html = harness.render();
    assert!(html.contains("Final score: 100 / 100"), "missing score in {html}");
    assert!(html.contains("Brilliant innings"), "missing banner in {html}");
    assert!(html.contains("5 correct, 0 wrong, 0 skipped"), "missing breakdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reset_starts_a_fresh_round() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.settle().await;
    let handles = harness.quiz_handles.clone().expect("quiz handles");

    harness
        .dom
        .in_runtime(|| handles.dispatch().call(QuizIntent::Select("Not an option".into())));
    harness
        .dom
        .in_runtime(|| handles.dispatch().call(QuizIntent::Submit));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Score: -10"), "missing penalty in {html}");
    assert!(html.contains("Question 2 of 5"), "did not advance in {html}");

    harness
        .dom
        .in_runtime(|| handles.dispatch().call(QuizIntent::Reset));
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "did not restart in {html}");
    assert!(html.contains("Score: 0"), "score not cleared in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_api(ViewKind::Quiz, failing_api());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Could not reach the server"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_series_view_smoke_lists_rows_and_asks_for_sign_in() {
    let mut harness = setup_view_harness(ViewKind::AdminSeries);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Indian Premier League"), "missing row in {html}");
    assert!(html.contains("Edit"), "missing row actions in {html}");
    assert!(html.contains("Sign in to create"), "missing sign-in hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_matches_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_api(ViewKind::AdminMatches, failing_api());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Could not reach the server"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_questions_view_smoke_renders_options() {
    let mut harness = setup_view_harness(ViewKind::AdminQuestions);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(" / "), "missing joined options in {html}");
    assert!(html.contains("Page 1 of 2"), "seven questions should span two pages in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn list_errors_offer_retry_only_when_retrying_can_help() {
    let mut harness = setup_view_harness_with_api(ViewKind::Series, forbidden_api());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please sign in"), "missing error in {html}");
    assert!(!html.contains("Retry"), "retry offered for a refused request in {html}");

    let mut harness = setup_view_harness_with_api(ViewKind::Quiz, forbidden_api());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please sign in"), "missing error in {html}");
    assert!(!html.contains("Retry"), "retry offered for a refused request in {html}");
}
