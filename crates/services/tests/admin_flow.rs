use chrono::NaiveDate;
use cricket_core::PaginationController;
use cricket_core::model::{FixtureDraft, MatchStatus, SeriesId, VideoDraft};
use services::{AppServices, Clock, ResourceServiceError};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn signed_in_admin_creates_then_refetches() {
    let services = AppServices::offline(Clock::default());
    let matches = services.matches();

    let mut pager = PaginationController::new(50);
    assert!(pager.begin_refresh());
    let before = matches.load_page(&mut pager).await.unwrap().len();

    let draft = FixtureDraft {
        series_id: SeriesId::new(1),
        team_a: "New Zealand".into(),
        team_b: "South Africa".into(),
        venue: "Basin Reserve".into(),
        match_date: day(2026, 12, 26),
        status: MatchStatus::Scheduled,
        result: None,
    };

    let err = matches.create(&draft).await.unwrap_err();
    assert!(err.is_unauthorized());

    services.sign_in("admin");
    matches.create(&draft).await.unwrap();

    assert!(pager.begin_refresh());
    let after = matches.load_page(&mut pager).await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|m| m.venue == "Basin Reserve"));
}

#[tokio::test]
async fn invalid_video_url_is_rejected_locally() {
    let services = AppServices::offline(Clock::default());
    services.sign_in("admin");
    let draft = VideoDraft {
        title: "Spin bowling basics".into(),
        url: "ftp://videos.example.com/spin".into(),
        ..VideoDraft::default()
    };
    let err = services.videos().create(&draft).await.unwrap_err();
    assert!(matches!(err, ResourceServiceError::Invalid(_)));
}

#[tokio::test]
async fn deleting_the_last_row_pulls_the_cursor_back() {
    let services = AppServices::offline(Clock::default());
    services.sign_in("admin");
    let series = services.series();

    let mut pager = PaginationController::new(1);
    assert!(pager.begin_refresh());
    series.load_page(&mut pager).await.unwrap();
    while pager.next() {
        series.load_page(&mut pager).await.unwrap();
    }
    let last_page = pager.page_index();
    assert_eq!(last_page, pager.total_pages() - 1);

    assert!(pager.begin_refresh());
    let rows = series.load_page(&mut pager).await.unwrap();
    series.delete(&rows[0].id).await.unwrap();

    assert!(pager.begin_refresh());
    let rows = series.load_page(&mut pager).await.unwrap();
    assert_eq!(pager.page_index(), last_page - 1);
    assert_eq!(rows.len(), 1);
}
