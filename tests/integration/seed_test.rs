//! Integration tests for loading the bundled seed data.

use tribe_entity::rsvp::RsvpStatus;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_seed_loads_three_consistent_events() {
    let app = TestApp::seeded();
    assert_eq!(app.store.len(), 3);

    for id in [helpers::BOOK_CLUB, helpers::THAMES_WALK, helpers::POTTERY] {
        assert!(app.is_consistent(helpers::event_id(id)).await);
    }
}

#[tokio::test]
async fn test_seed_counters_follow_lists() {
    let app = TestApp::seeded();
    let book_club = app
        .events
        .get_event(helpers::event_id(helpers::BOOK_CLUB))
        .await
        .expect("book club");

    assert_eq!(book_club.current_attendees(), 2);
    assert_eq!(book_club.waitlist_count(), 1);
    assert_eq!(book_club.waitlist()[0].name, "Hannah Green");
    assert_eq!(book_club.waitlist()[0].position, 1);
    assert_eq!(book_club.price_minor, 3500);
}

#[tokio::test]
async fn test_seed_synthesizes_rsvps() {
    let app = TestApp::seeded();

    let emma = app.events.member_rsvps(helpers::user_id(helpers::EMMA)).await;
    assert_eq!(emma.len(), 1);
    assert_eq!(emma[0].status, RsvpStatus::Confirmed);

    let hannah = app.events.member_rsvps(helpers::user_id(helpers::HANNAH)).await;
    assert_eq!(hannah.len(), 1);
    assert_eq!(hannah[0].status, RsvpStatus::Waitlist);
}

#[tokio::test]
async fn test_seed_hosts() {
    let app = TestApp::seeded();
    let hosted = app
        .events
        .hosted_events(helpers::user_id(helpers::SARAH_HOST))
        .await;
    assert_eq!(hosted.len(), 1);
    assert_eq!(hosted[0].title, "Sunday Brunch & Book Club");
}
