//! Integration tests for browsing, filtering, and reviewing events.

use chrono::NaiveDate;

use tribe_core::error::ErrorKind;
use tribe_core::events::{CatalogEvent, EventPayload};
use tribe_core::types::SortDirection;
use tribe_entity::member::MembershipTier;
use tribe_service::{Availability, EventFilters, EventSort, EventSortField};

use crate::helpers::{self, TestApp, member};

fn titles(events: &[tribe_entity::event::Event]) -> Vec<&str> {
    events.iter().map(|e| e.title.as_str()).collect()
}

#[tokio::test]
async fn test_default_listing_is_by_date() {
    let app = TestApp::seeded();
    let events = app
        .events
        .list_events(&EventFilters::default(), EventSort::default())
        .await;
    assert_eq!(
        titles(&events),
        vec![
            "Sunday Brunch & Book Club",
            "Thames Path Walking Group",
            "Pottery Workshop & Wine Tasting",
        ]
    );
}

#[tokio::test]
async fn test_free_member_sees_free_events_only() {
    let app = TestApp::seeded();
    let filters = EventFilters {
        membership_level: Some(MembershipTier::Free),
        ..Default::default()
    };
    let events = app.events.list_events(&filters, EventSort::default()).await;
    assert_eq!(titles(&events), vec!["Thames Path Walking Group"]);
}

#[tokio::test]
async fn test_search_and_category() {
    let app = TestApp::seeded();
    let search = EventFilters {
        search: Some("HOXTON".to_string()),
        ..Default::default()
    };
    let events = app.events.list_events(&search, EventSort::default()).await;
    assert_eq!(titles(&events), vec!["Pottery Workshop & Wine Tasting"]);

    let category = EventFilters {
        category: Some("Books & Reading".to_string()),
        ..Default::default()
    };
    let events = app.events.list_events(&category, EventSort::default()).await;
    assert_eq!(titles(&events), vec!["Sunday Brunch & Book Club"]);
}

#[tokio::test]
async fn test_date_range_and_featured() {
    let app = TestApp::seeded();
    let filters = EventFilters {
        date_from: NaiveDate::from_ymd_opt(2024, 1, 29),
        featured: Some(true),
        ..Default::default()
    };
    let events = app.events.list_events(&filters, EventSort::default()).await;
    assert_eq!(titles(&events), vec!["Pottery Workshop & Wine Tasting"]);
}

#[tokio::test]
async fn test_sorting() {
    let app = TestApp::seeded();
    let all = EventFilters::default();

    let by_price = app
        .events
        .list_events(&all, EventSort::new(EventSortField::Price, SortDirection::Desc))
        .await;
    assert_eq!(by_price[0].title, "Pottery Workshop & Wine Tasting");
    assert_eq!(by_price[2].title, "Thames Path Walking Group");

    let by_rating = app
        .events
        .list_events(&all, EventSort::new(EventSortField::Rating, SortDirection::Asc))
        .await;
    assert_eq!(by_rating[0].title, "Pottery Workshop & Wine Tasting");

    let popular = app
        .events
        .list_events(&all, EventSort::new(EventSortField::Popularity, SortDirection::Asc))
        .await;
    assert_eq!(popular[0].title, "Pottery Workshop & Wine Tasting");

    let newest = app
        .events
        .list_events(&all, EventSort::new(EventSortField::Created, SortDirection::Asc))
        .await;
    assert_eq!(newest[0].title, "Thames Path Walking Group");

    let alpha = app
        .events
        .list_events(&all, EventSort::new(EventSortField::Alphabetical, SortDirection::Asc))
        .await;
    assert_eq!(alpha[0].title, "Pottery Workshop & Wine Tasting");
}

#[tokio::test]
async fn test_availability_tracks_registrations() {
    let app = TestApp::empty();
    let event = app.create_event("Tiny Tea", 1, true).await;
    let waitlist_only = EventFilters {
        availability: Availability::Waitlist,
        ..Default::default()
    };
    assert!(app.events.list_events(&waitlist_only, EventSort::default()).await.is_empty());

    app.rsvp
        .register(event.id, &member("Alice", MembershipTier::Free))
        .await
        .expect("register");
    let events = app.events.list_events(&waitlist_only, EventSort::default()).await;
    assert_eq!(titles(&events), vec!["Tiny Tea"]);
}

#[tokio::test]
async fn test_create_event_publishes() {
    let app = TestApp::empty();
    let mut rx = app.bus.subscribe();
    let event = app.create_event("Gallery Tour", 12, true).await;

    let published = rx.try_recv().expect("published");
    match published.payload {
        EventPayload::Catalog(CatalogEvent::Created { event_id, title, .. }) => {
            assert_eq!(event_id, event.id);
            assert_eq!(title, "Gallery Tour");
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[tokio::test]
async fn test_review_by_seeded_attendee() {
    let app = TestApp::seeded();
    let walk = helpers::event_id(helpers::THAMES_WALK);
    let book_club = helpers::event_id(helpers::BOOK_CLUB);

    let jenny = helpers::seeded_member(helpers::JENNY, "Jenny Liu", MembershipTier::Free);
    let err = app
        .events
        .add_review(walk, &jenny, 5, "Again!")
        .await
        .expect_err("already reviewed");
    assert!(err.is(ErrorKind::Conflict));

    let lisa = helpers::seeded_member(helpers::LISA, "Lisa Wang", MembershipTier::Premium);
    app.events
        .add_review(book_club, &lisa, 4, "Great book choice")
        .await
        .expect("review");

    let snap = app.events.get_event(book_club).await.expect("event");
    assert_eq!(snap.total_reviews, 9);
    assert!((snap.average_rating - 4.5).abs() < f64::EPSILON);

    let hannah = helpers::seeded_member(helpers::HANNAH, "Hannah Green", MembershipTier::Core);
    let err = app
        .events
        .add_review(book_club, &hannah, 5, "Can't wait")
        .await
        .expect_err("waitlisted");
    assert_eq!(err.message, "You must attend an event to review it");
}

#[tokio::test]
async fn test_notify_seeded_waitlister() {
    let app = TestApp::seeded();
    let pottery = helpers::event_id(helpers::POTTERY);
    app.events
        .mark_waitlist_notified(pottery, helpers::user_id(helpers::SOPHIE))
        .await
        .expect("notify");
    let snap = app.events.get_event(pottery).await.expect("event");
    assert!(snap.waitlist()[0].notified);
}
