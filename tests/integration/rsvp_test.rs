//! Integration tests for RSVP registration, cancellation, and waitlist
//! promotion.

use tribe_core::error::{AppError, ErrorKind};
use tribe_core::types::id::EventId;
use tribe_entity::member::MembershipTier;
use tribe_entity::rsvp::RsvpStatus;
use tribe_service::{CancelReceipt, RsvpError};

use crate::helpers::{self, TestApp, member};

#[tokio::test]
async fn test_cancel_promotes_waitlist_head() {
    let app = TestApp::empty();
    let event = app.create_event("Supper Club", 2, true).await;
    let a = member("Alice", MembershipTier::Core);
    let b = member("Beth", MembershipTier::Core);
    let c = member("Cara", MembershipTier::Core);

    let ra = app.rsvp.register(event.id, &a).await.expect("a");
    let rb = app.rsvp.register(event.id, &b).await.expect("b");
    let rc = app.rsvp.register(event.id, &c).await.expect("c");
    assert_eq!(ra.status, RsvpStatus::Confirmed);
    assert_eq!(rb.status, RsvpStatus::Confirmed);
    assert_eq!(rc.status, RsvpStatus::Waitlist);
    assert_eq!(rc.position, Some(1));

    let receipt = app.rsvp.cancel(event.id, &a).await.expect("cancel");
    assert!(receipt.success);
    assert_eq!(receipt.message, "RSVP cancelled successfully");
    assert_eq!(receipt.promoted, Some(c.id));

    let snap = app.events.get_event(event.id).await.expect("event");
    assert_eq!(snap.current_attendees(), 2);
    assert_eq!(snap.waitlist_count(), 0);
    assert!(snap.find_attendee(c.id).is_some());
    assert!(app.is_consistent(event.id).await);

    let c_rsvps = app.events.member_rsvps(c.id).await;
    assert_eq!(c_rsvps[0].status, RsvpStatus::Confirmed);
}

#[tokio::test]
async fn test_full_event_without_waitlist_rejects() {
    let app = TestApp::empty();
    let event = app.create_event("Private Dinner", 1, false).await;

    app.rsvp
        .register(event.id, &member("Alice", MembershipTier::Free))
        .await
        .expect("a");
    let err = app
        .rsvp
        .register(event.id, &member("Beth", MembershipTier::Free))
        .await
        .expect_err("full");

    assert_eq!(err, RsvpError::EventFull);
    assert_eq!(err.to_string(), "event full, no waitlist");
    let app_err = AppError::from(err);
    assert!(app_err.is(ErrorKind::Capacity));
}

#[tokio::test]
async fn test_duplicate_registration_rejected_in_either_list() {
    let app = TestApp::empty();
    let event = app.create_event("Wine Night", 1, true).await;
    let a = member("Alice", MembershipTier::Free);
    let b = member("Beth", MembershipTier::Free);

    app.rsvp.register(event.id, &a).await.expect("a");
    app.rsvp.register(event.id, &b).await.expect("b");

    for m in [&a, &b] {
        let err = app.rsvp.register(event.id, m).await.expect_err("duplicate");
        assert_eq!(err.to_string(), "Already registered for this event");
    }
    assert!(app.is_consistent(event.id).await);
}

#[tokio::test]
async fn test_reregister_after_cancel() {
    let app = TestApp::empty();
    let event = app.create_event("Yoga", 3, true).await;
    let a = member("Alice", MembershipTier::Free);

    app.rsvp.register(event.id, &a).await.expect("first");
    app.rsvp.cancel(event.id, &a).await.expect("cancel");
    let again = app.rsvp.register(event.id, &a).await.expect("again");
    assert_eq!(again.status, RsvpStatus::Confirmed);

    let history = app.events.member_rsvps(a.id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, RsvpStatus::Cancelled);
    assert_eq!(history[1].status, RsvpStatus::Confirmed);
}

#[tokio::test]
async fn test_leaving_waitlist_renumbers_positions() {
    let app = TestApp::empty();
    let event = app.create_event("Cooking Class", 1, true).await;
    let members: Vec<_> = ["Alice", "Beth", "Cara", "Dina"]
        .into_iter()
        .map(|n| member(n, MembershipTier::Free))
        .collect();
    for m in &members {
        app.rsvp.register(event.id, m).await.expect("register");
    }

    let receipt = app.rsvp.cancel(event.id, &members[2]).await.expect("leave");
    assert!(receipt.promoted.is_none());

    let snap = app.events.get_event(event.id).await.expect("event");
    let queue: Vec<_> = snap.waitlist().iter().map(|w| (w.user_id, w.position)).collect();
    assert_eq!(queue, vec![(members[1].id, 1), (members[3].id, 2)]);
    assert!(app.is_consistent(event.id).await);
}

#[tokio::test]
async fn test_tier_gate_on_seeded_event() {
    let app = TestApp::seeded();
    let pottery = helpers::event_id(helpers::POTTERY);

    let err = app
        .rsvp
        .register(pottery, &member("Free Fran", MembershipTier::Free))
        .await
        .expect_err("tier");
    assert_eq!(err.to_string(), "membership upgrade required");
    assert!(AppError::from(err).is(ErrorKind::Authorization));

    let ok = app
        .rsvp
        .register(pottery, &member("Core Cleo", MembershipTier::Core))
        .await
        .expect("core member");
    assert_eq!(ok.status, RsvpStatus::Confirmed);
}

#[tokio::test]
async fn test_cancel_skips_tier_check() {
    let app = TestApp::seeded();
    let book_club = helpers::event_id(helpers::BOOK_CLUB);
    let downgraded = helpers::seeded_member(helpers::LISA, "Lisa Wang", MembershipTier::Free);

    let receipt = app.rsvp.cancel(book_club, &downgraded).await.expect("cancel");
    assert!(receipt.success);
    assert_eq!(receipt.promoted, Some(helpers::user_id(helpers::HANNAH)));
}

#[tokio::test]
async fn test_cancel_without_rsvp() {
    let app = TestApp::seeded();
    let walk = helpers::event_id(helpers::THAMES_WALK);
    let stranger = member("Stranger", MembershipTier::Free);

    let receipt = CancelReceipt::from_result(app.rsvp.cancel(walk, &stranger).await);
    assert!(!receipt.success);
    assert_eq!(receipt.message, "RSVP not found");

    let receipt = CancelReceipt::from_result(app.rsvp.cancel(EventId::new(), &stranger).await);
    assert_eq!(receipt.message, "Event not found");
}

#[tokio::test]
async fn test_seeded_waitlister_leaves() {
    let app = TestApp::seeded();
    let pottery = helpers::event_id(helpers::POTTERY);
    let sophie = helpers::seeded_member(helpers::SOPHIE, "Sophie Brown", MembershipTier::Core);

    app.rsvp.cancel(pottery, &sophie).await.expect("leave");
    let snap = app.events.get_event(pottery).await.expect("event");
    assert!(snap.waitlist().is_empty());
    assert_eq!(snap.current_attendees(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_and_cancel_across_events() {
    let app = TestApp::empty();
    let first = app.create_event("First", 3, true).await;
    let second = app.create_event("Second", 4, true).await;

    let mut tasks = Vec::new();
    for i in 0..30 {
        let rsvp = app.rsvp.clone();
        let event_id = if i % 2 == 0 { first.id } else { second.id };
        tasks.push(tokio::spawn(async move {
            let m = member(&format!("Member {i}"), MembershipTier::Free);
            rsvp.register(event_id, &m).await.expect("register");
            if i % 3 == 0 {
                rsvp.cancel(event_id, &m).await.expect("cancel");
            }
        }));
    }
    for task in tasks {
        task.await.expect("join");
    }

    for (id, capacity) in [(first.id, 3), (second.id, 4)] {
        let snap = app.events.get_event(id).await.expect("event");
        assert!(snap.current_attendees() <= capacity);
        assert!(app.is_consistent(id).await);
        if snap.waitlist_count() > 0 {
            assert_eq!(snap.current_attendees(), capacity);
        }
    }
}
