use chrono::{DateTime, NaiveDate, Utc};
use rtimesheet::core::stamp::StampLogic;
use rtimesheet::db::store::StampStore;
use rtimesheet::errors::{StampError, StoreError};
use rtimesheet::models::stamp::{NewStamp, Stamp, StampId};
use rtimesheet::models::stamp_action::StampAction;
use rtimesheet::models::work_status::WorkStatus;

mod common;
use common::{date, memory_pool, utc};

fn status_of(store: &impl StampStore, day: NaiveDate) -> WorkStatus {
    StampLogic::get_status(store, day).unwrap().status
}

#[test]
fn empty_day_is_not_working() {
    let pool = memory_pool();
    let current = StampLogic::get_status(&pool.store(), date("2025-01-24")).unwrap();

    assert_eq!(current.status, WorkStatus::NotWorking);
    assert!(current.stamp.is_none());
}

#[test]
fn full_day_walks_every_state() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");

    let s = StampLogic::clock_in(&store, day, utc("2025-01-24T09:00:00Z")).unwrap();
    assert_eq!(s.date, day);
    assert_eq!(s.clock_in_at, utc("2025-01-24T09:00:00Z"));
    assert!(s.clock_out_at.is_none());
    assert_eq!(status_of(&store, day), WorkStatus::Working);

    StampLogic::break_start(&store, day, utc("2025-01-24T12:00:00Z")).unwrap();
    assert_eq!(status_of(&store, day), WorkStatus::OnBreak);

    let s = StampLogic::break_end(&store, day, utc("2025-01-24T13:00:00Z")).unwrap();
    assert_eq!(s.break_end_at, Some(utc("2025-01-24T13:00:00Z")));
    assert_eq!(status_of(&store, day), WorkStatus::Working);

    let s = StampLogic::clock_out(&store, day, utc("2025-01-24T18:00:00Z")).unwrap();
    assert_eq!(s.clock_out_at, Some(utc("2025-01-24T18:00:00Z")));
    assert_eq!(s.updated_at, utc("2025-01-24T18:00:00Z"));
    assert_eq!(s.created_at, utc("2025-01-24T09:00:00Z"));
    assert_eq!(status_of(&store, day), WorkStatus::ClockedOut);
}

#[test]
fn clocked_out_day_rejects_everything() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");
    let later = utc("2025-01-24T19:00:00Z");

    StampLogic::clock_in(&store, day, utc("2025-01-24T09:00:00Z")).unwrap();
    let done = StampLogic::clock_out(&store, day, utc("2025-01-24T18:00:00Z")).unwrap();

    assert!(matches!(
        StampLogic::clock_in(&store, day, later),
        Err(StampError::AlreadyClockedIn { date: d }) if d == day
    ));
    assert!(matches!(
        StampLogic::clock_out(&store, day, later),
        Err(StampError::AlreadyClockedOut { .. })
    ));
    assert!(matches!(
        StampLogic::break_start(&store, day, later),
        Err(StampError::AlreadyClockedOut { .. })
    ));
    assert!(matches!(
        StampLogic::break_end(&store, day, later),
        Err(StampError::NotOnBreak { .. })
    ));

    // rejections leave the stored stamp untouched
    assert_eq!(StampLogic::find(&store, "2025-01-24").unwrap(), done);
}

#[test]
fn actions_before_clock_in_are_rejected() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");
    let now = utc("2025-01-24T09:00:00Z");

    for action in [
        StampAction::ClockOut,
        StampAction::BreakStart,
        StampAction::BreakEnd,
    ] {
        assert!(matches!(
            StampLogic::apply(&store, action, day, now),
            Err(StampError::NotClockedIn { .. })
        ));
    }
    assert_eq!(status_of(&store, day), WorkStatus::NotWorking);
}

#[test]
fn cannot_clock_out_while_on_break() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");

    StampLogic::clock_in(&store, day, utc("2025-01-24T09:00:00Z")).unwrap();
    StampLogic::break_start(&store, day, utc("2025-01-24T12:00:00Z")).unwrap();

    let err = StampLogic::clock_out(&store, day, utc("2025-01-24T18:00:00Z")).unwrap_err();
    assert!(matches!(err, StampError::StillOnBreak { .. }));
    assert_eq!(err.to_string(), "Still on break for 2025-01-24. End break first.");
    assert_eq!(status_of(&store, day), WorkStatus::OnBreak);

    assert!(matches!(
        StampLogic::break_start(&store, day, utc("2025-01-24T12:30:00Z")),
        Err(StampError::AlreadyOnBreak { .. })
    ));
}

#[test]
fn break_end_requires_open_break() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");

    StampLogic::clock_in(&store, day, utc("2025-01-24T09:00:00Z")).unwrap();
    assert!(matches!(
        StampLogic::break_end(&store, day, utc("2025-01-24T10:00:00Z")),
        Err(StampError::NotOnBreak { .. })
    ));

    StampLogic::break_start(&store, day, utc("2025-01-24T12:00:00Z")).unwrap();
    StampLogic::break_end(&store, day, utc("2025-01-24T12:30:00Z")).unwrap();
    assert!(matches!(
        StampLogic::break_end(&store, day, utc("2025-01-24T13:00:00Z")),
        Err(StampError::NotOnBreak { .. })
    ));
}

#[test]
fn second_break_replaces_the_first() {
    let pool = memory_pool();
    let store = pool.store();
    let day = date("2025-01-24");

    StampLogic::clock_in(&store, day, utc("2025-01-24T09:00:00Z")).unwrap();
    StampLogic::break_start(&store, day, utc("2025-01-24T12:00:00Z")).unwrap();
    StampLogic::break_end(&store, day, utc("2025-01-24T12:30:00Z")).unwrap();

    let s = StampLogic::break_start(&store, day, utc("2025-01-24T15:00:00Z")).unwrap();
    assert_eq!(s.break_start_at, Some(utc("2025-01-24T15:00:00Z")));
    assert!(s.break_end_at.is_none());
    assert_eq!(status_of(&store, day), WorkStatus::OnBreak);

    let s = StampLogic::break_end(&store, day, utc("2025-01-24T15:15:00Z")).unwrap();
    assert_eq!(s.break_end_at, Some(utc("2025-01-24T15:15:00Z")));
    assert_eq!(status_of(&store, day), WorkStatus::Working);
}

#[test]
fn days_are_independent() {
    let pool = memory_pool();
    let store = pool.store();

    StampLogic::clock_in(&store, date("2025-01-24"), utc("2025-01-24T09:00:00Z")).unwrap();

    assert_eq!(status_of(&store, date("2025-01-25")), WorkStatus::NotWorking);
    StampLogic::clock_in(&store, date("2025-01-25"), utc("2025-01-25T09:00:00Z")).unwrap();
    assert_eq!(status_of(&store, date("2025-01-24")), WorkStatus::Working);
}

#[test]
fn find_reports_missing_stamp() {
    let pool = memory_pool();
    let err = StampLogic::find(&pool.store(), "2025-01-24").unwrap_err();

    assert!(matches!(err, StampError::StampNotFound { .. }));
    assert_eq!(err.to_string(), "No stamp record for 2025-01-24");

    assert!(matches!(
        StampLogic::find(&pool.store(), "2025-13-01"),
        Err(StampError::Validation(_))
    ));
}

#[test]
fn action_names_round_trip_through_parse() {
    for action in StampAction::ALL {
        assert_eq!(StampAction::parse(action.as_str()), Some(action));
    }
    assert_eq!(StampAction::parse("clock-in"), Some(StampAction::ClockIn));
    assert_eq!(StampAction::parse("lunch"), None);
}

// ---------------------------
// Storage behaviour
// ---------------------------

#[test]
fn duplicate_date_is_a_conflict() {
    let pool = memory_pool();
    let store = pool.store();
    let new = NewStamp {
        date: date("2025-01-24"),
        clock_in_at: utc("2025-01-24T09:00:00Z"),
    };

    store.create(new).unwrap();
    assert!(matches!(
        store.create(new),
        Err(StoreError::Conflict { .. })
    ));
}

#[test]
fn guarded_updates_refuse_stale_writes() {
    let pool = memory_pool();
    let store = pool.store();
    let s = store
        .create(NewStamp {
            date: date("2025-01-24"),
            clock_in_at: utc("2025-01-24T09:00:00Z"),
        })
        .unwrap();

    store.set_clock_out(s.id, utc("2025-01-24T18:00:00Z")).unwrap();

    // a second writer that still saw the open stamp
    assert!(matches!(
        store.set_clock_out(s.id, utc("2025-01-24T18:05:00Z")),
        Err(StoreError::Conflict { .. })
    ));
    assert!(matches!(
        store.set_break_start(s.id, utc("2025-01-24T18:05:00Z")),
        Err(StoreError::Conflict { .. })
    ));
    assert!(matches!(
        store.set_break_end(s.id, utc("2025-01-24T18:05:00Z")),
        Err(StoreError::Conflict { .. })
    ));

    let stored = store.find_by_date(s.date).unwrap().unwrap();
    assert_eq!(stored.clock_out_at, Some(utc("2025-01-24T18:00:00Z")));
}

#[test]
fn update_of_unknown_id_is_missing() {
    let pool = memory_pool();
    assert!(matches!(
        pool.store().set_clock_out(StampId::new(999), utc("2025-01-24T18:00:00Z")),
        Err(StoreError::Missing { .. })
    ));
}

#[test]
fn timestamps_keep_millisecond_precision() {
    let pool = memory_pool();
    let store = pool.store();
    let at = utc("2025-01-24T09:00:00.123Z");

    StampLogic::clock_in(&store, date("2025-01-24"), at).unwrap();
    assert_eq!(store.find_by_date(date("2025-01-24")).unwrap().unwrap().clock_in_at, at);
}

#[test]
fn range_is_inclusive_and_sorted() {
    let pool = memory_pool();
    let store = pool.store();

    for day in ["2025-01-26", "2025-01-24", "2025-01-25", "2025-02-01"] {
        StampLogic::clock_in(&store, date(day), utc(&format!("{day}T09:00:00Z"))).unwrap();
    }

    let dates: Vec<NaiveDate> = store
        .find_in_range(date("2025-01-24"), date("2025-01-26"))
        .unwrap()
        .into_iter()
        .map(|s| s.date)
        .collect();

    assert_eq!(
        dates,
        vec![date("2025-01-24"), date("2025-01-25"), date("2025-01-26")]
    );
}

/// Store whose backend is gone.
struct BrokenStore;

impl BrokenStore {
    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Corrupt("backend unavailable".into()))
    }
}

impl StampStore for BrokenStore {
    fn find_by_date(&self, _: NaiveDate) -> Result<Option<Stamp>, StoreError> {
        Self::fail()
    }
    fn create(&self, _: NewStamp) -> Result<Stamp, StoreError> {
        Self::fail()
    }
    fn set_clock_out(&self, _: StampId, _: DateTime<Utc>) -> Result<Stamp, StoreError> {
        Self::fail()
    }
    fn set_break_start(&self, _: StampId, _: DateTime<Utc>) -> Result<Stamp, StoreError> {
        Self::fail()
    }
    fn set_break_end(&self, _: StampId, _: DateTime<Utc>) -> Result<Stamp, StoreError> {
        Self::fail()
    }
    fn find_in_range(&self, _: NaiveDate, _: NaiveDate) -> Result<Vec<Stamp>, StoreError> {
        Self::fail()
    }
}

#[test]
fn storage_failures_surface_as_storage_errors() {
    let day = date("2025-01-24");
    let now = utc("2025-01-24T09:00:00Z");

    assert!(matches!(
        StampLogic::get_status(&BrokenStore, day),
        Err(StampError::Storage(_))
    ));
    for action in StampAction::ALL {
        assert!(matches!(
            StampLogic::apply(&BrokenStore, action, day, now),
            Err(StampError::Storage(_))
        ));
    }
}
