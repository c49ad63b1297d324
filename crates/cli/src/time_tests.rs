// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_system_clock_is_past_2023() {
    assert!(SystemClock.now_millis() > 1_700_000_000_000);
}

#[test]
fn test_fake_clock_advances_by_duration_and_millis() {
    let clock = FakeClock::new(1000);
    clock.advance(Duration::from_millis(500));
    clock.advance_ms(250);
    assert_eq!(clock.now_millis(), 1750);
}

#[test]
fn test_fake_clock_clones_share_time() {
    let clock = FakeClock::at_epoch();
    let handle = ClockHandle::Fake(clock.clone());
    clock.set(42);
    assert_eq!(handle.now_millis(), 42);
}

#[test]
fn test_clock_handle_exposes_fake_only() {
    assert!(ClockHandle::system().as_fake().is_none());
    let handle = ClockHandle::fake_at(7);
    handle.as_fake().unwrap().advance_ms(3);
    assert_eq!(handle.now_millis(), 10);
}

#[test]
fn test_utc_from_millis_converts_and_clamps() {
    assert_eq!(
        utc_from_millis(1_700_000_000_123).to_rfc3339(),
        "2023-11-14T22:13:20.123+00:00"
    );
    assert_eq!(utc_from_millis(u64::MAX), DateTime::<Utc>::default());
}
