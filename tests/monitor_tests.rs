//! Tests for the monitor pipeline: snapshot classification through the
//! publish gate and onto the event bus, plus the debounced position save.

use inputfloat::events::{AppEvent, EventBus, EventPublisher};
use inputfloat::input::{classify, DisplaySymbol, InputSourceSnapshot, MonitorCore};
use inputfloat::sync::PositionDebouncer;

fn snapshot(id: &str, name: &str, layout: bool, caps: bool) -> InputSourceSnapshot {
    InputSourceSnapshot {
        source_id: id.to_string(),
        localized_name: name.to_string(),
        is_keyboard_layout: layout,
        caps_lock: caps,
    }
}

fn us(caps: bool) -> InputSourceSnapshot {
    snapshot("com.apple.keylayout.US", "U.S.", true, caps)
}

fn pinyin(caps: bool) -> InputSourceSnapshot {
    snapshot(
        "com.apple.inputmethod.SCIM.ITABC",
        "拼音 - 简体",
        false,
        caps,
    )
}

/// What the platform driver does on a notification, without the OS.
fn notify(core: &mut MonitorCore, publisher: &EventPublisher, snap: Option<&InputSourceSnapshot>) {
    if let Some(symbol) = core.refresh(snap) {
        publisher.publish(AppEvent::SymbolChanged(symbol));
    }
}

/// What the platform driver does on a poll tick, without the OS.
fn tick(core: &mut MonitorCore, publisher: &EventPublisher, snap: Option<&InputSourceSnapshot>) {
    if let Some(symbol) = core.poll(snap) {
        publisher.publish(AppEvent::SymbolChanged(symbol));
    }
}

// === Symbol Pipeline ===

#[test]
fn typical_session_publishes_one_event_per_transition() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut core = MonitorCore::new();

    // Startup on a US layout.
    notify(&mut core, &publisher, Some(&us(false)));
    // User switches to Pinyin; the OS fires several notifications for one
    // switch, and the poll observes the same state in between.
    notify(&mut core, &publisher, Some(&pinyin(false)));
    notify(&mut core, &publisher, Some(&pinyin(false)));
    tick(&mut core, &publisher, Some(&pinyin(false)));
    // Caps lock toggles Pinyin into ASCII mode; only the poll sees it.
    tick(&mut core, &publisher, Some(&pinyin(true)));
    tick(&mut core, &publisher, Some(&pinyin(true)));
    // Back to the US layout.
    notify(&mut core, &publisher, Some(&us(false)));

    assert_eq!(
        bus.drain(),
        vec![
            AppEvent::SymbolChanged(DisplaySymbol::LatinLower),
            AppEvent::SymbolChanged(DisplaySymbol::ChineseActive),
            AppEvent::SymbolChanged(DisplaySymbol::ChineseLatin),
            AppEvent::SymbolChanged(DisplaySymbol::LatinLower),
        ]
    );
}

#[test]
fn layout_switch_with_same_symbol_stays_quiet() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut core = MonitorCore::new();

    notify(&mut core, &publisher, Some(&us(false)));
    bus.drain();

    // US -> British: raw id changes, displayed symbol does not.
    let british = snapshot("com.apple.keylayout.British", "British", true, false);
    notify(&mut core, &publisher, Some(&british));
    tick(&mut core, &publisher, Some(&british));

    assert!(bus.drain().is_empty());
    assert_eq!(core.current(), DisplaySymbol::LatinLower);
}

#[test]
fn query_failure_surfaces_unknown_only_via_notifications() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut core = MonitorCore::new();

    notify(&mut core, &publisher, Some(&us(true)));
    bus.drain();

    // Poll failures are transient; the badge keeps its symbol.
    tick(&mut core, &publisher, None);
    assert!(bus.drain().is_empty());
    assert_eq!(core.current(), DisplaySymbol::LatinUpper);

    // A failed refresh on the notification path does publish the sentinel.
    notify(&mut core, &publisher, None);
    assert_eq!(
        bus.drain(),
        vec![AppEvent::SymbolChanged(DisplaySymbol::Unknown)]
    );
}

#[test]
fn recovery_after_unknown_republishes() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut core = MonitorCore::new();

    notify(&mut core, &publisher, Some(&us(false)));
    notify(&mut core, &publisher, None);
    bus.drain();

    notify(&mut core, &publisher, Some(&us(false)));
    assert_eq!(
        bus.drain(),
        vec![AppEvent::SymbolChanged(DisplaySymbol::LatinLower)]
    );
}

#[test]
fn no_publishes_after_teardown() {
    // Mirrors the platform driver: teardown drops the publisher handle, so
    // late notification or poll callbacks have nowhere to publish to.
    struct Driver {
        core: MonitorCore,
        publisher: Option<EventPublisher>,
    }

    impl Driver {
        fn on_notification(&mut self, snap: Option<&InputSourceSnapshot>) {
            if let (Some(symbol), Some(publisher)) =
                (self.core.refresh(snap), self.publisher.as_ref())
            {
                publisher.publish(AppEvent::SymbolChanged(symbol));
            }
        }

        fn teardown(&mut self) {
            self.publisher = None;
        }
    }

    let bus = EventBus::new();
    let mut driver = Driver {
        core: MonitorCore::new(),
        publisher: Some(bus.publisher()),
    };

    driver.on_notification(Some(&us(false)));
    assert_eq!(bus.drain().len(), 1);

    driver.teardown();
    // Idempotent.
    driver.teardown();

    // Notifications keep arriving and state keeps changing, but nothing is
    // observable any more.
    driver.on_notification(Some(&pinyin(false)));
    driver.on_notification(Some(&us(true)));
    assert!(bus.drain().is_empty());
}

#[test]
fn classifier_covers_the_display_alphabet() {
    assert_eq!(classify(&us(false)), DisplaySymbol::LatinLower);
    assert_eq!(classify(&us(true)), DisplaySymbol::LatinUpper);
    assert_eq!(classify(&pinyin(false)), DisplaySymbol::ChineseActive);
    assert_eq!(classify(&pinyin(true)), DisplaySymbol::ChineseLatin);
}

// === Debounced Position Save ===

#[test]
fn drag_burst_commits_only_the_final_position() {
    let mut debouncer = PositionDebouncer::new();

    // Every move during the drag supersedes the previous pending save.
    let mut token = 0;
    for i in 0..25 {
        token = debouncer.note_move(10.0 + f64::from(i), 20.0);
    }

    // Timers for all superseded generations fire eventually; only the
    // latest one commits.
    for stale in 1..token {
        assert_eq!(debouncer.try_commit(stale), None);
    }
    assert_eq!(debouncer.try_commit(token), Some((34.0, 20.0)));

    // One write per settle: the same token cannot commit twice.
    assert_eq!(debouncer.try_commit(token), None);
}

#[test]
fn cancel_drops_pending_save() {
    let mut debouncer = PositionDebouncer::new();
    let token = debouncer.note_move(5.0, 6.0);
    debouncer.cancel();
    assert_eq!(debouncer.try_commit(token), None);
    assert!(!debouncer.has_pending());
}

#[test]
fn moves_after_commit_start_a_fresh_cycle() {
    let mut debouncer = PositionDebouncer::new();

    let first = debouncer.note_move(1.0, 1.0);
    assert_eq!(debouncer.try_commit(first), Some((1.0, 1.0)));

    let second = debouncer.note_move(2.0, 2.0);
    assert_ne!(first, second);
    assert_eq!(debouncer.try_commit(second), Some((2.0, 2.0)));
}

#[test]
fn committed_position_flows_into_the_config() {
    use inputfloat::model::{FloatConfig, MemoryPrefs};

    let bus = EventBus::new();
    let mut config = FloatConfig::load(Box::new(MemoryPrefs::new()), bus.publisher());
    let mut debouncer = PositionDebouncer::new();

    debouncer.note_move(111.0, 222.0);
    let token = debouncer.note_move(333.0, 444.0);
    if let Some((x, y)) = debouncer.try_commit(token) {
        config.set_position(x, y);
    }

    assert_eq!(config.window_x(), 333.0);
    assert_eq!(config.window_y(), 444.0);
    assert_eq!(bus.drain(), vec![AppEvent::ConfigChanged]);
}
