//! Timed behaviour replayed on a virtual clock.

use std::time::Duration;

use async_trait::async_trait;
use trivix_core::form::{FormEffect, FormEvent, FormState, FormSubmission, SUCCESS_MESSAGE};
use trivix_core::notify::{Notice, NotificationCenter, NotificationId, Phase, ToastChange, ToastEvent};
use trivix_core::schedule::{Scheduled, Timeline};
use trivix_core::search::{InputAction, SearchBox, SearchIndex, SearchOutcome, mock_catalog};
use trivix_core::timing::{Debouncer, Ticket};
use trivix_core::wallet::{
    CONNECTED_MESSAGE, ConnectError, FAILED_MESSAGE, WalletButton, WalletConnector, WalletEffect,
    WalletEvent, WalletState, simulated_outcome,
};
use trivix_core::TrivixConfig;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn only_the_final_keystroke_searches() {
    init_tracing();
    let config = TrivixConfig::default();
    let index = SearchIndex::new(mock_catalog(), config.search_min_chars);
    let mut debouncer = Debouncer::new(config.search_debounce());
    let mut timeline: Timeline<Ticket> = Timeline::new();
    let mut executed = Vec::new();

    // "b", "be", "bea", "beat" typed 80ms apart.
    for (i, query) in ["b", "be", "bea", "beat"].into_iter().enumerate() {
        let typed_at = ms(80 * i as u64);
        while let Some((_, ticket)) = timeline.next_due(typed_at) {
            if let Some(q) = debouncer.fire(ticket) {
                executed.push(q);
            }
        }
        timeline.settle(typed_at);
        let ticket = debouncer.schedule(query);
        timeline.schedule(Scheduled::new(debouncer.window(), ticket));
    }

    while let Some((at, ticket)) = timeline.next_due(ms(10_000)) {
        if let Some(q) = debouncer.fire(ticket) {
            assert_eq!(at, ms(240 + 300));
            executed.push(q);
        }
    }

    assert_eq!(executed, vec!["beat"]);
    let SearchOutcome::Results(hits) = index.evaluate(executed[0]) else {
        panic!("four characters should search");
    };
    assert_eq!(hits.len(), 2);
}

#[test]
fn short_query_clears_without_waiting_and_never_searches() {
    let index = SearchIndex::new(mock_catalog(), 2);
    let mut search = SearchBox::new(ms(300));
    let mut timeline: Timeline<Ticket> = Timeline::new();
    let mut cleared_at = Vec::new();

    for (typed_at, query) in [(0, "be"), (100, "b"), (200, "")] {
        timeline.settle(ms(typed_at));
        match search.input(&index, query) {
            InputAction::ClearNow => cleared_at.push(ms(typed_at)),
            InputAction::Arm(ticket) => timeline.schedule(Scheduled::new(search.window(), ticket)),
        }
    }

    while let Some((_, ticket)) = timeline.next_due(ms(10_000)) {
        assert_eq!(search.fire(&index, ticket), None);
    }
    assert_eq!(cleared_at, vec![ms(100), ms(200)]);
}

#[test]
fn notification_is_removed_after_display_and_exit_never_before() {
    init_tracing();
    let mut center = NotificationCenter::new(&TrivixConfig::default());
    let mut timeline: Timeline<(NotificationId, ToastEvent)> = Timeline::new();

    let (id, timers) = center.show(Notice::success("Saved"));
    for timer in timers {
        timeline.schedule(timer.map(|e| (id, e)));
    }

    let mut detached_at = None;
    let mut shown_at = None;
    while let Some((at, (id, event))) = timeline.next_due(ms(60_000)) {
        match center.apply(id, event) {
            Some(ToastChange::Show) => shown_at = Some(at),
            Some(ToastChange::Hide(next)) => {
                assert_eq!(at, ms(5_000));
                assert_eq!(center.phase(id), Phase::Leaving);
                timeline.schedule(next.map(|e| (id, e)));
            }
            Some(ToastChange::Detach) => detached_at = Some(at),
            None => {}
        }
        if detached_at.is_none() {
            assert_ne!(center.phase(id), Phase::Removed, "removed early at {at:?}");
        }
    }

    assert_eq!(shown_at, Some(ms(100)));
    assert_eq!(detached_at, Some(center.lifetime()));
    assert_eq!(center.phase(id), Phase::Removed);
}

#[test]
fn overlapping_notifications_keep_independent_timelines() {
    let mut center = NotificationCenter::new(&TrivixConfig::default());
    let mut timeline: Timeline<(NotificationId, ToastEvent)> = Timeline::new();

    let (first, timers) = center.show(Notice::info("one"));
    for timer in timers {
        timeline.schedule(timer.map(|e| (first, e)));
    }
    timeline.settle(ms(1_000));
    let (second, timers) = center.show(Notice::info("two"));
    for timer in timers {
        timeline.schedule(timer.map(|e| (second, e)));
    }

    let mut removals = Vec::new();
    while let Some((at, (id, event))) = timeline.next_due(ms(60_000)) {
        match center.apply(id, event) {
            Some(ToastChange::Hide(next)) => timeline.schedule(next.map(|e| (id, e))),
            Some(ToastChange::Detach) => removals.push((id, at)),
            _ => {}
        }
    }
    assert_eq!(removals, vec![(first, ms(5_300)), (second, ms(6_300))]);
}

/// Feeds wallet effects through the virtual clock. The connector is modelled
/// as a `Resolved` event arriving after the configured latency.
fn run_wallet(
    wallet: &mut WalletButton,
    outcome: Result<String, ConnectError>,
) -> Vec<(Duration, WalletEffect)> {
    let config = TrivixConfig::default();
    let mut timeline: Timeline<WalletEvent> = Timeline::new();
    let mut log = Vec::new();
    timeline.schedule(Scheduled::new(Duration::ZERO, WalletEvent::Click));

    while let Some((at, event)) = timeline.next_due(ms(60_000)) {
        for effect in wallet.handle(event) {
            match &effect {
                WalletEffect::StartConnect => timeline.schedule(Scheduled::new(
                    config.wallet_connect_latency(),
                    WalletEvent::Resolved(outcome.clone()),
                )),
                WalletEffect::Schedule(next) => timeline.schedule(next.clone()),
                _ => {}
            }
            log.push((at, effect));
        }
    }
    log
}

fn notices(log: &[(Duration, WalletEffect)]) -> Vec<(Duration, Notice)> {
    log.iter()
        .filter_map(|(at, e)| match e {
            WalletEffect::Notify(n) => Some((*at, n.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn wallet_happy_path_connects_after_latency() {
    init_tracing();
    let config = TrivixConfig::default();
    let mut wallet = WalletButton::new("metamask", &config);
    let outcome = simulated_outcome(wallet.wallet_type(), &config.wallet_address);
    let log = run_wallet(&mut wallet, outcome);

    let WalletEffect::Render(connecting) = &log[0].1 else {
        panic!("click renders first");
    };
    assert_eq!(log[0].0, Duration::ZERO);
    assert_eq!(connecting.label, "Connecting...");
    assert!(connecting.disabled);

    assert_eq!(
        notices(&log),
        vec![(ms(2_000), Notice::success(CONNECTED_MESSAGE))]
    );
    assert_eq!(
        wallet.state(),
        &WalletState::Connected {
            address: "0x1234...5678".into()
        }
    );
}

#[test]
fn wallet_failure_path_resets_after_three_seconds() {
    let config = TrivixConfig::default();
    let mut wallet = WalletButton::new("ledger", &config);
    let outcome = simulated_outcome(wallet.wallet_type(), &config.wallet_address);
    let log = run_wallet(&mut wallet, outcome);

    assert_eq!(notices(&log), vec![(ms(2_000), Notice::error(FAILED_MESSAGE))]);
    let (at, last) = log.last().unwrap();
    assert_eq!(*at, ms(5_000));
    let WalletEffect::Render(view) = last else {
        panic!("reset renders the idle button");
    };
    assert_eq!(view.label, "Connect Wallet");
    assert!(!view.disabled);
    assert_eq!(wallet.state(), &WalletState::Idle);
}

#[test]
fn form_submission_timeline() {
    let config = TrivixConfig::default();
    let mut form = FormSubmission::new(&config);
    let mut timeline: Timeline<FormEvent> = Timeline::new();
    timeline.schedule(Scheduled::new(Duration::ZERO, FormEvent::Submit));
    timeline.schedule(Scheduled::new(ms(500), FormEvent::Submit));

    let mut notified_at = Vec::new();
    let mut restored_at = None;
    while let Some((at, event)) = timeline.next_due(ms(60_000)) {
        for effect in form.handle(event) {
            match effect {
                FormEffect::Schedule(next) => timeline.schedule(next),
                FormEffect::Notify(n) => {
                    assert_eq!(n.message, SUCCESS_MESSAGE);
                    notified_at.push(at);
                }
                FormEffect::Restore => restored_at = Some(at),
                _ => {}
            }
        }
    }

    assert_eq!(notified_at, vec![ms(1_500)]);
    assert_eq!(restored_at, Some(ms(3_500)));
    assert_eq!(form.state(), FormState::Idle);
}

struct InstantConnector {
    address: &'static str,
}

#[async_trait(?Send)]
impl WalletConnector for InstantConnector {
    async fn connect(&self, wallet_type: &str) -> Result<String, ConnectError> {
        simulated_outcome(wallet_type, self.address)
    }
}

#[tokio::test]
async fn connector_result_drives_the_button() -> anyhow::Result<()> {
    let config = TrivixConfig::default();
    let connector = InstantConnector { address: "0xfeed" };
    let mut wallet = WalletButton::new("phantom", &config);

    let effects = wallet.handle(WalletEvent::Click);
    assert!(effects.contains(&WalletEffect::StartConnect));

    let resolved = connector.connect(wallet.wallet_type()).await;
    let effects = wallet.handle(WalletEvent::Resolved(resolved));
    assert!(effects.contains(&WalletEffect::Notify(Notice::success(CONNECTED_MESSAGE))));
    assert_eq!(
        wallet.state(),
        &WalletState::Connected {
            address: "0xfeed".into()
        }
    );
    Ok(())
}
