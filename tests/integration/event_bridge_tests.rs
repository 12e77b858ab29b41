//! Integration tests for the UI bridge → event task → AppService path.

use std::thread;

use lumidim::app::bridge::{UI_EVENT_DEPTH, UiBridge};
use lumidim::app::commands::UiEvent;
use lumidim::app::mode::{Mode, SelectionState};
use lumidim::app::ports::Page;
use lumidim::error::BridgeError;
use lumidim::runtime::event_loop;

use super::mock_hw::{MockService, RecordingSink, started_service, write_count};

/// Drain everything currently queued through the real event task.
fn drain(service: &MockService, bridge: &UiBridge) {
    let executor: edge_executor::LocalExecutor<'_, 2> = edge_executor::LocalExecutor::new();
    executor
        .spawn(event_loop(service, bridge, RecordingSink::new()))
        .detach();
    futures_lite::future::block_on(executor.run(async {
        while bridge.pending() > 0 {
            futures_lite::future::yield_now().await;
        }
    }));
}

#[test]
fn events_posted_from_another_thread_are_applied() {
    let (service, _config) = started_service();
    let bridge = UiBridge::new();

    thread::scope(|s| {
        s.spawn(|| {
            bridge.post(UiEvent::ModeSelected(Mode::Manual)).unwrap();
            bridge.post(UiEvent::IntensityChanged(75)).unwrap();
        });
    });
    drain(&service, &bridge);

    assert_eq!(service.mode(), (Mode::Manual, SelectionState::Selected));
    assert_eq!(service.duty().fraction(), 0.75);
    assert_eq!(service.page(), Page::Manual);
}

#[test]
fn intensity_before_manual_is_ignored() {
    let (service, _config) = started_service();
    let bridge = UiBridge::new();

    bridge.post(UiEvent::IntensityChanged(60)).unwrap();
    bridge.post(UiEvent::ModeSelected(Mode::Automatic)).unwrap();
    bridge.post(UiEvent::IntensityChanged(60)).unwrap();
    drain(&service, &bridge);

    assert_eq!(write_count(&service), 0);
    assert_eq!(service.page(), Page::Automatic);
}

#[test]
fn return_requested_goes_back_to_menu() {
    let (service, _config) = started_service();
    let bridge = UiBridge::new();

    bridge.post(UiEvent::ModeSelected(Mode::Manual)).unwrap();
    bridge.post(UiEvent::IntensityChanged(30)).unwrap();
    bridge.post(UiEvent::ReturnRequested).unwrap();
    bridge.post(UiEvent::IntensityChanged(90)).unwrap();
    drain(&service, &bridge);

    assert_eq!(service.mode().1, SelectionState::Unselected);
    assert_eq!(service.page(), Page::Menu);
    assert_eq!(write_count(&service), 1);
    service.with_display(|ui| {
        assert_eq!(
            ui.surface().calls.last(),
            Some(&super::mock_hw::DisplayCall::Prompt(
                "Bonjour, veuillez choisir un mode".into()
            ))
        );
    });
}

#[test]
fn full_queue_does_not_corrupt_mode_state() {
    let (service, _config) = started_service();
    let bridge = UiBridge::new();

    bridge.post(UiEvent::ModeSelected(Mode::Manual)).unwrap();
    for _ in 1..UI_EVENT_DEPTH {
        bridge.post(UiEvent::IntensityChanged(10)).unwrap();
    }
    assert_eq!(
        bridge.post(UiEvent::ModeSelected(Mode::Automatic)),
        Err(BridgeError::QueueFull)
    );
    drain(&service, &bridge);

    assert_eq!(service.mode(), (Mode::Manual, SelectionState::Selected));
    assert_eq!(write_count(&service), UI_EVENT_DEPTH - 1);
}
