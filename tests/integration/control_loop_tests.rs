//! Integration tests for the ControlLoop → AppService → ports pipeline.

use lumidim::app::control_loop::ControlLoop;
use lumidim::app::events::AppEvent;
use lumidim::app::mode::{Mode, SelectionState};
use lumidim::app::ports::Page;
use lumidim::control::DutyCycle;
use lumidim::control::gate::UpdateDecision;
use lumidim::fsm::StateId;

use super::mock_hw::{DisplayCall, MockSensor, RecordingSink, started_service, write_count};

// ── Idle ──────────────────────────────────────────────────────

#[test]
fn unselected_ticks_never_touch_sensor_or_led() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.3), config);
    let mut sink = RecordingSink::new();
    control.start();

    for _ in 0..500 {
        control.tick(&mut sink);
    }

    assert_eq!(control.state(), StateId::Idle);
    assert_eq!(control.sensor().reads, 0);
    assert_eq!(write_count(&service), 0);
    assert!(sink.events.is_empty());
}

// ── Automatic ─────────────────────────────────────────────────

#[test]
fn automatic_tick_drives_inverse_of_reading() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.3), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);

    assert_eq!(control.state(), StateId::AutomaticRun);
    assert_eq!(control.sensor().reads, 1);
    assert!((service.duty().fraction() - 0.7).abs() < 1e-6);
    assert!(sink.events.contains(&AppEvent::StateChanged {
        from: StateId::Idle,
        to: StateId::AutomaticRun,
    }));
}

#[test]
fn automatic_page_gets_initial_labels() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.25), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);

    service.with_display(|ui| {
        assert_eq!(
            ui.surface().last_luminosity(),
            Some("Luminosite Ambiante: 25.00 %")
        );
        assert_eq!(ui.surface().last_intensity(), Some("Intensite LED: 75.00 %"));
    });
}

#[test]
fn small_drift_is_not_redrawn() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.50), config);
    let mut sink = RecordingSink::new();
    control.start();
    service.select_mode(Mode::Automatic, &mut sink);

    control.tick(&mut sink);
    let labels_after_first = service.with_display(|ui| ui.surface().calls.len());

    control.sensor_mut().level = 0.51;
    control.tick(&mut sink);
    assert_eq!(
        service.with_display(|ui| ui.surface().calls.len()),
        labels_after_first
    );

    control.sensor_mut().level = 0.53;
    control.tick(&mut sink);
    assert_eq!(
        sink.count(|e| *e == AppEvent::DisplayOffered(UpdateDecision::Update)),
        2
    );
    assert_eq!(
        sink.count(|e| *e == AppEvent::DisplayOffered(UpdateDecision::Suppress)),
        1
    );
    // LED follows every tick regardless of the gate.
    assert_eq!(write_count(&service), 3);
}

#[test]
fn reentering_automatic_redraws_unchanged_level() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.4), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);
    service.return_to_menu(&mut sink);
    control.tick(&mut sink);
    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);

    assert_eq!(
        sink.count(|e| *e == AppEvent::DisplayOffered(UpdateDecision::Update)),
        2
    );
}

#[test]
fn selecting_automatic_twice_equals_once() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.6), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);
    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);

    assert_eq!(sink.count(|e| *e == AppEvent::ModeSelected(Mode::Automatic)), 1);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::StateChanged { .. })), 1);
    service.with_display(|ui| {
        assert_eq!(ui.surface().pages(), vec![Page::Menu, Page::Automatic]);
    });
    // Gate was not reset by the repeat, so the second tick is suppressed.
    assert_eq!(
        sink.count(|e| *e == AppEvent::DisplayOffered(UpdateDecision::Update)),
        1
    );
}

// ── Manual ────────────────────────────────────────────────────

#[test]
fn manual_ticks_do_not_sample_or_actuate() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.2), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Manual, &mut sink);
    for _ in 0..20 {
        control.tick(&mut sink);
    }

    assert_eq!(control.state(), StateId::ManualRun);
    assert_eq!(control.sensor().reads, 0);
    assert_eq!(write_count(&service), 0);
}

#[test]
fn slider_sets_exact_duty_and_label() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.2), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Manual, &mut sink);
    control.tick(&mut sink);
    service.set_manual_intensity(75, &mut sink);
    control.tick(&mut sink);

    assert_eq!(service.duty(), DutyCycle::from_percent(75).unwrap());
    assert_eq!(service.duty().fraction(), 0.75);
    service.with_display(|ui| {
        assert_eq!(ui.surface().last_intensity(), Some("Intensite LED: 75 %"));
    });
}

#[test]
fn slider_updates_are_not_gated() {
    let (service, _config) = started_service();
    let mut sink = RecordingSink::new();
    service.select_mode(Mode::Manual, &mut sink);

    service.set_manual_intensity(50, &mut sink);
    service.set_manual_intensity(51, &mut sink);

    service.with_display(|ui| {
        let intensity: Vec<_> = ui
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Intensity(_)))
            .cloned()
            .collect();
        assert_eq!(
            intensity,
            vec![
                DisplayCall::Intensity("Intensite LED: 0 %".into()),
                DisplayCall::Intensity("Intensite LED: 50 %".into()),
                DisplayCall::Intensity("Intensite LED: 51 %".into()),
            ]
        );
    });
}

// ── Return to menu ────────────────────────────────────────────

#[test]
fn return_then_tick_stays_idle_without_actuation() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.1), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);
    let writes = write_count(&service);
    let reads = control.sensor().reads;

    service.return_to_menu(&mut sink);
    control.tick(&mut sink);
    control.tick(&mut sink);

    assert_eq!(service.mode().1, SelectionState::Unselected);
    assert_eq!(control.state(), StateId::Idle);
    assert_eq!(write_count(&service), writes);
    assert_eq!(control.sensor().reads, reads);
    // LED holds its last automatic duty.
    assert!((service.duty().fraction() - 0.9).abs() < 1e-6);
}

#[test]
fn switching_automatic_to_manual_stops_sampling() {
    let (service, config) = started_service();
    let mut control = ControlLoop::new(&service, MockSensor::new(0.5), config);
    let mut sink = RecordingSink::new();
    control.start();

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);
    service.select_mode(Mode::Manual, &mut sink);
    control.tick(&mut sink);
    control.tick(&mut sink);

    assert_eq!(control.state(), StateId::ManualRun);
    assert_eq!(control.sensor().reads, 1);
    assert!(sink.events.contains(&AppEvent::StateChanged {
        from: StateId::AutomaticRun,
        to: StateId::ManualRun,
    }));
}

// ── Diagnostics ───────────────────────────────────────────────

#[test]
fn telemetry_only_while_selected() {
    let (service, mut config) = started_service();
    config.diagnostics_enabled = true;
    let mut control = ControlLoop::new(&service, MockSensor::new(0.5), config);
    let mut sink = RecordingSink::new();
    control.start();

    control.tick(&mut sink);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Telemetry(_))), 0);

    service.select_mode(Mode::Automatic, &mut sink);
    control.tick(&mut sink);
    control.tick(&mut sink);

    let telemetry: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(telemetry.len(), 2);
    assert_eq!(telemetry[1].state, StateId::AutomaticRun);
    assert_eq!(telemetry[1].tick, 3);
    assert_eq!(telemetry[1].reading, Some(0.5));
    assert!((telemetry[1].duty - 0.5).abs() < 1e-6);
}
