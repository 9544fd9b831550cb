use crossbeam_channel::Receiver;
use pvcap_core::{
    ConfigEngine, ConfigEvent, DeviceType, SweepField, notification_channel,
};

fn engine() -> (ConfigEngine, Receiver<String>) {
    let (notifier, rx) = notification_channel();
    (ConfigEngine::new(notifier), rx)
}

fn drain(rx: &Receiver<String>) -> Vec<String> {
    rx.try_iter().collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_with_array_defaults_and_derived_stats() {
    let (engine, _rx) = engine();
    let cfg = engine.config();
    assert_eq!(cfg.device_type(), DeviceType::Array);
    assert_eq!(cfg.range_text(), "0.1:0.9");
    assert_eq!(cfg.iteration_count(), 25);
    assert_eq!(cfg.step_size(), 0.001);
    assert_eq!(cfg.settling_time(), 2.0);
    assert_eq!(cfg.stats().num_steps, 800);
    assert_eq!(cfg.stats().total_samples, 20_000);
    assert_eq!(cfg.stats().test_duration_secs, 40_000.0);
}

#[test]
fn switching_to_module_applies_its_range_and_keeps_other_fields() {
    let (mut engine, rx) = engine();
    engine.handle(ConfigEvent::DeviceChanged(DeviceType::Module));

    let cfg = engine.config();
    assert_eq!(cfg.device_type(), DeviceType::Module);
    assert_eq!(cfg.range_text(), "0.2:0.7");
    // Module only overrides the range; the Array numbers survive.
    assert_eq!(cfg.iteration_count(), 25);
    assert_eq!(cfg.step_size(), 0.001);
    assert_eq!(cfg.settling_time(), 2.0);
    assert_eq!(cfg.stats().num_steps, 500);
    assert_eq!(cfg.stats().total_samples, 12_500);
    assert_eq!(cfg.stats().test_duration_secs, 25_000.0);

    let notes = drain(&rx);
    assert!(notes.iter().any(|n| n.contains("Module")), "{notes:?}");
}

#[test]
fn switching_to_cell_uses_the_cell_range() {
    let (mut engine, _rx) = engine();
    engine.handle(ConfigEvent::DeviceChanged(DeviceType::Cell));
    assert_eq!(engine.config().range_text(), "0.3:0.45");
    assert_eq!(engine.config().stats().num_steps, 150);
}

#[test]
fn valid_range_edit_updates_pair_text_and_stats() {
    let (mut engine, _rx) = engine();
    engine.handle(ConfigEvent::RangeEdited("0.25:0.75".into()));
    let cfg = engine.config();
    assert_eq!(cfg.range_text(), "0.25:0.75");
    assert_eq!(cfg.range().lower(), 0.25);
    assert_eq!(cfg.range().upper(), 0.75);
    assert_eq!(cfg.stats().num_steps, 500);
}

#[test]
fn invalid_range_edit_warns_and_keeps_prior_range() {
    let (mut engine, rx) = engine();
    let before = engine.config().range();
    let stats_before = engine.config().stats();

    engine.handle(ConfigEvent::RangeEdited("1.2:0.5".into()));

    assert_eq!(engine.config().range(), before);
    assert_eq!(engine.config().range_text(), "0.1:0.9");
    assert_eq!(engine.config().stats(), stats_before);
    let notes = drain(&rx);
    assert_eq!(notes.len(), 1, "{notes:?}");
    assert!(notes[0].contains("1.2:0.5"), "{notes:?}");
}

#[test]
fn field_edit_normalizes_recomputes_and_notifies() {
    let (mut engine, rx) = engine();
    drain(&rx);

    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.0523));
    let cfg = engine.config();
    assert!(close(cfg.step_size(), 0.052));
    // 0.8 / 0.052 -> 15.38.. -> 15 steps
    assert_eq!(cfg.stats().num_steps, 15);

    let notes = drain(&rx);
    assert_eq!(notes.len(), 1, "{notes:?}");
    assert!(notes[0].contains("step size"), "{notes:?}");
}

#[test]
fn settling_time_edit_snaps_to_tenths() {
    let (mut engine, _rx) = engine();
    engine.handle(ConfigEvent::FieldEdited(SweepField::SettlingTime, 1.26));
    assert!(close(engine.config().settling_time(), 1.3));
    assert!(close(
        engine.config().stats().test_duration_secs,
        20_000.0 * engine.config().settling_time()
    ));
}

#[test]
fn iteration_count_edit_floors_the_raw_value() {
    let (mut engine, _rx) = engine();
    engine.handle(ConfigEvent::FieldEdited(SweepField::IterationCount, 10.9));
    assert_eq!(engine.config().iteration_count(), 10);
    assert_eq!(engine.config().stats().total_samples, 8_000);
}

#[test]
fn zero_nan_and_unchanged_edits_are_silent_no_ops() {
    let (mut engine, rx) = engine();
    drain(&rx);
    let before = engine.config().clone();

    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.0));
    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, f64::NAN));
    engine.handle(ConfigEvent::FieldEdited(SweepField::SettlingTime, 0.0));
    // Equal to the stored values: also no-ops.
    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.001));
    engine.handle(ConfigEvent::FieldEdited(SweepField::IterationCount, 25.0));

    assert_eq!(engine.config().step_size(), before.step_size());
    assert_eq!(engine.config().settling_time(), before.settling_time());
    assert_eq!(engine.config().iteration_count(), before.iteration_count());
    assert_eq!(engine.config().stats(), before.stats());
    assert!(drain(&rx).is_empty());
}

#[test]
fn quiet_mode_suppresses_diagnostics_but_not_warnings() {
    let (mut engine, rx) = engine();
    engine.set_quiet(true);
    drain(&rx);

    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.02));
    assert!(drain(&rx).is_empty());

    engine.handle(ConfigEvent::RangeEdited("nonsense".into()));
    assert_eq!(drain(&rx).len(), 1);
}

#[test]
fn edits_are_processed_in_emission_order() {
    let (mut engine, _rx) = engine();
    engine.handle(ConfigEvent::RangeEdited("0.0:1.0".into()));
    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.01));
    engine.handle(ConfigEvent::FieldEdited(SweepField::StepSize, 0.002));
    // Last write wins; stats reflect the final values only.
    assert!(close(engine.config().step_size(), 0.002));
    assert_eq!(engine.config().stats().num_steps, 500);
}
