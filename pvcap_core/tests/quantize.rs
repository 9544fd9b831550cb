use rstest::rstest;
use pvcap_core::quantize;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[rstest]
#[case(0.001, 0.001)] // already on grid
#[case(0.0523, 0.052)] // snapped down
#[case(0.0526, 0.053)] // snapped up
#[case(0.0004, 0.001)] // below minimum
#[case(0.5, 0.1)] // above maximum
#[case(-1.0, 0.001)] // negative clamps to minimum
fn step_size_cases(#[case] raw: f64, #[case] want: f64) {
    assert!(
        close(quantize::step_size(raw), want),
        "step_size({raw}) = {}, want {want}",
        quantize::step_size(raw)
    );
}

#[rstest]
#[case(2.0, 2.0)]
#[case(1.26, 1.3)]
#[case(0.04, 0.1)]
#[case(12.0, 10.0)]
#[case(-0.5, 0.1)]
fn settling_time_cases(#[case] raw: f64, #[case] want: f64) {
    assert!(
        close(quantize::settling_time(raw), want),
        "settling_time({raw}) = {}, want {want}",
        quantize::settling_time(raw)
    );
}

#[rstest]
#[case(25.0, 25)]
#[case(10.9, 10)]
#[case(1.0, 1)]
#[case(0.3, 1)]
#[case(-4.0, 1)]
fn iteration_count_cases(#[case] raw: f64, #[case] want: u32) {
    assert_eq!(quantize::iteration_count(raw), want);
}
