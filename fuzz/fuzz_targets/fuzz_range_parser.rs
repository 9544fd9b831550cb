#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary range expressions must never panic; rejections are fine.
    match pvcap_core::SamplingRange::parse(data) {
        Ok(range) => {
            // Accepted pairs must honor the invariants.
            assert!((0.0..=1.0).contains(&range.lower()));
            assert!((0.0..=1.0).contains(&range.upper()));
            assert!(range.lower() <= range.upper());
        }
        Err(_e) => {
            // parse error is acceptable
        }
    }
});
