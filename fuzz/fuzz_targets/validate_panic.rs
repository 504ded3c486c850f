#![no_main]
use draftlint_engine::Validator;
use draftlint_rules::Registry;
use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Registry> =
    Lazy::new(|| Registry::with_default_rules().expect("default catalog"));

fuzz_target!(|data: &[u8]| {
    // Panic-freedom over arbitrary near-text input. Lossy conversion
    // keeps coverage on inputs that are "almost" UTF-8.
    let text = String::from_utf8_lossy(data);
    let mut validator = Validator::new(&REGISTRY);
    for line in text.lines() {
        let _ = validator.validate(line);
    }
});
