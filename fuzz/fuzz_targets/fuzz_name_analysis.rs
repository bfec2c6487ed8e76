#![no_main]

use libfuzzer_sys::fuzz_target;
use seimei::{FortuneEngine, Gender};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // "surname\ngiven"
    let (surname, given) = input.split_once('\n').unwrap_or((input, ""));
    if let Ok(engine) = FortuneEngine::new() {
        let _ = engine.compute_name_fortune(surname, given, Gender::Female);
        let _ = engine.compute_five_elements(surname, given, None);
    }
});
