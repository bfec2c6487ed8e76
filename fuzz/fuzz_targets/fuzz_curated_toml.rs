#![no_main]

use libfuzzer_sys::fuzz_target;
use seimei::domain::services::StrokeTable;
use seimei::infrastructure::tables::parse_curated_layer;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(layer) = parse_curated_layer("fuzz", content) {
            let _ = StrokeTable::build(vec![layer]);
        }
    }
});
