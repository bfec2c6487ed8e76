#![no_main]

use libfuzzer_sys::fuzz_target;
use seimei::domain::services::DestinyCalendar;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Malformed calendars must be rejected, never panic
        if let Ok(calendar) = DestinyCalendar::from_toml_str("fuzz", content) {
            let _ = calendar.year_range();
        }
    }
});
