use chrono::Local;

/// Calendar date string used as the raw filter key for "today".
/// **Example:** `"2026-08-30"`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Current wall-clock time, pre-filled into the entry form's time field.
/// **Example:** `"14:05"`
pub fn clock_time_now() -> String {
    Local::now().format("%H:%M").to_string()
}
