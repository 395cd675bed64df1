use chrono::NaiveDate;
#[cfg(target_arch = "wasm32")]
use web_sys::js_sys::Date;

/// Returns the current local calendar date on native and WASM targets.
///
/// `chrono::Local` is not available on `wasm32-unknown-unknown` without extra
/// bindings, so the browser path reads the date from `js_sys::Date`.
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

/// Formats a date the way the booking UI shows it, e.g. `14 Oct`.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}
