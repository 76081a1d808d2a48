//! Display formatting for room and comment fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Room;

/// Card price line, e.g. `"Giá: 1000000 VND"`.
pub fn card_price_label(price: i64) -> String {
    format!("Giá: {price} VND")
}

/// Card availability badge text.
pub fn availability_label(status: bool) -> &'static str {
    if status { "Còn trống" } else { "Đã thuê" }
}

/// Detail price: the monthly price while stock remains, `"Sold Out"` after.
pub fn detail_price_label(room: &Room) -> String {
    if room.has_stock() {
        format!("{} VND/tháng", room.price)
    } else {
        "Sold Out".to_owned()
    }
}

/// Comment creation time in the browser's locale; a fixed
/// `dd/mm/yyyy HH:MM:SS` rendering outside the browser.
pub fn comment_time_label(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    fallback_time_label(raw)
}

fn fallback_time_label(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}
