//! Blocking user notifications via `window.alert`.

use std::fmt::Display;

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[APP] No window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("[APP] alert failed: {:?}", e);
    }
}

/// Log a failed operation and tell the user
pub fn report(error: &impl Display) {
    log::error!("[APP] {}", error);
    alert(&error.to_string());
}
