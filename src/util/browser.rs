//! Small browser-dialog helpers. Requires a browser environment; outside
//! one, every prompt resolves to the safe answer.

/// Native confirm dialog. Returns `false` when no browser is available, so
/// destructive actions never proceed by accident.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
