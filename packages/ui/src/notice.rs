/// Show a blocking notice to the user.
///
/// Uses the browser's `alert` on the web; elsewhere the message is only
/// logged.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    tracing::info!(%message, "notice");
}
