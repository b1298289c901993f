//! Thin wrappers over browser globals.
//!
//! Native builds compile these as no-ops so callers stay free of
//! `cfg` noise.

/// Ask the user to confirm an action via the native dialog.
///
/// Returns `false` outside a browser, which keeps destructive actions
/// gated shut on the server.
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

/// Hard navigation that discards the current view, in-flight work included.
/// Used for the 401 path, where client-side routing would keep stale state
/// alive.
pub fn force_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
