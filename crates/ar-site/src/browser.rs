//! Browser side effects: following contact links and blocking notices
//!
//! Outside the browser (server rendering, native tests) these only log.

use ar_core::ContactLink;

/// Follow a contact link the way clicking its anchor would.
pub fn follow(link: &ContactLink) {
    #[cfg(feature = "hydrate")]
    {
        use ar_core::LinkTarget;

        let window = leptos::window();
        let result = match link.target {
            LinkTarget::CurrentPage => window.location().set_href(&link.href),
            LinkTarget::NewTab => window
                .open_with_url_and_target(&link.href, link.target.as_attr())
                .map(|_| ()),
        };
        if let Err(err) = result {
            tracing::warn!(href = %link.href, ?err, "browser rejected contact link");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    tracing::debug!(href = %link.href, target = link.target.as_attr(), "contact link outside browser");
}

/// Blocking notice, shown whether or not the preceding link opened.
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = leptos::window().alert_with_message(message) {
            tracing::warn!(?err, "alert failed");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    tracing::debug!(notice = message, "notice outside browser");
}
