//! Appliance Repair Center Site
//!
//! Leptos SSR server for the generic and per-brand landing pages.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use ar_site::server::{self, SiteSettings};
    use leptos::get_configuration;
    use tracing::info;

    let settings = SiteSettings::from_env();
    server::init_tracing(&settings);

    ar_core::config::validate().context("site content failed validation")?;

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = server::router(leptos_options, &settings);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Appliance repair site listening on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-side code lives in the library; the binary is only built with `ssr`.
}
