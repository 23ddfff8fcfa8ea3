//! Main application component

use ar_core::config::SITE;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ar-site.css"/>
        <Meta name="description" content=SITE.description/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/:company" view=LandingPage/>
            </Routes>
        </Router>
    }
}
