//! Landing page, generic or for one brand

use ar_core::config::SITE;
use ar_core::{find_company, resolve_theme, Company};
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use crate::components::*;

/// Page for `/` and `/:company`. An unknown company segment renders the
/// generic page.
#[component]
pub fn LandingPage() -> impl IntoView {
    let params = use_params_map();
    let company = move || {
        params.with(|p| {
            let id = p.get("company")?;
            let company = find_company(id);
            if company.is_none() {
                tracing::debug!(company = %id, "unknown brand, rendering generic page");
            }
            company
        })
    };

    move || view! { <LandingSections company=company()/> }
}

/// All sections of a landing page in display order.
#[component]
pub fn LandingSections(company: Option<&'static Company>) -> impl IntoView {
    let theme = resolve_theme(company.map(|c| c.id));

    view! {
        <Title text=page_title(company)/>
        <div class="min-h-screen bg-white" style=theme.css_vars()>
            <Header company=company/>
            <main>
                <Hero company=company/>
                <About company=company/>
                <ServicesSection company=company/>
                {company.is_none().then(|| view! { <BrandDirectory/> })}
                <TestimonialsSection company=company/>
                <ContactSection company=company/>
            </main>
            <Footer company=company/>
            <FloatingContactButtons/>
        </div>
    }
}

pub fn page_title(company: Option<&Company>) -> String {
    match company {
        Some(c) => format!("{} Appliance Repair in {} | {}", c.name, SITE.locations, SITE.company_name),
        None => format!("Appliance Repair in {} | {}", SITE.locations, SITE.company_name),
    }
}
