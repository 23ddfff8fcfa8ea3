//! Server-side rendering of landing page sections

#![cfg(feature = "ssr")]

use ar_core::config::{COMPANIES, TESTIMONIALS};
use ar_core::{find_company, Company};
use ar_site::components::{BrandDirectory, ContactSection, Hero, ServicesSection, TestimonialsSection};
use ar_site::app::App;
use ar_site::pages::{page_title, LandingSections};
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

fn render<F, N>(f: F) -> String
where
    F: FnOnce() -> N,
    N: IntoView,
{
    let runtime = create_runtime();
    provide_meta_context();
    let html = f().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}

fn brand(id: &str) -> Option<&'static Company> {
    find_company(id)
}

#[test]
fn test_lg_services_exclude_cooktop() {
    let html = render(|| view! { <ServicesSection company=brand("lg")/> });
    assert!(html.contains("TV Repair"));
    assert!(!html.contains("Cooktop/Stove Repair"));
}

#[test]
fn test_bosch_services_exclude_tv() {
    let html = render(|| view! { <ServicesSection company=brand("bosch")/> });
    assert!(html.contains("Cooktop/Stove Repair"));
    assert!(!html.contains("TV Repair"));
}

#[test]
fn test_generic_services_list_everything() {
    let html = render(|| view! { <ServicesSection company=None/> });
    assert!(html.contains("TV Repair"));
    assert!(html.contains("Cooktop/Stove Repair"));
}

#[test]
fn test_whatsapp_links_open_new_tab() {
    let html = render(|| view! { <ServicesSection company=None/> });
    assert!(html.contains("https://wa.me/971501234567?text="));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("href=\"tel:+971 50 123 4567\""));
}

#[test]
fn test_contact_panel_branding() {
    let html = render(|| view! { <ContactSection company=brand("bosch")/> });
    assert!(html.contains("AUTHORISED SERVICE CENTER – BOSCH"));
    assert!(html.contains("#F80000"));
    assert!(html.contains("mailto:info@appliancerepair.ae"));

    let generic = render(|| view! { <ContactSection company=None/> });
    assert!(generic.contains("AUTHORISED SERVICE CENTER"));
    assert!(!generic.contains("AUTHORISED SERVICE CENTER –"));
    assert!(generic.contains("var(--primary)"));
}

#[test]
fn test_contact_select_offers_brand_services() {
    let html = render(|| view! { <ContactSection company=brand("lg")/> });
    assert!(html.contains("value=\"tv\""));
    assert!(!html.contains("value=\"cooktop\""));
}

#[test]
fn test_testimonials_start_with_first_entry() {
    let html = render(|| view! { <TestimonialsSection company=None/> });
    assert!(html.contains(TESTIMONIALS[0].comment));
    for t in TESTIMONIALS {
        assert!(html.contains(t.name));
    }
}

#[test]
fn test_full_page_renders_every_section() {
    let html = render(|| view! { <LandingSections company=brand("siemens")/> });
    for id in ["id=\"hero\"", "id=\"about\"", "id=\"services\"", "id=\"testimonials\"", "id=\"contact\""] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("--accent: #019997;"));
    assert!(html.contains("/assets/siemens.svg"));
}

#[test]
fn test_page_titles() {
    assert_eq!(
        page_title(brand("lg")),
        "LG Appliance Repair in Dubai and Abu Dhabi | Appliance Repair Center"
    );
    assert_eq!(
        page_title(None),
        "Appliance Repair in Dubai and Abu Dhabi | Appliance Repair Center"
    );
}

/// True when a CSS `var(--primary)` reference is glued to hex digits,
/// e.g. `var(--primary)33`, which browsers discard.
fn has_suffixed_primary(html: &str) -> bool {
    html.match_indices("var(--primary)").any(|(at, m)| {
        html[at + m.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_hexdigit())
    })
}

#[test]
fn test_generic_hero_emits_valid_colors() {
    let html = render(|| view! { <Hero company=None/> });
    assert!(html.contains("var(--primary)"));
    assert!(!has_suffixed_primary(&html));
    assert!(html.contains("border-color: rgba(59,130,246,0.25)"));
}

#[test]
fn test_brand_hero_uses_theme_tints() {
    let html = render(|| view! { <Hero company=brand("lg")/> });
    assert!(html.contains("border-color: rgba(165,0,52,0.25)"));
    assert!(html.contains("background-color: rgba(165,0,52,0.10)"));
    assert!(!html.contains("#A5003433"));
}

#[test]
fn test_brand_directory_links_every_brand() {
    let html = render(|| view! { <BrandDirectory/> });
    for c in COMPANIES {
        assert!(html.contains(&format!("href=\"/{}\"", c.id)), "missing link to {}", c.id);
        assert!(html.contains(c.description));
        assert!(html.contains(c.logo));
    }
}

#[test]
fn test_generic_page_lists_brands_only_there() {
    let generic = render(|| view! { <LandingSections company=None/> });
    assert!(generic.contains("Brands We Service"));
    for c in COMPANIES {
        assert!(generic.contains(&format!("href=\"/{}\"", c.id)));
    }

    let branded = render(|| view! { <LandingSections company=brand("samsung")/> });
    assert!(!branded.contains("Brands We Service"));
}

fn render_path(path: &str) -> String {
    let path = format!("http://localhost{}", path);
    render(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path }));
        view! { <App/> }
    })
}

#[test]
fn test_brand_route_renders_brand_page() {
    let html = render_path("/lg");
    assert!(html.contains("/assets/lg.svg"));
    assert!(html.contains("--accent: #A50034;"));
    assert!(!html.contains("Brands We Service"));
}

#[test]
fn test_unknown_brand_route_renders_generic_page() {
    let html = render_path("/whirlpool");
    assert!(html.contains("Appliance Service Center AE"));
    assert!(html.contains("Brands We Service"));
    assert!(html.contains("--accent: var(--primary);"));
}
