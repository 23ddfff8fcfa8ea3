//! About section

use ar_core::config::SITE;
use ar_core::{resolve_theme, Company};
use leptos::*;

use super::CheckIcon;

#[component]
pub fn About(company: Option<&'static Company>) -> impl IntoView {
    let theme = resolve_theme(company.map(|c| c.id));
    let brand = company.map(|c| c.name);

    let checklist = [
        "Licensed and insured technicians".to_string(),
        "Comprehensive warranty on all repairs".to_string(),
        "24/7 emergency service available".to_string(),
        format!("Same-day service in {}", SITE.locations),
    ];

    let features = [
        (
            "🔧",
            "Expert Technicians",
            format!(
                "Certified technicians with specialized training in {} appliances.",
                brand.unwrap_or("all major")
            ),
        ),
        (
            "🕐",
            "24/7 Emergency Service",
            format!(
                "Round-the-clock emergency repair services available throughout {}.",
                SITE.locations
            ),
        ),
        (
            "🛡️",
            "Warranty Protection",
            "All repairs come with comprehensive warranty coverage and genuine parts guarantee.".to_string(),
        ),
        (
            "🏆",
            "Licensed & Insured",
            "Fully licensed and insured technicians for your peace of mind and protection.".to_string(),
        ),
    ];

    view! {
        <section id="about" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 mb-20">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">
                            "About Our Professional Appliance Repair Center"
                        </h2>
                        <p class="text-muted-foreground mb-6 text-lg">
                            "Professional appliance repair services in " {SITE.locations}
                            " with over 15 years of experience. We are authorized service providers for all major home appliances."
                        </p>
                        <p class="text-muted-foreground mb-8 text-lg">
                            "We understand that broken appliances can disrupt your daily routine, which is why we offer "
                            "same-day service and emergency repairs throughout " {SITE.locations}
                            ". Our team uses only genuine parts and provides comprehensive warranties."
                        </p>
                        <div class="space-y-4">
                            {checklist.into_iter().map(|item| view! {
                                <div class="flex items-center gap-3">
                                    <CheckIcon class="w-6 h-6 flex-shrink-0" color=theme.accent/>
                                    <span class="text-lg">{item}</span>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1556909172-54557c7e4fb7?w=600&h=400&fit=crop&auto=format"
                            alt="Professional appliance repair team"
                            class="rounded-lg shadow-lg w-full h-auto"
                            width="600"
                            height="400"
                        />
                        <div
                            class="absolute -bottom-6 -left-6 p-6 rounded-lg shadow-lg"
                            style=format!("background-color: {}; color: #fff", theme.accent)
                        >
                            <div class="text-2xl font-bold">"15+"</div>
                            <div class="text-sm">"Years Experience"</div>
                        </div>
                        <div
                            class="absolute -top-6 -right-6 p-6 rounded-lg shadow-lg"
                            style=format!("background-color: {}; color: {}", theme.accent_light, theme.accent)
                        >
                            <div class="text-2xl font-bold">"5000+"</div>
                            <div class="text-sm">"Repairs Done"</div>
                        </div>
                    </div>
                </div>

                <div>
                    <h3 class="text-3xl font-bold text-center mb-12">
                        "Why Choose " {brand.unwrap_or("Our")} " Service Center?"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {features.into_iter().map(|(icon, title, description)| view! {
                            <div
                                class="bg-white rounded-xl border p-6 hover:shadow-lg transition-all duration-300 hover:-translate-y-2"
                                style=format!("border-color: {}", theme.accent_light)
                            >
                                <div class="text-center">
                                    <div class="text-5xl mx-auto mb-4" style=format!("color: {}", theme.accent)>{icon}</div>
                                    <h4 class="text-lg font-semibold mb-2">{title}</h4>
                                </div>
                                <p class="text-muted-foreground text-center text-sm">{description}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
