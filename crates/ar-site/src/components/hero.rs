//! Hero banner

use ar_core::config::{SITE, STATS};
use ar_core::contact::{call_link, whatsapp_link};
use ar_core::{resolve_theme, Company};
use leptos::*;

use super::ContactAnchor;

const BACKGROUND: &str =
    "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=1600&h=900&fit=crop&auto=format";
const ASSURANCES: &[&str] = &["Licensed technicians", "Genuine parts only", "90-day repair warranty"];

#[component]
pub fn Hero(company: Option<&'static Company>) -> impl IntoView {
    let theme = resolve_theme(company.map(|c| c.id));
    let background = company.map(|c| c.hero_image).unwrap_or(BACKGROUND);
    let panel_border = format!("border-color: {}", theme.border);

    view! {
        <section id="hero" class="relative min-h-screen flex items-center overflow-hidden">
            <div
                class="absolute inset-0 z-0 bg-center bg-cover"
                style=format!("background-image: url({})", background)
            ></div>
            // Brand tint
            <div class="absolute inset-0 z-0" style=format!("background-image: {}", theme.hero_gradient())></div>
            // Vignette
            <div
                class="absolute inset-0 z-0 pointer-events-none"
                style="background: radial-gradient(1200px 500px at 25% 50%, rgba(0,0,0,0) 0%, rgba(0,0,0,0.25) 60%, rgba(0,0,0,0.55) 100%)"
            ></div>

            <div class="container mx-auto px-4 relative z-10 pt-28 pb-16">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                    <div class="max-w-2xl">
                        <div
                            class="rounded-2xl border bg-white/5 backdrop-blur-md mt-8 p-6 md:p-8"
                            style=panel_border.clone()
                        >
                            <div
                                class="inline-flex items-center gap-2 rounded-full px-3 py-1 text-xs font-medium mb-4"
                                style=format!("background-color: {}; color: #ffffff", theme.accent_soft)
                            >
                                <span>"Certified Technicians"</span>
                                <span class="opacity-60">"•"</span>
                                <span>"Genuine Parts"</span>
                            </div>

                            <h1 class="text-white tracking-tight font-extrabold leading-[1.05] text-4xl md:text-5xl lg:text-6xl">
                                "Professional appliance repair in " {SITE.locations}
                            </h1>
                            <p class="mt-5 text-white/90 text-lg md:text-xl">
                                "Expert repair services for all major appliance brands. Certified technicians available 24/7 throughout "
                                {SITE.locations} "."
                            </p>

                            <div class="mt-6 flex flex-col sm:flex-row gap-3 w-full">
                                <ContactAnchor
                                    link=call_link(&SITE)
                                    class="flex-1 py-3 text-white font-semibold text-center rounded-md transition-colors duration-200"
                                    style=format!("background-color: {}", theme.accent)
                                >
                                    "Call Us"
                                </ContactAnchor>
                                <ContactAnchor
                                    link=whatsapp_link(&SITE, None)
                                    class="flex-1 py-3 text-white font-semibold text-center rounded-md border border-white transition-colors duration-200 hover:bg-white/10"
                                >
                                    "WhatsApp Us"
                                </ContactAnchor>
                            </div>

                            <div
                                class="mt-5 rounded-xl bg-white/5 backdrop-blur-md border text-white/90"
                                style=panel_border.clone()
                                aria-label="service assurances"
                            >
                                <ul class="grid grid-cols-1 sm:grid-cols-3 divide-y sm:divide-y-0 sm:divide-x divide-white/10">
                                    {ASSURANCES.iter().map(|item| view! {
                                        <li class="flex items-center gap-3 px-4 py-3">
                                            <span
                                                aria-hidden="true"
                                                class="inline-block h-1.5 w-6 rounded-full shrink-0"
                                                style=format!("background-color: {}", theme.accent)
                                            ></span>
                                            <span class="tracking-wide">{*item}</span>
                                        </li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        </div>
                    </div>

                    // Stat tiles
                    <div class="grid grid-cols-2 gap-4">
                        {STATS.iter().map(|stat| view! {
                            <div
                                class="rounded-xl bg-white/5 backdrop-blur-md border p-5 text-white"
                                style=panel_border.clone()
                            >
                                <div class="text-xs uppercase tracking-wider text-white/70">{stat.label}</div>
                                <div
                                    class="mt-1 text-3xl md:text-4xl font-semibold leading-tight"
                                    style=format!("color: {}", theme.accent)
                                >
                                    {stat.value}
                                </div>
                                <div
                                    class="mt-2 h-0.5 w-12 rounded-full"
                                    style=format!("background-color: {}", theme.accent_light)
                                ></div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
