//! Site footer

use ar_core::config::SITE;
use ar_core::contact::{call_link, email_link};
use ar_core::Company;
use leptos::*;

use super::{ContactAnchor, PhoneIcon};

/// Year shown in the copyright line
const COPYRIGHT_YEAR: &str = "2025";

#[component]
pub fn Footer(company: Option<&'static Company>) -> impl IntoView {
    let brand_mark = match company {
        Some(c) => view! {
            <img src=c.logo alt=format!("{} logo", c.name) class="h-8 w-32 object-contain" width="100" height="100"/>
        }
        .into_view(),
        None => view! {
            <h3 class="text-xl font-bold text-primary">{SITE.company_name}</h3>
        }
        .into_view(),
    };
    let owner = company.map(|c| c.name).unwrap_or(SITE.company_name);

    view! {
        <footer class="bg-secondary text-secondary-foreground">
            <div class="container mx-auto px-4 py-12">
                <div class="flex flex-col gap-8">
                    <div>
                        <div class="flex items-center gap-3 mb-4">{brand_mark}</div>
                        <p class="text-secondary-foreground/80 mb-4">
                            "Professional appliance repair services in " {SITE.locations}
                            ". Expert technicians, genuine parts, and guaranteed satisfaction."
                        </p>
                        <div class="flex flex-col space-y-2 text-sm">
                            <ContactAnchor link=call_link(&SITE) class="flex items-center gap-2">
                                <PhoneIcon class="w-4 h-4 text-primary"/>
                                <span>{SITE.phone_number}</span>
                            </ContactAnchor>
                            <ContactAnchor link=email_link(&SITE, None, None) class="flex items-center gap-2">
                                <span class="text-primary">"✉"</span>
                                <span>{SITE.email}</span>
                            </ContactAnchor>
                            <div class="flex items-center gap-2">
                                <span class="text-primary">"📍"</span>
                                <span>{SITE.address} " · " {SITE.locations}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <span class="text-primary">"🕐"</span>
                                <span>{SITE.working_hours}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="border-t border-secondary-foreground/20 mt-8 pt-8 text-center text-secondary-foreground/80">
                    <p>
                        "© " {COPYRIGHT_YEAR} " " {owner}
                        ". All rights reserved. | Professional Appliance Repair Center in UAE"
                    </p>
                </div>
            </div>
        </footer>
    }
}
