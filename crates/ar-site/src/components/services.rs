//! Services catalog with an auto-advancing slider

use ar_core::carousel::SERVICES_INTERVAL;
use ar_core::config::{SERVICES, SITE};
use ar_core::contact::{call_link, service_inquiry, whatsapp_link};
use ar_core::services::{services_on_slide, slide_count, SERVICES_PER_SLIDE};
use ar_core::{filter_services, Carousel, Company, Service};
use leptos::*;

use super::{use_rotation, CheckIcon, ContactAnchor, PhoneIcon, WhatsAppIcon};

/// Issues listed on a slider card; the small-screen list shows all of them
const CARD_ISSUES: usize = 3;

#[component]
pub fn ServicesSection(company: Option<&'static Company>) -> impl IntoView {
    let brand = company.map(|c| c.name);
    let available = filter_services(SERVICES, company.map(|c| c.id));
    let total_slides = slide_count(available.len(), SERVICES_PER_SLIDE);
    let available = store_value(available);

    let carousel = use_rotation(total_slides, SERVICES_INTERVAL);
    let single_slide = total_slides <= 1;

    let intro = match company {
        Some(c) => format!(
            "Comprehensive {} appliance repair services in {} with certified technicians and genuine parts.",
            c.name, SITE.locations
        ),
        None => format!(
            "Expert repair services for all major home appliances in {}. Professional technicians, genuine parts, and warranty included.",
            SITE.locations
        ),
    };

    let current_slide = move || {
        let index = carousel.with(Carousel::index);
        available
            .with_value(|all| services_on_slide(all, index, SERVICES_PER_SLIDE).to_vec())
            .into_iter()
            .map(|service| view! { <ServiceCard service=service/> })
            .collect::<Vec<_>>()
    };

    let indicators = (0..total_slides)
        .map(|index| {
            let class = move || {
                if carousel.with(|c| c.is_active(index)) {
                    "h-2 rounded-full transition-all bg-primary w-8"
                } else {
                    "h-2 rounded-full transition-all bg-primary/30 w-2"
                }
            };
            view! {
                <button
                    class=class
                    aria-label=format!("Show slide {}", index + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            if let Err(err) = c.jump(index) {
                                tracing::warn!(%err, "slide indicator ignored");
                            }
                        })
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let steps = [
        (
            "1",
            "Book Appointment",
            format!(
                "Call us or book online to schedule your {} repair service at your convenience.",
                brand.unwrap_or("appliance")
            ),
        ),
        (
            "2",
            "Expert Diagnosis",
            "Our certified technician will diagnose the issue and provide a free, detailed quote for the repair."
                .to_string(),
        ),
        (
            "3",
            "Professional Repair",
            format!(
                "We fix your appliance using genuine {} parts and provide a comprehensive warranty.",
                brand.unwrap_or("manufacturer")
            ),
        ),
    ];

    view! {
        <section id="services" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">
                        {brand.unwrap_or("Professional")} " Repair Services"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto mb-8">{intro}</p>
                    <div class="flex justify-center gap-4">
                        <ContactAnchor
                            link=call_link(&SITE)
                            class="inline-flex items-center gap-2 px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90"
                        >
                            <PhoneIcon/>
                            "Call " {SITE.phone_number}
                        </ContactAnchor>
                        <ContactAnchor
                            link=whatsapp_link(&SITE, None)
                            class="inline-flex items-center gap-2 px-4 py-2 rounded-md bg-green-500 hover:bg-green-600 text-white"
                        >
                            <WhatsAppIcon/>
                            "WhatsApp Us"
                        </ContactAnchor>
                    </div>
                </div>

                // Slider
                <div class="relative hidden md:block">
                    <div class="flex justify-center gap-4 mb-8">
                        <button
                            class="px-3 py-1 rounded-md border border-primary/20 hover:border-primary/40 disabled:opacity-40"
                            aria-label="Previous services"
                            disabled=single_slide
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            "‹"
                        </button>
                        <div class="flex items-center gap-2">{indicators}</div>
                        <button
                            class="px-3 py-1 rounded-md border border-primary/20 hover:border-primary/40 disabled:opacity-40"
                            aria-label="Next services"
                            disabled=single_slide
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            "›"
                        </button>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                        {current_slide}
                    </div>
                </div>

                // Small screens: full list
                <div class="md:hidden">
                    <div class="grid grid-cols-1 gap-6">
                        {available.get_value().into_iter().map(|service| view! {
                            <ServiceRow service=service/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                // Process
                <div class="bg-muted/50 rounded-lg p-8 mt-16">
                    <h3 class="text-3xl font-bold text-center mb-12">"Our Service Process"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                        {steps.into_iter().map(|(step, title, description)| view! {
                            <div class="text-center">
                                <div class="w-16 h-16 bg-primary rounded-full flex items-center justify-center mx-auto mb-4">
                                    <span class="text-2xl font-bold text-primary-foreground">{step}</span>
                                </div>
                                <h4 class="text-xl font-semibold mb-2">{title}</h4>
                                <p class="text-muted-foreground">{description}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="text-center">
                        <p class="text-lg mb-6">"Ready to get started? Contact us now for immediate assistance!"</p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <ContactAnchor
                                link=call_link(&SITE)
                                class="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md bg-primary text-primary-foreground hover:bg-primary/90"
                            >
                                <PhoneIcon/>
                                "Call " {SITE.phone_number}
                            </ContactAnchor>
                            <ContactAnchor
                                link=whatsapp_link(&SITE, None)
                                class="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md bg-green-500 hover:bg-green-600 text-white"
                            >
                                <WhatsAppIcon/>
                                "WhatsApp Us"
                            </ContactAnchor>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let inquiry = service_inquiry(service.name);

    view! {
        <div class="bg-white rounded-lg border border-primary/20 h-full hover:shadow-lg transition-all duration-300 hover:-translate-y-2 group">
            <div class="relative overflow-hidden rounded-t-lg">
                <img
                    src=service.image
                    alt=service.name
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-300"
                    width="400"
                    height="300"
                />
                <div class="absolute top-4 left-4 text-3xl bg-white/90 w-12 h-12 rounded-full flex items-center justify-center">
                    {service.icon}
                </div>
            </div>
            <div class="p-6 flex flex-col">
                <h3 class="mb-3 text-xl font-semibold">{service.name}</h3>
                <p class="mb-4 text-muted-foreground flex-grow">{service.description}</p>
                <div class="mb-6">
                    <h4 class="font-semibold mb-3 text-sm">"Common Issues We Fix:"</h4>
                    <ul class="space-y-2">
                        {service.common_issues.iter().take(CARD_ISSUES).map(|issue| view! {
                            <li class="flex items-center gap-2 text-sm">
                                <CheckIcon class="w-4 h-4 text-primary flex-shrink-0"/>
                                <span>{*issue}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <ServiceActions inquiry=inquiry/>
            </div>
        </div>
    }
}

#[component]
fn ServiceRow(service: &'static Service) -> impl IntoView {
    let inquiry = service_inquiry(service.name);

    view! {
        <div class="bg-white rounded-lg border border-primary/20 hover:shadow-lg transition-shadow">
            <div class="grid grid-cols-1 sm:grid-cols-2">
                <img
                    src=service.image
                    alt=service.name
                    class="w-full h-48 sm:h-full object-cover rounded-l-lg"
                    width="400"
                    height="300"
                />
                <div class="p-6">
                    <h3 class="mb-2 flex items-center gap-2 font-semibold">
                        <span class="text-2xl">{service.icon}</span>
                        {service.name}
                    </h3>
                    <p class="mb-4 text-muted-foreground">{service.description}</p>
                    <div class="mb-6">
                        <h4 class="font-semibold mb-2">"Common Issues:"</h4>
                        <ul class="space-y-1">
                            {service.common_issues.iter().map(|issue| view! {
                                <li class="flex items-center gap-2 text-sm">
                                    <CheckIcon class="w-3 h-3 text-primary flex-shrink-0"/>
                                    <span>{*issue}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <ServiceActions inquiry=inquiry/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ServiceActions(inquiry: String) -> impl IntoView {
    view! {
        <div class="space-y-2 mt-auto">
            <ContactAnchor
                link=call_link(&SITE)
                class="w-full inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90"
            >
                <PhoneIcon class="w-4 h-4"/>
                "Call Now"
            </ContactAnchor>
            <ContactAnchor
                link=whatsapp_link(&SITE, Some(inquiry.as_str()))
                class="w-full inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md border border-green-500 text-green-600 hover:bg-green-50"
            >
                <WhatsAppIcon size=16/>
                "WhatsApp"
            </ContactAnchor>
        </div>
    }
}
