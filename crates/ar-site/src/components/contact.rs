//! Contact section: call-to-action panel and inquiry form

use ar_core::config::{SERVICES, SITE};
use ar_core::contact::{call_link, email_link, whatsapp_link};
use ar_core::form::SUBMIT_NOTICE;
use ar_core::{filter_services, resolve_theme, Company, ContactDraft};
use leptos::*;

use super::ContactAnchor;
use crate::browser;

#[component]
pub fn ContactSection(company: Option<&'static Company>) -> impl IntoView {
    let theme = resolve_theme(company.map(|c| c.id));
    let available = store_value(filter_services(SERVICES, company.map(|c| c.id)));
    let draft = create_rw_signal(ContactDraft::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let message = available.with_value(|services| draft.with_untracked(|d| d.whatsapp_message(services)));
        browser::follow(&whatsapp_link(&SITE, Some(message.as_str())));
        browser::notify(SUBMIT_NOTICE);
        draft.update(ContactDraft::clear);
    };

    let badge = match company {
        Some(c) => format!("AUTHORISED SERVICE CENTER – {}", c.name.to_uppercase()),
        None => "AUTHORISED SERVICE CENTER".to_string(),
    };
    let field_style = format!("border-color: {}", theme.border);
    let accent_button = format!("background-color: {}", theme.accent);

    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-10">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Contact Our Appliance Repair Center"</h2>
                    <p class="text-lg text-neutral-600 max-w-3xl mx-auto">
                        "Get in touch with our expert technicians for professional "
                        {company.map(|c| c.name).unwrap_or("appliance")}
                        " repair services in " {SITE.locations} "."
                    </p>
                </div>

                // Brand-tinted call-to-action panel
                <div
                    class="rounded-2xl p-6 md:p-8 mb-12 text-white"
                    style=format!("background-image: {}; border: 1px solid {}", theme.overlay, theme.border)
                >
                    <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                        <div class="text-center md:text-left">
                            <div
                                class="inline-block text-xs font-bold tracking-wider px-3 py-1 rounded-full mb-3"
                                style=format!("background-color: {}; border: 1px solid {}", theme.accent_soft, theme.border)
                            >
                                {badge}
                            </div>
                            <h3 class="text-2xl md:text-3xl font-semibold leading-tight">
                                "Need help right now? Our team is ready."
                            </h3>
                            <p class="mt-1 text-white/80">"Same-day service • Genuine parts • Licensed technicians"</p>
                        </div>
                        <div class="flex gap-3 w-full md:w-auto">
                            <ContactAnchor
                                link=call_link(&SITE)
                                class="px-6 py-3 rounded-md font-semibold text-white w-full md:w-auto text-center"
                                style=accent_button.clone()
                            >
                                "Call Us"
                            </ContactAnchor>
                            <ContactAnchor
                                link=whatsapp_link(&SITE, None)
                                class="px-6 py-3 rounded-md font-semibold w-full md:w-auto text-center"
                                style="color: #ffffff; border: 1px solid #ffffff; background-color: transparent"
                            >
                                "WhatsApp Us"
                            </ContactAnchor>
                            <ContactAnchor
                                link=email_link(&SITE, None, None)
                                class="px-6 py-3 rounded-md font-semibold w-full md:w-auto text-center"
                                style="color: #ffffff; border: 1px solid #ffffff; background-color: transparent"
                            >
                                "Email Us"
                            </ContactAnchor>
                        </div>
                    </div>
                </div>

                <form on:submit=on_submit class="max-w-3xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <input
                            class="w-full rounded-md border px-4 py-3"
                            name="name"
                            placeholder="Your Name"
                            required
                            style=field_style.clone()
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            class="w-full rounded-md border px-4 py-3"
                            type="tel"
                            name="phone"
                            placeholder="Phone"
                            required
                            style=field_style.clone()
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                        <input
                            class="w-full rounded-md border px-4 py-3 md:col-span-2"
                            type="email"
                            name="email"
                            placeholder="Email"
                            style=field_style.clone()
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                        <select
                            class="w-full rounded-md border px-4 py-3 md:col-span-2 bg-white"
                            name="service"
                            style=field_style.clone()
                            prop:value=move || draft.with(|d| d.service.clone())
                            on:change=move |ev| draft.update(|d| d.service = event_target_value(&ev))
                        >
                            <option value="">"Select a service"</option>
                            {available.get_value().into_iter().map(|service| view! {
                                <option value=service.id>{service.name}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                        <textarea
                            class="w-full rounded-md border px-4 py-3 md:col-span-2 min-h-[120px]"
                            name="message"
                            placeholder="Message"
                            style=field_style
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-3 justify-center mt-6">
                        <ContactAnchor
                            link=call_link(&SITE)
                            class="px-6 py-3 rounded-md font-semibold text-white w-full sm:w-auto text-center"
                            style=accent_button.clone()
                        >
                            "Call Us"
                        </ContactAnchor>
                        <ContactAnchor
                            link=whatsapp_link(&SITE, None)
                            class="px-6 py-3 rounded-md font-semibold w-full sm:w-auto text-center"
                            style=format!("color: #111827; border: 1px solid {}; background-color: transparent", theme.border)
                        >
                            "WhatsApp Us"
                        </ContactAnchor>
                        <button
                            type="submit"
                            class="px-6 py-3 rounded-md font-semibold text-white w-full sm:w-auto"
                            style=accent_button
                        >
                            "Send Request"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
