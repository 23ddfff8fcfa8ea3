//! Floating call/WhatsApp buttons

use ar_core::config::SITE;
use ar_core::contact::{call_link, whatsapp_link};
use leptos::*;

use super::{ContactAnchor, PhoneIcon, WhatsAppIcon};

#[component]
pub fn FloatingContactButtons() -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let toggle_class = move || {
        let rotation = if expanded.get() { "rotate-45" } else { "rotate-0" };
        format!("inline-block text-3xl leading-none transition-transform duration-200 {}", rotation)
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end">
            <Show when=move || expanded.get()>
                <div class="mb-4 relative">
                    <ContactAnchor
                        link=whatsapp_link(&SITE, None)
                        label="WhatsApp"
                        class="w-14 h-14 rounded-full bg-green-500 hover:bg-green-600 text-white shadow-lg hover:shadow-xl transition-all duration-300 flex items-center justify-center"
                    >
                        <WhatsAppIcon size=30/>
                    </ContactAnchor>
                </div>
                <div class="mb-4 relative">
                    <ContactAnchor
                        link=call_link(&SITE)
                        label="Call Now"
                        class="w-14 h-14 rounded-full bg-primary hover:bg-primary/90 text-primary-foreground shadow-lg hover:shadow-xl transition-all duration-300 flex items-center justify-center"
                    >
                        <PhoneIcon class="w-8 h-8"/>
                    </ContactAnchor>
                </div>
            </Show>

            <button
                class="w-16 h-16 rounded-full bg-secondary hover:bg-secondary/90 text-secondary-foreground shadow-lg hover:shadow-xl transition-all duration-300"
                aria-label="Contact options"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <span class=toggle_class>"+"</span>
            </button>
        </div>
    }
}
