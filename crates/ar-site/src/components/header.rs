//! Site header with in-page navigation

use ar_core::config::SITE;
use ar_core::Company;
use leptos::*;

use super::PhoneIcon;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

/// Past this many pixels of scroll the header switches to its frosted style
const SCROLLED_THRESHOLD: f64 = 50.0;

#[component]
pub fn Header(company: Option<&'static Company>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);

    create_effect(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_scrolled.set(y > SCROLLED_THRESHOLD);
        });
        on_cleanup(move || handle.remove());
    });

    let header_class = move || {
        let surface = if scrolled.get() {
            "bg-white/95 backdrop-blur-md shadow-lg"
        } else {
            "bg-white"
        };
        format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}", surface)
    };

    let brand_mark = match company {
        Some(c) => view! {
            <img src=c.logo alt=format!("{} logo", c.name) class="h-8 w-32 object-contain" width="100" height="100"/>
        }
        .into_view(),
        None => view! {
            <span class="text-2xl font-bold text-secondary">"Appliance Service Center AE"</span>
        }
        .into_view(),
    };

    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class=header_class>
            // Top bar
            <div class="bg-secondary text-secondary-foreground py-2">
                <div class="container mx-auto px-4">
                    <div class="flex flex-col sm:flex-row justify-between items-center gap-2 text-sm">
                        <div class="flex items-center gap-4">
                            <div class="flex items-center gap-1">
                                <PhoneIcon class="w-4 h-4 text-primary"/>
                                <span>{SITE.phone_number}</span>
                            </div>
                            <div class="flex items-center gap-1">
                                <span class="text-primary">"📍"</span>
                                <span>{SITE.locations}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center py-4">
                    <a href="#hero" class="flex items-center gap-4">{brand_mark}</a>

                    // Desktop Nav
                    <nav class="hidden md:flex items-center space-x-6">
                        {NAV_ITEMS.iter().map(|(name, href)| view! {
                            <a href=*href class="text-foreground hover:text-primary transition-colors font-medium">
                                {*name}
                            </a>
                        }).collect::<Vec<_>>()}
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <Show
                            when=move || menu_open.get()
                            fallback=|| view! {
                                <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </Show>
                    </button>
                </div>

                // Mobile menu
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden py-4 border-t border-border">
                        <div class="flex flex-col space-y-4">
                            {NAV_ITEMS.iter().map(|(name, href)| view! {
                                <a
                                    href=*href
                                    class="text-foreground hover:text-primary transition-colors font-medium text-left"
                                    on:click=close_menu
                                >
                                    {*name}
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
