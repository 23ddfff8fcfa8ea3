//! Contact link buttons

use ar_core::{ContactLink, LinkTarget};
use leptos::*;

/// Anchor for a contact link. Works before hydration since the browser
/// follows `tel:`, `mailto:` and `wa.me` hrefs natively.
#[component]
pub fn ContactAnchor(
    link: ContactLink,
    #[prop(into)] class: String,
    #[prop(optional, into)] style: String,
    #[prop(optional)] label: &'static str,
    children: Children,
) -> impl IntoView {
    let rel = (link.target == LinkTarget::NewTab).then_some("noopener noreferrer");
    let label = (!label.is_empty()).then_some(label);

    view! {
        <a
            href=link.href
            target=link.target.as_attr()
            rel=rel
            aria-label=label
            class=class
            style=style
        >
            {children()}
        </a>
    }
}

#[component]
pub fn WhatsAppIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <img src="/assets/whatsapp.svg" alt="" width=size height=size aria-hidden="true"/>
    }
}

#[component]
pub fn PhoneIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"
            />
        </svg>
    }
}

#[component]
pub fn CheckIcon(
    #[prop(default = "w-5 h-5 flex-shrink-0")] class: &'static str,
    #[prop(optional)] color: &'static str,
) -> impl IntoView {
    let style = if color.is_empty() { String::new() } else { format!("color: {}", color) };

    view! {
        <svg class=class style=style fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"/>
        </svg>
    }
}
