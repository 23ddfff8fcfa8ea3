//! Outbound contact links: phone call, WhatsApp chat and email
//!
//! Each builder only constructs the URI. Following it is left to the browser,
//! which reports nothing back.

use crate::config::SiteProfile;

pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hey! I want Home Appliance Repair Services";
pub const DEFAULT_EMAIL_SUBJECT: &str = "Appliance Repair Service Inquiry";
pub const DEFAULT_EMAIL_BODY: &str = "Hello, I need appliance repair services. Please contact me.";

/// Where the browser should open a contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Replace the current page (`tel:`, `mailto:` hand off to the OS)
    CurrentPage,
    /// New browsing context
    NewTab,
}

impl LinkTarget {
    /// Value for an anchor's `target` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            LinkTarget::CurrentPage => "_self",
            LinkTarget::NewTab => "_blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub href: String,
    pub target: LinkTarget,
}

pub fn call_link(site: &SiteProfile) -> ContactLink {
    ContactLink {
        href: format!("tel:{}", site.phone_number),
        target: LinkTarget::CurrentPage,
    }
}

/// WhatsApp deep link; an absent or empty message uses the default greeting.
pub fn whatsapp_link(site: &SiteProfile, message: Option<&str>) -> ContactLink {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_WHATSAPP_MESSAGE);

    ContactLink {
        href: format!(
            "https://wa.me/{}?text={}",
            phone_digits(site.phone_number),
            urlencoding::encode(message)
        ),
        target: LinkTarget::NewTab,
    }
}

pub fn email_link(site: &SiteProfile, subject: Option<&str>, body: Option<&str>) -> ContactLink {
    let subject = subject.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_EMAIL_SUBJECT);
    let body = body.filter(|b| !b.is_empty()).unwrap_or(DEFAULT_EMAIL_BODY);

    ContactLink {
        href: format!(
            "mailto:{}?subject={}&body={}",
            site.email,
            urlencoding::encode(subject),
            urlencoding::encode(body)
        ),
        target: LinkTarget::CurrentPage,
    }
}

/// Message sent from a service card's WhatsApp button.
pub fn service_inquiry(service_name: &str) -> String {
    format!("Hey! I want {}. Please contact me for service.", service_name)
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
