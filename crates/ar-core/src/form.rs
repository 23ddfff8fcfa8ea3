//! Contact form draft

use crate::config::Service;
use crate::contact::DEFAULT_WHATSAPP_MESSAGE;
use crate::services::service_name;

pub const SUBMIT_NOTICE: &str = "Thank you for your inquiry! We will contact you shortly.";

/// Field values of the contact form, held only while the form is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Service id picked from the brand's services
    pub service: String,
    pub message: String,
}

impl ContactDraft {
    /// WhatsApp message for this draft. The service id is resolved against
    /// `services`; anything else reads "Not specified".
    pub fn whatsapp_message(&self, services: &[&Service]) -> String {
        let service = service_name(services, &self.service).unwrap_or("Not specified");
        format!(
            "{}\n\nName: {}\nPhone: {}\nService: {}\nMessage: {}",
            DEFAULT_WHATSAPP_MESSAGE, self.name, self.phone, service, self.message
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SERVICES;
    use crate::services::filter_services;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Sarah".into(),
            phone: "050 000 0000".into(),
            email: "sarah@example.com".into(),
            service: "fridge".into(),
            message: "Not cooling".into(),
        }
    }

    #[test]
    fn test_message_format() {
        let services = filter_services(SERVICES, Some("samsung"));
        assert_eq!(
            draft().whatsapp_message(&services),
            "Hey! I want Home Appliance Repair Services\n\n\
             Name: Sarah\nPhone: 050 000 0000\nService: Refrigerator Repair\nMessage: Not cooling"
        );
    }

    #[test]
    fn test_unavailable_service_not_specified() {
        let services = filter_services(SERVICES, Some("lg"));
        let draft = ContactDraft {
            service: "cooktop".into(),
            ..draft()
        };
        assert!(draft.whatsapp_message(&services).contains("Service: Not specified"));

        let empty = ContactDraft::default();
        assert!(empty.whatsapp_message(&services).contains("Service: Not specified"));
    }

    #[test]
    fn test_clear() {
        let mut d = draft();
        d.clear();
        assert_eq!(d, ContactDraft::default());
    }
}
