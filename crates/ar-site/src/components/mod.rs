//! Page sections and shared building blocks

mod about;
mod brands;
mod buttons;
mod carousel;
mod contact;
mod floating;
mod footer;
mod header;
mod hero;
mod services;
mod testimonials;

pub use about::About;
pub use brands::BrandDirectory;
pub use buttons::{CheckIcon, ContactAnchor, PhoneIcon, WhatsAppIcon};
pub use carousel::use_rotation;
pub use contact::ContactSection;
pub use floating::FloatingContactButtons;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use services::ServicesSection;
pub use testimonials::TestimonialsSection;
