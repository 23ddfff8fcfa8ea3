//! Appliance Repair Center core
//!
//! Static site content plus the small amount of logic the pages need:
//! brand theme resolution, per-brand service filtering, carousel rotation,
//! outbound contact links and contact form message assembly.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod form;
pub mod services;
pub mod theme;

use thiserror::Error;

pub use carousel::Carousel;
pub use config::{find_company, Company, Service, SiteProfile, Stat, Testimonial};
pub use contact::{ContactLink, LinkTarget};
pub use form::ContactDraft;
pub use services::filter_services;
pub use theme::{resolve_theme, Theme};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Slide {index} out of range (total {total})")]
    SlideOutOfRange { index: usize, total: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::SlideOutOfRange { index: 4, total: 2 };
        assert_eq!(err.to_string(), "Slide 4 out of range (total 2)");

        let err = CoreError::Config("bad brand".into());
        assert_eq!(err.to_string(), "Configuration error: bad brand");
    }
}
