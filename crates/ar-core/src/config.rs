//! Static site content
//!
//! Company profile, brand list, service catalog, testimonials and headline
//! stats. Everything here is `'static` and never mutated.

use std::collections::HashSet;

use crate::{theme, CoreError, CoreResult};

/// Business profile shown in the header, footer and contact links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    pub company_name: &'static str,
    pub phone_number: &'static str,
    pub locations: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub working_hours: &'static str,
    pub description: &'static str,
}

/// An appliance manufacturer with its own landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub hero_image: &'static str,
}

/// A repair offering, tagged with the brands it is offered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub available_for: &'static [&'static str],
    pub common_issues: &'static [&'static str],
    pub icon: &'static str,
}

impl Service {
    pub fn is_available_for(&self, brand: &str) -> bool {
        self.available_for.contains(&brand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: &'static str,
    pub service: &'static str,
    pub date: &'static str,
}

impl Testimonial {
    /// Comment cut to at most `max_chars` characters, on a char boundary.
    pub fn excerpt(&self, max_chars: usize) -> &'static str {
        match self.comment.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.comment[..idx],
            None => self.comment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub static SITE: SiteProfile = SiteProfile {
    company_name: "Appliance Repair Center",
    phone_number: "+971 50 123 4567",
    locations: "Dubai and Abu Dhabi",
    email: "info@appliancerepair.ae",
    address: "Business Bay, Dubai, UAE",
    working_hours: "24/7 Emergency Service Available",
    description: "Professional home appliance repair services in Dubai and Abu Dhabi. Expert technicians for all major brands.",
};

const KITCHEN_WIDE: &str =
    "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=800&h=600&fit=crop&auto=format";
const KITCHEN_BUILT_IN: &str =
    "https://images.unsplash.com/photo-1556909275-ebb90f430cc4?w=800&h=600&fit=crop&auto=format";
const REPAIR_IMAGE: &str =
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=300&fit=crop&auto=format";

const ALL_BRANDS: &[&str] = &["bosch", "siemens", "lg", "samsung"];

pub static COMPANIES: &[Company] = &[
    Company {
        id: "bosch",
        name: "Bosch",
        logo: "/assets/bosch.svg",
        description: "Authorized Bosch service center in UAE",
        color: "#c41e3a",
        hero_image: KITCHEN_WIDE,
    },
    Company {
        id: "siemens",
        name: "Siemens",
        logo: "/assets/siemens.svg",
        description: "Certified Siemens repair specialists",
        color: "#009999",
        hero_image: KITCHEN_BUILT_IN,
    },
    Company {
        id: "lg",
        name: "LG",
        logo: "/assets/lg.svg",
        description: "Official LG service and repair center",
        color: "#a50034",
        hero_image: KITCHEN_WIDE,
    },
    Company {
        id: "samsung",
        name: "Samsung",
        logo: "/assets/samsung.svg",
        description: "Samsung authorized repair service",
        color: "#1428a0",
        hero_image: KITCHEN_BUILT_IN,
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        id: "washing-machine",
        name: "Washing Machine Repair",
        description: "Expert washing machine repair services for all brands",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not spinning", "Water leakage", "Not draining", "Unusual noise"],
        icon: "🧺",
    },
    Service {
        id: "dryer",
        name: "Dryer Repair",
        description: "Professional dryer repair and maintenance services",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not heating", "Takes too long", "Not turning on", "Overheating"],
        icon: "🌪️",
    },
    Service {
        id: "dishwasher",
        name: "Dishwasher Repair",
        description: "Complete dishwasher repair and installation services",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not cleaning properly", "Water not draining", "Strange odors", "Not starting"],
        icon: "🍽️",
    },
    Service {
        id: "tv",
        name: "TV Repair",
        description: "Smart TV and LED TV repair services",
        image: REPAIR_IMAGE,
        available_for: &["lg", "samsung"],
        common_issues: &["Black screen", "No sound", "Remote not working", "Connectivity issues"],
        icon: "📺",
    },
    Service {
        id: "cooktop",
        name: "Cooktop/Stove Repair",
        description: "Gas and electric cooktop repair services",
        image: REPAIR_IMAGE,
        available_for: &["bosch", "siemens"],
        common_issues: &["Burners not working", "Uneven heating", "Gas smell", "Temperature issues"],
        icon: "🔥",
    },
    Service {
        id: "oven",
        name: "Oven Repair",
        description: "Built-in and standalone oven repair services",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not heating", "Door problems", "Timer issues", "Temperature inconsistency"],
        icon: "🔥",
    },
    Service {
        id: "fridge",
        name: "Refrigerator Repair",
        description: "Refrigerator and freezer repair services",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not cooling", "Ice maker problems", "Water leakage", "Strange noises"],
        icon: "❄️",
    },
    Service {
        id: "microwave",
        name: "Microwave Repair",
        description: "Microwave oven repair and maintenance",
        image: REPAIR_IMAGE,
        available_for: ALL_BRANDS,
        common_issues: &["Not heating", "Turntable issues", "Door problems", "Strange sounds"],
        icon: "📻",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Ahmed Hassan",
        location: "Dubai Marina",
        rating: 5,
        comment: "Excellent service! Fixed my washing machine the same day. Professional technicians and fair pricing.",
        service: "Washing Machine Repair",
        date: "2 days ago",
    },
    Testimonial {
        id: 2,
        name: "Sarah Johnson",
        location: "Downtown Dubai",
        rating: 5,
        comment: "Very satisfied with the refrigerator repair. The technician was knowledgeable and explained everything clearly.",
        service: "Refrigerator Repair",
        date: "1 week ago",
    },
    Testimonial {
        id: 3,
        name: "Mohammed Al Rashid",
        location: "Business Bay",
        rating: 5,
        comment: "Quick response for emergency dishwasher repair. Great customer service and warranty coverage.",
        service: "Dishwasher Repair",
        date: "3 days ago",
    },
    Testimonial {
        id: 4,
        name: "Emma Rodriguez",
        location: "JBR",
        rating: 5,
        comment: "Professional team fixed our oven perfectly. Used genuine parts and provided detailed invoice.",
        service: "Oven Repair",
        date: "1 week ago",
    },
];

pub static STATS: &[Stat] = &[
    Stat { label: "Happy Customers", value: "5,000+", icon: "👥" },
    Stat { label: "Years Experience", value: "15+", icon: "⭐" },
    Stat { label: "Success Rate", value: "98%", icon: "✅" },
    Stat { label: "Service Window", value: "Same day", icon: "⚡" },
];

/// Look up a brand by its route id.
pub fn find_company(id: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|c| c.id == id)
}

/// Check the built-in tables.
pub fn validate() -> CoreResult<()> {
    validate_tables(COMPANIES, SERVICES, TESTIMONIALS)?;

    for company in COMPANIES {
        if !theme::has_brand_theme(company.id) {
            return Err(CoreError::Config(format!(
                "brand '{}' has no theme entry",
                company.id
            )));
        }
    }

    Ok(())
}

/// Check cross-references and ranges between content tables.
///
/// A service naming an unknown brand would silently never be shown, so that
/// is treated as an error here rather than at render time.
pub fn validate_tables(
    companies: &[Company],
    services: &[Service],
    testimonials: &[Testimonial],
) -> CoreResult<()> {
    let mut brand_ids = HashSet::new();
    for company in companies {
        if !brand_ids.insert(company.id) {
            return Err(CoreError::Config(format!("duplicate brand id '{}'", company.id)));
        }
    }

    let mut service_ids = HashSet::new();
    for service in services {
        if !service_ids.insert(service.id) {
            return Err(CoreError::Config(format!("duplicate service id '{}'", service.id)));
        }
        if let Some(unknown) = service.available_for.iter().find(|b| !brand_ids.contains(*b)) {
            return Err(CoreError::Config(format!(
                "service '{}' references unknown brand '{}'",
                service.id, unknown
            )));
        }
    }

    let mut testimonial_ids = HashSet::new();
    for testimonial in testimonials {
        if !testimonial_ids.insert(testimonial.id) {
            return Err(CoreError::Config(format!(
                "duplicate testimonial id {}",
                testimonial.id
            )));
        }
        if !(1..=5).contains(&testimonial.rating) {
            return Err(CoreError::Config(format!(
                "testimonial {} has rating {}, expected 1-5",
                testimonial.id, testimonial.rating
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_find_company() {
        assert_eq!(find_company("lg").map(|c| c.name), Some("LG"));
        assert_eq!(find_company("bosch").map(|c| c.name), Some("Bosch"));
        assert!(find_company("whirlpool").is_none());
        assert!(find_company("").is_none());
    }

    #[test]
    fn test_unknown_brand_reference_rejected() {
        let services = [Service {
            available_for: &["lg", "miele"],
            ..SERVICES[0]
        }];
        let err = validate_tables(COMPANIES, &services, TESTIMONIALS).unwrap_err();
        assert!(err.to_string().contains("unknown brand 'miele'"));
    }

    #[test]
    fn test_duplicate_service_rejected() {
        let services = [SERVICES[0], SERVICES[0]];
        assert!(validate_tables(COMPANIES, &services, TESTIMONIALS).is_err());
    }

    #[test]
    fn test_rating_range_enforced() {
        let testimonials = [Testimonial { rating: 0, ..TESTIMONIALS[0] }];
        assert!(validate_tables(COMPANIES, SERVICES, &testimonials).is_err());

        let testimonials = [Testimonial { rating: 6, ..TESTIMONIALS[0] }];
        assert!(validate_tables(COMPANIES, SERVICES, &testimonials).is_err());
    }

    #[test]
    fn test_excerpt() {
        let t = TESTIMONIALS[0];
        assert_eq!(t.excerpt(9), "Excellent");
        assert_eq!(t.excerpt(1000), t.comment);
        assert!(t.excerpt(100).chars().count() <= 100);
    }

    #[test]
    fn test_service_availability() {
        let tv = SERVICES.iter().find(|s| s.id == "tv").unwrap();
        assert!(tv.is_available_for("lg"));
        assert!(tv.is_available_for("samsung"));
        assert!(!tv.is_available_for("bosch"));
    }
}
