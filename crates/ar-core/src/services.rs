//! Service catalog filtering and slider paging

use crate::config::Service;

/// Services shown per slide in the services slider
pub const SERVICES_PER_SLIDE: usize = 3;

/// Services offered for `brand`, in catalog order. With no brand the whole
/// catalog is returned.
pub fn filter_services<'a>(services: &'a [Service], brand: Option<&str>) -> Vec<&'a Service> {
    match brand {
        Some(id) => services.iter().filter(|s| s.is_available_for(id)).collect(),
        None => services.iter().collect(),
    }
}

/// Number of slides needed to show `len` items, `per_slide` at a time.
pub fn slide_count(len: usize, per_slide: usize) -> usize {
    if per_slide == 0 {
        return 0;
    }
    len.div_ceil(per_slide)
}

/// Items on slide `slide`; empty when the slide does not exist.
pub fn services_on_slide<'a, 'b>(
    services: &'b [&'a Service],
    slide: usize,
    per_slide: usize,
) -> &'b [&'a Service] {
    let start = slide.saturating_mul(per_slide).min(services.len());
    let end = start.saturating_add(per_slide).min(services.len());
    &services[start..end]
}

/// Name of the service with `id`, if it is in `services`.
pub fn service_name<'a>(services: &[&'a Service], id: &str) -> Option<&'a str> {
    services.iter().find(|s| s.id == id).map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COMPANIES, SERVICES};

    fn ids(services: &[&Service]) -> Vec<&'static str> {
        services.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_no_brand_returns_everything() {
        let all = filter_services(SERVICES, None);
        assert_eq!(all.len(), SERVICES.len());
        assert_eq!(ids(&all), SERVICES.iter().map(|s| s.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_lg_includes_tv_excludes_cooktop() {
        let lg = ids(&filter_services(SERVICES, Some("lg")));
        assert!(lg.contains(&"tv"));
        assert!(!lg.contains(&"cooktop"));
    }

    #[test]
    fn test_bosch_includes_cooktop_excludes_tv() {
        let bosch = ids(&filter_services(SERVICES, Some("bosch")));
        assert!(bosch.contains(&"cooktop"));
        assert!(!bosch.contains(&"tv"));
    }

    #[test]
    fn test_filter_keeps_membership_and_order() {
        for company in COMPANIES {
            let filtered = filter_services(SERVICES, Some(company.id));
            assert!(filtered.iter().all(|s| s.available_for.contains(&company.id)));

            // filtered ids appear in catalog order
            let positions: Vec<usize> = filtered
                .iter()
                .map(|f| SERVICES.iter().position(|s| s.id == f.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            let expected = SERVICES.iter().filter(|s| s.available_for.contains(&company.id)).count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn test_unknown_brand_matches_nothing() {
        assert!(filter_services(SERVICES, Some("whirlpool")).is_empty());
    }

    #[test]
    fn test_slide_count() {
        assert_eq!(slide_count(0, 3), 0);
        assert_eq!(slide_count(1, 3), 1);
        assert_eq!(slide_count(3, 3), 1);
        assert_eq!(slide_count(7, 3), 3);
        assert_eq!(slide_count(8, 3), 3);
        assert_eq!(slide_count(5, 0), 0);
    }

    #[test]
    fn test_services_on_slide() {
        let lg = filter_services(SERVICES, Some("lg"));
        assert_eq!(lg.len(), 7);

        assert_eq!(ids(services_on_slide(&lg, 0, 3)), vec!["washing-machine", "dryer", "dishwasher"]);
        assert_eq!(ids(services_on_slide(&lg, 1, 3)), vec!["tv", "oven", "fridge"]);
        assert_eq!(ids(services_on_slide(&lg, 2, 3)), vec!["microwave"]);
        assert!(services_on_slide(&lg, 3, 3).is_empty());
        assert!(services_on_slide(&lg, usize::MAX, 3).is_empty());
    }

    #[test]
    fn test_service_name_lookup() {
        let lg = filter_services(SERVICES, Some("lg"));
        assert_eq!(service_name(&lg, "tv"), Some("TV Repair"));
        assert_eq!(service_name(&lg, "cooktop"), None);
    }
}
