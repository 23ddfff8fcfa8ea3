//! Brand color themes

use tracing::debug;

/// Color tokens used to tint a page for one brand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Main brand color
    pub accent: &'static str,
    /// Soft background tint, also used for inactive indicator dots
    pub accent_soft: &'static str,
    /// Light tint for card borders and secondary stat panels
    pub accent_light: &'static str,
    pub border: &'static str,
    /// Gradient behind the contact call-to-action panel
    pub overlay: &'static str,
    /// Hero background tint
    pub tint: &'static str,
    pub tint_deep: &'static str,
}

impl Theme {
    /// Tokens as CSS custom properties for an inline `style` attribute.
    pub fn css_vars(&self) -> String {
        format!(
            "--accent: {}; --accent-soft: {}; --accent-light: {}; --accent-border: {}; \
             --accent-overlay: {}; --hero-tint: {}; --hero-tint-deep: {};",
            self.accent,
            self.accent_soft,
            self.accent_light,
            self.border,
            self.overlay,
            self.tint,
            self.tint_deep,
        )
    }

    /// Hero background gradient layered over the kitchen image.
    pub fn hero_gradient(&self) -> String {
        format!(
            "linear-gradient(120deg, {} 0%, {} 40%, rgba(0,0,0,0.35) 100%)",
            self.tint, self.tint_deep
        )
    }
}

pub static DEFAULT_THEME: Theme = Theme {
    accent: "var(--primary)",
    accent_soft: "rgba(59,130,246,0.10)",
    accent_light: "var(--primary-light)",
    border: "rgba(59,130,246,0.25)",
    overlay: "linear-gradient(120deg, rgba(31,41,55,0.9) 0%, rgba(17,24,39,0.88) 50%, rgba(0,0,0,0.85) 100%)",
    tint: "rgba(17,24,39,0.45)",
    tint_deep: "rgba(0,0,0,0.50)",
};

static BRAND_THEMES: &[(&str, Theme)] = &[
    (
        "lg",
        Theme {
            accent: "#A50034",
            accent_soft: "rgba(165,0,52,0.10)",
            accent_light: "rgba(165,0,52,0.15)",
            border: "rgba(165,0,52,0.25)",
            overlay: "linear-gradient(120deg, rgba(165,0,52,0.85) 0%, rgba(50,0,16,0.85) 45%, rgba(0,0,0,0.85) 100%)",
            tint: "rgba(165,0,52,0.55)",
            tint_deep: "rgba(80,0,25,0.55)",
        },
    ),
    (
        "bosch",
        Theme {
            accent: "#F80000",
            accent_soft: "rgba(248,0,0,0.10)",
            accent_light: "rgba(248,0,0,0.15)",
            border: "rgba(248,0,0,0.25)",
            overlay: "linear-gradient(120deg, rgba(248,0,0,0.88) 0%, rgba(112,0,0,0.86) 50%, rgba(0,0,0,0.84) 100%)",
            tint: "rgba(248,0,0,0.50)",
            tint_deep: "rgba(128,0,0,0.50)",
        },
    ),
    (
        "siemens",
        Theme {
            accent: "#019997",
            accent_soft: "rgba(1,153,151,0.10)",
            accent_light: "rgba(1,153,151,0.15)",
            border: "rgba(1,153,151,0.25)",
            overlay: "linear-gradient(120deg, rgba(1,153,151,0.88) 0%, rgba(0,72,71,0.86) 50%, rgba(0,0,0,0.84) 100%)",
            tint: "rgba(1,153,151,0.50)",
            tint_deep: "rgba(0,70,69,0.50)",
        },
    ),
    (
        "samsung",
        Theme {
            accent: "#000000",
            accent_soft: "rgba(0,0,0,0.06)",
            accent_light: "rgba(0,0,0,0.10)",
            border: "rgba(0,0,0,0.20)",
            overlay: "linear-gradient(120deg, rgba(0,0,0,0.92) 0%, rgba(0,0,0,0.88) 50%, rgba(0,0,0,0.84) 100%)",
            tint: "rgba(0,0,0,0.45)",
            tint_deep: "rgba(0,0,0,0.55)",
        },
    ),
];

/// Theme for a brand id, or the default palette when the id is absent or
/// has no entry.
pub fn resolve_theme(brand: Option<&str>) -> &'static Theme {
    let Some(id) = brand else {
        return &DEFAULT_THEME;
    };

    match BRAND_THEMES.iter().find(|(key, _)| *key == id) {
        Some((_, theme)) => theme,
        None => {
            debug!(brand = id, "no theme entry, using default palette");
            &DEFAULT_THEME
        }
    }
}

pub(crate) fn has_brand_theme(id: &str) -> bool {
    BRAND_THEMES.iter().any(|(key, _)| *key == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_brand_theme() {
        assert_eq!(resolve_theme(Some("lg")).accent, "#A50034");
        assert_eq!(resolve_theme(Some("bosch")).accent, "#F80000");
        assert_eq!(resolve_theme(Some("siemens")).accent, "#019997");
        assert_eq!(resolve_theme(Some("samsung")).accent, "#000000");
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(resolve_theme(None), &DEFAULT_THEME);
        for id in ["", "whirlpool", "LG", "bosch ", "unknown"] {
            assert_eq!(resolve_theme(Some(id)), &DEFAULT_THEME, "id {id:?}");
        }
    }

    #[test]
    fn test_brand_themes_differ_from_default() {
        for (id, _) in BRAND_THEMES {
            assert_ne!(resolve_theme(Some(*id)), &DEFAULT_THEME);
        }
    }

    #[test]
    fn test_css_vars() {
        let vars = resolve_theme(Some("siemens")).css_vars();
        assert!(vars.starts_with("--accent: #019997;"));
        assert!(vars.contains("--accent-border: rgba(1,153,151,0.25);"));
    }

    #[test]
    fn test_hero_gradient() {
        let gradient = DEFAULT_THEME.hero_gradient();
        assert_eq!(
            gradient,
            "linear-gradient(120deg, rgba(17,24,39,0.45) 0%, rgba(0,0,0,0.50) 40%, rgba(0,0,0,0.35) 100%)"
        );
    }
}
