//! Static theme catalog.
//!
//! Themes are compiled in; the CLI selects one by id. Unknown ids are a
//! typed error so the entry point can list what is available.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;
use thiserror::Error;

use super::roles::{Theme, ThemeRoles};

/// Theme id used when the CLI does not specify one.
pub const DEFAULT_THEME: &str = "slate";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme id `{id}` (available: {list})", id = .0, list = available_ids().join(", "))]
    Unknown(String),
}

/// Dark default palette.
#[derive(Debug)]
struct Slate {
    roles: ThemeRoles,
}

impl Theme for Slate {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

fn slate() -> Box<dyn Theme> {
    Box::new(Slate {
        roles: ThemeRoles {
            background: Color::Rgb(18, 22, 28),
            surface: Color::Rgb(26, 31, 38),
            surface_muted: Color::Rgb(33, 39, 48),
            border: Color::Rgb(62, 72, 86),
            divider: Color::Rgb(48, 56, 68),
            text: Color::Rgb(214, 220, 229),
            text_secondary: Color::Rgb(160, 170, 183),
            text_muted: Color::Rgb(108, 118, 132),
            accent_primary: Color::Rgb(94, 174, 255),
            selection_bg: Color::Rgb(41, 66, 98),
            selection_fg: Color::Rgb(228, 238, 250),
            focus: Color::Rgb(122, 192, 255),
        },
    })
}

/// Light palette for bright terminals.
#[derive(Debug)]
struct Paper {
    roles: ThemeRoles,
}

impl Theme for Paper {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

fn paper() -> Box<dyn Theme> {
    Box::new(Paper {
        roles: ThemeRoles {
            background: Color::Rgb(246, 246, 242),
            surface: Color::Rgb(255, 255, 255),
            surface_muted: Color::Rgb(238, 238, 233),
            border: Color::Rgb(189, 193, 198),
            divider: Color::Rgb(214, 217, 221),
            text: Color::Rgb(33, 37, 41),
            text_secondary: Color::Rgb(73, 80, 87),
            text_muted: Color::Rgb(134, 142, 150),
            accent_primary: Color::Rgb(25, 103, 210),
            selection_bg: Color::Rgb(210, 227, 252),
            selection_fg: Color::Rgb(23, 43, 77),
            focus: Color::Rgb(25, 103, 210),
        },
    })
}

static CATALOG: Lazy<BTreeMap<&'static str, fn() -> Box<dyn Theme>>> = Lazy::new(|| {
    let mut catalog: BTreeMap<&'static str, fn() -> Box<dyn Theme>> = BTreeMap::new();
    catalog.insert("slate", slate as fn() -> Box<dyn Theme>);
    catalog.insert("paper", paper as fn() -> Box<dyn Theme>);
    catalog
});

/// Instantiates the theme registered under `id`.
pub fn theme_by_id(id: &str) -> Result<Box<dyn Theme>, ThemeError> {
    CATALOG
        .get(id)
        .map(|factory| factory())
        .ok_or_else(|| ThemeError::Unknown(id.to_string()))
}

/// Ids available in the catalog, sorted.
pub fn available_ids() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_resolves() {
        assert!(theme_by_id(DEFAULT_THEME).is_ok());
    }

    #[test]
    fn unknown_theme_is_a_typed_error() {
        let err = theme_by_id("neon").unwrap_err();
        assert!(err.to_string().contains("neon"));
        assert!(err.to_string().contains("slate"));
    }
}
