pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_storage(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn prefers_dark() -> bool {
    leptos::prelude::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(feature = "hydrate")]
pub fn stored_theme() -> Option<Theme> {
    let storage = leptos::prelude::window().local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Theme::from_storage(&value)
}

/// Puts `<html>` in `theme` without touching storage
#[cfg(feature = "hydrate")]
pub fn apply_theme(theme: Theme) {
    if let Some(root) = leptos::prelude::document().document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
    }
}

/// Flips the `dark` class on `<html>` and remembers the result
#[cfg(feature = "hydrate")]
pub fn toggle_document_theme() -> Option<Theme> {
    let root = leptos::prelude::document().document_element()?;
    let dark = root.class_list().toggle(DARK_CLASS).ok()?;
    let theme = Theme::from_dark_flag(dark);

    match leptos::prelude::window().local_storage() {
        Ok(Some(storage)) => {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!("could not persist theme preference");
            }
        }
        _ => tracing::warn!("local storage unavailable"),
    }
    Some(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn storage_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_storage("sepia"), None);
        assert_eq!(Theme::from_storage("Dark"), None);
    }

    #[test]
    fn dark_flag_maps_to_theme() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert_eq!(Theme::from_dark_flag(false), Theme::Light);
    }
}
