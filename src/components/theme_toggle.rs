use leptos::prelude::*;

use crate::services::theme::Theme;

/// Light/dark switch, live only for visitors whose system prefers dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (enabled, set_enabled) = signal(false);
    let (theme, set_theme) = signal(Theme::Light);

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::services::theme::{apply_theme, prefers_dark, stored_theme};

            if !prefers_dark() {
                return;
            }
            let current = stored_theme().unwrap_or_else(|| {
                let dark = document()
                    .document_element()
                    .is_some_and(|root| root.class_list().contains("dark"));
                Theme::from_dark_flag(dark)
            });
            apply_theme(current);
            set_theme.set(current);
            set_enabled.set(true);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (set_enabled, set_theme);
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        if !enabled.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(next) = crate::services::theme::toggle_document_theme() {
                set_theme.set(next);
            }
        }
    };

    view! {
        <button
            type="button"
            id="theme-toggle"
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=on_click
        >
            {move || match theme.get() {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
