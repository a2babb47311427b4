use leptos::prelude::*;

use crate::config::use_settings;

const BUBBLE_BASE: &str =
    "absolute bg-gray-900 text-white px-2 py-1 rounded text-sm -mt-8 -ml-2 opacity-0 transition-opacity duration-200";

pub fn bubble_class(visible: bool) -> String {
    if visible {
        format!("{BUBBLE_BASE} opacity-100")
    } else {
        BUBBLE_BASE.to_string()
    }
}

/// False once the hover counter is gone or has moved past `id`
fn is_current_hover(hover: RwSignal<u32>, id: u32) -> bool {
    hover.try_get_untracked() == Some(id)
}

/// Wraps `children` in a `[data-tooltip]` span that shows `text` on hover
#[component]
pub fn Tooltip(text: &'static str, children: Children) -> impl IntoView {
    let settings = use_settings();
    let (mounted, set_mounted) = signal(false);
    let (visible, set_visible) = signal(false);
    // Bumped on every enter/leave so a late timer can't act on a newer hover
    let hover = RwSignal::new(0u32);

    let on_enter = move |_: leptos::ev::MouseEvent| {
        hover.update(|n| *n += 1);
        let this_hover = hover.get_untracked();
        set_mounted.set(true);
        set_timeout(
            move || {
                if is_current_hover(hover, this_hover) {
                    set_visible.set(true);
                }
            },
            settings.tooltip_fade_in,
        );
    };

    let on_leave = move |_: leptos::ev::MouseEvent| {
        hover.update(|n| *n += 1);
        let this_hover = hover.get_untracked();
        set_visible.set(false);
        set_timeout(
            move || {
                if is_current_hover(hover, this_hover) {
                    set_mounted.set(false);
                }
            },
            settings.tooltip_fade_out,
        );
    };

    view! {
        <span class="relative inline-block" data-tooltip=text on:mouseenter=on_enter on:mouseleave=on_leave>
            {children()}
            <Show when=move || mounted.get()>
                <div class=move || bubble_class(visible.get())>{text}</div>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_starts_transparent() {
        assert!(bubble_class(false).contains("opacity-0"));
        assert!(!bubble_class(false).contains("opacity-100"));
    }

    #[test]
    fn visible_bubble_is_opaque() {
        assert!(bubble_class(true).ends_with("opacity-100"));
    }

    #[test]
    fn latest_hover_is_current() {
        let owner = Owner::new();
        let hover = owner.with(|| RwSignal::new(2u32));
        assert!(is_current_hover(hover, 2));
        assert!(!is_current_hover(hover, 1));
    }

    #[test]
    fn timer_after_unmount_sees_no_hover() {
        let owner = Owner::new();
        let hover = owner.with(|| RwSignal::new(1u32));
        owner.cleanup();
        assert!(!is_current_hover(hover, 1));
    }
}
