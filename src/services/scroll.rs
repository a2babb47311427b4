#[cfg(feature = "hydrate")]
use crate::config::EffectSettings;

pub const SCROLLED_NAV_CLASSES: [&str; 4] =
    ["nav-scrolled", "shadow-md", "bg-white/90", "backdrop-blur-sm"];

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Element id an in-page link like `#services` points at
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scrolls to in-page targets instead of jumping.
///
/// Listens on the document so the handler runs before the router's own
/// window-level anchor handling and links inside injected fragments work too.
#[cfg(feature = "hydrate")]
pub fn install_smooth_scroll() {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

    let handler = Closure::<dyn Fn(MouseEvent)>::new(|ev: MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(r##"a[href^="#"]"##).ok().flatten())
        else {
            return;
        };
        ev.prevent_default();

        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(id) = fragment_id(&href) else {
            return;
        };
        if let Some(target) = leptos::prelude::document().get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let document = leptos::prelude::document();
    if document
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("could not install smooth scrolling");
        return;
    }
    handler.forget();
}

/// Calls `on_entry` for every intersection change past `threshold`
#[cfg(feature = "hydrate")]
pub fn watch_visibility<F>(threshold: f64, mut on_entry: F) -> Option<web_sys::IntersectionObserver>
where
    F: FnMut(&web_sys::IntersectionObserverEntry, &web_sys::IntersectionObserver) + 'static,
{
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                on_entry(entry.unchecked_ref::<IntersectionObserverEntry>(), &observer);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            tracing::warn!(error = ?e, "intersection observer unavailable");
            None
        }
    }
}

/// Adds `aos-animate` to `[data-aos]` elements as they scroll into view
#[cfg(feature = "hydrate")]
pub fn observe_reveals(root: &web_sys::Element, settings: &EffectSettings) {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    let Ok(targets) = root.query_selector_all("[data-aos]:not(.aos-animate)") else {
        return;
    };
    if targets.length() == 0 {
        return;
    }

    let once = settings.reveal_once;
    let Some(observer) = watch_visibility(0.0, move |entry, observer| {
        let target = entry.target();
        if entry.is_intersecting() {
            let _ = target.class_list().add_1("aos-animate");
            if once {
                observer.unobserve(&target);
            }
        } else if !once {
            let _ = target.class_list().remove_1("aos-animate");
        }
    }) else {
        return;
    };

    let duration = format!("{}ms", settings.reveal_duration.as_millis());
    for i in 0..targets.length() {
        let Some(el) = targets
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let style = el.style();
        let _ = style.set_property("transition-duration", &duration);
        let _ = style.set_property("transition-timing-function", settings.reveal_easing);
        observer.observe(&el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#services"), Some("services"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/contact"), None);
    }
}
