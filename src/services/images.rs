#[cfg(feature = "hydrate")]
use tracing::{error, info};

/// Marks an `<img>` the fixer has already visited so re-runs don't strip twice
pub const CHECKED_ATTR: &str = "data-src-checked";

/// Rewrites a relative `src` so it resolves from the site root.
///
/// Only one leading `./`, `../` or `/` is removed. Returns `None` when the
/// path is left as it is.
pub fn normalize_src(src: &str) -> Option<String> {
    src.strip_prefix("./")
        .or_else(|| src.strip_prefix("../"))
        .or_else(|| src.strip_prefix('/'))
        .map(str::to_string)
}

/// Paths that already resolve correctly and need no watching
pub fn is_canonical(src: &str) -> bool {
    src.starts_with("assets/") || src.starts_with("data:") || src.starts_with("http")
}

/// Fixes the `src` of every image under `root` and logs images that fail to load
#[cfg(feature = "hydrate")]
pub fn fix_image_paths(root: &web_sys::Element) {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::HtmlImageElement;

    let Ok(images) = root.query_selector_all("img") else {
        return;
    };

    for i in 0..images.length() {
        let Some(img) = images
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        if img.has_attribute(CHECKED_ATTR) {
            continue;
        }
        let _ = img.set_attribute(CHECKED_ATTR, "");

        let original = match img.get_attribute("src") {
            Some(src) if !src.is_empty() => src,
            _ => continue,
        };

        let attempted = match normalize_src(&original) {
            Some(fixed) => {
                let _ = img.set_attribute("src", &fixed);
                info!(from = %original, to = %fixed, "updated image path");
                fixed
            }
            None if is_canonical(&original) => continue,
            None => original.clone(),
        };

        let onerror = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let resolved = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default();
            error!(
                src = %resolved,
                original = %original,
                attempted = %attempted,
                "failed to load image"
            );
        });
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    }
}

/// Fades lazily loaded images in once their data arrives
#[cfg(feature = "hydrate")]
pub fn fade_in_lazy_images(root: &web_sys::Element) {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::HtmlImageElement;

    let Ok(images) = root.query_selector_all(r#"img[loading="lazy"]"#) else {
        return;
    };

    for i in 0..images.length() {
        let Some(img) = images
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        // Already decoded images never fire `load` again
        if img.complete() {
            continue;
        }

        let _ = img.style().set_property("opacity", "0");
        let target = img.clone();
        let onload = Closure::once(move || {
            let style = target.style();
            let _ = style.set_property("transition", "opacity 0.5s ease-in-out");
            let _ = style.set_property("opacity", "1");
        });
        let _ = img.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref());
        onload.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_leading_dot_slash() {
        assert_eq!(normalize_src("./assets/logo.png").as_deref(), Some("assets/logo.png"));
        assert_eq!(normalize_src("./img/a.png").as_deref(), Some("img/a.png"));
    }

    #[test]
    fn strips_only_one_parent_segment() {
        assert_eq!(normalize_src("../assets/hero.jpg").as_deref(), Some("assets/hero.jpg"));
        assert_eq!(normalize_src("../../x.png").as_deref(), Some("../x.png"));
    }

    #[test]
    fn strips_leading_slash() {
        assert_eq!(normalize_src("/assets/team.webp").as_deref(), Some("assets/team.webp"));
        assert_eq!(normalize_src("//cdn.test/a.png").as_deref(), Some("/cdn.test/a.png"));
    }

    #[test]
    fn leaves_correct_and_unknown_paths_alone() {
        assert_eq!(normalize_src("assets/logo.png"), None);
        assert_eq!(normalize_src("data:image/png;base64,AAAA"), None);
        assert_eq!(normalize_src("https://cdn.test/a.png"), None);
        assert_eq!(normalize_src("images/a.png"), None);
        assert_eq!(normalize_src(""), None);
    }

    #[test]
    fn canonical_paths() {
        assert!(is_canonical("assets/a.png"));
        assert!(is_canonical("data:image/gif;base64,R0lG"));
        assert!(is_canonical("http://example.com/a.png"));
        assert!(is_canonical("https://example.com/a.png"));
        assert!(!is_canonical("images/a.png"));
        assert!(!is_canonical("./assets/a.png"));
    }
}
