//! Turns hover and scroll motion off in sections that should render still.

pub const SECURITY_STYLE_ID: &str = "security-section-static";
pub const FAQ_STYLE_ID: &str = "faqs-section-static";

pub const SECURITY_STATIC_CSS: &str = r#"
.security-section * {
    transition: none !important;
    transform: none !important;
    animation: none !important;
}
"#;

pub const FAQ_STATIC_CSS: &str = r#"
.faqs-section * {
    transition: none !important;
    transform: none !important;
    animation: none !important;
}
.faqs-section .title,
.faqs-section .word,
.faqs-section .line {
    opacity: 1 !important;
    visibility: visible !important;
    transform: none !important;
    display: inline-block !important;
}
.faqs-section .accordion-card {
    transition: none !important;
}
.faqs-section .toggle-icon {
    transition: none !important;
}
"#;

/// Drops every class name that contains `hover-` or `transform-`
pub fn strip_motion_classes(class_attr: &str) -> String {
    class_attr
        .split_whitespace()
        .filter(|cls| !cls.contains("hover-") && !cls.contains("transform-"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Freezes the security and FAQ sections found under `root`
#[cfg(feature = "hydrate")]
pub fn settle_static_sections(root: &web_sys::Element) {
    if let Ok(Some(section)) = root.query_selector(".security-section") {
        settle_security_section(&section);
    }
    if let Ok(Some(section)) = root.query_selector(".faqs-section") {
        settle_faq_section(&section);
    }
}

#[cfg(feature = "hydrate")]
fn settle_security_section(section: &web_sys::Element) {
    for el in query_all(section, r#"[class*="hover-"], [class*="transform-"]"#) {
        el.set_class_name(&strip_motion_classes(&el.class_name()));
    }
    inject_style(SECURITY_STYLE_ID, SECURITY_STATIC_CSS);
}

#[cfg(feature = "hydrate")]
fn settle_faq_section(section: &web_sys::Element) {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    let visible = [("opacity", "1"), ("visibility", "visible"), ("transform", "none")];

    for title in query_all(section, ".title-animation-line") {
        let _ = title.class_list().remove_1("title-animation-line");
        if let Ok(title) = title.dyn_into::<HtmlElement>() {
            set_styles(&title, &visible);
        }
    }

    for el in query_all(section, ".word, .line") {
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            set_styles(&el, &visible);
            set_styles(&el, &[("transition", "none")]);
        }
    }

    inject_style(FAQ_STYLE_ID, FAQ_STATIC_CSS);

    for content in query_all(section, ".accordion-content") {
        if let Ok(content) = content.dyn_into::<HtmlElement>() {
            set_styles(
                &content,
                &[("display", "block"), ("height", "auto"), ("overflow", "visible")],
            );
        }
    }
}

#[cfg(feature = "hydrate")]
fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn set_styles(el: &web_sys::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}

/// Appends a `<style>` block to `<head>` unless one with `id` is already there
#[cfg(feature = "hydrate")]
fn inject_style(id: &str, css: &str) {
    let document = leptos::prelude::document();
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hover_and_transform_classes() {
        assert_eq!(
            strip_motion_classes("card hover-lift p-4 transform-gpu rounded"),
            "card p-4 rounded"
        );
    }

    #[test]
    fn matches_substrings_not_prefixes() {
        assert_eq!(
            strip_motion_classes("md:hover-scale group-hover-shadow text-lg"),
            "text-lg"
        );
        // Tailwind's `hover:` variant has no dash and survives
        assert_eq!(strip_motion_classes("hover:shadow-lg"), "hover:shadow-lg");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(strip_motion_classes("  a   b  "), "a b");
        assert_eq!(strip_motion_classes("hover-only"), "");
        assert_eq!(strip_motion_classes(""), "");
    }

    #[test]
    fn static_css_disables_motion() {
        assert!(SECURITY_STATIC_CSS.contains("animation: none !important"));
        assert!(FAQ_STATIC_CSS.contains(".faqs-section .accordion-card"));
    }
}
