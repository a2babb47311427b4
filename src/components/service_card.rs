use leptos::prelude::*;

const ICON_BASE: &str = "card-icon text-4xl mb-4 transition-transform duration-300";
const CONTENT_BASE: &str = "card-content transition-transform duration-300";

pub fn icon_class(hovered: bool) -> String {
    if hovered {
        format!("{ICON_BASE} scale-110 rotate-3")
    } else {
        ICON_BASE.to_string()
    }
}

pub fn content_class(hovered: bool) -> String {
    if hovered {
        format!("{CONTENT_BASE} translate-y-[-5px]")
    } else {
        CONTENT_BASE.to_string()
    }
}

#[component]
pub fn ServiceCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="service-card rounded-xl bg-white p-6 shadow"
            data-aos="fade-up"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class=move || icon_class(hovered.get())>{icon}</div>
            <div class=move || content_class(hovered.get())>
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class="text-gray-600">{children()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lifts_icon_and_content() {
        assert!(icon_class(true).ends_with("scale-110 rotate-3"));
        assert!(content_class(true).ends_with("translate-y-[-5px]"));
    }

    #[test]
    fn resting_card_has_no_hover_classes() {
        assert!(!icon_class(false).contains("scale-110"));
        assert!(!content_class(false).contains("translate-y"));
    }
}
