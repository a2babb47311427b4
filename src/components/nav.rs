use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::{ev, web_sys};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
use leptos_router::{components::A, hooks::use_location};

use crate::components::ThemeToggle;
use crate::config::use_settings;
use crate::models::{is_active, SiteRoute};
use crate::services::scroll::SCROLLED_NAV_CLASSES;

const NAV_BASE: &str = "site-nav fixed inset-x-0 top-0 z-50 transition-all duration-300";

pub fn nav_class(scrolled: bool) -> String {
    if scrolled {
        format!("{NAV_BASE} {}", SCROLLED_NAV_CLASSES.join(" "))
    } else {
        NAV_BASE.to_string()
    }
}

#[component]
pub fn SiteNav() -> impl IntoView {
    let settings = use_settings();
    let pathname = use_location().pathname;

    let (scrolled, set_scrolled) = signal(false);
    // `.menu-toggle-btn` / `.menu-items-area` collapsible menu
    let (menu_open, set_menu_open) = signal(false);
    // `#mobile-menu-btn` / `#mobile-menu` full-screen drawer
    let (drawer_open, set_drawer_open) = signal(false);

    let menu_area = NodeRef::<leptos::html::Div>::new();
    let menu_button = NodeRef::<leptos::html::Button>::new();

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::services::scroll::is_scrolled;

            let threshold = settings.nav_scroll_threshold;
            let update = move || {
                let y = window().scroll_y().unwrap_or(0.0);
                set_scrolled.set(is_scrolled(y, threshold));
            };
            update();
            let scroll = window_event_listener(ev::scroll, move |_| update());

            let outside = window_event_listener(ev::click, move |ev| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                else {
                    return;
                };
                let in_area = menu_area
                    .get_untracked()
                    .is_some_and(|el| el.contains(Some(&target)));
                let in_button = menu_button
                    .get_untracked()
                    .is_some_and(|el| el.contains(Some(&target)));
                if !in_area && !in_button {
                    set_menu_open.set(false);
                }
            });

            on_cleanup(move || {
                scroll.remove();
                outside.remove();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (settings, set_scrolled);
    });

    // The drawer locks page scrolling while it is open
    Effect::new(move |_| {
        let open = drawer_open.get();
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = document().body() {
                let _ = body.class_list().toggle_with_force("overflow-hidden", open);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = open;
    });

    let links = move || {
        SiteRoute::menu()
            .into_iter()
            .filter_map(|route| route.path().map(|path| (route, path)))
            .map(|(route, path)| {
                view! {
                    <li>
                        <A
                            href=path
                            attr:class=move || {
                                if is_active(&pathname.get(), path) { "active" } else { "" }
                            }
                        >
                            {route.label()}
                        </A>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="nav-inner container mx-auto flex items-center justify-between px-4 py-3">
                <a href="/" class="nav-brand flex items-center gap-2">
                    <img src="./assets/img/logo.svg" alt="" class="h-8 w-8"/>
                    <span class="font-bold text-lg">"Northwind Digital"</span>
                </a>

                <button
                    type="button"
                    class="menu-toggle-btn"
                    class:active=move || menu_open.get()
                    node_ref=menu_button
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>

                <div
                    class="menu-items-area"
                    class:active=move || menu_open.get()
                    node_ref=menu_area
                >
                    <ul class="nav-menu-items flex gap-6">{links}</ul>
                    <ThemeToggle/>
                </div>

                <button
                    type="button"
                    id="mobile-menu-btn"
                    class="md:hidden"
                    aria-label="Open menu"
                    on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>

            <div id="mobile-menu" class="mobile-menu md:hidden" class:hidden=move || !drawer_open.get()>
                <ul class="flex flex-col gap-4 p-6">{links}</ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_nav_gains_solid_classes() {
        let class = nav_class(true);
        for cls in SCROLLED_NAV_CLASSES {
            assert!(class.split(' ').any(|c| c == cls), "missing {cls}");
        }
    }

    #[test]
    fn resting_nav_has_only_base_classes() {
        assert_eq!(nav_class(false), NAV_BASE);
        assert!(!nav_class(false).contains("nav-scrolled"));
    }
}
