use leptos::{html, prelude::*};

use crate::config::use_settings;
use crate::models::{RouteContent, SiteRoute};
use crate::pages::HomePage;
use crate::services::fragments::fetch_fragment;

/// Produces the content a route puts into `#root`
#[component]
pub fn RouteView(route: SiteRoute) -> impl IntoView {
    match route.content() {
        RouteContent::Home => view! { <HomePage/> }.into_any(),
        RouteContent::Markup(markup) => view! { <InjectedHtml html=markup.to_string()/> }.into_any(),
        RouteContent::Remote(src) => view! { <RemoteFragment src/> }.into_any(),
    }
}

#[component]
fn RemoteFragment(src: &'static str) -> impl IntoView {
    // Owned by this view, so a slow response for a page the visitor already
    // left is dropped with it
    let markup = LocalResource::new(move || fetch_fragment(src));

    view! {
        <Suspense fallback=|| view! { <div class="loading py-10 text-center">"Loading..."</div> }>
            {move || Suspend::new(async move {
                let html = markup.await;
                view! { <InjectedHtml html/> }
            })}
        </Suspense>
    }
}

/// Raw HTML dropped into the page, then run through the DOM passes
#[component]
fn InjectedHtml(html: String) -> impl IntoView {
    let settings = use_settings();
    let region = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = region.get() {
                crate::services::enhance_region(&el, &settings);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (region, settings);
    });

    view! { <div class="route-content" node_ref=region inner_html=html></div> }
}
