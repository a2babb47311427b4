use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{RouteView, SiteFooter, SiteNav};
use crate::config::EffectSettings;
use crate::models::SiteRoute;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(EffectSettings::default());

    // Page-wide handlers, installed once after the first render
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::services::scroll::install_smooth_scroll();
            if let Some(body) = document().body() {
                crate::services::images::fix_image_paths(&body);
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/marketing_site.css"/>
        <Meta name="description" content="Search, social and content marketing that shows its work"/>

        <Router>
            <PageTitle/>
            <SiteNav/>
            <main id="root">
                <Routes fallback=|| view! { <RouteView route=SiteRoute::NotFound/> }>
                    <Route path=path!("/") view=|| view! { <RouteView route=SiteRoute::Home/> }/>
                    <Route path=path!("/product") view=|| view! { <RouteView route=SiteRoute::Product/> }/>
                    <Route path=path!("/services") view=|| view! { <RouteView route=SiteRoute::Services/> }/>
                    <Route path=path!("/contact") view=|| view! { <RouteView route=SiteRoute::Contact/> }/>
                    <Route
                        path=path!("/digital-marketing")
                        view=|| view! { <RouteView route=SiteRoute::DigitalMarketing/> }
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

#[component]
fn PageTitle() -> impl IntoView {
    let pathname = use_location().pathname;
    let title = move || match SiteRoute::from_path(&pathname.get()) {
        SiteRoute::Home => "Northwind Digital".to_string(),
        route => format!("{} | Northwind Digital", route.label()),
    };

    view! { <Title text=title/> }
}
