use leptos::prelude::*;

use crate::components::Tooltip;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer bg-gray-900 text-gray-300 py-10">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <img src="/assets/img/logo.svg" alt="" class="h-6 w-6"/>
                    <span>"© Northwind Digital"</span>
                </div>
                <div class="flex gap-6 text-sm">
                    <a href="#top">"Back to top"</a>
                    <Tooltip text="We reply within one business day">
                        <a href="/contact">"Contact"</a>
                    </Tooltip>
                </div>
            </div>
        </footer>
    }
}
