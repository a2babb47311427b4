use leptos::prelude::*;

/// Figure that counts up from zero when scrolled into view.
///
/// The animation itself is driven by `services::counter::animate_counters`,
/// which picks up every `.stat-counter` in the region.
#[component]
pub fn StatCounter(target: i64, label: &'static str, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    view! {
        <div class="stat text-center" data-aos="fade-up">
            <div class="text-4xl font-bold text-blue-600">
                <span class="stat-counter" data-target=target.to_string()>"0"</span>
                {suffix}
            </div>
            <p class="mt-2 text-gray-600">{label}</p>
        </div>
    }
}
