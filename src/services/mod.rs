pub mod counter;
pub mod fragments;
pub mod images;
pub mod motion;
pub mod scroll;
pub mod theme;

/// Runs the one-shot DOM passes over a freshly mounted region of the page
#[cfg(feature = "hydrate")]
pub fn enhance_region(root: &web_sys::Element, settings: &crate::config::EffectSettings) {
    images::fix_image_paths(root);
    images::fade_in_lazy_images(root);
    motion::settle_static_sections(root);
    scroll::observe_reveals(root, settings);
    counter::animate_counters(root, settings);
}
