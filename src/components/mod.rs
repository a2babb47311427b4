mod contact_form;
mod footer;
mod nav;
mod route_view;
mod service_card;
mod stat_counter;
mod theme_toggle;
mod tooltip;

pub use contact_form::ContactForm;
pub use footer::SiteFooter;
pub use nav::SiteNav;
pub use route_view::RouteView;
pub use service_card::ServiceCard;
pub use stat_counter::StatCounter;
pub use theme_toggle::ThemeToggle;
pub use tooltip::Tooltip;
