/// Pages the client-side router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Product,
    Services,
    Contact,
    DigitalMarketing,
    NotFound,
}

/// How a route produces the HTML that goes into `#root`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContent {
    /// Rendered by the home page component, nothing to load
    Home,
    /// Synthesized markup injected as-is
    Markup(&'static str),
    /// HTML document fetched from the site root
    Remote(&'static str),
}

pub const SERVICES_MARKUP: &str = r#"
<div class="container mx-auto px-4 py-8">
    <h1 class="text-4xl font-bold mb-6">Our Services</h1>
    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"></div>
</div>
"#;

pub const CONTACT_MARKUP: &str = r#"
<div class="container mx-auto px-4 py-8">
    <h1 class="text-4xl font-bold mb-6">Contact Us</h1>
    <div class="max-w-lg mx-auto"></div>
</div>
"#;

pub const NOT_FOUND_MARKUP: &str = r#"
<div class="text-center py-10">
    <h2 class="text-2xl font-bold text-red-600">Page Not Found</h2>
    <p class="mt-2 text-gray-600">The page you're looking for doesn't exist</p>
    <a href="/" class="mt-4 inline-block px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">Go Home</a>
</div>
"#;

pub const ERROR_MARKUP: &str = r#"
<div class="text-center py-10">
    <h2 class="text-2xl font-bold text-red-600">Oops! Something went wrong</h2>
    <p class="mt-2 text-gray-600">Please try refreshing the page</p>
</div>
"#;

impl SiteRoute {
    pub fn from_path(path: &str) -> Self {
        match trim_trailing_slash(path) {
            "/" => SiteRoute::Home,
            "/product" => SiteRoute::Product,
            "/services" => SiteRoute::Services,
            "/contact" => SiteRoute::Contact,
            "/digital-marketing" => SiteRoute::DigitalMarketing,
            _ => SiteRoute::NotFound,
        }
    }

    /// Canonical path, `None` for the not-found route
    pub fn path(&self) -> Option<&'static str> {
        match self {
            SiteRoute::Home => Some("/"),
            SiteRoute::Product => Some("/product"),
            SiteRoute::Services => Some("/services"),
            SiteRoute::Contact => Some("/contact"),
            SiteRoute::DigitalMarketing => Some("/digital-marketing"),
            SiteRoute::NotFound => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::Product => "Product",
            SiteRoute::Services => "Services",
            SiteRoute::Contact => "Contact",
            SiteRoute::DigitalMarketing => "Digital Marketing",
            SiteRoute::NotFound => "Not Found",
        }
    }

    pub fn content(&self) -> RouteContent {
        match self {
            SiteRoute::Home => RouteContent::Home,
            SiteRoute::Product => RouteContent::Remote("/product.html"),
            SiteRoute::Services => RouteContent::Markup(SERVICES_MARKUP),
            SiteRoute::Contact => RouteContent::Markup(CONTACT_MARKUP),
            SiteRoute::DigitalMarketing => RouteContent::Remote("/digital-marketing.html"),
            SiteRoute::NotFound => RouteContent::Markup(NOT_FOUND_MARKUP),
        }
    }

    /// Routes listed in the navigation menu, in display order
    pub fn menu() -> [SiteRoute; 5] {
        [
            SiteRoute::Home,
            SiteRoute::Product,
            SiteRoute::Services,
            SiteRoute::DigitalMarketing,
            SiteRoute::Contact,
        ]
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Whether a nav link's `href` points at the page currently shown
pub fn is_active(current_path: &str, href: &str) -> bool {
    trim_trailing_slash(current_path) == trim_trailing_slash(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(SiteRoute::from_path("/"), SiteRoute::Home);
        assert_eq!(SiteRoute::from_path("/product"), SiteRoute::Product);
        assert_eq!(SiteRoute::from_path("/services"), SiteRoute::Services);
        assert_eq!(SiteRoute::from_path("/contact"), SiteRoute::Contact);
        assert_eq!(
            SiteRoute::from_path("/digital-marketing"),
            SiteRoute::DigitalMarketing
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(SiteRoute::from_path("/pricing"), SiteRoute::NotFound);
        assert_eq!(SiteRoute::from_path(""), SiteRoute::NotFound);
        assert_eq!(SiteRoute::from_path("/Product"), SiteRoute::NotFound);
        assert_eq!(
            SiteRoute::NotFound.content(),
            RouteContent::Markup(NOT_FOUND_MARKUP)
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(SiteRoute::from_path("/product/"), SiteRoute::Product);
        assert_eq!(SiteRoute::from_path("/product//"), SiteRoute::NotFound);
    }

    #[test]
    fn remote_routes_point_at_html_files() {
        assert_eq!(
            SiteRoute::Product.content(),
            RouteContent::Remote("/product.html")
        );
        assert_eq!(
            SiteRoute::DigitalMarketing.content(),
            RouteContent::Remote("/digital-marketing.html")
        );
        assert_eq!(SiteRoute::Home.content(), RouteContent::Home);
    }

    #[test]
    fn menu_paths_round_trip() {
        for route in SiteRoute::menu() {
            let path = route.path().unwrap();
            assert_eq!(SiteRoute::from_path(path), route);
        }
        assert!(SiteRoute::NotFound.path().is_none());
    }

    #[test]
    fn not_found_markup_links_home() {
        assert!(NOT_FOUND_MARKUP.contains(r#"href="/""#));
        assert!(NOT_FOUND_MARKUP.contains("Page Not Found"));
        assert!(ERROR_MARKUP.contains("Oops! Something went wrong"));
    }

    #[test]
    fn active_link_matching() {
        assert!(is_active("/product", "/product"));
        assert!(is_active("/product/", "/product"));
        assert!(!is_active("/product", "/"));
        assert!(is_active("/", "/"));
    }
}
