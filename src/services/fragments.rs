use thiserror::Error;
#[cfg(feature = "hydrate")]
use tracing::error;

use crate::models::{ERROR_MARKUP, NOT_FOUND_MARKUP};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FragmentError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("could not parse fragment: {0}")]
    Dom(String),
}

/// Block shown in place of a fragment that failed to load or parse
pub fn fallback_for(err: &FragmentError) -> &'static str {
    match err {
        FragmentError::Network(_) | FragmentError::Status(_) => NOT_FOUND_MARKUP,
        FragmentError::Dom(_) => ERROR_MARKUP,
    }
}

/// Fetches an HTML file from the site root
#[cfg(feature = "hydrate")]
pub async fn load_fragment(src: &str) -> Result<String, FragmentError> {
    use gloo_net::http::Request;

    let response = Request::get(src)
        .send()
        .await
        .map_err(|e| FragmentError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FragmentError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FragmentError::Network(e.to_string()))
}

/// Inner HTML of the `#root` element in `html`, or all of `html` when it has none
#[cfg(feature = "hydrate")]
pub fn extract_root(html: &str) -> Result<String, FragmentError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlTemplateElement;

    let dom_err = |e: wasm_bindgen::JsValue| FragmentError::Dom(format!("{e:?}"));

    // A template parses without running scripts or loading images
    let template = leptos::prelude::document()
        .create_element("template")
        .map_err(dom_err)?
        .dyn_into::<HtmlTemplateElement>()
        .map_err(|_| FragmentError::Dom("not a template element".into()))?;
    template.set_inner_html(html);

    let root = template.content().query_selector("#root").map_err(dom_err)?;
    Ok(root.map(|el| el.inner_html()).unwrap_or_else(|| html.to_string()))
}

/// Markup to inject for a remote route. Never fails: a fetch error yields the
/// not-found block and a parse error the generic error block.
pub async fn fetch_fragment(src: &'static str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let html = match load_fragment(src).await {
            Ok(html) => html,
            Err(e) => {
                error!(%src, error = %e, "error loading HTML");
                return fallback_for(&e).to_string();
            }
        };
        match extract_root(&html) {
            Ok(content) => content,
            Err(e) => {
                error!(%src, error = %e, "error loading route");
                fallback_for(&e).to_string()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = src;
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_an_http_failure() {
        assert_eq!(FragmentError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(
            FragmentError::Network("offline".into()).to_string(),
            "request failed: offline"
        );
    }

    #[test]
    fn failed_fetch_falls_back_to_not_found() {
        assert_eq!(fallback_for(&FragmentError::Status(404)), NOT_FOUND_MARKUP);
        assert_eq!(fallback_for(&FragmentError::Status(500)), NOT_FOUND_MARKUP);
        assert_eq!(
            fallback_for(&FragmentError::Network("offline".into())),
            NOT_FOUND_MARKUP
        );
    }

    #[test]
    fn unparseable_fragment_falls_back_to_error_block() {
        let fallback = fallback_for(&FragmentError::Dom("template".into()));
        assert_eq!(fallback, ERROR_MARKUP);
        assert_ne!(fallback, NOT_FOUND_MARKUP);
    }
}
