//! Product image URL resolution.
//!
//! Product records carry an `image` field that may be an external URL, a
//! path served by the API, or a bare upload filename. [`ImageResolver`]
//! turns any of those into something fetchable, and [`ImageChain`] models
//! what to try next when a source fails to load.

use url::Url;

use crate::models::Product;

/// Placeholder shown when nothing else is available.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder-product.png";

/// The three shapes an image reference can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// `http://` or `https://`; used as-is.
    Absolute(&'a str),
    /// Leading `/`; served relative to the API base.
    ServerPath(&'a str),
    /// Anything else; an upload filename.
    Filename(&'a str),
}

impl<'a> ImageRef<'a> {
    /// Classify a reference. Empty and whitespace-only input is `None`.
    pub fn classify(reference: Option<&'a str>) -> Option<Self> {
        let reference = reference.filter(|r| !r.trim().is_empty())?;
        Some(if is_absolute(reference) {
            ImageRef::Absolute(reference)
        } else if reference.starts_with('/') {
            ImageRef::ServerPath(reference)
        } else {
            ImageRef::Filename(reference)
        })
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolves image references against the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    api_base_url: String,
    placeholder: String,
}

impl ImageResolver {
    /// `api_base_url` is used verbatim apart from a trimmed trailing `/`.
    pub fn new(api_base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self {
            api_base_url,
            placeholder: placeholder.into(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Display URL for a reference, or `fallback` when there is none.
    pub fn resolve(&self, reference: Option<&str>, fallback: &str) -> String {
        match ImageRef::classify(reference) {
            None => fallback.to_string(),
            Some(ImageRef::Absolute(url)) => url.to_string(),
            Some(ImageRef::ServerPath(path)) => format!("{}{path}", self.api_base_url),
            Some(ImageRef::Filename(name)) => format!("{}/uploads/{name}", self.api_base_url),
        }
    }

    /// [`resolve`](Self::resolve) with the configured placeholder as fallback.
    pub fn resolve_or_placeholder(&self, reference: Option<&str>) -> String {
        self.resolve(reference, &self.placeholder)
    }

    /// Dedicated per-product image endpoint. Non-positive ids get `fallback`.
    pub fn product_image_url(&self, product_id: i64, fallback: &str) -> String {
        if product_id <= 0 {
            return fallback.to_string();
        }
        format!("{}/products/{product_id}/img", self.api_base_url)
    }

    /// Sources to try for a product, best first.
    pub fn display_chain(&self, product: &Product) -> ImageChain {
        let mut sources = Vec::with_capacity(3);
        if ImageRef::classify(product.image.as_deref()).is_some() {
            sources.push(self.resolve_or_placeholder(product.image.as_deref()));
        }
        let endpoint = self.product_image_url(product.id, &self.placeholder);
        if endpoint != self.placeholder {
            sources.push(endpoint);
        }
        sources.push(self.placeholder.clone());
        ImageChain {
            sources,
            position: 0,
        }
    }
}

/// Ordered fallback sources: inline reference, product endpoint, placeholder.
///
/// Mirrors an `<img onerror>` handler that swaps `src` at most twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChain {
    sources: Vec<String>,
    position: usize,
}

impl ImageChain {
    /// Source to display now.
    pub fn current(&self) -> &str {
        &self.sources[self.position]
    }

    /// Advance after the current source failed. Returns `None` once the
    /// placeholder itself has failed; the chain then stays on it.
    pub fn next_after_error(&mut self) -> Option<&str> {
        if self.position + 1 >= self.sources.len() {
            return None;
        }
        self.position += 1;
        Some(&self.sources[self.position])
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

/// True for `http://` and `https://` references.
pub fn is_external_url(reference: Option<&str>) -> bool {
    reference.is_some_and(is_absolute)
}

/// True for any non-empty reference served by the backend.
pub fn is_backend_image(reference: Option<&str>) -> bool {
    reference.is_some_and(|r| !r.is_empty()) && !is_external_url(reference)
}

/// Basic sanity check before rendering. Absolute URLs must parse.
pub fn is_valid_image_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    if is_absolute(url) {
        return Url::parse(url).is_ok();
    }
    true
}
