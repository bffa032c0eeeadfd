//! Page fetcher abstraction
//!
//! The listing site renders its records client-side, so fetching a page
//! means driving a real browser. The driver only ever talks to the
//! `PageFetcher` trait; the WebDriver implementation lives behind it, and
//! tests substitute a scripted fetcher returning canned fragments.

mod webdriver;

pub use webdriver::WebDriverFetcher;

use thiserror::Error;

/// Errors that can occur while fetching or reading a listing page
///
/// Fetch errors are per-page, not fatal: the driver logs them, skips the
/// page, and continues with the next page index.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("timed out after {timeout_ms}ms waiting for '{selector}'")]
    SelectorTimeout { selector: String, timeout_ms: u64 },

    #[error("fetch failed: {0}")]
    Failed(String),
}

/// Capability interface over the browser automation layer
///
/// One `Handle` is a page-scoped resource (a browser tab); the driver opens
/// one per listing page and releases it on every exit path. `Fragment`s are
/// the per-record DOM handles found under the record selector.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    type Handle;
    type Fragment;

    /// Acquires a fresh page-scoped resource
    async fn open_page(&mut self) -> Result<Self::Handle, FetchError>;

    /// Navigates the page to the given URL
    async fn navigate(&mut self, page: &Self::Handle, url: &str) -> Result<(), FetchError>;

    /// Blocks until an element matching `selector` is present on the page
    async fn wait_for_selector(
        &mut self,
        page: &Self::Handle,
        selector: &str,
    ) -> Result<(), FetchError>;

    /// Returns all fragments on the page matching `selector`
    async fn query_all(
        &mut self,
        page: &Self::Handle,
        selector: &str,
    ) -> Result<Vec<Self::Fragment>, FetchError>;

    /// Extracts the text content of the first `selector` match inside a
    /// fragment, or `None` if the fragment has no such element
    async fn extract_text(
        &mut self,
        fragment: &Self::Fragment,
        selector: &str,
    ) -> Result<Option<String>, FetchError>;

    /// Extracts an attribute of the first `selector` match inside a
    /// fragment; `None` if the element or the attribute is absent
    async fn extract_attribute(
        &mut self,
        fragment: &Self::Fragment,
        selector: &str,
        attr: &str,
    ) -> Result<Option<String>, FetchError>;

    /// Releases a page-scoped resource; best-effort, never fails the run
    async fn close_page(&mut self, page: Self::Handle);
}
