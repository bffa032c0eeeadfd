//! WebDriver-backed page fetcher
//!
//! Drives a Chrome session through a WebDriver server (chromedriver or
//! Selenium). Each listing page gets its own tab, closed again once the
//! page has been processed.

use crate::config::FetcherConfig;
use crate::fetcher::{FetchError, PageFetcher};
use std::time::Duration;
use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement, WindowHandle};
use tokio::time::Instant;

/// Page fetcher backed by a thirtyfour WebDriver session
pub struct WebDriverFetcher {
    driver: WebDriver,
    base_window: WindowHandle,
    selector_timeout: Duration,
}

impl WebDriverFetcher {
    /// Connects to the WebDriver server named in the configuration
    pub async fn connect(config: &FetcherConfig) -> Result<Self, FetchError> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        let base_window = driver.window().await?;

        Ok(Self {
            driver,
            base_window,
            selector_timeout: Duration::from_millis(config.selector_timeout_ms),
        })
    }

    /// Ends the browser session
    ///
    /// Must be called explicitly; a dropped session leaves the browser
    /// running on the WebDriver server.
    pub async fn shutdown(self) -> Result<(), FetchError> {
        self.driver.quit().await?;
        Ok(())
    }

    async fn close_tab(&mut self, tab: WindowHandle) -> Result<(), FetchError> {
        self.driver.switch_to_window(tab).await?;
        self.driver.close_window().await?;
        self.driver
            .switch_to_window(self.base_window.clone())
            .await?;
        Ok(())
    }
}

impl PageFetcher for WebDriverFetcher {
    type Handle = WindowHandle;
    type Fragment = WebElement;

    async fn open_page(&mut self) -> Result<Self::Handle, FetchError> {
        let tab = self.driver.new_tab().await?;
        Ok(tab)
    }

    async fn navigate(&mut self, page: &Self::Handle, url: &str) -> Result<(), FetchError> {
        self.driver.switch_to_window(page.clone()).await?;
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        page: &Self::Handle,
        selector: &str,
    ) -> Result<(), FetchError> {
        self.driver.switch_to_window(page.clone()).await?;

        let deadline = Instant::now() + self.selector_timeout;
        loop {
            if self.driver.find(By::Css(selector)).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(FetchError::SelectorTimeout {
                    selector: selector.to_string(),
                    timeout_ms: self.selector_timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    }

    async fn query_all(
        &mut self,
        page: &Self::Handle,
        selector: &str,
    ) -> Result<Vec<Self::Fragment>, FetchError> {
        self.driver.switch_to_window(page.clone()).await?;
        let elements = self.driver.find_all(By::Css(selector)).await?;
        Ok(elements)
    }

    async fn extract_text(
        &mut self,
        fragment: &Self::Fragment,
        selector: &str,
    ) -> Result<Option<String>, FetchError> {
        match fragment.find(By::Css(selector)).await {
            Ok(element) => Ok(Some(element.text().await?)),
            Err(_) => Ok(None),
        }
    }

    async fn extract_attribute(
        &mut self,
        fragment: &Self::Fragment,
        selector: &str,
        attr: &str,
    ) -> Result<Option<String>, FetchError> {
        match fragment.find(By::Css(selector)).await {
            Ok(element) => Ok(element.attr(attr).await?),
            Err(_) => Ok(None),
        }
    }

    async fn close_page(&mut self, page: Self::Handle) {
        // Releasing a tab is best-effort; a failure here must not take down
        // the rest of the run.
        if let Err(e) = self.close_tab(page).await {
            tracing::warn!("Failed to close page tab: {}", e);
        }
    }
}
