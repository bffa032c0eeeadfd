//! Scrape run orchestration
//!
//! The driver visits pages strictly sequentially: each listing page is
//! fetched, validated, and persisted before the next one begins, so records
//! land in the store in page order and, within a page, in fragment order.
//! The later CSV export relies on that insertion order.

use crate::fetcher::{FetchError, PageFetcher};
use crate::scrape::{
    ADDRESS_SELECTOR, NAME_SELECTOR, PHONE_ATTR, PHONE_SELECTOR, RECORD_SELECTOR,
    WEBSITE_ATTR, WEBSITE_SELECTOR,
};
use crate::store::{DealerRecord, DealerStore, StoreError};
use crate::validate::{region_from_code, validate_phone, validate_website};
use crate::{Config, ConfigError, DocksideError};
use phonenumber::country;
use std::time::Instant;

/// Aggregate counts for a whole scrape run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages the driver attempted (always the configured total)
    pub pages_attempted: u32,
    /// Pages skipped because the fetch itself failed
    pub pages_failed: u32,
    /// Records that passed validation and were accepted
    pub records_accepted: u64,
    /// Records dropped by validation
    pub records_rejected: u64,
}

/// Per-page counts, folded into the run summary
#[derive(Debug, Default, Clone, Copy)]
struct PageCounts {
    accepted: u64,
    rejected: u64,
}

/// Distinguishes skippable page failures from run-fatal store failures
enum PageError {
    Fetch(FetchError),
    Store(StoreError),
}

/// Pagination driver
///
/// Holds the fetcher and (outside dry-run) the store as explicit
/// dependencies; tests substitute a scripted fetcher and an in-memory store.
pub struct Scraper<'a, F: PageFetcher, S: DealerStore> {
    config: &'a Config,
    fetcher: &'a mut F,
    /// `None` selects dry-run: accepted records are printed, never persisted
    store: Option<&'a mut S>,
    region: country::Id,
}

impl<'a, F: PageFetcher, S: DealerStore> Scraper<'a, F, S> {
    /// Creates a driver for one run
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    /// * `fetcher` - The page fetcher to pull listing pages through
    /// * `store` - The store to write accepted records to, or `None` for a
    ///   dry run that only prints what would be stored
    pub fn new(
        config: &'a Config,
        fetcher: &'a mut F,
        store: Option<&'a mut S>,
    ) -> Result<Self, ConfigError> {
        let region = region_from_code(&config.listing.phone_region)
            .ok_or_else(|| ConfigError::UnknownRegion(config.listing.phone_region.clone()))?;

        Ok(Self {
            config,
            fetcher,
            store,
            region,
        })
    }

    /// Runs the full scrape across all configured pages
    ///
    /// Pages are visited in ascending index order with no early termination:
    /// a page yielding zero records is not the end of data, because the page
    /// count is configured rather than discovered. A failed page fetch is
    /// logged and skipped; a store error aborts the run.
    pub async fn run(&mut self) -> Result<RunSummary, DocksideError> {
        let total_pages = self.config.listing.total_pages;
        tracing::info!(
            "Scraping dealer information from {} listing pages",
            total_pages
        );

        let mut summary = RunSummary::default();

        for page in 0..total_pages {
            let started = Instant::now();
            summary.pages_attempted += 1;

            match self.scrape_page(page).await {
                Ok(counts) => {
                    summary.records_accepted += counts.accepted;
                    summary.records_rejected += counts.rejected;
                    tracing::info!(
                        "Page {}: {} dealers accepted, {} rejected, {:.2}s",
                        page,
                        counts.accepted,
                        counts.rejected,
                        started.elapsed().as_secs_f64()
                    );
                }
                Err(PageError::Fetch(e)) => {
                    summary.pages_failed += 1;
                    tracing::warn!("Page {}: fetch failed: {}; skipping page", page, e);
                }
                Err(PageError::Store(e)) => {
                    // A store that cannot persist must not keep scraping.
                    return Err(e.into());
                }
            }
        }

        tracing::info!("Total dealers accepted: {}", summary.records_accepted);
        Ok(summary)
    }

    /// Scrapes one page inside a page-scoped fetcher resource
    ///
    /// The handle is released on every exit path, including fetch failures
    /// partway through fragment extraction.
    async fn scrape_page(&mut self, page: u32) -> Result<PageCounts, PageError> {
        let handle = self.fetcher.open_page().await.map_err(PageError::Fetch)?;
        let outcome = self.scrape_page_contents(&handle, page).await;
        self.fetcher.close_page(handle).await;
        outcome
    }

    async fn scrape_page_contents(
        &mut self,
        handle: &F::Handle,
        page: u32,
    ) -> Result<PageCounts, PageError> {
        let url = self.config.listing.page_url(page);

        self.fetcher
            .navigate(handle, &url)
            .await
            .map_err(PageError::Fetch)?;
        self.fetcher
            .wait_for_selector(handle, RECORD_SELECTOR)
            .await
            .map_err(PageError::Fetch)?;

        let fragments = self
            .fetcher
            .query_all(handle, RECORD_SELECTOR)
            .await
            .map_err(PageError::Fetch)?;

        if fragments.is_empty() {
            tracing::info!("Page {}: no dealer records present", page);
        }

        let mut counts = PageCounts::default();

        for fragment in &fragments {
            let candidate = self
                .extract_candidate(fragment)
                .await
                .map_err(PageError::Fetch)?;

            let record = match self.validate_candidate(candidate) {
                Ok(record) => record,
                Err(reason) => {
                    counts.rejected += 1;
                    tracing::warn!("Page {}: dropped record: {}", page, reason);
                    continue;
                }
            };

            match &mut self.store {
                Some(store) => store.insert(&record).map_err(PageError::Store)?,
                None => println!(
                    "Dealer {}: {} | {} | {} | {}",
                    counts.accepted + 1,
                    record.name,
                    record.address,
                    record.phone.as_deref().unwrap_or("-"),
                    record.website.as_deref().unwrap_or("-")
                ),
            }
            counts.accepted += 1;
        }

        Ok(counts)
    }

    /// Pulls the raw fields for one record fragment out of the page
    async fn extract_candidate(
        &mut self,
        fragment: &F::Fragment,
    ) -> Result<RawCandidate, FetchError> {
        let name = self.fetcher.extract_text(fragment, NAME_SELECTOR).await?;
        let address = self
            .fetcher
            .extract_text(fragment, ADDRESS_SELECTOR)
            .await?;
        let phone = self
            .fetcher
            .extract_attribute(fragment, PHONE_SELECTOR, PHONE_ATTR)
            .await?;
        let website = self
            .fetcher
            .extract_attribute(fragment, WEBSITE_SELECTOR, WEBSITE_ATTR)
            .await?;

        Ok(RawCandidate {
            name,
            address,
            phone,
            website,
        })
    }

    /// Builds and validates a record; any failure drops the whole record
    ///
    /// A record with an invalid phone or website is rejected outright, never
    /// persisted with the offending field nulled out.
    fn validate_candidate(&self, candidate: RawCandidate) -> Result<DealerRecord, String> {
        let record = DealerRecord::from_raw(
            candidate.name,
            candidate.address,
            candidate.phone,
            candidate.website,
        )
        .map_err(|e| e.to_string())?;

        if let Some(phone) = &record.phone {
            validate_phone(phone, self.region).map_err(|e| e.to_string())?;
        }
        if let Some(website) = &record.website {
            validate_website(website).map_err(|e| e.to_string())?;
        }

        Ok(record)
    }
}

/// Raw extracted fields before trimming and validation
struct RawCandidate {
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    website: Option<String>,
}
