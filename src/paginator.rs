use std::time::{Duration, Instant};

use crate::client::SearchBackend;
use crate::data_models::SearchRequest;
use crate::error::{Result, ScanError};
use crate::reporter::Reporter;
use crate::scanner::KeywordScanner;

/// Snapshot handed to the progress callback after each non-empty page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageProgress {
    pub offset: u32,
    pub page_matches: usize,
    pub total_matches: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Every `StartRow` sent, in order, including the one that came back empty.
    pub offsets: Vec<u32>,
    pub pages: usize,
    pub results_seen: usize,
    pub matches: usize,
    pub pages_with_matches: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn any_matches(&self) -> bool {
        self.matches > 0
    }
}

/// Walks the result pages of one query from offset zero until an empty page.
pub struct Paginator<B> {
    backend: B,
    template: SearchRequest,
    page_size: u32,
    max_pages: Option<usize>,
}

impl<B: SearchBackend> Paginator<B> {
    pub fn new(backend: B, template: SearchRequest, page_size: u32) -> Result<Paginator<B>> {
        if page_size == 0 {
            return Err(ScanError::Config("page size must be at least 1".to_string()));
        }
        let template = SearchRequest {
            page_size,
            ..template
        };
        Ok(Paginator {
            backend,
            template,
            page_size,
            max_pages: None,
        })
    }

    /// Stop after `max_pages` non-empty pages even if more are available.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn run<R: Reporter>(
        &self,
        scanner: &KeywordScanner,
        reporter: &mut R,
    ) -> Result<RunSummary> {
        self.run_with_progress(scanner, reporter, |_| {}).await
    }

    pub async fn run_with_progress<R, F>(
        &self,
        scanner: &KeywordScanner,
        reporter: &mut R,
        mut on_page: F,
    ) -> Result<RunSummary>
    where
        R: Reporter,
        F: FnMut(&PageProgress),
    {
        let started = Instant::now();
        let mut summary = RunSummary::default();
        let mut offset: u32 = 0;

        loop {
            if self.max_pages.is_some_and(|max| summary.pages >= max) {
                log::info!("stopping after {} pages (page limit reached)", summary.pages);
                break;
            }

            let request = self.template.at_offset(offset);
            summary.offsets.push(offset);
            log::debug!("fetching page at offset {offset}");
            let response = self.backend.fetch_page(&request).await?;

            if response.results.is_empty() {
                log::info!("empty page at offset {offset}, search exhausted");
                break;
            }

            let matches = scanner.scan(&response.results);
            for hit in &matches {
                log::debug!("keyword {:?} matched {:?}", hit.keyword, hit.result.title);
                reporter.report(hit)?;
            }

            summary.pages += 1;
            summary.results_seen += response.results.len();
            summary.matches += matches.len();
            if !matches.is_empty() {
                summary.pages_with_matches += 1;
            }

            on_page(&PageProgress {
                offset,
                page_matches: matches.len(),
                total_matches: summary.matches,
                elapsed: started.elapsed(),
            });

            offset = offset.checked_add(self.page_size).ok_or_else(|| {
                ScanError::Config(format!("offset overflow after {offset}"))
            })?;
        }

        reporter.finish()?;
        summary.elapsed = started.elapsed();
        log::info!(
            "scanned {} results over {} pages, {} matches",
            summary.results_seen,
            summary.pages,
            summary.matches
        );
        Ok(summary)
    }
}
