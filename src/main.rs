use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use zoekscan::cli::{Cli, OutputSink, prompt_location};
use zoekscan::client::HttpSearchClient;
use zoekscan::config::CONFIG;
use zoekscan::data_models::{SearchRequest, SearchTerm};
use zoekscan::paginator::{PageProgress, Paginator, RunSummary};
use zoekscan::reporter::{ConsoleReporter, LogFileReporter, Reporter};
use zoekscan::scanner::KeywordScanner;

#[tokio::main]
async fn main() -> Result<()> {
    // tracing-subscriber also picks up the log crate records from the library.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let location = match cli.location.clone() {
        Some(location) => location.trim().to_string(),
        None => prompt_location(&mut io::stdin().lock(), &mut io::stdout())
            .context("failed to read location keyword")?,
    };
    if location.is_empty() {
        bail!("no location keyword given");
    }

    let keywords = cli.keyword_source().load()?;
    let scanner = KeywordScanner::new(&keywords);
    if scanner.is_empty() {
        tracing::warn!("keyword list is empty, nothing can match");
    }

    let endpoint = cli.endpoint.clone().unwrap_or_else(|| CONFIG.endpoint.clone());
    let page_size = cli.page_size.unwrap_or(CONFIG.page_size);
    let client = HttpSearchClient::new(endpoint, CONFIG.timeout_secs.map(Duration::from_secs))?;
    let template = SearchRequest::new(
        vec![SearchTerm::new(location.as_str(), cli.field.as_str())],
        page_size,
        CONFIG.correlation_id.clone(),
    )
    .with_sort_order(cli.sort_order.as_str());
    let paginator = Paginator::new(client, template, page_size)?.with_max_pages(cli.max_pages);

    tracing::info!(
        endpoint = paginator.backend().endpoint(),
        location = location.as_str(),
        keywords = scanner.keywords().len(),
        "starting search"
    );

    let summary = match cli.output {
        OutputSink::Console => {
            let mut reporter = ConsoleReporter::stdout();
            run(&paginator, &scanner, &mut reporter, false).await?
        }
        OutputSink::Log => {
            let dir = cli
                .log_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&CONFIG.log_dir));
            let mut reporter = LogFileReporter::create(&dir)
                .with_context(|| format!("failed to create log file in {}", dir.display()))?;
            run(&paginator, &scanner, &mut reporter, true).await?
        }
    };

    tracing::info!(
        pages = summary.pages,
        results = summary.results_seen,
        matches = summary.matches,
        elapsed_secs = summary.elapsed.as_secs_f64(),
        "search finished"
    );
    if summary.any_matches() {
        println!("\nSearch completed.");
    } else {
        println!("\n0 results found.");
    }
    Ok(())
}

async fn run<R: Reporter>(
    paginator: &Paginator<HttpSearchClient>,
    scanner: &KeywordScanner,
    reporter: &mut R,
    show_progress: bool,
) -> Result<RunSummary> {
    let summary = paginator
        .run_with_progress(scanner, reporter, |progress: &PageProgress| {
            if show_progress {
                print!(
                    "\rTime elapsed: {:.2}s | Items written to log: {}",
                    progress.elapsed.as_secs_f64(),
                    progress.total_matches
                );
                io::stdout().flush().ok();
            }
        })
        .await
        .context("search aborted")?;
    Ok(summary)
}
