use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::keywords::{DEFAULT_KEYWORDS_FILE, KeywordSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputSink {
    /// Print matches to stdout.
    Console,
    /// Write matches to a timestamped file in the log directory.
    Log,
}

/// Scan case-law search results for keywords.
#[derive(Debug, Parser)]
#[command(name = "zoekscan", version)]
pub struct Cli {
    /// Search term sent to the API; prompted for when omitted.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Keyword to look for in result fragments (repeatable). Overrides --keywords-file.
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// File with one keyword per line.
    #[arg(long, default_value = DEFAULT_KEYWORDS_FILE)]
    pub keywords_file: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputSink::Log)]
    pub output: OutputSink,

    /// Directory for log files [env: ZOEK_LOG_DIR, default: logs]
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Results per request [env: ZOEK_PAGE_SIZE, default: 10]
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Stop after this many non-empty pages.
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Search endpoint [env: ZOEK_ENDPOINT]
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = crate::data_models::DEFAULT_SORT_ORDER)]
    pub sort_order: String,

    /// Field the search term applies to.
    #[arg(long, default_value = crate::data_models::DEFAULT_SEARCH_FIELD)]
    pub field: String,
}

impl Cli {
    pub fn keyword_source(&self) -> KeywordSource {
        if self.keywords.is_empty() {
            KeywordSource::File(self.keywords_file.clone())
        } else {
            KeywordSource::Inline(self.keywords.clone())
        }
    }
}

/// Ask for the location keyword on `output` and read one line from `input`.
pub fn prompt_location<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<String> {
    write!(output, "Enter a location keyword (e.g., 'urk'): ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
