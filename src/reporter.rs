use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::scanner::Match;

const SEPARATOR: &str = "-------------------------------";

/// Receives every match, in the order it was found.
pub trait Reporter {
    fn report(&mut self, hit: &Match<'_>) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn format_match(hit: &Match<'_>) -> String {
    format!(
        "Found in Title: {}\nSummary: {}\nLink: {}\n{SEPARATOR}\n",
        hit.result.title, hit.result.text_fragment, hit.result.deeplink_url
    )
}

/// Writes match blocks straight to a writer, stdout in the binary.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, hit: &Match<'_>) -> Result<()> {
        self.out.write_all(format_match(hit).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One log file per run, named after the time the run started.
pub struct LogFileReporter {
    path: PathBuf,
    file: BufWriter<File>,
}

impl LogFileReporter {
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        Self::create_at(dir, Local::now())
    }

    pub fn create_at(dir: impl AsRef<Path>, started: DateTime<Local>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(log_file_name(&started));
        let file = File::create(&path)?;
        log::info!("writing matches to {}", path.display());
        Ok(LogFileReporter {
            path,
            file: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for LogFileReporter {
    fn report(&mut self, hit: &Match<'_>) -> Result<()> {
        self.file.write_all(format_match(hit).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

pub fn log_file_name(started: &DateTime<Local>) -> String {
    format!("results_{}.log", started.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::CaseResult;
    use chrono::TimeZone;

    #[test]
    fn test_format_match_block() {
        let result = CaseResult::new("ECLI:NL:HR:2024:1", "Over de visserij", "https://x.test/1");
        let hit = Match {
            result: &result,
            keyword: "visserij",
        };
        assert_eq!(
            format_match(&hit),
            "Found in Title: ECLI:NL:HR:2024:1\nSummary: Over de visserij\nLink: https://x.test/1\n-------------------------------\n"
        );
    }

    #[test]
    fn test_log_file_name() {
        let started = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(log_file_name(&started), "results_20240309_070501.log");
    }

    #[test]
    fn test_console_reporter_writes_blocks() {
        let result = CaseResult::new("t", "f", "l");
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter
            .report(&Match {
                result: &result,
                keyword: "f",
            })
            .unwrap();
        reporter.finish().unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.starts_with("Found in Title: t\n"));
    }
}
