pub mod config;
pub mod process;
pub mod types;
mod util;

use crate::config::merge_config::Config;
use crate::types::channel_document::ChannelDocument;
use anyhow::Result;
use process::combine_documents::combine_documents;
use process::write_combined_document::write_combined_document;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Declared totals of both inputs and where their combination was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub first_total: i64,
    pub second_total: i64,
    pub combined_total: i64,
    pub output: PathBuf,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "first input items: {}", self.first_total)?;
        writeln!(f, "second input items: {}", self.second_total)?;
        writeln!(f, "combined total: {}", self.combined_total)?;
        write!(f, "saved as {}", self.output.display())
    }
}

/// Reads both channel documents, combines them and writes the result to
/// `output`. Nothing is written unless both inputs parse.
pub fn merge(first: &Path, second: &Path, output: &Path) -> Result<MergeSummary> {
    info!("Reading channel documents {:?} and {:?}", first, second);
    let first = ChannelDocument::read_from_file(first)?;
    let second = ChannelDocument::read_from_file(second)?;
    debug!(
        first_items = first.channel.item.len(),
        second_items = second.channel.item.len(),
        "Channel documents parsed"
    );

    let first_total = first.channel.total;
    let second_total = second.channel.total;
    let combined = combine_documents(first, second)?;

    info!("Writing combined document to {:?}", output);
    write_combined_document(&combined, output)?;

    Ok(MergeSummary {
        first_total,
        second_total,
        combined_total: combined.channel.total,
        output: output.to_path_buf(),
    })
}

pub fn run(config: &Config) -> Result<MergeSummary> {
    merge(&config.inputs.first, &config.inputs.second, &config.output)
}
