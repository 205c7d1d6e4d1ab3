use crate::types::channel_document::ChannelDocument;
use crate::util::create_new_file;
use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `document` with two-space indentation and literal non-ASCII text,
/// replacing whatever is at `path`.
pub fn write_combined_document(document: &ChannelDocument, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(create_new_file(path)?);
    serde_json::to_writer_pretty(&mut writer, document)
        .with_context(|| format!("Failed to serialize combined document to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write combined document to {:?}", path))?;
    Ok(())
}
