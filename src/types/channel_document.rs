use crate::util::open_file;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::BufReader;
use std::path::Path;

/// Top-level record of an input or combined file: `{"channel": {...}}`.
///
/// Fields other than `channel.total` and `channel.item` are dropped on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDocument {
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Declared entry count. Trusted as-is, never recomputed from `item`.
    pub total: i64,
    /// Opaque records, passed through verbatim.
    pub item: Vec<serde_json::Value>,
}

impl ChannelDocument {
    pub fn new(total: i64, item: Vec<serde_json::Value>) -> Self {
        ChannelDocument {
            channel: Channel { total, item },
        }
    }

    pub fn read_from_file(path: &Path) -> Result<ChannelDocument> {
        let f = BufReader::new(open_file(path)?);
        serde_json::from_reader(f)
            .with_context(|| format!("Failed to parse channel document {:?}", path))
    }
}

impl Channel {
    pub fn declared_total_matches_items(&self) -> bool {
        usize::try_from(self.total).is_ok_and(|total| total == self.item.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ignores_fields_outside_total_and_item() {
        let document: ChannelDocument = serde_json::from_value(json!({
            "channel": {
                "title": "hanja",
                "total": 1,
                "start": 1,
                "item": [{"word": "天"}]
            },
            "version": 2
        }))
        .unwrap();

        assert_eq!(document, ChannelDocument::new(1, vec![json!({"word": "天"})]));
    }

    #[test]
    fn rejects_document_without_items() {
        let result = serde_json::from_value::<ChannelDocument>(json!({
            "channel": {"total": 3}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_integer_total() {
        let result = serde_json::from_value::<ChannelDocument>(json!({
            "channel": {"total": "3", "item": []}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn declared_total_check() {
        assert!(ChannelDocument::new(2, vec![json!(1), json!(2)])
            .channel
            .declared_total_matches_items());
        assert!(!ChannelDocument::new(10, vec![json!(1), json!(2)])
            .channel
            .declared_total_matches_items());
        assert!(!ChannelDocument::new(-1, vec![])
            .channel
            .declared_total_matches_items());
    }
}
