use crate::types::channel_document::{Channel, ChannelDocument};
use anyhow::{anyhow, Result};
use tracing::warn;

/// Sums the declared totals and appends `second`'s items after `first`'s.
///
/// A declared total that disagrees with its item count is logged and then
/// summed anyway; the combined total is never recomputed from the items.
pub fn combine_documents(
    first: ChannelDocument,
    second: ChannelDocument,
) -> Result<ChannelDocument> {
    warn_on_total_mismatch("first", &first.channel);
    warn_on_total_mismatch("second", &second.channel);

    let total = first
        .channel
        .total
        .checked_add(second.channel.total)
        .ok_or_else(|| {
            anyhow!(
                "Combined total overflows: {} + {}",
                first.channel.total,
                second.channel.total
            )
        })?;

    let mut item = first.channel.item;
    item.extend(second.channel.item);

    Ok(ChannelDocument::new(total, item))
}

fn warn_on_total_mismatch(input: &str, channel: &Channel) {
    if !channel.declared_total_matches_items() {
        warn!(
            input,
            declared_total = channel.total,
            items = channel.item.len(),
            "declared total does not match item count, keeping declared value"
        );
    }
}
