use super::category::{classify, ItemKind};
use super::item::Item;
use super::quality::{clamp_quality, quality_delta};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Record of what a single day did to one item, kept for audits and the `--explain` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub kind: ItemKind,
    pub previous_sell_in: i32,
    pub previous_quality: i32,
    pub sell_in: i32,
    pub quality: i32,
    /// Raw delta before clamping; `None` when the item is exempt.
    pub delta: Option<i32>,
}

impl ItemUpdate {
    pub fn is_exempt(&self) -> bool {
        self.delta.is_none()
    }

    /// Quality change actually observed after clamping.
    pub fn applied_change(&self) -> i32 {
        self.quality - self.previous_quality
    }

    pub fn summary(&self) -> String {
        match self.delta {
            None => format!("{} [{}]: unchanged", self.name, self.kind.label()),
            Some(delta) => {
                let clamp_note = if delta != self.applied_change() {
                    format!(" (delta {delta:+} clamped)")
                } else {
                    String::new()
                };
                format!(
                    "{} [{}]: sellIn {} -> {}, quality {} -> {}{}",
                    self.name,
                    self.kind.label(),
                    self.previous_sell_in,
                    self.sell_in,
                    self.previous_quality,
                    self.quality,
                    clamp_note
                )
            }
        }
    }
}

/// Advances every item by one day and hands the collection back in the same order.
pub fn advance_day(mut items: Vec<Item>) -> Vec<Item> {
    advance_day_in_place(&mut items);
    items
}

pub fn advance_day_in_place(items: &mut [Item]) {
    debug!(items = items.len(), "advancing inventory by one day");
    items.iter_mut().for_each(advance_item);
}

/// Same as [`advance_day_in_place`], returning one [`ItemUpdate`] per item in input order.
pub fn advance_day_explained(items: &mut [Item]) -> Vec<ItemUpdate> {
    debug!(items = items.len(), "advancing inventory by one day");
    items.iter_mut().map(advance_item_explained).collect()
}

pub fn advance_item(item: &mut Item) {
    let kind = classify(&item.name);
    let previous = (item.sell_in, item.quality);
    let delta = step(item, kind);
    trace_step(item, kind, previous, delta);
}

pub fn advance_item_explained(item: &mut Item) -> ItemUpdate {
    let kind = classify(&item.name);
    let (previous_sell_in, previous_quality) = (item.sell_in, item.quality);
    let delta = step(item, kind);
    trace_step(item, kind, (previous_sell_in, previous_quality), delta);

    ItemUpdate {
        name: item.name.clone(),
        kind,
        previous_sell_in,
        previous_quality,
        sell_in: item.sell_in,
        quality: item.quality,
        delta,
    }
}

// Legendary items are skipped before any conjured handling.
fn step(item: &mut Item, kind: ItemKind) -> Option<i32> {
    if kind.is_legendary() {
        return None;
    }

    item.sell_in = item.sell_in.saturating_sub(1);
    let delta = quality_delta(kind, item.sell_in, item.quality);
    item.quality = clamp_quality(item.quality.saturating_add(delta));
    Some(delta)
}

fn trace_step(item: &Item, kind: ItemKind, previous: (i32, i32), delta: Option<i32>) {
    match delta {
        None => trace!(
            name = %item.name,
            category = kind.category.label(),
            conjured = kind.conjured,
            "exempt item left unchanged"
        ),
        Some(delta) => trace!(
            name = %item.name,
            category = kind.category.label(),
            conjured = kind.conjured,
            sell_in.before = previous.0,
            sell_in.after = item.sell_in,
            quality.before = previous.1,
            quality.after = item.quality,
            delta,
            "item advanced"
        ),
    }
}
