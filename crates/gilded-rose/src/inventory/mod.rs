//! Inventory items and the rules that age them one day at a time.

mod category;
mod engine;
pub mod file;
mod item;
mod quality;

#[cfg(test)]
mod tests;

pub use category::{
    classify, Category, ItemKind, AGED_TITLE, BACKSTAGE_PASS_TITLE, CONJURED_PREFIX,
    LEGENDARY_TITLE,
};
pub use engine::{
    advance_day, advance_day_explained, advance_day_in_place, advance_item,
    advance_item_explained, ItemUpdate,
};
pub use file::{InventoryFileError, InventoryFormat};
pub use item::Item;
pub use quality::{clamp_quality, quality_delta, MAX_QUALITY, MIN_QUALITY};
