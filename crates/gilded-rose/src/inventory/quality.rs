use super::category::{Category, ItemKind};

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Restricts a quality score to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Signed change to apply to `quality` for one day.
///
/// `sell_in` is the value after this day's decrement. Conjured items double whatever the base
/// category yields, including the backstage pass crash, so callers must clamp the result.
pub fn quality_delta(kind: ItemKind, sell_in: i32, quality: i32) -> i32 {
    let base = match kind.category {
        Category::Legendary => return 0,
        Category::Regular => expiring_step(sell_in, -1),
        Category::Aged => expiring_step(sell_in, 1),
        Category::BackstagePass => backstage_pass_delta(sell_in, quality),
    };

    base.saturating_mul(kind.multiplier())
}

fn expiring_step(sell_in: i32, step: i32) -> i32 {
    if sell_in < 0 {
        step * 2
    } else {
        step
    }
}

fn backstage_pass_delta(sell_in: i32, quality: i32) -> i32 {
    if sell_in < 0 {
        return quality.saturating_neg();
    }

    if sell_in < 5 {
        3
    } else if sell_in < 10 {
        2
    } else {
        1
    }
}
