use super::common::*;
use crate::inventory::{
    advance_day, advance_day_explained, advance_day_in_place, advance_item, Category, Item,
};

#[test]
fn advance_item_decrements_sell_in_before_pricing() {
    // sellIn 0 becomes -1 first, so the expired rate applies on the same day.
    let mut item = regular(0, 20);

    advance_item(&mut item);

    assert_eq!(item, regular(-1, 18));
}

#[test]
fn legendary_items_are_untouched() {
    let mut items = vec![legendary(0, 80), conjured(legendary(10, 80))];
    let before = items.clone();

    for _ in 0..5 {
        advance_day_in_place(&mut items);
    }

    assert_eq!(items, before);
}

#[test]
fn names_are_never_rewritten() {
    let names: Vec<String> = opening_stock().into_iter().map(|item| item.name).collect();

    let advanced = advance_day(opening_stock());

    let after: Vec<String> = advanced.into_iter().map(|item| item.name).collect();
    assert_eq!(after, names);
}

#[test]
fn opening_stock_after_one_day() {
    let advanced = advance_day(opening_stock());

    assert_eq!(
        advanced,
        vec![
            regular(9, 19),
            aged(1, 1),
            Item::new("Elixir of the Mongoose", 4, 6),
            legendary(0, 80),
            legendary(-1, 80),
            backstage_pass(14, 21),
            backstage_pass(9, 50),
            backstage_pass(4, 50),
            Item::new("Conjured Mana Cake", 2, 4),
        ]
    );
}

#[test]
fn days_compound() {
    let mut items = vec![aged(1, 0), backstage_pass(11, 10), regular(1, 10)];

    advance_day_in_place(&mut items);
    advance_day_in_place(&mut items);
    advance_day_in_place(&mut items);

    // Brie: +1 at sellIn 0, then +2 twice once expired.
    assert_eq!(items[0], aged(-2, 5));
    // Pass: +1 at 10, then +2 at 9 and 8.
    assert_eq!(items[1], backstage_pass(8, 15));
    // Vest: -1 at 0, then -2 twice.
    assert_eq!(items[2], regular(-2, 5));
}

#[test]
fn backstage_pass_is_worthless_after_the_concert() {
    let mut items = vec![backstage_pass(1, 30)];

    advance_day_in_place(&mut items);
    assert_eq!(items[0], backstage_pass(0, 33));

    advance_day_in_place(&mut items);
    assert_eq!(items[0], backstage_pass(-1, 0));
}

#[test]
fn explained_updates_match_plain_advance() {
    let mut explained = opening_stock();
    let updates = advance_day_explained(&mut explained);

    assert_eq!(explained, advance_day(opening_stock()));
    assert_eq!(updates.len(), explained.len());

    let sulfuras = &updates[3];
    assert!(sulfuras.is_exempt());
    assert_eq!(sulfuras.kind.category, Category::Legendary);
    assert_eq!(sulfuras.summary(), "Sulfuras, Hand of Ragnaros [Legendary]: unchanged");

    let mana_cake = &updates[8];
    assert_eq!(mana_cake.delta, Some(-2));
    assert_eq!(mana_cake.applied_change(), -2);
    assert!(mana_cake.kind.conjured);
}

#[test]
fn explained_summary_notes_clamping() {
    let mut items = vec![backstage_pass(10, 49)];

    let updates = advance_day_explained(&mut items);

    assert_eq!(updates[0].delta, Some(2));
    assert_eq!(updates[0].applied_change(), 1);
    assert_eq!(
        updates[0].summary(),
        "Backstage passes to a TAFKAL80ETC concert [Backstage pass]: sellIn 10 -> 9, quality 49 -> 50 (delta +2 clamped)"
    );
}

#[test]
fn extreme_sell_in_saturates() {
    let mut item = regular(i32::MIN, 10);

    advance_item(&mut item);

    assert_eq!(item, regular(i32::MIN, 8));
}
