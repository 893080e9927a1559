use crate::inventory::{
    Item, AGED_TITLE, BACKSTAGE_PASS_TITLE, CONJURED_PREFIX, LEGENDARY_TITLE,
};

pub(super) fn regular(sell_in: i32, quality: i32) -> Item {
    Item::new("+5 Dexterity Vest", sell_in, quality)
}

pub(super) fn aged(sell_in: i32, quality: i32) -> Item {
    Item::new(AGED_TITLE, sell_in, quality)
}

pub(super) fn backstage_pass(sell_in: i32, quality: i32) -> Item {
    Item::new(BACKSTAGE_PASS_TITLE, sell_in, quality)
}

pub(super) fn legendary(sell_in: i32, quality: i32) -> Item {
    Item::new(LEGENDARY_TITLE, sell_in, quality)
}

pub(super) fn conjured(mut item: Item) -> Item {
    item.name = format!("{CONJURED_PREFIX}{}", item.name);
    item
}

/// The stock list the inn opens with.
pub(super) fn opening_stock() -> Vec<Item> {
    vec![
        regular(10, 20),
        aged(2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        legendary(0, 80),
        legendary(-1, 80),
        backstage_pass(15, 20),
        backstage_pass(10, 49),
        backstage_pass(5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
