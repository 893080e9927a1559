use serde::{Deserialize, Serialize};

pub const LEGENDARY_TITLE: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_TITLE: &str = "Aged Brie";
pub const BACKSTAGE_PASS_TITLE: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_PREFIX: &str = "Conjured ";

/// Closed set of behaviors an item can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never sold, never altered.
    Legendary,
    /// Gains quality as it ages.
    Aged,
    /// Gains quality as the concert nears, worthless afterwards.
    BackstagePass,
    Regular,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Legendary => "Legendary",
            Category::Aged => "Aged",
            Category::BackstagePass => "Backstage pass",
            Category::Regular => "Regular",
        }
    }

    fn from_title(title: &str) -> Self {
        match title {
            LEGENDARY_TITLE => Category::Legendary,
            AGED_TITLE => Category::Aged,
            BACKSTAGE_PASS_TITLE => Category::BackstagePass,
            _ => Category::Regular,
        }
    }
}

/// Classification derived from an item name: base category plus the conjured modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind {
    pub category: Category,
    pub conjured: bool,
}

impl ItemKind {
    pub fn is_legendary(&self) -> bool {
        self.category == Category::Legendary
    }

    /// Factor applied to the base quality delta.
    pub fn multiplier(&self) -> i32 {
        if self.conjured {
            2
        } else {
            1
        }
    }

    pub fn label(&self) -> String {
        if self.conjured {
            format!("Conjured {}", self.category.label().to_lowercase())
        } else {
            self.category.label().to_string()
        }
    }
}

/// Derives the kind of an item from its name.
///
/// Titles match exactly, optionally preceded by a single [`CONJURED_PREFIX`]. Matching is
/// case-sensitive; any other name is [`Category::Regular`].
pub fn classify(name: &str) -> ItemKind {
    let (title, conjured) = match name.strip_prefix(CONJURED_PREFIX) {
        Some(rest) => (rest, true),
        None => (name, false),
    };

    ItemKind {
        category: Category::from_title(title),
        conjured,
    }
}
