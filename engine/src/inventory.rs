use indexmap::IndexMap;

use crate::Dice;

/// Everything a chest can cough up. Most of these are trinkets with no
/// mechanical effect; the party hoards them anyway.
pub const REWARD_CATALOG: [&str; 22] = [
    "Potion",
    "Elixir",
    "Gold Coin",
    "Magic Scroll",
    "Sword",
    "Shield",
    "Armor",
    "Helmet",
    "Boots",
    "Ring",
    "Amulet",
    "Bow",
    "Arrow",
    "Dagger",
    "Staff",
    "Wand",
    "Herbs",
    "Gemstone",
    "Map",
    "Torch",
    "Rope",
    "Lantern",
];

/// Shared party inventory. Insertion order is preserved so item menus keep
/// stable numbering across prompts.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: IndexMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, qty: u32) {
        if qty == 0 {
            return;
        }
        *self.items.entry(name.to_string()).or_insert(0) += qty;
    }

    /// Remove `qty` units; false (and no change) when stock is short.
    /// A count reaching 0 drops the key entirely.
    pub fn remove(&mut self, name: &str, qty: u32) -> bool {
        let Some(count) = self.items.get_mut(name) else {
            return false;
        };
        if *count < qty {
            return false;
        }
        *count -= qty;
        if *count == 0 {
            self.items.shift_remove(name);
        }
        true
    }

    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    pub fn has(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &IndexMap<String, u32> {
        &self.items
    }

    /// `count` independent uniform draws from the catalog; duplicates allowed.
    pub fn random_rewards(dice: &mut Dice, count: usize) -> Vec<&'static str> {
        (0..count)
            .map(|_| REWARD_CATALOG[dice.index(REWARD_CATALOG.len())])
            .collect()
    }
}
