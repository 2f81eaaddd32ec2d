use engine::inventory::{Inventory, REWARD_CATALOG};
use engine::Dice;

#[test]
fn add_and_query() {
    let mut inv = Inventory::new();
    inv.add("Potion", 2);
    inv.add("Potion", 1);
    assert_eq!(inv.count("Potion"), 3);
    assert!(inv.has("Potion"));
    assert!(!inv.has("Ether"));
    assert_eq!(inv.count("Ether"), 0);
}

#[test]
fn adding_zero_is_a_no_op() {
    let mut inv = Inventory::new();
    inv.add("Potion", 0);
    assert!(inv.is_empty());
    assert!(!inv.has("Potion"));
}

#[test]
fn remove_with_insufficient_stock_fails_and_leaves_inventory_unchanged() {
    let mut inv = Inventory::new();
    inv.add("Potion", 1);
    assert!(!inv.remove("Potion", 2));
    assert_eq!(inv.count("Potion"), 1);
    assert!(!inv.remove("Ether", 1));
}

#[test]
fn removing_the_last_unit_drops_the_key() {
    let mut inv = Inventory::new();
    inv.add("Potion", 1);
    assert!(inv.remove("Potion", 1));
    assert!(inv.is_empty());
    assert!(!inv.remove("Potion", 1));
}

#[test]
fn partial_remove_keeps_the_remainder() {
    let mut inv = Inventory::new();
    inv.add("Herbs", 3);
    assert!(inv.remove("Herbs", 2));
    assert_eq!(inv.count("Herbs"), 1);
}

#[test]
fn iteration_follows_insertion_order() {
    // Menu numbering depends on this staying stable.
    let mut inv = Inventory::new();
    inv.add("Potion", 2);
    inv.add("Ether", 1);
    inv.add("Piece of Star", 1);
    let keys: Vec<&String> = inv.items().keys().collect();
    assert_eq!(keys, ["Potion", "Ether", "Piece of Star"]);
}

#[test]
fn random_rewards_come_from_the_catalog() {
    let mut dice = Dice::from_seed(99);
    let rewards = Inventory::random_rewards(&mut dice, 5);
    assert_eq!(rewards.len(), 5);
    for item in rewards {
        assert!(REWARD_CATALOG.contains(&item));
    }
}
