use engine::combat::actions::perform;
use engine::monster::{Monster, MonsterKind};
use engine::party::{Adventurer, ClassKind, ManaPool, SpecialAction};
use engine::{Dice, Inventory, ScriptedPrompter, Vitality};

fn adventurer(class: ClassKind, max_hp: i32, attack: i32, mana: Option<i32>) -> Adventurer {
    Adventurer {
        name: class.label().to_string(),
        class,
        vitality: Vitality::new(max_hp),
        attack,
        defense: 10,
        speed: 10,
        mana: mana.map(ManaPool::new),
    }
}

fn dummy(defense: i32) -> Monster {
    Monster {
        name: "Troll".to_string(),
        kind: MonsterKind::Grunt,
        vitality: Vitality::new(100),
        attack: 10,
        defense,
        speed: 2,
    }
}

#[test]
fn rage_hits_hard_and_costs_a_fifth_of_max_hp() {
    let mut party = vec![adventurer(ClassKind::Barbarian, 150, 25, None)];
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new());

    perform(
        SpecialAction::RageAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    // floor((25 - 5) * 1.3) = 26 out, 150 / 5 = 30 paid.
    assert_eq!(enemies[0].vitality.hp, 74);
    assert_eq!(party[0].vitality.hp, 120);
}

#[test]
fn rage_can_knock_out_the_barbarian() {
    let mut party = vec![adventurer(ClassKind::Barbarian, 150, 25, None)];
    party[0].vitality.hp = 20;
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new());

    perform(
        SpecialAction::RageAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(party[0].vitality.hp, 0);
    assert!(!party[0].is_alive());
}

#[test]
fn magic_attack_spends_mana_and_ignores_defense() {
    let mut party = vec![adventurer(ClassKind::Mage, 100, 5, Some(100))];
    let mut enemies = vec![dummy(50)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new()).with_numbers([40]);

    perform(
        SpecialAction::MagicAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(enemies[0].vitality.hp, 60);
    assert_eq!(party[0].mana.map(|p| p.current), Some(60));
}

#[test]
fn magic_attack_without_a_number_cancels() {
    let mut party = vec![adventurer(ClassKind::Mage, 100, 5, Some(100))];
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new());

    perform(
        SpecialAction::MagicAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(enemies[0].vitality.hp, 100);
    assert_eq!(party[0].mana.map(|p| p.current), Some(100));
}

#[test]
fn magic_attack_with_too_little_mana_fizzles() {
    let mut party = vec![adventurer(ClassKind::Mage, 100, 5, Some(100))];
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new()).with_numbers([500]);

    perform(
        SpecialAction::MagicAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(enemies[0].vitality.hp, 100);
    assert_eq!(party[0].mana.map(|p| p.current), Some(100));
}

#[test]
fn holy_attack_uses_a_fraction_of_the_attack_formula() {
    let mut party = vec![adventurer(ClassKind::Paladin, 150, 15, None)];
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new());

    perform(
        SpecialAction::HolyAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    // floor((15 - 5) * 0.4) = 4.
    assert_eq!(enemies[0].vitality.hp, 96);
}

#[test]
fn holy_attack_against_heavy_armor_does_nothing() {
    let mut party = vec![adventurer(ClassKind::Paladin, 150, 15, None)];
    let mut enemies = vec![dummy(40)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new(Vec::new());

    perform(
        SpecialAction::HolyAttack,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    // A negative formula result never heals the target.
    assert_eq!(enemies[0].vitality.hp, 100);
    assert!(enemies[0].is_alive());
}

#[test]
fn cure_self_restores_a_quarter() {
    let mut party = vec![adventurer(ClassKind::Priest, 100, 10, None)];
    party[0].vitality.hp = 40;
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new([0]);

    perform(
        SpecialAction::Cure,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(party[0].vitality.hp, 65);
}

#[test]
fn cure_falls_back_to_self_without_allies() {
    let mut party = vec![adventurer(ClassKind::Priest, 100, 10, None)];
    party[0].vitality.hp = 40;
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    let mut prompter = ScriptedPrompter::new([1]);

    perform(
        SpecialAction::Cure,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    assert_eq!(party[0].vitality.hp, 65);
}

#[test]
fn cure_can_target_a_living_ally() {
    let mut party = vec![
        adventurer(ClassKind::Priest, 100, 10, None),
        adventurer(ClassKind::Warrior, 150, 20, None),
    ];
    party[1].vitality.hp = 30;
    let mut enemies = vec![dummy(5)];
    let mut inventory = Inventory::new();
    let mut dice = Dice::from_seed(3);
    // "An ally", then the only ally in the list.
    let mut prompter = ScriptedPrompter::new([1, 0]);

    perform(
        SpecialAction::Cure,
        0,
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        &mut |_| {},
    );

    // round(150 * 0.25) = 38.
    assert_eq!(party[1].vitality.hp, 68);
    assert_eq!(party[0].vitality.hp, 100);
}

#[test]
fn steal_adds_at_most_one_known_item() {
    let known = ["Potion", "Piece of Star", "Ether", "Half Star"];
    for seed in 0..16 {
        let mut party = vec![adventurer(ClassKind::Thief, 120, 15, None)];
        let mut enemies = vec![dummy(5)];
        let mut inventory = Inventory::new();
        let mut dice = Dice::from_seed(seed);
        let mut prompter = ScriptedPrompter::new(Vec::new());

        perform(
            SpecialAction::Steal,
            0,
            &mut party,
            &mut enemies,
            &mut inventory,
            &mut dice,
            &mut prompter,
            &mut |_| {},
        );

        let total: u32 = inventory.items().values().sum();
        assert!(total <= 1);
        for name in inventory.items().keys() {
            assert!(known.contains(&name.as_str()));
        }
    }
}
