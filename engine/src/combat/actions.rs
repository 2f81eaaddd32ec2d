use crate::Dice;
use crate::inventory::Inventory;
use crate::life::{apply_damage, heal_percent};
use crate::monster::Monster;
use crate::party::{Adventurer, SpecialAction};
use crate::prompt::Prompter;

const HOLY_FACTOR: f64 = 0.4;
const RAGE_FACTOR: f64 = 1.3;
const CURE_PERCENT: i32 = 25;

#[allow(clippy::too_many_arguments)]
pub fn perform(
    action: SpecialAction,
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    inventory: &mut Inventory,
    dice: &mut Dice,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    match action {
        SpecialAction::MagicAttack => magic_attack(idx, party, enemies, prompter, log),
        SpecialAction::HolyAttack => holy_attack(idx, party, enemies, log),
        SpecialAction::RageAttack => rage_attack(idx, party, enemies, dice, log),
        SpecialAction::Cure => cure(idx, party, prompter, log),
        SpecialAction::Steal => steal(idx, party, inventory, dice, log),
    }
}

fn first_living(enemies: &[Monster]) -> Option<usize> {
    enemies.iter().position(Monster::is_alive)
}

fn living_indices(enemies: &[Monster]) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive())
        .map(|(i, _)| i)
        .collect()
}

/// Player-chosen spell power, paid from the mana pool; damage ignores the
/// target's defense. Malformed or non-positive input cancels the cast.
fn magic_attack(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    let Some(target) = first_living(enemies) else {
        log("[SPELL] no enemy left to target".to_string());
        return;
    };
    let name = party[idx].name.clone();
    let Some(available) = party[idx].mana.as_ref().map(|pool| pool.current) else {
        log(format!("[SPELL][{}] has no mana pool", name));
        return;
    };
    let question = format!("Spell power for {} (mana available: {}):", name, available);
    let Some(power) = prompter.prompt_number(&question) else {
        log("[SPELL] invalid power, magic attack cancelled".to_string());
        return;
    };
    if power <= 0 {
        log("[SPELL] invalid power, magic attack cancelled".to_string());
        return;
    }
    let spent = party[idx]
        .mana
        .as_mut()
        .map(|pool| pool.spend(power))
        .unwrap_or(false);
    if !spent {
        log(format!(
            "[SPELL][{}] not enough mana for a {}-point spell",
            name, power
        ));
        return;
    }
    let enemy = &mut enemies[target];
    log(format!(
        "[SPELL][{}] hurls a {}-point bolt at {}",
        name, power, enemy.name
    ));
    apply_damage(&enemy.name, &mut enemy.vitality, power, &mut *log);
}

/// Radiant strike on the first living enemy at a fraction of the normal
/// attack formula.
fn holy_attack(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    log: &mut dyn FnMut(String),
) {
    let Some(target) = first_living(enemies) else {
        log("[HOLY] no enemy left to smite".to_string());
        return;
    };
    let enemy = &mut enemies[target];
    let dmg = ((party[idx].attack - enemy.defense) as f64 * HOLY_FACTOR).floor() as i32;
    log(format!(
        "[HOLY][{}] smites {} with holy light",
        party[idx].name, enemy.name
    ));
    apply_damage(&enemy.name, &mut enemy.vitality, dmg, &mut *log);
}

/// Heavy swing at a random living enemy; the rage costs a fifth of the
/// barbarian's own max HP and can knock them out.
fn rage_attack(
    idx: usize,
    party: &mut [Adventurer],
    enemies: &mut [Monster],
    dice: &mut Dice,
    log: &mut dyn FnMut(String),
) {
    let living = living_indices(enemies);
    if living.is_empty() {
        log("[RAGE] no enemy left to maul".to_string());
        return;
    }
    let target = living[dice.index(living.len())];
    let name = party[idx].name.clone();
    {
        let enemy = &mut enemies[target];
        let dmg = ((party[idx].attack - enemy.defense) as f64 * RAGE_FACTOR).floor() as i32;
        log(format!("[RAGE][{}] flies at {} in a fury", name, enemy.name));
        apply_damage(&enemy.name, &mut enemy.vitality, dmg, &mut *log);
    }
    let self_cost = party[idx].vitality.max_hp / 5;
    log(format!("[RAGE][{}] pays {} HP for the outburst", name, self_cost));
    apply_damage(&name, &mut party[idx].vitality, self_cost, &mut *log);
}

/// Mend self or a living ally for a quarter of their max HP. With no ally
/// standing, the ally path falls back to self-care.
fn cure(
    idx: usize,
    party: &mut [Adventurer],
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    let name = party[idx].name.clone();
    let options = vec!["Myself".to_string(), "An ally".to_string()];
    let pick = prompter.choose("Cure yourself or an ally?", &options);

    let target = if pick == 0 {
        idx
    } else {
        let allies: Vec<usize> = party
            .iter()
            .enumerate()
            .filter(|(i, a)| *i != idx && a.is_alive())
            .map(|(i, _)| i)
            .collect();
        if allies.is_empty() {
            log(format!("[CURE] no ally standing; {} tends to themself", name));
            idx
        } else {
            let labels: Vec<String> =
                allies.iter().map(|&i| party[i].name.clone()).collect();
            allies[prompter.choose("Choose an ally to cure:", &labels)]
        }
    };

    log(format!("[CURE][{}] speaks a mending prayer", name));
    let patient = &mut party[target];
    heal_percent(&patient.name, &mut patient.vitality, CURE_PERCENT, &mut *log);
}

/// Percentile pickpocket roll against a fixed loot table; anything found
/// goes straight into the shared inventory.
fn steal(
    idx: usize,
    party: &[Adventurer],
    inventory: &mut Inventory,
    dice: &mut Dice,
    log: &mut dyn FnMut(String),
) {
    let name = &party[idx].name;
    let roll = dice.percentile();
    let loot = if roll < 40.0 {
        None
    } else if roll < 70.0 {
        Some("Potion")
    } else if roll < 85.0 {
        Some("Piece of Star")
    } else if roll < 95.0 {
        Some("Ether")
    } else {
        Some("Half Star")
    };
    match loot {
        Some(item) => {
            inventory.add(item, 1);
            log(format!("[STEAL][{}] pockets a {}!", name, item));
        }
        None => log(format!("[STEAL][{}] comes up empty-handed", name)),
    }
}
