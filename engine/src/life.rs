use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitality {
    pub hp: i32,
    pub max_hp: i32,
    pub alive: bool,
}

impl Vitality {
    pub fn new(max_hp: i32) -> Self {
        Self { hp: max_hp, max_hp, alive: true }
    }
}

/// Apply damage and handle drop-to-0. Negative damage is treated as 0.
/// Returns true if the target went down this call.
pub fn apply_damage(
    name: &str,
    vit: &mut Vitality,
    dmg: i32,
    mut log: impl FnMut(String),
) -> bool {
    if !vit.alive {
        return false;
    }

    let dmg = dmg.max(0);
    let before = vit.hp;
    vit.hp = (vit.hp - dmg).max(0);
    log(format!("[DMG][{}] {} → {} (−{})", name, before, vit.hp, dmg));

    if vit.hp == 0 {
        vit.alive = false;
        log(format!("[STATE][{}] drops to 0 HP and goes down", name));
        return true;
    }
    false
}

/// Heal by a percentage of max HP (rounded), clamped to max.
/// Only living targets can be healed; returns false when nothing happened.
pub fn heal_percent(
    name: &str,
    vit: &mut Vitality,
    percent: i32,
    mut log: impl FnMut(String),
) -> bool {
    if !vit.alive || percent <= 0 {
        return false;
    }
    let amount = ((vit.max_hp as f64) * (percent as f64 / 100.0)).round() as i32;
    let before = vit.hp;
    vit.hp = (vit.hp + amount).min(vit.max_hp);
    log(format!(
        "[HEAL][{}] +{} HP ({} → {})",
        name,
        vit.hp - before,
        before,
        vit.hp
    ));
    true
}

/// Revive a downed target at a percentage of max HP (floored, at least 1).
/// Only downed targets can be revived; returns false when nothing happened.
pub fn resurrect_percent(
    name: &str,
    vit: &mut Vitality,
    percent: i32,
    mut log: impl FnMut(String),
) -> bool {
    if vit.alive {
        return false;
    }
    let amount = ((vit.max_hp as f64) * (percent as f64 / 100.0)).floor() as i32;
    vit.hp = amount.clamp(1, vit.max_hp);
    vit.alive = true;
    log(format!(
        "[REVIVE][{}] is back on their feet with {} HP",
        name, vit.hp
    ));
    true
}
