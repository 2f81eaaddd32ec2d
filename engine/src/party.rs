use serde::{Deserialize, Serialize};

use crate::content::ClassStats;
use crate::life::Vitality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Warrior,
    Mage,
    Paladin,
    Barbarian,
    Priest,
    Thief,
}

impl ClassKind {
    pub const ALL: [ClassKind; 6] = [
        ClassKind::Warrior,
        ClassKind::Mage,
        ClassKind::Paladin,
        ClassKind::Barbarian,
        ClassKind::Priest,
        ClassKind::Thief,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Paladin => "Paladin",
            ClassKind::Barbarian => "Barbarian",
            ClassKind::Priest => "Priest",
            ClassKind::Thief => "Thief",
        }
    }

    /// Each class carries at most one special action; the dispatch is a
    /// plain enum so combat never needs to inspect concrete types.
    pub fn special(self) -> Option<SpecialAction> {
        match self {
            ClassKind::Warrior => None,
            ClassKind::Mage => Some(SpecialAction::MagicAttack),
            ClassKind::Paladin => Some(SpecialAction::HolyAttack),
            ClassKind::Barbarian => Some(SpecialAction::RageAttack),
            ClassKind::Priest => Some(SpecialAction::Cure),
            ClassKind::Thief => Some(SpecialAction::Steal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    MagicAttack,
    HolyAttack,
    RageAttack,
    Cure,
    Steal,
}

impl SpecialAction {
    pub fn label(self) -> &'static str {
        match self {
            SpecialAction::MagicAttack => "Magic attack",
            SpecialAction::HolyAttack => "Holy attack",
            SpecialAction::RageAttack => "Rage attack",
            SpecialAction::Cure => "Cure",
            SpecialAction::Steal => "Steal an object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPool {
    pub current: i32,
    pub max: i32,
}

impl ManaPool {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Restore a percentage of max mana (floored), clamped to max.
    /// Returns the amount actually gained.
    pub fn restore_percent(&mut self, percent: i32) -> i32 {
        let amount = ((self.max as f64) * (percent as f64 / 100.0)).floor() as i32;
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    /// Spend mana; false (and no change) when the pool is short.
    pub fn spend(&mut self, amount: i32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }
}

#[derive(Debug, Clone)]
pub struct Adventurer {
    pub name: String,
    pub class: ClassKind,
    pub vitality: Vitality,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub mana: Option<ManaPool>,
}

impl Adventurer {
    pub fn new(class: ClassKind, stats: &ClassStats) -> Self {
        Self {
            name: class.label().to_string(),
            class,
            vitality: Vitality::new(stats.max_health),
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            mana: stats.max_mana.map(ManaPool::new),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.alive
    }

    /// One-line stat summary for status screens.
    pub fn status_line(&self) -> String {
        if !self.is_alive() {
            return format!("{} — down (HP 0/{})", self.name, self.vitality.max_hp);
        }
        let mut line = format!(
            "{} — HP {}/{}, ATK {}, DEF {}, SPD {}",
            self.name,
            self.vitality.hp,
            self.vitality.max_hp,
            self.attack,
            self.defense,
            self.speed
        );
        if let Some(pool) = &self.mana {
            line.push_str(&format!(", MP {}/{}", pool.current, pool.max));
        }
        line
    }

    /// Short form used in target menus; downed members stay listed so
    /// revival items have someone to aim at.
    pub fn target_line(&self) -> String {
        let down = if self.is_alive() { "" } else { ", down" };
        format!(
            "{} (HP {}/{}{})",
            self.name, self.vitality.hp, self.vitality.max_hp, down
        )
    }
}
