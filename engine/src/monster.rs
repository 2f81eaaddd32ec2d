use crate::Dice;
use crate::content::{BossStats, GruntTable};
use crate::life::Vitality;
use crate::party::Adventurer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterKind {
    Grunt,
    Boss,
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    pub vitality: Vitality,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Monster {
    /// Roll a grunt from the bestiary ranges.
    pub fn grunt(table: &GruntTable, dice: &mut Dice) -> Self {
        let name = table.names[dice.index(table.names.len())].clone();
        Self {
            name,
            kind: MonsterKind::Grunt,
            vitality: Vitality::new(dice.range(table.health[0], table.health[1])),
            attack: dice.range(table.attack[0], table.attack[1]),
            defense: dice.range(table.defense[0], table.defense[1]),
            speed: dice.range(table.speed[0], table.speed[1]),
        }
    }

    pub fn boss(stats: &BossStats) -> Self {
        Self {
            name: stats.name.clone(),
            kind: MonsterKind::Boss,
            vitality: Vitality::new(stats.max_health),
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.alive
    }
}

/// Uniform pick among living party members; None once the party is wiped.
pub fn pick_target(party: &[Adventurer], dice: &mut Dice) -> Option<usize> {
    let living: Vec<usize> = party
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_alive())
        .map(|(i, _)| i)
        .collect();
    if living.is_empty() {
        return None;
    }
    Some(living[dice.index(living.len())])
}
