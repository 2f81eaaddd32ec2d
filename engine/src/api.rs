use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::Dice;
use crate::combat::{Side, run_battle};
use crate::content;
use crate::inventory::Inventory;
use crate::life::Vitality;
use crate::monster::{Monster, MonsterKind};
use crate::party::{Adventurer, ClassKind};
use crate::prompt::ScriptedPrompter;

/// Scripted battle setup, usually loaded from a JSON file. Menu answers in
/// `script` are 1-based, matching what a player would type; when the
/// script runs dry the first option is taken.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleConfig {
    pub party: Vec<ClassKind>,
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub script: Vec<usize>,
    /// Answers for free-form number prompts (spell power).
    #[serde(default)]
    pub numbers: Vec<i32>,
    /// Extra starting items on top of the fresh-game defaults.
    #[serde(default)]
    pub items: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    #[serde(default)]
    pub speed: i32,
    #[serde(default)]
    pub boss: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleSim {
    pub winner: Side,
    pub rounds: u32,
    pub survivors: usize,
    pub party_hp_end: Vec<i32>,
    pub enemy_hp_end: Vec<i32>,
    pub log: Vec<String>,
}

pub fn load_battle_config(path: &str) -> Result<BattleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read battle config: {}", path))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse battle config: {}", path))
}

/// Run one battle under the interactive rules with scripted answers, and
/// report the outcome plus the full log.
pub fn simulate_battle(cfg: BattleConfig) -> Result<BattleSim> {
    if cfg.party.is_empty() {
        bail!("battle config has no party");
    }
    if cfg.enemies.is_empty() {
        bail!("battle config has no enemies");
    }

    let classes = content::class_stats()?;
    let mut party = Vec::with_capacity(cfg.party.len());
    for class in &cfg.party {
        let stats = content::stats_for(&classes, *class)?;
        party.push(Adventurer::new(*class, stats));
    }

    let mut enemies: Vec<Monster> = cfg.enemies.iter().map(monster_from_spec).collect();

    let mut inventory = Inventory::new();
    inventory.add("Potion", 2);
    inventory.add("Ether", 1);
    inventory.add("Piece of Star", 1);
    for (name, qty) in &cfg.items {
        inventory.add(name, *qty);
    }

    let mut dice = Dice::from_seed(cfg.seed);
    let mut prompter =
        ScriptedPrompter::new(cfg.script.iter().map(|n| n.saturating_sub(1)))
            .with_numbers(cfg.numbers.iter().copied());

    let mut logs = Vec::new();
    let report = run_battle(
        &mut party,
        &mut enemies,
        &mut inventory,
        &mut dice,
        &mut prompter,
        |msg| logs.push(msg),
    );

    Ok(BattleSim {
        winner: report.winner,
        rounds: report.rounds,
        survivors: party.iter().filter(|a| a.is_alive()).count(),
        party_hp_end: party.iter().map(|a| a.vitality.hp).collect(),
        enemy_hp_end: enemies.iter().map(|e| e.vitality.hp).collect(),
        log: logs,
    })
}

fn monster_from_spec(spec: &EnemySpec) -> Monster {
    Monster {
        name: spec.name.clone(),
        kind: if spec.boss {
            MonsterKind::Boss
        } else {
            MonsterKind::Grunt
        },
        vitality: Vitality::new(spec.max_health),
        attack: spec.attack,
        defense: spec.defense,
        speed: spec.speed,
    }
}
