use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::party::ClassKind;

#[derive(Debug, Clone, Deserialize)]
pub struct ClassStats {
    pub class: ClassKind,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    #[serde(default)]
    pub max_mana: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GruntTable {
    pub names: Vec<String>,
    /// Inclusive [lo, hi] ranges.
    pub health: [i32; 2],
    pub attack: [i32; 2],
    pub defense: [i32; 2],
    pub speed: [i32; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct BossStats {
    pub name: String,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bestiary {
    pub grunts: GruntTable,
    pub boss: BossStats,
}

pub fn class_stats() -> Result<Vec<ClassStats>> {
    serde_json::from_str(include_str!("../content/classes.json"))
        .context("failed to parse classes.json")
}

/// Stat block for one class; errors if the content file is missing it.
pub fn stats_for(classes: &[ClassStats], class: ClassKind) -> Result<&ClassStats> {
    match classes.iter().find(|s| s.class == class) {
        Some(stats) => Ok(stats),
        None => bail!("no stat block for class {:?}", class),
    }
}

pub fn bestiary() -> Result<Bestiary> {
    serde_json::from_str(include_str!("../content/bestiary.json"))
        .context("failed to parse bestiary.json")
}
