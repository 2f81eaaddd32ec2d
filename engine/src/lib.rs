use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod combat;
pub mod content;
pub mod dungeon;
pub mod game;
pub mod inventory;
pub mod items;
pub mod life;
pub mod monster;
pub mod party;
pub mod prompt;
pub mod rooms;

pub use combat::{BattleReport, BattleState, Side, run_battle};
pub use inventory::Inventory;
pub use items::{ItemError, ItemKind};
pub use life::Vitality;
pub use monster::{Monster, MonsterKind};
pub use party::{Adventurer, ClassKind, ManaPool, SpecialAction};
pub use prompt::{Prompter, ScriptedPrompter};

/// Seeded source for every random decision in the game: monster stats,
/// enemy targeting, chest traps, steal rolls. A run is replayable from
/// its seed.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    /// Inclusive integer range.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform index into a collection of `len` elements. `len` must be > 0.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Percentile roll in [0, 100).
    pub fn percentile(&mut self) -> f64 {
        self.rng.gen_range(0.0..100.0)
    }
}
