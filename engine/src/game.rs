use anyhow::Result;

use crate::Dice;
use crate::content::{self, ClassStats};
use crate::dungeon::{self, ExploreOutcome};
use crate::inventory::Inventory;
use crate::party::{Adventurer, ClassKind};
use crate::prompt::Prompter;

pub const PARTY_SIZE: usize = 3;

/// Run one whole game session: party creation, the main menu, and any
/// number of dungeon attempts, until the player exits.
pub fn run(
    dice: &mut Dice,
    prompter: &mut impl Prompter,
    mut log: impl FnMut(String),
) -> Result<()> {
    tracing::debug!("game session start");
    log("==============================================".to_string());
    log(" WELCOME TO THE DUNGEON — CHOOSE 3 ADVENTURERS".to_string());
    log("==============================================".to_string());

    let classes = content::class_stats()?;
    let mut party = create_party(&classes, prompter, &mut log)?;

    let mut inventory = Inventory::new();
    inventory.add("Potion", 2);
    inventory.add("Ether", 1);
    inventory.add("Piece of Star", 1);

    loop {
        let options: Vec<String> = [
            "View Party Status",
            "View Inventory",
            "Start Dungeon",
            "Exit Game",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        match prompter.choose("Please select an option:", &options) {
            0 => {
                log("=== Party Status ===".to_string());
                for member in &party {
                    log(format!("  {}", member.status_line()));
                }
            }
            1 => {
                log("=== Inventory ===".to_string());
                if inventory.is_empty() {
                    log("  (empty)".to_string());
                }
                for (name, qty) in inventory.items() {
                    log(format!("  {} x{}", name, qty));
                }
            }
            2 => {
                log("Entering the dungeon...".to_string());
                match dungeon::explore(&mut party, &mut inventory, dice, prompter, &mut log)? {
                    ExploreOutcome::Cleared => {
                        tracing::debug!("dungeon cleared");
                    }
                    ExploreOutcome::Wiped => {
                        tracing::debug!("party wiped");
                    }
                }
            }
            _ => {
                log("Exiting game...".to_string());
                return Ok(());
            }
        }
    }
}

/// Three picks from the six classes, no repeats.
fn create_party(
    classes: &[ClassStats],
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) -> Result<Vec<Adventurer>> {
    let mut picked: Vec<ClassKind> = Vec::new();
    let mut party = Vec::with_capacity(PARTY_SIZE);

    for slot in 1..=PARTY_SIZE {
        let remaining: Vec<ClassKind> = ClassKind::ALL
            .iter()
            .copied()
            .filter(|c| !picked.contains(c))
            .collect();
        let options: Vec<String> = remaining.iter().map(|c| c.label().to_string()).collect();
        let pick = prompter.choose(
            &format!("Choose a class for adventurer {}:", slot),
            &options,
        );
        let class = remaining[pick];
        picked.push(class);

        let stats = content::stats_for(classes, class)?;
        let member = Adventurer::new(class, stats);
        log(format!("{} has joined your party!", member.name));
        party.push(member);
    }

    log("Your party:".to_string());
    for member in &party {
        log(format!("  {}", member.status_line()));
    }
    Ok(party)
}
