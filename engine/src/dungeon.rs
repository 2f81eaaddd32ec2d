use anyhow::Result;

use crate::Dice;
use crate::content;
use crate::inventory::Inventory;
use crate::items;
use crate::party::Adventurer;
use crate::prompt::Prompter;
use crate::rooms::RoomKind;

/// The fixed crawl: two monster dens and two chests, then the boss.
pub const ROOM_SEQUENCE: [RoomKind; 5] = [
    RoomKind::Monsters,
    RoomKind::Chest,
    RoomKind::Monsters,
    RoomKind::Chest,
    RoomKind::Boss,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreOutcome {
    Cleared,
    Wiped,
}

/// Walk the party through the room sequence. Ends early with a loss once
/// the whole party is down; otherwise clears after the final room.
pub fn explore(
    party: &mut [Adventurer],
    inventory: &mut Inventory,
    dice: &mut Dice,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) -> Result<ExploreOutcome> {
    let bestiary = content::bestiary()?;

    for (i, room) in ROOM_SEQUENCE.iter().enumerate() {
        log(format!(
            "[ROOM] {} of {}: {}",
            i + 1,
            ROOM_SEQUENCE.len(),
            room.label()
        ));
        tracing::debug!(room = i + 1, kind = ?room, "entering room");
        room.enter(party, inventory, &bestiary, dice, prompter, &mut *log);

        if party.iter().all(|p| !p.is_alive()) {
            log("[END] every adventurer has fallen. Game over!".to_string());
            return Ok(ExploreOutcome::Wiped);
        }

        if i + 1 < ROOM_SEQUENCE.len() {
            between_rooms(party, inventory, prompter, log);
        }
    }

    log("[END] the dungeon is cleared. Congratulations!".to_string());
    Ok(ExploreOutcome::Cleared)
}

/// Breather menu between rooms; loops until the player moves on.
fn between_rooms(
    party: &mut [Adventurer],
    inventory: &mut Inventory,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    loop {
        let options: Vec<String> = [
            "Continue to the next room",
            "Check party status",
            "Use items",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        match prompter.choose("What would you like to do next?", &options) {
            1 => {
                for member in party.iter() {
                    log(format!("  {}", member.status_line()));
                }
            }
            2 => use_items_menu(party, inventory, prompter, log),
            _ => return,
        }
    }
}

/// Item submenu with a Back entry; after each use, while stock remains,
/// asks whether to keep going.
fn use_items_menu(
    party: &mut [Adventurer],
    inventory: &mut Inventory,
    prompter: &mut impl Prompter,
    log: &mut dyn FnMut(String),
) {
    loop {
        if inventory.is_empty() {
            log("[ITEM] your inventory is empty".to_string());
            return;
        }
        let names: Vec<String> = inventory.items().keys().cloned().collect();
        let mut options: Vec<String> = inventory
            .items()
            .iter()
            .map(|(name, qty)| format!("{} (x{})", name, qty))
            .collect();
        options.push("Back".to_string());

        let pick = prompter.choose("Choose an item to use:", &options);
        if pick == names.len() {
            return;
        }
        let item = names[pick].clone();

        let targets: Vec<String> = party.iter().map(Adventurer::target_line).collect();
        let tpick = prompter.choose(&format!("Use the {} on whom?", item), &targets);
        match items::apply_item(&item, &mut party[tpick], &mut *log) {
            Ok(()) => {
                inventory.remove(&item, 1);
            }
            Err(e) => log(format!("[ITEM] {}", e)),
        }

        if inventory.is_empty() {
            return;
        }
        let again = prompter.choose(
            "Use another item?",
            &["Yes".to_string(), "No".to_string()],
        );
        if again != 0 {
            return;
        }
    }
}
