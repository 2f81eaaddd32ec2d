use thiserror::Error;

use crate::life::{heal_percent, resurrect_percent};
use crate::party::Adventurer;

pub const POTION_HEAL_PERCENT: i32 = 50;
pub const ETHER_MANA_PERCENT: i32 = 30;
pub const STAR_PIECE_REVIVE_PERCENT: i32 = 20;
pub const STAR_PIECE_HEAL_PERCENT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Potion,
    Ether,
    PieceOfStar,
    HalfStar,
    /// Anything else from the reward catalog: no mechanical effect.
    Trinket,
}

impl ItemKind {
    pub fn classify(name: &str) -> ItemKind {
        match name {
            "Potion" => ItemKind::Potion,
            "Ether" => ItemKind::Ether,
            "Piece of Star" => ItemKind::PieceOfStar,
            "Half Star" => ItemKind::HalfStar,
            _ => ItemKind::Trinket,
        }
    }
}

/// Why an item could not be applied. The unit is not consumed in that case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("{0} is down and cannot benefit from that")]
    TargetDown(String),
    #[error("{0} has no magic to restore")]
    NoManaPool(String),
}

/// Apply one unit of `name` to `target`. Ok means the unit was spent;
/// callers are responsible for decrementing the inventory.
pub fn apply_item(
    name: &str,
    target: &mut Adventurer,
    mut log: impl FnMut(String),
) -> Result<(), ItemError> {
    match ItemKind::classify(name) {
        ItemKind::Potion => {
            if !target.is_alive() {
                return Err(ItemError::TargetDown(target.name.clone()));
            }
            heal_percent(&target.name, &mut target.vitality, POTION_HEAL_PERCENT, &mut log);
            Ok(())
        }
        ItemKind::Ether => {
            if !target.is_alive() {
                return Err(ItemError::TargetDown(target.name.clone()));
            }
            let name = target.name.clone();
            match target.mana.as_mut() {
                Some(pool) => {
                    let gained = pool.restore_percent(ETHER_MANA_PERCENT);
                    log(format!(
                        "[MANA][{}] +{} MP ({}/{})",
                        name, gained, pool.current, pool.max
                    ));
                    Ok(())
                }
                None => Err(ItemError::NoManaPool(name)),
            }
        }
        ItemKind::PieceOfStar => {
            if target.is_alive() {
                heal_percent(
                    &target.name,
                    &mut target.vitality,
                    STAR_PIECE_HEAL_PERCENT,
                    &mut log,
                );
            } else {
                resurrect_percent(
                    &target.name,
                    &mut target.vitality,
                    STAR_PIECE_REVIVE_PERCENT,
                    &mut log,
                );
            }
            Ok(())
        }
        ItemKind::HalfStar => {
            if target.is_alive() {
                heal_percent(&target.name, &mut target.vitality, 100, &mut log);
            } else {
                resurrect_percent(&target.name, &mut target.vitality, 100, &mut log);
            }
            Ok(())
        }
        ItemKind::Trinket => {
            log(format!(
                "[ITEM][{}] turns the {} over; nothing useful happens",
                target.name, name
            ));
            Ok(())
        }
    }
}
