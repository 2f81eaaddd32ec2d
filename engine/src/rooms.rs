use crate::Dice;
use crate::combat::run_battle;
use crate::content::Bestiary;
use crate::inventory::Inventory;
use crate::life::apply_damage;
use crate::monster::Monster;
use crate::party::Adventurer;
use crate::prompt::Prompter;

const GRUNTS_PER_ENCOUNTER: usize = 3;
const CHEST_TRAP_CHANCE: f64 = 0.3;
const CHEST_REWARD_COUNT: usize = 2;

/// One dungeon room: takes the party and the shared inventory, runs its
/// encounter, and returns once it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Monsters,
    Chest,
    Boss,
}

impl RoomKind {
    pub fn label(self) -> &'static str {
        match self {
            RoomKind::Monsters => "a den of monsters",
            RoomKind::Chest => "a dusty chest",
            RoomKind::Boss => "the boss lair",
        }
    }

    pub fn enter(
        self,
        party: &mut [Adventurer],
        inventory: &mut Inventory,
        bestiary: &Bestiary,
        dice: &mut Dice,
        prompter: &mut impl Prompter,
        log: &mut dyn FnMut(String),
    ) {
        match self {
            RoomKind::Monsters => {
                let mut enemies: Vec<Monster> = (0..GRUNTS_PER_ENCOUNTER)
                    .map(|_| Monster::grunt(&bestiary.grunts, dice))
                    .collect();
                run_battle(party, &mut enemies, inventory, dice, prompter, &mut *log);
            }
            RoomKind::Boss => {
                let mut enemies = vec![Monster::boss(&bestiary.boss)];
                run_battle(party, &mut enemies, inventory, dice, prompter, &mut *log);
            }
            RoomKind::Chest => chest(party, inventory, dice, log),
        }
    }
}

/// Trap or treasure. The trap springs on the first member still standing;
/// treasure is two random catalog items.
fn chest(
    party: &mut [Adventurer],
    inventory: &mut Inventory,
    dice: &mut Dice,
    log: &mut dyn FnMut(String),
) {
    let Some(target) = party.iter_mut().find(|p| p.is_alive()) else {
        return;
    };
    if dice.chance(CHEST_TRAP_CHANCE) {
        let dmg = target.vitality.max_hp / 5;
        log(format!("[CHEST] a trap springs on {}!", target.name));
        apply_damage(&target.name, &mut target.vitality, dmg, &mut *log);
    } else {
        let loot = Inventory::random_rewards(dice, CHEST_REWARD_COUNT);
        for item in &loot {
            inventory.add(item, 1);
        }
        log(format!("[CHEST] opened! You obtain: {}", loot.join(", ")));
    }
}
