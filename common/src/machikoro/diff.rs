use crate::machikoro::card::CardIndex;
use crate::machikoro::game_state::{GameSnapshot, Step};
use crate::machikoro::landmark::{landmarks, LandmarkId};
use crate::machikoro::player::PlayerNum;

// A single visible difference between two consecutive snapshots, used to
// highlight what an action did.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    Turn { from: PlayerNum, to: PlayerNum },
    Step { from: Step, to: Step },
    Coins { player: PlayerNum, from: u32, to: u32 },
    Cards { player: PlayerNum, card: CardIndex, from: u32, to: u32 },
    Landmark { player: PlayerNum, landmark: LandmarkId },
    Bank { card: CardIndex, from: u32, to: u32 },
}

// Everything that differs from `before` to `after`. Player changes come
// first in seat order, then the bank, then turn bookkeeping.
pub fn diff(before: &GameSnapshot, after: &GameSnapshot) -> Vec<Change> {
    let mut changes = Vec::new();
    for ((player, old), (_, new)) in before.players().zip(after.players()) {
        if old.coins != new.coins {
            changes.push(Change::Coins {
                player,
                from: old.coins,
                to: new.coins,
            });
        }
        for (card, from, to) in new.stock.changes_since(&old.stock) {
            changes.push(Change::Cards {
                player,
                card,
                from,
                to,
            });
        }
        for def in landmarks() {
            if new.has_landmark(def.id()) && !old.has_landmark(def.id()) {
                changes.push(Change::Landmark {
                    player,
                    landmark: def.id(),
                });
            }
        }
    }
    for (card, from, to) in after.stock().changes_since(before.stock()) {
        changes.push(Change::Bank { card, from, to });
    }
    if before.current_player_num() != after.current_player_num() {
        changes.push(Change::Turn {
            from: before.current_player_num(),
            to: after.current_player_num(),
        });
    }
    if before.step() != after.step() {
        changes.push(Change::Step {
            from: before.step(),
            to: after.step(),
        });
    }
    changes
}
