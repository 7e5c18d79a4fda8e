mod card;
mod diff;
mod game_state;
mod gate;
mod landmark;
mod player;
mod stock;

pub use card::{card, cards, CardDef, CardIndex, CardIndexError, Category, RollTrigger, CARD_COUNT};
pub use diff::{diff, Change};
pub use game_state::{GameSnapshot, Roll, SnapshotError, Step};
pub use gate::{can_buy_card, can_buy_landmark, PurchaseError};
pub use landmark::{landmark, landmarks, LandmarkDef, LandmarkId, LandmarkIdError, LANDMARK_COUNT};
pub use player::{Player, PlayerNum, PlayerNumError};
pub use stock::Stock;
