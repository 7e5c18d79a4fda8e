use crate::machikoro::card::CardDef;
use crate::machikoro::game_state::{GameSnapshot, Step};
use crate::machikoro::landmark::LandmarkDef;
use thiserror::Error;

// Reasons a purchase is refused locally, before any request is sent. The
// messages are shown to the player as-is.
#[derive(Error, Debug, PartialEq)]
pub enum PurchaseError {
    #[error("You are not currently in the buy phase of your turn.")]
    WrongPhase { step: Step },
    #[error("You cannot afford this purchase ({coins} coins, costs {cost}), please select another card or end your turn.")]
    InsufficientFunds { coins: u32, cost: u32 },
    #[error("You may only have 1 copy of {name}, please select another card or end your turn.")]
    DuplicateLimit { name: &'static str },
}

// validates, in order:
// - the current step is the buy step
// - the current player can pay for the card
// - a purple card is not already owned
pub fn can_buy_card(snapshot: &GameSnapshot, card: &CardDef) -> Result<(), PurchaseError> {
    check_buy_step(snapshot)?;
    let player = snapshot.current_player();
    check_funds(player.coins, card.cost())?;
    if card.is_purple() && player.stock.owns(card.index()) {
        return Err(PurchaseError::DuplicateLimit { name: card.name() });
    }
    Ok(())
}

// Landmarks are plain flags on the server, buying one twice is harmless so
// there is no duplicate check.
pub fn can_buy_landmark(snapshot: &GameSnapshot, landmark: &LandmarkDef) -> Result<(), PurchaseError> {
    check_buy_step(snapshot)?;
    check_funds(snapshot.current_player().coins, landmark.cost())
}

fn check_buy_step(snapshot: &GameSnapshot) -> Result<(), PurchaseError> {
    match snapshot.step() {
        Step::Buy => Ok(()),
        step => Err(PurchaseError::WrongPhase { step }),
    }
}

fn check_funds(coins: u32, cost: u32) -> Result<(), PurchaseError> {
    if coins < cost {
        return Err(PurchaseError::InsufficientFunds { coins, cost });
    }
    Ok(())
}
