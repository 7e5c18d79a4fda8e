use crate::machikoro::player::{Player, PlayerNum, PlayerNumError};
use crate::machikoro::stock::Stock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SnapshotError {
    #[error("Invalid current player: {0}")]
    InvalidPlayerNumber(#[from] PlayerNumError),
    #[error("Current player does not match player {0}")]
    CurrentPlayerMismatch(PlayerNum),
    #[error("Die value {0} is outside 1-6")]
    InvalidDie(u8),
}

// The current player's turn sub-state
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Setup,
    Roll,
    Confirm,
    Steal,
    Buy,
    Won,
    // Sent by a server newer than this client
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Setup => "setup",
            Step::Roll => "roll",
            Step::Confirm => "confirm",
            Step::Steal => "steal",
            Step::Buy => "buy",
            Step::Won => "won",
            Step::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// Either die is null until it has been rolled; a single-die roll leaves the
// second one empty.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    #[serde(default)]
    pub die_one: Option<u8>,
    #[serde(default)]
    pub die_two: Option<u8>,
}

impl Roll {
    pub fn single(die: u8) -> Self {
        Roll {
            die_one: Some(die),
            die_two: None,
        }
    }

    pub fn double(die_one: u8, die_two: u8) -> Self {
        Roll {
            die_one: Some(die_one),
            die_two: Some(die_two),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.die_one.is_none() && self.die_two.is_none()
    }

    pub fn total(&self) -> Option<u8> {
        match (self.die_one, self.die_two) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0) + b.unwrap_or(0)),
        }
    }

    pub fn is_doubles(&self) -> bool {
        matches!((self.die_one, self.die_two), (Some(a), Some(b)) if a == b)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        for die in [self.die_one, self.die_two].into_iter().flatten() {
            if !(1..=6).contains(&die) {
                return Err(SnapshotError::InvalidDie(die));
            }
        }
        Ok(())
    }
}

// The shape the remote service sends. `currentPlayer` duplicates one of the
// three players and is only kept on the wire.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    player1: Player,
    player2: Player,
    player3: Player,
    stock: Stock,
    current_player: Player,
    current_player_number: i64,
    step: Step,
    #[serde(default)]
    recent_roll: Roll,
}

// Full game state as returned by every call to the remote service. Never
// patched in place: each response replaces the whole value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawSnapshot", into = "RawSnapshot")]
pub struct GameSnapshot {
    code: Option<String>,
    players: [Player; 3],
    stock: Stock,
    current: PlayerNum,
    step: Step,
    recent_roll: Roll,
}

impl TryFrom<RawSnapshot> for GameSnapshot {
    type Error = SnapshotError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let current = PlayerNum::try_from(raw.current_player_number)?;
        raw.recent_roll.validate()?;
        let snapshot = GameSnapshot {
            code: raw.code,
            players: [raw.player1, raw.player2, raw.player3],
            stock: raw.stock,
            current,
            step: raw.step,
            recent_roll: raw.recent_roll,
        };
        if *snapshot.current_player() != raw.current_player {
            return Err(SnapshotError::CurrentPlayerMismatch(current));
        }
        Ok(snapshot)
    }
}

impl From<GameSnapshot> for RawSnapshot {
    fn from(snapshot: GameSnapshot) -> Self {
        let current_player = snapshot.current_player().clone();
        let [player1, player2, player3] = snapshot.players;
        RawSnapshot {
            code: snapshot.code,
            player1,
            player2,
            player3,
            stock: snapshot.stock,
            current_player,
            current_player_number: i64::from(snapshot.current.number()),
            step: snapshot.step,
            recent_roll: snapshot.recent_roll,
        }
    }
}

impl GameSnapshot {
    pub fn new(
        players: [Player; 3],
        stock: Stock,
        current: PlayerNum,
        step: Step,
        recent_roll: Roll,
    ) -> Self {
        GameSnapshot {
            code: None,
            players,
            stock,
            current,
            step,
            recent_roll,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn player(&self, num: PlayerNum) -> &Player {
        &self.players[num.position()]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerNum, &Player)> {
        PlayerNum::ALL.into_iter().map(move |num| (num, self.player(num)))
    }

    pub fn current_player_num(&self) -> PlayerNum {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    // The bank's remaining supply
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn recent_roll(&self) -> Roll {
        self.recent_roll
    }

    pub fn winner(&self) -> Option<PlayerNum> {
        self.players()
            .find(|(_, player)| player.has_won())
            .map(|(num, _)| num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machikoro::card::CardIndex;
    use serde_json::{json, Value};

    fn player_json(coins: u32) -> Value {
        json!({
            "hasTrainStation": false,
            "hasShoppingMall": false,
            "hasAmusementPark": false,
            "hasRadioTower": false,
            "stock": { "0": 1, "2": 1 },
            "coins": coins
        })
    }

    fn snapshot_json(current: i64, current_coins: u32) -> Value {
        json!({
            "code": "ABCD",
            "player1": player_json(3),
            "player2": player_json(4),
            "player3": player_json(5),
            "stock": { "0": 6, "1": 6, "6": 4 },
            "currentPlayerNumber": current,
            "currentPlayer": player_json(current_coins),
            "step": "buy",
            "recentRoll": { "dieOne": 3, "dieTwo": null }
        })
    }

    #[test]
    fn test_decode_snapshot() {
        let snapshot: GameSnapshot = serde_json::from_value(snapshot_json(2, 4)).unwrap();
        assert_eq!(snapshot.code(), Some("ABCD"));
        assert_eq!(snapshot.current_player_num(), PlayerNum::P2);
        assert_eq!(snapshot.current_player().coins, 4);
        assert_eq!(snapshot.player(PlayerNum::P3).coins, 5);
        assert_eq!(snapshot.step(), Step::Buy);
        assert_eq!(snapshot.recent_roll(), Roll::single(3));
        assert_eq!(snapshot.stock().count(CardIndex::new(6).unwrap()), 4);
    }

    #[test]
    fn test_decode_rejects_current_player_mismatch() {
        // player 2 has 4 coins, the duplicated current player claims 9
        let result = serde_json::from_value::<GameSnapshot>(snapshot_json(2, 9));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Current player does not match player 2"), "{}", err);
    }

    #[test]
    fn test_decode_rejects_out_of_range_player_number() {
        assert!(serde_json::from_value::<GameSnapshot>(snapshot_json(0, 3)).is_err());
        assert!(serde_json::from_value::<GameSnapshot>(snapshot_json(4, 3)).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_die() {
        let mut value = snapshot_json(1, 3);
        value["recentRoll"] = json!({ "dieOne": 7, "dieTwo": 1 });
        assert!(serde_json::from_value::<GameSnapshot>(value).is_err());
    }

    #[test]
    fn test_decode_unknown_step_and_missing_roll() {
        let mut value = snapshot_json(1, 3);
        value["step"] = json!("end");
        value.as_object_mut().unwrap().remove("recentRoll");
        value.as_object_mut().unwrap().remove("code");
        let snapshot: GameSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(snapshot.step(), Step::Unknown);
        assert!(snapshot.recent_roll().is_empty());
        assert_eq!(snapshot.code(), None);
    }

    #[test]
    fn test_encode_restores_current_player() {
        let snapshot: GameSnapshot = serde_json::from_value(snapshot_json(3, 5)).unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["currentPlayerNumber"], json!(3));
        assert_eq!(value["currentPlayer"], value["player3"]);
        let decoded: GameSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_roll_totals() {
        assert_eq!(Roll::default().total(), None);
        assert_eq!(Roll::single(4).total(), Some(4));
        assert_eq!(Roll::double(3, 3).total(), Some(6));
        assert!(Roll::double(3, 3).is_doubles());
        assert!(!Roll::double(3, 4).is_doubles());
        assert!(!Roll::single(3).is_doubles());
    }

    #[test]
    fn test_winner() {
        let mut winner = Player::default();
        winner.has_train_station = true;
        winner.has_shopping_mall = true;
        winner.has_amusement_park = true;
        winner.has_radio_tower = true;
        let snapshot = GameSnapshot::new(
            [Player::default(), winner, Player::default()],
            Stock::default(),
            PlayerNum::P2,
            Step::Won,
            Roll::default(),
        );
        assert_eq!(snapshot.winner(), Some(PlayerNum::P2));
    }
}
