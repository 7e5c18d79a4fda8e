use crate::machikoro::landmark::LandmarkId;
use crate::machikoro::stock::Stock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Player number must be 1, 2 or 3, got {0}")]
pub struct PlayerNumError(pub String);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerNum {
    P1,
    P2,
    P3,
}

impl PlayerNum {
    pub const ALL: [PlayerNum; 3] = [PlayerNum::P1, PlayerNum::P2, PlayerNum::P3];

    // 1-based, as used on the wire and in request paths
    pub fn number(&self) -> u8 {
        match self {
            PlayerNum::P1 => 1,
            PlayerNum::P2 => 2,
            PlayerNum::P3 => 3,
        }
    }

    pub(crate) fn position(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<i64> for PlayerNum {
    type Error = PlayerNumError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(PlayerNum::P1),
            2 => Ok(PlayerNum::P2),
            3 => Ok(PlayerNum::P3),
            _ => Err(PlayerNumError(n.to_string())),
        }
    }
}

impl FromStr for PlayerNum {
    type Err = PlayerNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| PlayerNumError(s.to_string()))?;
        PlayerNum::try_from(n)
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub coins: u32,
    pub stock: Stock,
    pub has_train_station: bool,
    pub has_shopping_mall: bool,
    pub has_amusement_park: bool,
    pub has_radio_tower: bool,
}

impl Player {
    pub fn has_landmark(&self, id: LandmarkId) -> bool {
        match id {
            LandmarkId::Train => self.has_train_station,
            LandmarkId::Shopping => self.has_shopping_mall,
            LandmarkId::Amusement => self.has_amusement_park,
            LandmarkId::Radio => self.has_radio_tower,
        }
    }

    pub fn landmark_count(&self) -> usize {
        [
            self.has_train_station,
            self.has_shopping_mall,
            self.has_amusement_park,
            self.has_radio_tower,
        ]
        .iter()
        .filter(|owned| **owned)
        .count()
    }

    pub fn has_won(&self) -> bool {
        self.landmark_count() == 4
    }
}
