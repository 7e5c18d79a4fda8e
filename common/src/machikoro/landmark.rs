use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 4;

#[derive(Error, Debug, PartialEq)]
#[error("Unknown landmark {0:?}. Expected one of: train, shopping, amusement, radio")]
pub struct LandmarkIdError(pub String);

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkId {
    Train,
    Shopping,
    Amusement,
    Radio,
}

impl LandmarkId {
    // The id used in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            LandmarkId::Train => "train",
            LandmarkId::Shopping => "shopping",
            LandmarkId::Amusement => "amusement",
            LandmarkId::Radio => "radio",
        }
    }

    fn position(&self) -> usize {
        match self {
            LandmarkId::Train => 0,
            LandmarkId::Shopping => 1,
            LandmarkId::Amusement => 2,
            LandmarkId::Radio => 3,
        }
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandmarkId {
    type Err = LandmarkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(LandmarkId::Train),
            "shopping" => Ok(LandmarkId::Shopping),
            "amusement" => Ok(LandmarkId::Amusement),
            "radio" => Ok(LandmarkId::Radio),
            _ => Err(LandmarkIdError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkDef {
    id: LandmarkId,
    name: &'static str,
    cost: u32,
    description: &'static str,
}

impl LandmarkDef {
    pub fn id(&self) -> LandmarkId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

static LANDMARKS: [LandmarkDef; LANDMARK_COUNT] = [
    LandmarkDef {
        id: LandmarkId::Train,
        name: "Train Station",
        cost: 4,
        description: "You may roll 1 or 2 dice.",
    },
    LandmarkDef {
        id: LandmarkId::Shopping,
        name: "Shopping Mall",
        cost: 10,
        description: "Each of your cup and bread establishments earn +1 coin.",
    },
    LandmarkDef {
        id: LandmarkId::Amusement,
        name: "Amusement Park",
        cost: 16,
        description: "If you roll doubles, take another turn after this one.",
    },
    LandmarkDef {
        id: LandmarkId::Radio,
        name: "Radio Tower",
        cost: 22,
        description: "Once every turn, you can choose to re-roll your dice.",
    },
];

pub fn landmark(id: LandmarkId) -> &'static LandmarkDef {
    &LANDMARKS[id.position()]
}

pub fn landmarks() -> &'static [LandmarkDef] {
    &LANDMARKS
}
