use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use self::card_idx::{CardIndex, CARD_COUNT};

#[derive(Error, Debug, PartialEq)]
pub enum CardIndexError {
    #[error("Card index {0} exceeds the catalog size of {}", CARD_COUNT)]
    OutOfRange(usize),
    #[error("Card index {0:?} is not a number")]
    NotANumber(String),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blue,
    Green,
    Red,
    Purple,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Blue => write!(f, "blue"),
            Category::Green => write!(f, "green"),
            Category::Red => write!(f, "red"),
            Category::Purple => write!(f, "purple"),
        }
    }
}

// The dice total(s) that activate a card
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RollTrigger {
    Single(u8),
    Range(u8, u8),
}

impl RollTrigger {
    pub fn matches(&self, total: u8) -> bool {
        match *self {
            RollTrigger::Single(n) => total == n,
            RollTrigger::Range(lo, hi) => (lo..=hi).contains(&total),
        }
    }
}

impl fmt::Display for RollTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollTrigger::Single(n) => write!(f, "{}", n),
            RollTrigger::Range(lo, hi) => write!(f, "{}-{}", lo, hi),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardDef {
    index: CardIndex,
    name: &'static str,
    symbol: &'static str,
    roll: RollTrigger,
    effect: &'static str,
    cost: u32,
    category: Category,
}

impl CardDef {
    pub fn index(&self) -> CardIndex {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn roll(&self) -> RollTrigger {
        self.roll
    }

    pub fn effect(&self) -> &'static str {
        self.effect
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_purple(&self) -> bool {
        self.category == Category::Purple
    }
}

static CARDS: [CardDef; CARD_COUNT] = [
    CardDef {
        index: CardIndex::at(0),
        name: "Wheat Field",
        symbol: "Grain",
        roll: RollTrigger::Single(1),
        effect: "Get 1 coin from the bank, on anyone's turn.",
        cost: 1,
        category: Category::Blue,
    },
    CardDef {
        index: CardIndex::at(1),
        name: "Ranch",
        symbol: "Cow",
        roll: RollTrigger::Single(2),
        effect: "Get 1 coin from the bank, on anyone's turn.",
        cost: 1,
        category: Category::Blue,
    },
    CardDef {
        index: CardIndex::at(2),
        name: "Bakery",
        symbol: "Bread",
        roll: RollTrigger::Range(2, 3),
        effect: "Get 1 coin from the bank, on your turn only.",
        cost: 1,
        category: Category::Green,
    },
    CardDef {
        index: CardIndex::at(3),
        name: "Cafe",
        symbol: "Mug",
        roll: RollTrigger::Single(3),
        effect: "Get 1 coin from the player who rolled the dice.",
        cost: 2,
        category: Category::Red,
    },
    CardDef {
        index: CardIndex::at(4),
        name: "Convenience Store",
        symbol: "Bread",
        roll: RollTrigger::Single(4),
        effect: "Get 3 coins from the bank, on your turn only.",
        cost: 2,
        category: Category::Green,
    },
    CardDef {
        index: CardIndex::at(5),
        name: "Forest",
        symbol: "Gear",
        roll: RollTrigger::Single(5),
        effect: "Get 1 coin from the bank, on anyone's turn.",
        cost: 3,
        category: Category::Blue,
    },
    CardDef {
        index: CardIndex::at(6),
        name: "Stadium",
        symbol: "Post",
        roll: RollTrigger::Single(6),
        effect: "Get 2 coins from all players, on your turn only.",
        cost: 6,
        category: Category::Purple,
    },
    CardDef {
        index: CardIndex::at(7),
        name: "TV Station",
        symbol: "Post",
        roll: RollTrigger::Single(6),
        effect: "Take 5 coins from any one player, on your turn only.",
        cost: 7,
        category: Category::Purple,
    },
    CardDef {
        index: CardIndex::at(8),
        name: "Cheese Factory",
        symbol: "Factory",
        roll: RollTrigger::Single(7),
        effect: "Get 3 coins from the bank for each ranch establishment that you own, on your turn only.",
        cost: 5,
        category: Category::Green,
    },
    CardDef {
        index: CardIndex::at(9),
        name: "Furniture Factory",
        symbol: "Factory",
        roll: RollTrigger::Single(8),
        effect: "Get 3 coins from the bank for each gear establishment that you own, on your turn only.",
        cost: 3,
        category: Category::Green,
    },
    CardDef {
        index: CardIndex::at(10),
        name: "Mine",
        symbol: "Gear",
        roll: RollTrigger::Single(9),
        effect: "Get 3 coins from the bank, on anyone's turn.",
        cost: 6,
        category: Category::Blue,
    },
    CardDef {
        index: CardIndex::at(11),
        name: "Family Restaurant",
        symbol: "Mug",
        roll: RollTrigger::Range(9, 10),
        effect: "Get 2 coins from the player who rolled the dice.",
        cost: 3,
        category: Category::Red,
    },
    CardDef {
        index: CardIndex::at(12),
        name: "Apple Orchard",
        symbol: "Grain",
        roll: RollTrigger::Single(10),
        effect: "Get 3 coins from the bank, on anyone's turn.",
        cost: 3,
        category: Category::Blue,
    },
    CardDef {
        index: CardIndex::at(13),
        name: "Fruit and Vegetable Market",
        symbol: "Fruit",
        roll: RollTrigger::Range(11, 12),
        effect: "Get 2 coins from the bank for each grain establishment that you own, on your turn only.",
        cost: 2,
        category: Category::Green,
    },
];

pub fn card(idx: CardIndex) -> &'static CardDef {
    &CARDS[idx.get()]
}

// In catalog order, which is also the order cards are displayed in
pub fn cards() -> &'static [CardDef] {
    &CARDS
}

mod card_idx {
    use super::CardIndexError;
    use std::fmt;
    use std::str::FromStr;

    pub const CARD_COUNT: usize = 14;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CardIndex(usize);

    impl CardIndex {
        // Enforce that the card index is in range 0..CARD_COUNT
        pub fn new(idx: usize) -> Option<Self> {
            if idx < CARD_COUNT {
                Some(CardIndex(idx))
            } else {
                None
            }
        }

        pub(crate) const fn at(idx: usize) -> Self {
            assert!(idx < CARD_COUNT);
            CardIndex(idx)
        }

        pub fn get(&self) -> usize {
            self.0
        }

        pub fn all() -> impl Iterator<Item = CardIndex> {
            (0..CARD_COUNT).map(CardIndex)
        }
    }

    impl TryFrom<usize> for CardIndex {
        type Error = CardIndexError;

        fn try_from(idx: usize) -> Result<Self, Self::Error> {
            CardIndex::new(idx).ok_or(CardIndexError::OutOfRange(idx))
        }
    }

    impl FromStr for CardIndex {
        type Err = CardIndexError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let idx: usize = s
                .trim()
                .parse()
                .map_err(|_| CardIndexError::NotANumber(s.to_string()))?;
            CardIndex::try_from(idx)
        }
    }

    impl fmt::Display for CardIndex {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}
