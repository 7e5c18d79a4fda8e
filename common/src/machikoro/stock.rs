use crate::machikoro::card::{CardIndex, CARD_COUNT};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

// Card counts keyed by catalog index. Used both for a player's establishments
// and for the bank's remaining supply.
//
// On the wire this is a JSON object keyed by the decimal index, e.g.
// {"0": 1, "2": 1}. Missing keys mean zero copies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock([u32; CARD_COUNT]);

impl Stock {
    pub fn new(counts: [u32; CARD_COUNT]) -> Self {
        Stock(counts)
    }

    pub fn count(&self, idx: CardIndex) -> u32 {
        self.0[idx.get()]
    }

    pub fn owns(&self, idx: CardIndex) -> bool {
        self.count(idx) > 0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, u32)> + '_ {
        CardIndex::all().map(move |idx| (idx, self.count(idx)))
    }

    // Entries whose count differs from `before`, as (index, before, after)
    pub fn changes_since(&self, before: &Stock) -> Vec<(CardIndex, u32, u32)> {
        self.iter()
            .filter_map(|(idx, now)| {
                let then = before.count(idx);
                (then != now).then_some((idx, then, now))
            })
            .collect()
    }
}

impl Index<CardIndex> for Stock {
    type Output = u32;
    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.0[index.get()]
    }
}

impl IndexMut<CardIndex> for Stock {
    fn index_mut(&mut self, index: CardIndex) -> &mut Self::Output {
        &mut self.0[index.get()]
    }
}

impl Serialize for Stock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CARD_COUNT))?;
        for (idx, count) in self.iter() {
            map.serialize_entry(&idx.to_string(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Stock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut stock = Stock::default();
        for (key, count) in raw {
            let idx: CardIndex = key.parse().map_err(de::Error::custom)?;
            stock[idx] = count;
        }
        Ok(stock)
    }
}
