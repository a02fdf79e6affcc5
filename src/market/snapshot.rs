//! Province snapshots
//!
//! Plain data used to construct a [`Province`](super::province::Province).

use serde::Deserialize;

/// Snapshot of a producer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProducerData {
    /// Producer name
    pub name: String,

    /// Cost per unit produced
    pub cost: i64,

    /// Units produced; missing means none
    #[serde(default)]
    pub production: Option<i64>,
}

impl ProducerData {
    /// Create a producer snapshot.
    pub fn new(name: impl Into<String>, cost: i64, production: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            production: Some(production),
        }
    }
}

/// Snapshot of a province and its producers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvinceData {
    /// Province name
    pub name: String,

    /// Producers supplying the province, in insertion order
    #[serde(default)]
    pub producers: Vec<ProducerData>,

    /// Units demanded
    pub demand: i64,

    /// Price paid per unit
    pub price: i64,
}

impl ProvinceData {
    /// The "Asia" province: three producers, demand 30 at price 20.
    pub fn sample() -> Self {
        Self {
            name: "Asia".to_string(),
            producers: vec![
                ProducerData::new("Byzantium", 10, 9),
                ProducerData::new("Attalia", 12, 10),
                ProducerData::new("Sinope", 10, 6),
            ],
            demand: 30,
            price: 20,
        }
    }
}
