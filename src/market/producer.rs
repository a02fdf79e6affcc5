//! Producers

use std::ops::Deref;

use slotmap::new_key_type;
use tracing::debug;

use crate::market::{quantity::Quantity, snapshot::ProducerData};

new_key_type! {
    /// Producer Key
    pub struct ProducerKey;
}

/// A producer supplying a province.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    name: String,
    cost: Quantity,
    production: i64,
}

impl Producer {
    /// Producer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cost per unit produced
    pub fn cost(&self) -> Quantity {
        self.cost
    }

    /// Units produced
    pub fn production(&self) -> Quantity {
        Quantity::new(self.production)
    }

    pub(super) fn production_units(&self) -> i128 {
        i128::from(self.production)
    }
}

impl From<ProducerData> for Producer {
    fn from(data: ProducerData) -> Self {
        Self {
            name: data.name,
            cost: Quantity::new(data.cost),
            production: data.production.unwrap_or(0),
        }
    }
}

/// Mutable access to a producer, tied to its province's running production total.
///
/// Obtained from [`Province::producer_mut`](super::province::Province::producer_mut).
#[derive(Debug)]
pub struct ProducerMut<'a> {
    producer: &'a mut Producer,
    total_production: &'a mut i128,
}

impl<'a> ProducerMut<'a> {
    pub(super) fn new(producer: &'a mut Producer, total_production: &'a mut i128) -> Self {
        Self {
            producer,
            total_production,
        }
    }

    /// Set the unit cost; non-numeric input becomes not-a-number.
    pub fn set_cost(&mut self, cost: impl Into<Quantity>) -> Quantity {
        self.producer.cost = cost.into();
        self.producer.cost
    }

    /// Set production; non-numeric input becomes zero.
    ///
    /// The province total moves by the difference between the new and old
    /// values rather than being recomputed. The total is kept wide enough that
    /// no sequence of changes can overflow it.
    pub fn set_production(&mut self, production: impl Into<Quantity>) -> Quantity {
        let new_production = production.into().value().unwrap_or(0);

        let old_units = self.producer.production_units();

        self.producer.production = new_production;
        *self.total_production += self.producer.production_units() - old_units;

        debug!(
            producer = %self.producer.name,
            production = new_production,
            total_production = %*self.total_production,
            "production changed"
        );

        Quantity::new(new_production)
    }
}

impl Deref for ProducerMut<'_> {
    type Target = Producer;

    fn deref(&self) -> &Producer {
        self.producer
    }
}
