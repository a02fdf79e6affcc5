//! Provinces

use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::market::{
    producer::{Producer, ProducerKey, ProducerMut},
    quantity::Quantity,
    snapshot::{ProducerData, ProvinceData},
};

/// A market with a demand level and price, supplied by producers.
///
/// `total_production` is a running total maintained by every production
/// change made through [`ProducerMut`]; all other figures are derived on demand.
#[derive(Debug, Clone)]
pub struct Province {
    name: String,
    producers: SlotMap<ProducerKey, Producer>,
    producer_order: Vec<ProducerKey>,
    total_production: i128,
    demand: Quantity,
    price: Quantity,
}

impl Province {
    /// Create a province from a snapshot.
    pub fn new(data: ProvinceData) -> Self {
        let mut province = Self {
            name: data.name,
            producers: SlotMap::with_capacity_and_key(data.producers.len()),
            producer_order: Vec::with_capacity(data.producers.len()),
            total_production: 0,
            demand: Quantity::new(data.demand),
            price: Quantity::new(data.price),
        };

        for producer in data.producers {
            province.add_producer(producer);
        }

        province
    }

    /// Add a producer, counting its production towards the total.
    pub fn add_producer(&mut self, data: ProducerData) -> ProducerKey {
        let producer = Producer::from(data);

        self.total_production += producer.production_units();

        let key = self.producers.insert(producer);

        self.producer_order.push(key);

        key
    }

    /// Province name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Producer keys in insertion order
    pub fn producer_keys(&self) -> &[ProducerKey] {
        &self.producer_order
    }

    /// Producers in insertion order
    pub fn producers(&self) -> impl Iterator<Item = &Producer> {
        self.producer_order
            .iter()
            .filter_map(|key| self.producers.get(*key))
    }

    /// Look up a producer.
    pub fn producer(&self, key: ProducerKey) -> Option<&Producer> {
        self.producers.get(key)
    }

    /// Mutable access to a producer, keeping the production total in step.
    pub fn producer_mut(&mut self, key: ProducerKey) -> Option<ProducerMut<'_>> {
        let producer = self.producers.get_mut(key)?;

        Some(ProducerMut::new(producer, &mut self.total_production))
    }

    /// Running total of all producers' production; not-a-number if it doesn't fit an `i64`.
    pub fn total_production(&self) -> Quantity {
        Quantity::from(self.total_production)
    }

    /// Sum of all producers' production, computed from scratch.
    ///
    /// Always equal to [`Province::total_production`]; useful for checking it.
    pub fn recomputed_total_production(&self) -> Quantity {
        let total: i128 = self
            .producers()
            .map(Producer::production_units)
            .sum();

        Quantity::from(total)
    }

    /// Units demanded
    pub fn demand(&self) -> Quantity {
        self.demand
    }

    /// Set demand; non-numeric input becomes not-a-number.
    pub fn set_demand(&mut self, demand: impl Into<Quantity>) -> Quantity {
        self.demand = demand.into();
        self.demand
    }

    /// Price paid per unit
    pub fn price(&self) -> Quantity {
        self.price
    }

    /// Set price; non-numeric input becomes not-a-number.
    pub fn set_price(&mut self, price: impl Into<Quantity>) -> Quantity {
        self.price = price.into();
        self.price
    }

    /// Demand left unmet by production; negative when oversupplied.
    pub fn shortfall(&self) -> Quantity {
        self.demand - self.total_production()
    }

    /// Demand actually met, capped at total production.
    pub fn satisfied_demand(&self) -> Quantity {
        self.demand.min(self.total_production())
    }

    /// Value of the satisfied demand at the province price.
    pub fn demand_value(&self) -> Quantity {
        self.satisfied_demand() * self.price
    }

    /// Cost of meeting demand, buying from the cheapest producers first.
    ///
    /// Producers with equal cost are used in insertion order. A negative demand
    /// is taken entirely from the cheapest producer, giving a negative cost.
    pub fn demand_cost(&self) -> Quantity {
        let mut by_cost: SmallVec<[&Producer; 8]> = self.producers().collect();

        by_cost.sort_by(|a, b| a.cost().sort_cmp(b.cost()));

        let mut remaining_demand = self.demand;
        let mut cost = Quantity::ZERO;

        for producer in by_cost {
            let contribution = remaining_demand.min(producer.production());

            remaining_demand = remaining_demand - contribution;
            cost = cost + contribution * producer.cost();

            trace!(
                producer = %producer.name(),
                contribution = %contribution,
                remaining_demand = %remaining_demand,
                "allocated demand"
            );
        }

        cost
    }

    /// Demand value less demand cost.
    pub fn profit(&self) -> Quantity {
        self.demand_value() - self.demand_cost()
    }
}

impl From<ProvinceData> for Province {
    fn from(data: ProvinceData) -> Self {
        Self::new(data)
    }
}
