//! Playbill
//!
//! Two small pricing models: a theatre billing engine that charges invoiced
//! performances and awards volume credits, and a province market model that
//! allocates demand across producers cheapest first.

pub mod fixtures;
pub mod invoices;
pub mod market;
pub mod money;
pub mod plays;
pub mod prelude;
pub mod statement;
pub mod utils;
