//! Playbill prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{Fixture, FixtureError},
    invoices::{Invoice, Performance},
    market::{
        producer::{Producer, ProducerKey, ProducerMut},
        province::Province,
        quantity::{Quantity, parse_int},
        snapshot::{ProducerData, ProvinceData},
    },
    money::usd,
    plays::{Play, PlayCatalog, PlayCategory},
    statement::{
        Statement, StatementError, StatementLine, amount_for, play_for, statement,
        volume_credits_for,
    },
};
