//! Statement
//!
//! Charges each performance on an invoice according to its play's category,
//! awards volume credits, and renders the result as a customer statement.

use std::fmt;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    invoices::{Invoice, Performance},
    money::usd,
    plays::{Play, PlayCatalog, PlayCategory},
};

/// Errors that abort building a statement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play ID missing from the catalog.
    #[error("Unknown play ID: {0}")]
    UnknownPlayId(String),

    /// A play's category has no charging rule.
    #[error("Unknown type: {0}")]
    UnknownPlayCategory(String),
}

/// Resolve the play a performance refers to.
///
/// # Errors
///
/// Returns [`StatementError::UnknownPlayId`] if the catalog has no entry for the performance's play ID.
pub fn play_for<'a>(
    catalog: &'a PlayCatalog,
    performance: &Performance,
) -> Result<&'a Play, StatementError> {
    catalog
        .get(&performance.play_id)
        .ok_or_else(|| StatementError::UnknownPlayId(performance.play_id.clone()))
}

/// Charge for a single performance, in cents.
///
/// - Tragedy: 40000, plus 1000 per seat over 30.
/// - Comedy: 30000, plus 10000 and 500 per seat once over 20, plus 300 per seat.
///
/// # Errors
///
/// Returns [`StatementError::UnknownPlayCategory`] for any other category.
pub fn amount_for(performance: &Performance, play: &Play) -> Result<i64, StatementError> {
    let audience = i64::from(performance.audience);

    let amount = match &play.category {
        PlayCategory::Tragedy => {
            let mut amount = 40_000;

            if audience > 30 {
                amount += 1_000 * (audience - 30);
            }

            amount
        }
        PlayCategory::Comedy => {
            let mut amount = 30_000;

            if audience > 20 {
                amount += 10_000 + 500 * (audience - 20);
            }

            amount + 300 * audience
        }
        PlayCategory::Other(category) => {
            return Err(StatementError::UnknownPlayCategory(category.clone()));
        }
    };

    Ok(amount)
}

/// Volume credits earned by a single performance.
///
/// One credit per seat over 30, and for comedies one more per five attendees.
pub fn volume_credits_for(performance: &Performance, play: &Play) -> u32 {
    let mut credits = performance.audience.saturating_sub(30);

    if play.category == PlayCategory::Comedy {
        credits = credits.saturating_add(performance.audience / 5);
    }

    credits
}

/// One charged performance on a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    /// Name of the play performed
    pub play_name: String,

    /// Charge in cents
    pub amount: i64,

    /// Seats filled
    pub audience: u32,

    /// Volume credits earned
    pub credits: u32,
}

/// A fully charged invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    customer: String,
    lines: Vec<StatementLine>,
    total_amount: i64,
    volume_credits: u64,
}

impl Statement {
    /// Charge every performance on the invoice, in invoice order.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if any performance references an unknown play or
    /// a play with an unknown category. No partial statement is produced.
    #[tracing::instrument(
        name = "statement.new",
        skip_all,
        fields(customer = %invoice.customer, performances = invoice.performances.len()),
        err
    )]
    pub fn new(invoice: &Invoice, catalog: &PlayCatalog) -> Result<Self, StatementError> {
        let mut lines = Vec::with_capacity(invoice.performances.len());
        let mut total_amount = 0;
        let mut volume_credits = 0;

        for performance in &invoice.performances {
            let play = play_for(catalog, performance)?;
            let amount = amount_for(performance, play)?;
            let credits = volume_credits_for(performance, play);

            trace!(
                play_id = %performance.play_id,
                audience = performance.audience,
                amount,
                credits,
                "charged performance"
            );

            total_amount += amount;
            volume_credits += u64::from(credits);

            lines.push(StatementLine {
                play_name: play.name.clone(),
                amount,
                audience: performance.audience,
                credits,
            });
        }

        debug!(total_amount, volume_credits, "statement totals");

        Ok(Self {
            customer: invoice.customer.clone(),
            lines,
            total_amount,
            volume_credits,
        })
    }

    /// Customer the statement is for
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Charged performances, in invoice order
    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    /// Total amount owed, in cents
    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    /// Total volume credits earned
    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }

    /// Render the statement as a table of performances followed by the totals.
    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Play", "Seats", "Amount", "Credits"]);

        for line in &self.lines {
            builder.push_record([
                line.play_name.clone(),
                line.audience.to_string(),
                usd(line.amount),
                line.credits.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        format!(
            "Statement for {}\n{table}\nAmount owed is {}\nYou earned {} credits\n",
            self.customer,
            usd(self.total_amount),
            self.volume_credits
        )
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statement for {}", self.customer)?;

        for line in &self.lines {
            writeln!(
                f,
                " {}: {} ({} seats)",
                line.play_name,
                usd(line.amount),
                line.audience
            )?;
        }

        writeln!(f, "Amount owed is {}", usd(self.total_amount))?;
        writeln!(f, "You earned {} credits", self.volume_credits)
    }
}

/// Render the plain-text statement for an invoice.
///
/// # Errors
///
/// Returns a [`StatementError`] if any performance can't be charged.
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> Result<String, StatementError> {
    Ok(Statement::new(invoice, catalog)?.to_string())
}
