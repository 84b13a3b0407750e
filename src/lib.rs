//! dcacompare — lump-sum vs dollar-cost-averaging comparison for a stock
//! symbol against historical daily closes.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
