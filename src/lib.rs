//! Time Balance & Entitlement Engine
//!
//! This crate computes employee working-time balances under contracts that
//! change over time: the cumulative hour balance as of any date, itemized
//! monthly breakdowns and annual vacation/sick day consumption, from a
//! snapshot of time entries, absences, public holidays and adjustments.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
