//! HTTP API module for the Time Balance Engine.
//!
//! This module provides the REST endpoints through which reporting and
//! export collaborators obtain balances, monthly breakdowns and annual
//! entitlements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalanceRequest, BreakdownRequest, SnapshotRequest, YearRequest};
pub use response::{ApiError, BalanceResponse};
pub use state::AppState;
