//! Payload types returned by the backend and the pure rules derived from them.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod portfolio;
pub mod price_history;
pub mod sentiment;
pub mod tokens;
pub mod trade_signals;
