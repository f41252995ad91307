//! Alerting System
//!
//! Decides which fault predictions are worth a notification: confidence
//! gating, per-fault cooldown, and an hourly budget.

mod manager;

pub use manager::{AlertConfig, AlertManager, AlertState};
