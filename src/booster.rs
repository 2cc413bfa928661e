//! Provides the boosting algorithm for regression.

mod core;

// ------------------------------------------------
// Regression
mod regboost;


/// Booster trait
pub use self::core::Booster;

pub use self::regboost::{
    RegBoost,
    RoundRecord,
    Termination,
    BoostPolicy,
    Policy,
};
