//! Defines `RegBoost`, boosting for regression.
//! The reweighting rules are based on
//! AdaBoost.R (Zemel & Pitassi, 2001) and
//! AdaBoost.RT (Shrestha & Solomatine, 2006).
pub mod regboost_algorithm;
pub mod policy;

pub use regboost_algorithm::{
    RegBoost,
    RoundRecord,
    Termination,
};
pub use policy::{
    BoostPolicy,
    Policy,
};
