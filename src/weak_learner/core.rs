//! Provides `WeakLearner` trait.

use crate::{
    error::Result,
    Sample,
};


/// An interface for weak learners.
///
/// A weak learner produces a hypothesis for
/// the distribution held by `sample`,
/// i.e., the current relative weights of its examples.
pub trait WeakLearner {
    /// The hypothesis type this weak learner produces.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produce a hypothesis for the current distribution over `sample`.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
