use serde::{Serialize, Deserialize};

use crate::{
    Regressor,
    Transformer,
};
use super::weighted_average::WeightedAverage;


/// The output of [`RegBoost`](crate::RegBoost).
///
/// The committee is trained on the (possibly normalized) sample.
/// `CombinedRegressor` takes raw feature vectors,
/// normalizes them if a transformer is attached,
/// and maps the committee prediction back to real units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombinedRegressor<H> {
    committee: WeightedAverage<H>,
    transformer: Option<Transformer>,
}


impl<H> CombinedRegressor<H> {
    /// Wrap `committee` together with the transformer
    /// applied to its training sample.
    pub fn new(
        committee: WeightedAverage<H>,
        transformer: Option<Transformer>,
    ) -> Self
    {
        Self { committee, transformer }
    }


    /// Returns the committee.
    pub fn committee(&self) -> &WeightedAverage<H> {
        &self.committee
    }


    /// Returns the transformer, if any.
    pub fn transformer(&self) -> Option<&Transformer> {
        self.transformer.as_ref()
    }


    /// Returns the number of hypotheses.
    pub fn len(&self) -> usize {
        self.committee.len()
    }


    /// Returns `true` if the committee is empty.
    pub fn is_empty(&self) -> bool {
        self.committee.is_empty()
    }
}


impl<H> CombinedRegressor<H>
    where H: Regressor,
{
    /// Real-unit committee predictions after each prefix of hypotheses.
    pub fn cumulative_predictions(&self, x: &[f64]) -> Vec<f64> {
        match &self.transformer {
            Some(t) => {
                let x = t.transform_input(x);
                self.committee.cumulative_predictions(&x)
                    .into_iter()
                    .map(|p| t.to_real_target(p))
                    .collect()
            },
            None => self.committee.cumulative_predictions(x),
        }
    }
}


impl<H> Regressor for CombinedRegressor<H>
    where H: Regressor,
{
    fn predict(&self, x: &[f64]) -> f64 {
        if self.committee.is_empty() {
            return 0.0;
        }
        match &self.transformer {
            Some(t) => {
                let x = t.transform_input(x);
                t.to_real_target(self.committee.predict(&x))
            },
            None => self.committee.predict(x),
        }
    }
}
