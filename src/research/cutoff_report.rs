use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{Regressor, Sample};


/// Over/under evaluation against per-example cutoffs.
///
/// For an example with cutoffs `(low, high)`,
/// a prediction above `high` is an *over* call and
/// a prediction below `low` is an *under* call.
/// A call hits if the target lies on the same side of the cutoff.
/// Examples without cutoffs are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CutoffReport {
    /// Number of examples carrying cutoffs.
    pub n_examples: usize,
    /// Number of over calls.
    pub over_calls: usize,
    /// Number of over calls that hit.
    pub over_hits: usize,
    /// Number of under calls.
    pub under_calls: usize,
    /// Number of under calls that hit.
    pub under_hits: usize,
}


impl CutoffReport {
    /// Evaluate `model` on `sample`.
    /// The features and targets of `sample` must be in real units.
    pub fn new<R>(sample: &Sample, model: &R) -> Self
        where R: Regressor,
    {
        let mut report = Self::default();
        for ex in sample.examples() {
            let Some((low, high)) = ex.test_cutoffs() else { continue; };
            report.n_examples += 1;

            let prediction = model.predict(ex.features());
            let target = ex.target();
            if prediction > high {
                report.over_calls += 1;
                if target > high { report.over_hits += 1; }
            } else if prediction < low {
                report.under_calls += 1;
                if target < low { report.under_hits += 1; }
            }
        }
        report
    }


    /// Total number of calls.
    pub fn calls(&self) -> usize {
        self.over_calls + self.under_calls
    }


    /// Total number of hits.
    pub fn hits(&self) -> usize {
        self.over_hits + self.under_hits
    }


    /// Fraction of calls that hit, `None` if no call was made.
    pub fn hit_rate(&self) -> Option<f64> {
        let calls = self.calls();
        (calls > 0).then(|| self.hits() as f64 / calls as f64)
    }
}


impl fmt::Display for CutoffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = self.hit_rate()
            .map(|r| format!("{:.3}", r))
            .unwrap_or_else(|| "-".into());
        write!(
            f,
            "{} examples, {} calls ({} over / {} under), {} hits, hit rate {}",
            self.n_examples,
            self.calls(),
            self.over_calls,
            self.under_calls,
            self.hits(),
            rate,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Example;

    struct Identity;
    impl Regressor for Identity {
        fn predict(&self, x: &[f64]) -> f64 { x[0] }
    }

    #[test]
    fn calls_and_hits() {
        let examples = vec![
            // over call, hit
            Example::new(vec![12.0], 11.0).with_cutoffs(8.0, 10.0),
            // under call, miss
            Example::new(vec![5.0], 9.0).with_cutoffs(8.0, 10.0),
            // no call
            Example::new(vec![9.0], 20.0).with_cutoffs(8.0, 10.0),
            // ignored
            Example::new(vec![100.0], 0.0),
        ];
        let sample = Sample::new(examples).unwrap();
        let report = CutoffReport::new(&sample, &Identity);
        assert_eq!(report.n_examples, 3);
        assert_eq!(report.calls(), 2);
        assert_eq!(report.hits(), 1);
        assert_eq!(report.hit_rate(), Some(0.5));
    }
}
