//! Provides [`RegBoost`], boosting for regression with
//! a pluggable reweighting rule.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    error::{BoostError, Result},
    common::{checker, ErrorMetric, GoldenSectionSearch, boosting_cost},
    config::BoostConfig,
    research::Research,
    Booster,
    WeakLearner,
    Regressor,
    WeakRegressor,
    WeightedAverage,
    CombinedRegressor,
    Sample,
    Transformer,
};
use super::policy::{BoostPolicy, Policy};

use std::fmt;
use std::ops::ControlFlow;


/// The number of accepted weak learners set as default.
pub const DEFAULT_MAX_LEARNERS: usize = 100;
/// The number of consecutive rejections set as default.
pub const DEFAULT_MAX_BAD_LEARNERS: usize = 200;
/// The acceptance ceiling of the error rate set as default.
pub const DEFAULT_ERROR_CEILING: f64 = 0.495;


/// How a boosting run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Collected the requested number of weak learners.
    Completed,
    /// A weak learner had zero error rate.
    /// It is the last member of the committee.
    Perfect,
    /// Too many consecutive weak learners were rejected.
    Exhausted,
}


/// Summary of a single boosting round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting from `1`.
    pub round: usize,
    /// `true` if the weak learner joined the committee.
    pub accepted: bool,
    /// Error rate of the weak learner under the current distribution.
    pub error_rate: f64,
    /// Combination coefficient, for accepted learners.
    pub comb_coef: Option<f64>,
    /// Mean error of the weak learner alone.
    pub learner_error: f64,
    /// Mean error of the committee after this round.
    pub committee_error: f64,
}


/// Boosting for regression.
/// The reweighting rule is given by a [`BoostPolicy`];
/// [`Policy`] provides AdaBoost.R, AdaBoost.RT, and
/// a linear-penalty variant.
///
/// Each round trains a weak regressor on the current distribution,
/// computes its error rate, and accepts it iff the error rate is
/// strictly below the error ceiling.
/// An accepted learner gets its combination coefficient
/// and reweights the sample.
/// A rejected learner is discarded without reweighting.
/// The run stops when `max_learners` learners are accepted,
/// `max_bad_learners` learners are rejected in a row,
/// or a learner has zero error rate.
///
/// Errors are measured in real units,
/// even if the sample is normalized.
///
/// # Example
///
/// ```no_run
/// use regboosts::prelude::*;
///
/// # fn main() -> regboosts::Result<()> {
/// # let sample = Sample::from_rows(vec![vec![1.0, 2.0]], vec![3.0])?;
/// let weak_learner = PolynomialRegressionBuilder::new(&sample)
///     .subset_size(4)
///     .seed(1234)
///     .build()?;
///
/// let mut booster = RegBoost::init(sample)
///     .policy(Policy::threshold(0.19, 2))
///     .max_learners(50);
///
/// let f = booster.run(&weak_learner)?;
/// println!("{:?}", booster.termination());
/// let y = f.predict(&[1.0, 2.0]);
/// # Ok(())
/// # }
/// ```
pub struct RegBoost<H, P = Policy> {
    // Training sample, normalized in place when `normalize` is set.
    sample: Sample,
    real_targets: Vec<f64>,
    transformer: Option<Transformer>,
    normalize: bool,

    policy: P,
    line_search: Option<GoldenSectionSearch>,
    relative_error: bool,

    max_learners: usize,
    max_bad_learners: usize,
    error_ceiling: f64,

    committee: WeightedAverage<H>,
    n_bad: usize,
    termination: Option<Termination>,
    history: Vec<RoundRecord>,
}


impl<H> RegBoost<H, Policy> {
    /// Initialize `RegBoost` with the exponential policy.
    /// `RegBoost` takes the ownership of `sample`
    /// since it mutates the weights.
    pub fn init(sample: Sample) -> Self {
        Self::with_policy(sample, Policy::default())
    }


    /// Initialize `RegBoost` from `config`.
    /// Returns `Err` if `config` is invalid.
    pub fn from_config(sample: Sample, config: &BoostConfig) -> Result<Self> {
        config.validate()?;
        let mut booster = Self::with_policy(sample, Policy::from_config(config))
            .max_learners(config.max_learners)
            .max_bad_learners(config.max_bad_learners)
            .error_ceiling(config.error_ceiling)
            .normalize(config.normalize)
            .relative_error(config.relative_error);
        if config.line_search {
            booster = booster.line_search(GoldenSectionSearch::default());
        }
        Ok(booster)
    }
}


impl<H, P> RegBoost<H, P> {
    /// Initialize `RegBoost` with a custom policy.
    pub fn with_policy(sample: Sample, policy: P) -> Self {
        let real_targets = sample.target();
        Self {
            sample,
            real_targets,
            transformer: None,
            normalize: false,

            policy,
            line_search: None,
            relative_error: true,

            max_learners: DEFAULT_MAX_LEARNERS,
            max_bad_learners: DEFAULT_MAX_BAD_LEARNERS,
            error_ceiling: DEFAULT_ERROR_CEILING,

            committee: WeightedAverage::new(),
            n_bad: 0,
            termination: None,
            history: Vec::new(),
        }
    }


    /// Replace the reweighting rule.
    pub fn policy<Q>(self, policy: Q) -> RegBoost<H, Q> {
        RegBoost {
            sample: self.sample,
            real_targets: self.real_targets,
            transformer: self.transformer,
            normalize: self.normalize,
            policy,
            line_search: self.line_search,
            relative_error: self.relative_error,
            max_learners: self.max_learners,
            max_bad_learners: self.max_bad_learners,
            error_ceiling: self.error_ceiling,
            committee: self.committee,
            n_bad: self.n_bad,
            termination: self.termination,
            history: self.history,
        }
    }


    /// Set the number of weak learners to collect.
    /// Default is `100`.
    pub fn max_learners(mut self, max_learners: usize) -> Self {
        self.max_learners = max_learners;
        self
    }


    /// Set the number of consecutive rejections before giving up.
    /// Default is `200`.
    pub fn max_bad_learners(mut self, max_bad_learners: usize) -> Self {
        self.max_bad_learners = max_bad_learners;
        self
    }


    /// Set the acceptance ceiling of the error rate.
    /// Must be in `(0, 1)`; checked before the first round.
    /// Default is `0.495`.
    pub fn error_ceiling(mut self, error_ceiling: f64) -> Self {
        self.error_ceiling = error_ceiling;
        self
    }


    /// Min-max normalize the sample before the first round.
    pub fn normalize(mut self, flag: bool) -> Self {
        self.normalize = flag;
        self
    }


    /// Report relative errors (`true`, default) or absolute errors.
    pub fn relative_error(mut self, flag: bool) -> Self {
        self.relative_error = flag;
        self
    }


    /// Pick the combination coefficients by `search`
    /// instead of the closed form of the policy.
    pub fn line_search(mut self, search: GoldenSectionSearch) -> Self {
        self.line_search = Some(search);
        self
    }


    /// Returns the training sample.
    /// The sample is normalized if normalization is on
    /// and the boosting has started.
    pub fn sample(&self) -> &Sample {
        &self.sample
    }


    /// Returns the transformer applied to the sample, if any.
    pub fn transformer(&self) -> Option<&Transformer> {
        self.transformer.as_ref()
    }


    /// Returns the current committee.
    pub fn ensemble(&self) -> &WeightedAverage<H> {
        &self.committee
    }


    /// Returns how the last run ended.
    /// `None` while running or before the first run.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }


    /// Returns the summaries of the rounds so far.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }


    #[inline(always)]
    fn report_metric(&self) -> ErrorMetric {
        if self.relative_error {
            ErrorMetric::Relative
        } else {
            ErrorMetric::Absolute
        }
    }


    fn terminate(&mut self, termination: Termination, iteration: usize)
        -> ControlFlow<usize>
    {
        tracing::info!(
            ?termination,
            learners = self.committee.len(),
            round = iteration,
            "boosting terminated"
        );
        self.termination = Some(termination);
        ControlFlow::Break(iteration)
    }
}


impl<H, P> RegBoost<H, P>
    where H: Regressor + Sync,
{
    /// Predict the real-unit target of a raw feature vector.
    /// Returns `0` if the committee is empty.
    pub fn predict(&self, x: &[f64]) -> f64 {
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


    /// Predict the real-unit targets of a raw sample.
    pub fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        sample.examples()
            .iter()
            .map(|ex| self.predict(ex.features()))
            .collect()
    }


    /// Real-unit predictions of `h` on the training sample.
    fn real_predictions<R>(&self, h: &R) -> Vec<f64>
        where R: Regressor + Sync,
    {
        let transformer = self.transformer.as_ref();
        self.sample.examples()
            .par_iter()
            .map(|ex| {
                let p = h.predict(ex.features());
                transformer.map_or(p, |t| t.to_real_target(p))
            })
            .collect()
    }


    /// Mean error of the committee on the training sample.
    pub fn committee_error(&self) -> Result<f64> {
        let predictions = self.real_predictions(&self.committee);
        self.report_metric().mean(&predictions, &self.real_targets)
    }


    /// Mean error of the committee on a raw sample,
    /// e.g., a held-out test set.
    pub fn committee_error_on(&self, sample: &Sample) -> Result<f64> {
        let predictions = self.predict_all(sample);
        self.report_metric().mean(&predictions, &sample.target())
    }


    /// Mean error of a single weak learner on the training sample.
    pub fn weak_learner_error<R>(&self, h: &R) -> Result<f64>
        where R: Regressor + Sync,
    {
        let predictions = self.real_predictions(h);
        self.report_metric().mean(&predictions, &self.real_targets)
    }
}


impl<H, P> Booster<H> for RegBoost<H, P>
    where H: WeakRegressor + Clone + Sync,
          P: BoostPolicy,
{
    type Output = CombinedRegressor<H>;


    fn name(&self) -> &str {
        self.policy.name()
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let line_search = if self.line_search.is_some() {
            "Golden section"
        } else {
            "Closed form"
        };
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Max learners", format!("{}", self.max_learners)),
            ("Max bad learners", format!("{}", self.max_bad_learners)),
            ("Error ceiling", format!("{}", self.error_ceiling)),
            ("Normalize", format!("{}", self.normalize)),
            ("Combination coef.", line_search.to_string()),
            ("Reported error", self.report_metric().to_string()),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_error_ceiling(self.error_ceiling)?;
        if let Some(search) = &self.line_search {
            search.validate()?;
        }

        if self.relative_error {
            let zero = self.real_targets.iter().position(|&y| y == 0.0);
            if let Some(row) = zero {
                return Err(BoostError::DegenerateSample {
                    row, reason: "zero target under the relative error metric",
                });
            }
        }

        if self.normalize && self.transformer.is_none() {
            let transformer = Transformer::fit(&self.sample);
            transformer.transform(&mut self.sample);
            self.transformer = Some(transformer);
        }

        self.sample.reset_uniform();
        self.committee = WeightedAverage::new();
        self.n_bad = 0;
        self.termination = None;
        self.history.clear();
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.committee.len() >= self.max_learners {
            return Ok(self.terminate(Termination::Completed, iteration));
        }
        if self.n_bad >= self.max_bad_learners {
            return Ok(self.terminate(Termination::Exhausted, iteration));
        }


        let mut h = weak_learner.produce(&self.sample)?;


        let predictions = self.real_predictions(&h);
        let errors = predictions.iter()
            .zip(&self.real_targets)
            .enumerate()
            .map(|(row, (&p, &y))| self.policy.per_sample_error(row, p, y))
            .collect::<Result<Vec<_>>>()?;
        let dist = self.sample.relative_weights();
        let error_rate = self.policy.error_rate(&errors, &dist);
        let learner_error = self.weak_learner_error(&h)?;

        tracing::debug!(round = iteration, error_rate, learner_error);


        // No example is wrong under the current policy.
        // On the first acceptance `h` alone is the committee.
        // Otherwise it joins the committee with the largest
        // coefficient accepted so far.
        if error_rate == 0.0 {
            let coef = self.committee.weights
                .iter()
                .copied()
                .reduce(f64::max)
                .unwrap_or(1.0);
            h.set_comb_coef(coef)?;
            self.committee.push(coef, h);
            self.n_bad = 0;

            let committee_error = self.committee_error()?;
            self.history.push(RoundRecord {
                round: iteration,
                accepted: true,
                error_rate,
                comb_coef: Some(coef),
                learner_error,
                committee_error,
            });
            return Ok(self.terminate(Termination::Perfect, iteration));
        }


        if !(error_rate < self.error_ceiling) {
            self.n_bad += 1;
            tracing::info!(
                round = iteration,
                error_rate,
                discarded = self.n_bad,
                "discard a weak learner"
            );
            let committee_error = self.committee_error()?;
            self.history.push(RoundRecord {
                round: iteration,
                accepted: false,
                error_rate,
                comb_coef: None,
                learner_error,
                committee_error,
            });
            return Ok(ControlFlow::Continue(()));
        }


        let beta = self.policy.beta(error_rate);
        let coef = match &self.line_search {
            Some(search) => {
                let metric = self.policy.line_search_metric();
                let line_errors = predictions.iter()
                    .zip(&self.real_targets)
                    .enumerate()
                    .map(|(row, (&p, &y))| metric.checked(row, p, y))
                    .collect::<Result<Vec<_>>>()?;
                search.minimize(boosting_cost(&dist, &line_errors)).coef
            },
            None => self.policy.comb_coef(beta),
        };


        // Renormalization cancels any common multiplier.
        let log_factors = errors.iter()
            .map(|&e| self.policy.log_reweight_factor(e, beta))
            .collect::<Vec<_>>();
        let shift = log_factors.iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let factors = log_factors.into_iter()
            .map(|l| (l - shift).exp())
            .collect::<Vec<_>>();
        self.sample.reweight(&factors)?;


        h.set_comb_coef(coef)?;
        self.committee.push(coef, h);
        self.n_bad = 0;

        let committee_error = self.committee_error()?;
        tracing::info!(
            round = iteration,
            learners = self.committee.len(),
            error_rate,
            comb_coef = coef,
            learner_error,
            committee_error,
            "accept a weak learner"
        );
        self.history.push(RoundRecord {
            round: iteration,
            accepted: true,
            error_rate,
            comb_coef: Some(coef),
            learner_error,
            committee_error,
        });

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> CombinedRegressor<H> {
        CombinedRegressor::new(self.committee.clone(), self.transformer.clone())
    }
}


impl<H, P> Research for RegBoost<H, P>
    where H: Clone,
{
    type Current = CombinedRegressor<H>;


    fn current_hypothesis(&self) -> Self::Current {
        CombinedRegressor::new(self.committee.clone(), self.transformer.clone())
    }


    fn last_record(&self) -> Option<RoundRecord> {
        self.history.last().copied()
    }
}


impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Completed => "completed",
            Self::Perfect => "perfect fit",
            Self::Exhausted => "exhausted",
        };
        write!(f, "{name}")
    }
}
