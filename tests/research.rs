use regboosts::prelude::*;
use regboosts::research::{CutoffReport, Logger, Research};

use std::fs;


/// `y = 1 + x0 + 2 x1` on 8 points.
/// Odd rows get cutoffs just below the target,
/// even rows just above.
fn sample_with_cutoffs() -> Sample {
    let examples = (1..=8)
        .map(|i| {
            let x = vec![i as f64, ((i * 3) % 5) as f64];
            let y = 1.0 + x[0] + 2.0 * x[1];
            let (low, high) = if i % 2 == 1 {
                (y - 1.0, y - 0.5)
            } else {
                (y + 0.5, y + 1.0)
            };
            Example::new(x, y).with_cutoffs(low, high)
        })
        .collect::<Vec<_>>();
    Sample::new(examples).unwrap()
}


fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}


/// Tests for `Logger` and `CutoffReport`.
#[cfg(test)]
pub mod research_tests {
    use super::*;

    #[test]
    fn logger_writes_history() {
        init_tracing();
        let sample = sample_with_cutoffs();
        let wl = PolynomialRegressionBuilder::new(&sample)
            .subset_size(2)
            .seed(5)
            .build()
            .unwrap();
        let booster = RegBoost::init(sample).max_learners(3);

        let path = std::env::temp_dir().join("regboosts-logger-test.csv");
        let mut logger = Logger::new(booster, wl).print_every(usize::MAX);
        let f = logger.run(&path).unwrap();

        let csv = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Round,Accepted,ErrorRate,CombCoef,LearnerError,CommitteeError,Time"
        );

        let booster = logger.into_booster();
        assert_eq!(lines.len(), 1 + booster.history().len());
        assert_eq!(f.len(), booster.ensemble().len());
        for (line, record) in lines[1..].iter().zip(booster.history()) {
            let cols = line.split(',').collect::<Vec<_>>();
            assert_eq!(cols.len(), 7);
            assert_eq!(cols[0].parse::<usize>().unwrap(), record.round);
            assert_eq!(cols[1].parse::<bool>().unwrap(), record.accepted);
        }
    }

    #[test]
    fn perfect_model_hits_every_cutoff() {
        let sample = sample_with_cutoffs();
        let wl = PolynomialRegressionBuilder::new(&sample)
            .subset_size(2)
            .quadratic(false)
            .tolerance(1e-8)
            .build()
            .unwrap();
        let mut booster = RegBoost::init(sample.clone())
            .policy(Policy::threshold(0.01, 2));
        let f = booster.run(&wl).unwrap();
        assert_eq!(booster.termination(), Some(Termination::Perfect));

        let report = CutoffReport::new(&sample, &f);
        assert_eq!(report.n_examples, 8);
        assert_eq!(report.over_calls, 4);
        assert_eq!(report.under_calls, 4);
        assert_eq!(report.hits(), 8);
        assert_eq!(report.hit_rate(), Some(1.0));
    }

    #[test]
    fn empty_model_calls_under() {
        let sample = sample_with_cutoffs();
        let f = RegBoost::<PolynomialRegressor>::init(sample.clone())
            .current_hypothesis();
        // Every prediction is `0`, below every cutoff.
        let report = CutoffReport::new(&sample, &f);
        assert_eq!(report.over_calls, 0);
        assert_eq!(report.under_calls, 8);
        assert_eq!(report.hits(), 0);
    }
}
