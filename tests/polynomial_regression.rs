use regboosts::prelude::*;
use regboosts::{GradientDescent, BasisTerm};


fn exact_plane() -> Sample {
    // y = 2 x0 + x1 - x2
    let rows = vec![
        vec![ 3.1,  4.0,  2.2],
        vec![ 1.5,  2.5,  3.0],
        vec![ 1.0,  9.2,  1.5],
        vec![ 4.4,  4.2,  0.6],
        vec![ 1.2, 10.6, 10.2],
        vec![ 3.0,  5.0, 14.2],
        vec![ 2.2,  1.9,  5.5],
        vec![10.2,  1.1,  1.3],
        vec![ 1.1,  4.5,  7.8],
        vec![-1.9, -4.5,  5.0],
    ];
    let target = vec![8.0, 2.5, 9.7, 12.4, 2.8, -3.2, 0.8, 20.2, -1.1, -13.3];
    Sample::from_rows(rows, target).unwrap()
}


/// Tests for `PolynomialRegressor` and `PolynomialRegression`.
#[cfg(test)]
pub mod polynomial_regression_tests {
    use super::*;

    #[test]
    fn zero_noise_plane() {
        let sample = exact_plane();
        let mut h = PolynomialRegressor::new(vec![0, 1, 2], false);
        let descent = GradientDescent::new()
            .lambda(0.0)
            .tolerance(1e-8);

        let report = h.train(&sample, &descent).unwrap();
        assert!(report.converged);

        for ex in sample.examples() {
            let p = h.predict(ex.features());
            assert!((p - ex.target()).abs() < 1e-3, "{p} vs {}", ex.target());
        }

        let p = h.predict(&[2.0, 3.2, 1.7]);
        assert!((p - 5.5).abs() < 1e-3);
        println!("{h}");
    }

    #[test]
    fn predict_is_idempotent() {
        let sample = exact_plane();
        let wl = PolynomialRegressionBuilder::new(&sample)
            .subset_size(2)
            .seed(7)
            .build()
            .unwrap();
        let h = wl.produce(&sample).unwrap();
        let x = [1.0, 2.0, 3.0];
        assert_eq!(h.predict(&x), h.predict(&x));
        assert_eq!(h.subset().len(), 2);
        assert_eq!(h.theta().len(), 1 + 2 + 3);
    }

    #[test]
    fn trace_records_accepted_steps() {
        let sample = exact_plane();
        let wl = PolynomialRegressionBuilder::new(&sample)
            .subset_size(3)
            .quadratic(false)
            .selection(FeatureSelection::Correlation)
            .max_iter(50)
            .keep_trace(true)
            .build()
            .unwrap();
        let h = wl.produce(&sample).unwrap();
        assert!(!h.trace().is_empty());
        assert!(h.trace().iter().all(|theta| theta.len() == 4));
        assert_eq!(h.trace().last().map(|t| &t[..]), Some(h.theta()));
    }

    #[test]
    fn same_seed_same_subsets() {
        let sample = exact_plane();
        let build = || PolynomialRegressionBuilder::new(&sample)
            .subset_size(1)
            .max_iter(10)
            .seed(42)
            .build()
            .unwrap();
        let (wl1, wl2) = (build(), build());
        for _ in 0..5 {
            let h1 = wl1.produce(&sample).unwrap();
            let h2 = wl2.produce(&sample).unwrap();
            assert_eq!(h1.subset(), h2.subset());
        }
    }

    #[test]
    fn oversized_subset() {
        let sample = exact_plane();
        let wl = PolynomialRegressionBuilder::new(&sample)
            .subset_size(10)
            .quadratic(false)
            .max_iter(10)
            .build()
            .unwrap();
        let h = wl.produce(&sample).unwrap();
        assert_eq!(h.subset(), &[0, 1, 2]);
        assert_eq!(h.basis_term(3), Some(BasisTerm::Linear(2)));

        let err = PolynomialRegressionBuilder::new(&sample)
            .subset_size(10)
            .fallback_to_all(false)
            .build();
        assert!(matches!(
            err,
            Err(BoostError::InvalidSubsetSize { subset_size: 10, n_feature: 3 })
        ));
    }
}
