use regboosts::{GoldenSectionSearch, boosting_cost};


/// Tests for the golden-section search and the boosting cost.
#[cfg(test)]
pub mod line_search_tests {
    use super::*;

    #[test]
    fn single_unit_error() {
        // J(c) = c^(-1/2) exp(c), minimized at c = 1/2.
        let weights = [1.0];
        let errors = [1.0];
        let result = GoldenSectionSearch::default()
            .minimize(boosting_cost(&weights, &errors));
        assert!(result.converged);
        assert!((result.coef - 0.5).abs() < 0.01, "{}", result.coef);
    }

    #[test]
    fn cost_is_weighted_sum() {
        let weights = [0.25, 0.75];
        let errors = [0.0, 2.0];
        let cost = boosting_cost(&weights, &errors);

        let c: f64 = 0.36;
        let expected = (0.25 + 0.75 * (2.0 * c).exp()) / c.sqrt();
        assert!((cost(c) - expected).abs() < 1e-12);
    }

    #[test]
    fn larger_errors_shrink_the_coefficient() {
        let weights = [0.5, 0.5];
        let search = GoldenSectionSearch::default();
        let small = search.minimize(boosting_cost(&weights, &[0.5, 0.6])).coef;
        let large = search.minimize(boosting_cost(&weights, &[2.0, 3.0])).coef;
        assert!(large < small);
        assert!((0.01..=1.0).contains(&large));
    }

    #[test]
    fn invalid_interval() {
        assert!(GoldenSectionSearch::new().bounds(0.5, 0.1).validate().is_err());
        assert!(GoldenSectionSearch::new().bounds(0.0, 1.0).validate().is_err());
        assert!(GoldenSectionSearch::new().tolerance(0.0).validate().is_err());
        assert!(GoldenSectionSearch::new().validate().is_ok());
    }
}
