use regboosts::prelude::*;
use regboosts::PolicyKind;


fn sample() -> Sample {
    let rows = (1..=6)
        .map(|i| vec![i as f64, (i * i) as f64, 1.0 / i as f64])
        .collect::<Vec<_>>();
    let target = rows.iter().map(|x| 2.0 + x[0] + 0.5 * x[1]).collect();
    Sample::from_rows(rows, target).unwrap()
}


/// Tests for `BoostConfig`.
#[cfg(test)]
pub mod config_tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = BoostConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BoostConfig::default());
        assert_eq!(config.max_learners, 100);
        assert_eq!(config.error_ceiling, 0.495);
        assert_eq!(config.policy, PolicyKind::Exponential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json() {
        let json = r#"{
            "policy": "threshold",
            "threshold": 0.2,
            "boost_power": 3,
            "subset_size": 2,
            "selection": "correlation",
            "seed": 7
        }"#;
        let config = BoostConfig::from_json_str(json).unwrap();
        assert_eq!(config.policy, PolicyKind::Threshold);
        assert_eq!(config.boost_power, 3);
        assert_eq!(config.selection, FeatureSelection::Correlation);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_bad_learners, 200);

        assert_eq!(
            Policy::from_config(&config),
            Policy::Threshold {
                threshold: 0.2, power: 3, metric: ErrorMetric::Relative,
            },
        );
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            BoostConfig::from_json_str("{ max_learners: 3 }"),
            Err(BoostError::Json(_))
        ));
        assert!(matches!(
            BoostConfig::from_json_str(r#"{"policy": "gradient"}"#),
            Err(BoostError::Json(_))
        ));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("regboosts-no-such-config.json");
        assert!(matches!(
            BoostConfig::from_json_file(path),
            Err(BoostError::Io(_))
        ));
    }

    #[test]
    fn invalid_values() {
        let mut config = BoostConfig { error_ceiling: 1.0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(BoostError::InvalidErrorCeiling(_))
        ));

        config = BoostConfig { subset_size: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(BoostError::InvalidSubsetSize { subset_size: 0, .. })
        ));

        config = BoostConfig { min_error: 5.0, max_error: 5.0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(BoostError::InvalidParameter { name: "max_error", .. })
        ));

        config = BoostConfig { step_size: -0.1, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn components_from_config() {
        let sample = sample();
        let json = r#"{
            "policy": "linear",
            "max_learners": 3,
            "subset_size": 2,
            "quadratic": false,
            "tolerance": 0.001,
            "seed": 11
        }"#;
        let config = BoostConfig::from_json_str(json).unwrap();

        let wl = PolynomialRegressionBuilder::from_config(&sample, &config)
            .build()
            .unwrap();
        assert_eq!(wl.subset_size(), 2);

        let mut booster = RegBoost::from_config(sample, &config).unwrap();
        let f = booster.run(&wl).unwrap();
        assert!(f.len() <= 3);
        assert!(booster.termination().is_some());
        assert_eq!(booster.name(), "AdaBoost.L");
    }

    #[test]
    fn invalid_config_is_rejected_early() {
        let config = BoostConfig { error_ceiling: 0.0, ..Default::default() };
        let booster = RegBoost::<PolynomialRegressor>::from_config(sample(), &config);
        assert!(booster.is_err());
    }
}
