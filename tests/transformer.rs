use regboosts::{Sample, Transformer};


fn sample() -> Sample {
    let rows = vec![
        vec![1.0, 7.0, -2.0],
        vec![3.0, 7.0,  4.0],
        vec![5.0, 7.0,  1.0],
    ];
    Sample::from_rows(rows, vec![10.0, 40.0, 25.0]).unwrap()
}


/// Tests for `Transformer`.
#[cfg(test)]
pub mod transformer_tests {
    use super::*;

    #[test]
    fn target_round_trip() {
        let t = Transformer::fit(&sample());
        for y in [10.0, 17.5, 40.0, -3.0] {
            let back = t.to_real_target(t.transform_target(y));
            assert!((back - y).abs() < 1e-12);
        }
        assert_eq!(t.transform_target(10.0), 0.0);
        assert!((t.transform_target(40.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn transform_matches_transform_input() {
        let raw = sample();
        let t = Transformer::fit(&raw);
        let mut normalized = raw.clone();
        t.transform(&mut normalized);

        for (r, n) in raw.examples().iter().zip(normalized.examples()) {
            assert_eq!(t.transform_input(r.features()), n.features());
            assert_eq!(t.transform_target(r.target()), n.target());
            assert!(n.features().iter().all(|&x| (0.0..=3.0 + 1e-12).contains(&x)));
        }
    }

    #[test]
    fn constant_feature_maps_to_zero() {
        let t = Transformer::fit(&sample());
        assert_eq!(t.input_scale()[1], 0.0);
        assert_eq!(t.transform_input(&[2.0, 7.0, 0.0])[1], 0.0);
        // A value never seen in the constant dimension.
        assert_eq!(t.transform_input(&[2.0, 8.0, 0.0])[1], 0.0);
        assert_eq!(t.transform_input(&[2.0, -3.5, 0.0])[1], 0.0);
    }

    #[test]
    fn custom_range() {
        let t = Transformer::fit_with_bounds(&sample(), -1.0, 1.0).unwrap();
        assert!((t.transform_target(10.0) + 1.0).abs() < 1e-12);
        assert!((t.transform_target(40.0) - 1.0).abs() < 1e-12);
        assert!(Transformer::fit_with_bounds(&sample(), 1.0, 1.0).is_err());
    }
}
