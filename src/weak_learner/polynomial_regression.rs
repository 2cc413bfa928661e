/// This file defines the polynomial regression producer.
pub mod polynomial_regression_algorithm;
/// This file defines the trained polynomial regressor.
pub mod polynomial_regressor;

/// Polynomial regression builder.
pub mod builder;

/// Basis expansion of a feature subset.
pub mod basis;

/// Feature subset selection policies.
pub mod feature_selection;

/// Regularized batch gradient descent.
pub mod gradient_descent;


pub use polynomial_regression_algorithm::PolynomialRegression;
pub use polynomial_regressor::PolynomialRegressor;
pub use builder::PolynomialRegressionBuilder;
pub use basis::{Basis, BasisTerm};
pub use feature_selection::FeatureSelection;
pub use gradient_descent::{GradientDescent, DescentReport};
