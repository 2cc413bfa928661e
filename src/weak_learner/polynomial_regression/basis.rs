use serde::{Serialize, Deserialize};
use std::fmt;


/// The meaning of a coordinate of the basis vector,
/// given in terms of the raw feature indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisTerm {
    /// The constant `1`.
    Bias,
    /// `x[i]`.
    Linear(usize),
    /// `x[i] * x[j]` with `i` preceding `j` in the subset (or `i == j`).
    Quadratic(usize, usize),
}


/// Maps the selected features of a raw input to the regression basis
/// ```text
/// [1, x[s0], ..., x[s(k-1)], x[s0] x[s0], x[s0] x[s1], ..., x[s(k-1)] x[s(k-1)]]
/// ```
/// where `s` is the subset of length `k`.
/// The quadratic part is present only if enabled and
/// enumerates the pairs `(i, j)`, `i <= j`, in row-major order.
/// Coefficients are interpreted positionally,
/// so this order must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basis {
    n_selected: usize,
    quadratic: bool,
}


impl Basis {
    /// Construct a basis over `n_selected` features.
    pub fn new(n_selected: usize, quadratic: bool) -> Self {
        Self { n_selected, quadratic }
    }


    /// Length of the basis vector, `1 + k [+ k (k + 1) / 2]`.
    #[inline]
    pub fn len(&self) -> usize {
        let k = self.n_selected;
        let quad = if self.quadratic { k * (k + 1) / 2 } else { 0 };
        1 + k + quad
    }


    /// Always `false`; the bias term is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }


    /// Number of selected features.
    #[inline]
    pub fn n_selected(&self) -> usize {
        self.n_selected
    }


    /// Returns `true` if the pairwise terms are enabled.
    #[inline]
    pub fn is_quadratic(&self) -> bool {
        self.quadratic
    }


    /// Expand `raw` restricted to `subset`.
    pub fn expand(&self, raw: &[f64], subset: &[usize]) -> Vec<f64> {
        let mut terms = Vec::with_capacity(self.len());
        self.expand_into(raw, subset, &mut terms);
        terms
    }


    /// Same as [`Basis::expand`], but reuses the given buffer.
    pub fn expand_into(
        &self,
        raw: &[f64],
        subset: &[usize],
        terms: &mut Vec<f64>,
    )
    {
        debug_assert_eq!(subset.len(), self.n_selected);

        terms.clear();
        terms.push(1.0);
        terms.extend(subset.iter().map(|&i| raw[i]));

        if self.quadratic {
            for (a, &i) in subset.iter().enumerate() {
                for &j in &subset[a..] {
                    terms.push(raw[i] * raw[j]);
                }
            }
        }
    }


    /// Returns the term at position `index` of the basis vector.
    /// Returns `None` if `index` is out of range.
    pub fn term(&self, index: usize, subset: &[usize]) -> Option<BasisTerm> {
        let k = self.n_selected;
        if index == 0 {
            return Some(BasisTerm::Bias);
        }
        if index <= k {
            return subset.get(index - 1).map(|&i| BasisTerm::Linear(i));
        }
        if !self.quadratic {
            return None;
        }

        let mut pos = k;
        for a in 0..k {
            for b in a..k {
                pos += 1;
                if pos == index {
                    let (&i, &j) = (subset.get(a)?, subset.get(b)?);
                    return Some(BasisTerm::Quadratic(i, j));
                }
            }
        }
        None
    }
}


impl fmt::Display for BasisTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bias => write!(f, "1"),
            Self::Linear(i) => write!(f, "x[{i}]"),
            Self::Quadratic(i, j) => write!(f, "x[{i}] x[{j}]"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_only() {
        let basis = Basis::new(2, false);
        assert_eq!(basis.len(), 3);
        assert_eq!(basis.expand(&[5.0, 6.0, 7.0], &[2, 0]), vec![1.0, 7.0, 5.0]);
    }

    #[test]
    fn quadratic_order() {
        let basis = Basis::new(2, true);
        assert_eq!(basis.len(), 6);

        let x = [2.0, 3.0, 5.0];
        let subset = [1, 2];
        // 1, x1, x2, x1 x1, x1 x2, x2 x2
        assert_eq!(
            basis.expand(&x, &subset),
            vec![1.0, 3.0, 5.0, 9.0, 15.0, 25.0]
        );

        assert_eq!(basis.term(0, &subset), Some(BasisTerm::Bias));
        assert_eq!(basis.term(2, &subset), Some(BasisTerm::Linear(2)));
        assert_eq!(basis.term(4, &subset), Some(BasisTerm::Quadratic(1, 2)));
        assert_eq!(basis.term(5, &subset), Some(BasisTerm::Quadratic(2, 2)));
        assert_eq!(basis.term(6, &subset), None);
    }

    #[test]
    fn length_formula() {
        for k in 0..10 {
            let basis = Basis::new(k, true);
            let subset = (0..k).collect::<Vec<_>>();
            let x = vec![1.0; k];
            assert_eq!(basis.expand(&x, &subset).len(), 1 + k + k * (k + 1) / 2);
        }
    }
}
