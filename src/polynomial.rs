use nalgebra::SVector;

use crate::format::{format_number, COEFFICIENT_DECIMALS, EPSILON};

/// Polynomial with a fixed number of coefficient slots `N` (degree `N - 1`).
/// Coefficient with index `i` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<const N: usize> {
    coefficients: SVector<f64, N>,
}

impl<const N: usize> Polynomial<N> {

    /// Creates polynomial from coefficients ordered from the highest exponent to the lowest,
    /// the same order in which they are written and prompted for.
    pub fn from_highest(coefficients: [f64; N]) -> Self {
        let mut ascending = coefficients;
        ascending.reverse();
        Polynomial { coefficients: SVector::from(ascending) }
    }

    pub fn zeros() -> Self {
        Polynomial { coefficients: SVector::zeros() }
    }

    pub fn degree(&self) -> usize {
        N - 1
    }

    /// Coefficient of `x^exponent`, `None` when the exponent has no slot.
    pub fn coefficient(&self, exponent: usize) -> Option<f64> {
        self.coefficients.get(exponent).copied()
    }

    pub fn set_coefficient(&mut self, exponent: usize, value: f64) {
        self.coefficients[exponent] = value;
    }

    /// Exponents in display order, highest first.
    pub fn exponents(&self) -> impl Iterator<Item = usize> {
        (0..=self.degree()).rev()
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        // powers are built by repeated multiplication instead of powi
        let mut x_pow = SVector::<f64, N>::zeros();
        x_pow[0] = 1.0;
        for i in 1..N {
            x_pow[i] = x_pow[i - 1] * x;
        }
        self.coefficients.dot(&x_pow)
    }

    /// Writes polynomial as `a_n x^n + ... + a_0`, skipping terms with coefficients
    /// below [EPSILON]. Gives `0` when every term is skipped.
    pub fn format_expression(&self) -> String {
        let mut expression = String::new();

        for exponent in self.exponents() {
            let coefficient = self.coefficients[exponent];
            if coefficient.abs() < EPSILON {
                continue;
            }

            let sign = match (expression.is_empty(), coefficient < 0.0) {
                (true, false) => "",
                (true, true) => "-",
                (false, false) => " + ",
                (false, true) => " - ",
            };
            expression.push_str(sign);
            expression.push_str(&format_term(coefficient.abs(), exponent));
        }

        if expression.is_empty() {
            expression.push('0');
        }
        expression
    }
}

fn format_term(magnitude: f64, exponent: usize) -> String {
    let is_unit = (magnitude - 1.0).abs() < EPSILON;
    let magnitude = if exponent > 0 && is_unit {
        String::new()
    } else {
        format_number(magnitude, COEFFICIENT_DECIMALS)
    };

    match exponent {
        0 => magnitude,
        1 => format!("{}x", magnitude),
        _ => format!("{}x^{}", magnitude, exponent),
    }
}
