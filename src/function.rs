use std::error::Error;

use log::debug;

use crate::polynomial::Polynomial;

/// Callback that receives a prompt and returns a validated coefficient value.
pub type CoefficientReader<'a> = dyn FnMut(&str) -> Result<f64, Box<dyn Error>> + 'a;

/// Common interface of functions of one variable with a fixed set of coefficients.
pub trait NumericFunction {
    /// Reads every coefficient through `reader`, from the highest exponent to the lowest.
    /// Stops at the first read that fails.
    fn configure(&mut self, reader: &mut CoefficientReader) -> Result<(), Box<dyn Error>>;

    /// Returns `<label>: f(x) = <expression>`.
    fn render(&self) -> String;

    fn evaluate(&self, x: f64) -> f64;
}

fn read_coefficients<const N: usize>(
    polynomial: &mut Polynomial<N>,
    reader: &mut CoefficientReader,
) -> Result<(), Box<dyn Error>> {
    for exponent in polynomial.exponents() {
        let value = reader(&format!("Enter coefficient a{}: ", exponent))?;
        polynomial.set_coefficient(exponent, value);
    }
    Ok(())
}

/// Function `f(x) = a1 x + a0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFunction {
    polynomial: Polynomial<2>,
}

impl LinearFunction {
    pub const LABEL: &'static str = "Linear function";

    /// # Example
    /// ```
    /// use linear_polynomial::{LinearFunction, NumericFunction};
    ///
    /// let linear = LinearFunction::new(2.0, -3.0);
    /// assert_eq!(linear.render(), "Linear function: f(x) = 2.00x - 3.00");
    /// assert_eq!(linear.evaluate(5.0), 7.0);
    /// ```
    pub fn new(a1: f64, a0: f64) -> Self {
        LinearFunction { polynomial: Polynomial::from_highest([a1, a0]) }
    }

    pub fn coefficient(&self, exponent: usize) -> Option<f64> {
        self.polynomial.coefficient(exponent)
    }

    pub fn expression(&self) -> String {
        self.polynomial.format_expression()
    }
}

impl Default for LinearFunction {
    fn default() -> Self {
        LinearFunction { polynomial: Polynomial::zeros() }
    }
}

impl NumericFunction for LinearFunction {
    fn configure(&mut self, reader: &mut CoefficientReader) -> Result<(), Box<dyn Error>> {
        read_coefficients(&mut self.polynomial, reader)?;
        debug!("linear function configured: {:?}", self.polynomial);
        Ok(())
    }

    fn render(&self) -> String {
        format!("{}: f(x) = {}", Self::LABEL, self.expression())
    }

    fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }
}

/// Polynomial of degree 4, `f(x) = a4 x^4 + a3 x^3 + a2 x^2 + a1 x + a0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFunction {
    polynomial: Polynomial<5>,
}

impl PolynomialFunction {
    pub const LABEL: &'static str = "Polynomial";

    pub fn new(a4: f64, a3: f64, a2: f64, a1: f64, a0: f64) -> Self {
        PolynomialFunction { polynomial: Polynomial::from_highest([a4, a3, a2, a1, a0]) }
    }

    pub fn coefficient(&self, exponent: usize) -> Option<f64> {
        self.polynomial.coefficient(exponent)
    }

    pub fn expression(&self) -> String {
        self.polynomial.format_expression()
    }
}

impl Default for PolynomialFunction {
    fn default() -> Self {
        PolynomialFunction { polynomial: Polynomial::zeros() }
    }
}

impl NumericFunction for PolynomialFunction {
    fn configure(&mut self, reader: &mut CoefficientReader) -> Result<(), Box<dyn Error>> {
        read_coefficients(&mut self.polynomial, reader)?;
        debug!("polynomial configured: {:?}", self.polynomial);
        Ok(())
    }

    fn render(&self) -> String {
        format!("{}: f(x) = {}", Self::LABEL, self.expression())
    }

    fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }
}
