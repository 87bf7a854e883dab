//! Linear function and degree-4 polynomial read from a console, written out as algebraic
//! expressions and evaluated at a point, directly and through the common [NumericFunction] trait.
//!
//! Functions never touch the console themselves: coefficients come in through a reader
//! callback, so they can be configured from any source.
//!
//! # Example
//! ```
//! use std::error::Error;
//! use linear_polynomial::{NumericFunction, PolynomialFunction};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut values = vec![0.0, 1.0, 0.0, 0.0, -2.0].into_iter();
//! let mut reader = |_prompt: &str| -> Result<f64, Box<dyn Error>> {
//!     Ok(values.next().unwrap_or(0.0))
//! };
//!
//! let mut polynomial = PolynomialFunction::default();
//! polynomial.configure(&mut reader).unwrap();
//!
//! assert_eq!(polynomial.render(), "Polynomial: f(x) = x^3 - 2.00");
//! assert_approx_eq!(polynomial.evaluate(2.0), 6.0, 1e-12);
//! ```

mod console;
mod format;
mod function;
mod polynomial;
mod session;

pub use console::{parse_number, Console};
pub use format::{format_number, EPSILON};
pub use function::{CoefficientReader, LinearFunction, NumericFunction, PolynomialFunction};
pub use polynomial::Polynomial;
pub use session::run;
