use std::{
    error::Error,
    io::{BufRead, Write},
};

use log::{debug, info};

use crate::{
    console::Console,
    format::{format_number, VALUE_DECIMALS},
    function::{LinearFunction, NumericFunction, PolynomialFunction},
};

/// Runs the whole interactive session: reads both functions, shows them and evaluates
/// them at one point, first directly and then through [NumericFunction].
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), Box<dyn Error>> {
    info!("session started");

    console.write_line("=== LINEAR FUNCTION (enter coefficients) ===")?;
    let mut linear = LinearFunction::default();
    linear.configure(&mut |prompt: &str| console.read_number(prompt))?;
    console.write_line(&linear.render())?;

    console.write_line("\n=== POLYNOMIAL (enter coefficients) ===")?;
    let mut polynomial = PolynomialFunction::default();
    polynomial.configure(&mut |prompt: &str| console.read_number(prompt))?;
    console.write_line(&polynomial.render())?;

    let x = console.read_number("\nEnter the value of x: ")?;

    console.write_line(&format!(
        "\nValue of the linear function at x={}: {}",
        x,
        format_number(linear.evaluate(x), VALUE_DECIMALS)
    ))?;
    console.write_line(&format!(
        "Value of the polynomial at x={}: {}",
        x,
        format_number(polynomial.evaluate(x), VALUE_DECIMALS)
    ))?;

    console.write_line("\n=== Polymorphism: calls through NumericFunction ===")?;
    let functions: [&dyn NumericFunction; 2] = [&linear, &polynomial];
    for (i, function) in functions.iter().enumerate() {
        let value = function.evaluate(x);
        debug!("function #{} evaluated at {}: {}", i + 1, x, value);

        console.write_line(&format!("\nFunction #{} (through NumericFunction):", i + 1))?;
        console.write_line(&function.render())?;
        console.write_line(&format!("f({}) = {}", x, format_number(value, VALUE_DECIMALS)))?;
    }

    info!("session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::console::INVALID_FORMAT_MESSAGE;

    use super::*;

    fn run_with_input(input: &str) -> (Result<(), Box<dyn Error>>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn full_session_transcript() {
        let (result, output) = run_with_input("2\n-3\n0\n1\n0\n0\n0\n5\n");
        assert!(result.is_ok());

        let expected = [
            "=== LINEAR FUNCTION (enter coefficients) ===",
            "Enter coefficient a1: Enter coefficient a0: Linear function: f(x) = 2.00x - 3.00",
            "",
            "=== POLYNOMIAL (enter coefficients) ===",
            "Enter coefficient a4: Enter coefficient a3: Enter coefficient a2: \
             Enter coefficient a1: Enter coefficient a0: Polynomial: f(x) = x^3",
            "",
            "Enter the value of x: ",
            "Value of the linear function at x=5: 7.0000",
            "Value of the polynomial at x=5: 125.0000",
            "",
            "=== Polymorphism: calls through NumericFunction ===",
            "",
            "Function #1 (through NumericFunction):",
            "Linear function: f(x) = 2.00x - 3.00",
            "f(5) = 7.0000",
            "",
            "Function #2 (through NumericFunction):",
            "Polynomial: f(x) = x^3",
            "f(5) = 125.0000",
            "",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn zero_functions_and_fractional_point() {
        let (result, output) = run_with_input("0\n0\n0\n0\n0\n0\n0\n-1.5\n");
        assert!(result.is_ok());

        assert!(output.contains("Linear function: f(x) = 0\n"));
        assert!(output.contains("Polynomial: f(x) = 0\n"));
        assert!(output.contains("Value of the linear function at x=-1.5: 0.0000\n"));
        assert!(output.contains("Value of the polynomial at x=-1.5: 0.0000\n"));
        assert_eq!(output.matches("f(-1.5) = 0.0000\n").count(), 2);
    }

    #[test]
    fn invalid_input_is_prompted_again() {
        let (result, output) = run_with_input("abc\n3.5\n1\n1\n0\n0\n0\n1,000\n2\n");
        assert!(result.is_ok());

        assert_eq!(output.matches(INVALID_FORMAT_MESSAGE).count(), 1);
        assert!(output.contains("Linear function: f(x) = 3.50x + 1.00\n"));
        assert!(output.contains("Polynomial: f(x) = x^4 + 1,000.00\n"));
        assert!(output.contains("Value of the linear function at x=2: 8.0000\n"));
        assert!(output.contains("Value of the polynomial at x=2: 1,016.0000\n"));
    }

    #[test]
    fn session_fails_when_input_ends_early() {
        let (result, output) = run_with_input("1\n2\n3\n");

        assert!(result.is_err());
        assert!(output.contains("Linear function: f(x) = x + 2.00\n"));
        assert!(!output.contains("Enter the value of x"));
    }
}
