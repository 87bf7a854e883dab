use std::{error::Error, io};

use linear_polynomial::Console;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    linear_polynomial::run(&mut console)
}
