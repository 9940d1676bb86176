use std::error::Error;
use std::io::{self, Write};

use proclife::{init_tracing, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    Simulation::default().run(&mut out)?;
    out.flush()?;

    Ok(())
}
