//! quantumforge CLI entry point

use quantumforge::{cli, Error};

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}", cli::fatal_message(&e));
            std::process::exit(e.exit_code());
        }
    }
}
