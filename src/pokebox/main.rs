//! # pokebox CLI
//!
//! The binary is a thin shell over the library: parse arguments, open the
//! data root, call [`pokebox::api::PokeboxApi`], print the result. All of that
//! lives in [`cli`]; `main` only maps an error to an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
