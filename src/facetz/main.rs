//! The binary only invokes `cli::run()` and turns errors into an exit code.
//! See `cli/commands.rs` for the CLI layer itself.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
