mod cli;

fn main() {
    // Parse CLI, set up logging and dispatch.
    if let Err(err) = cli::run_from_args() {
        eprintln!("wikitables error: {:#}", err);
        std::process::exit(1);
    }
}
