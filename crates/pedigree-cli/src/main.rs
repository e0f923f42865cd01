//! Command-line entry point.

mod cli;

use clap::Parser;

fn main() {
    env_logger::init();
    let args = cli::Cli::parse();
    log::debug!("Running {:?}", args.command);

    match cli::run(args.command) {
        Ok(svg) => println!("{svg}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("pedigree: {e}");
            std::process::exit(1);
        }
    }
}
