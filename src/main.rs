use clap::Parser;
use numlens::cli::{run, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    std::process::exit(run(cli));
}
