mod adb;
mod app;
mod cli;
mod config;
mod consts;
mod error;
mod screen;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
