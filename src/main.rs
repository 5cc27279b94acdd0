mod config;
mod ledger;
mod logging;
mod models;
mod report;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run::as_tui(&[]),
        Some("tui") => run::as_tui(&args[2..]),
        Some(_) => {
            logging::init_cli();
            run::as_cli(&args)
        }
    }
}
