use anyhow::Result;
use tracing::info;

use crate::config::SessionConfig;
use crate::models::ExpenseCategory;
use crate::report::Report;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "report" | "r" => cli_report(&args[2..]),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("findash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("findash - personal finance dashboard");
    println!();
    println!("Usage: findash [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the dashboard with an empty ledger");
    println!("  tui [options]                 Launch the dashboard seeded from options");
    println!("  report [options]              Print a report for the ledger described by options");
    println!("  categories                    List expense categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --income <amount>             Total income");
    println!("  --goal <amount>               Savings goal");
    println!("  --budget <amount>             Budget ceiling for total expenses");
    println!("  --expense <cat>:<amt>[:date]  Add an expense (repeatable, date is YYYY-MM-DD)");
    println!();
    println!("Environment:");
    println!("  FINDASH_LOG                   Log filter, e.g. findash=debug");
}

fn cli_report(args: &[String]) -> Result<()> {
    let config = SessionConfig::from_args(args)?;
    let ledger = config.build_ledger()?;
    info!(expenses = ledger.expenses().len(), "building report");
    print!("{}", Report::from_ledger(&ledger));
    Ok(())
}

fn cli_categories() {
    for category in ExpenseCategory::all() {
        println!("{category}");
    }
}
