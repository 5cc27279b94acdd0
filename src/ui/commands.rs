use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use tracing::info;

use super::app::{App, Field, InputMode, Screen};
use super::util::format_amount;
use crate::config::{parse_amount, parse_category, parse_date};
use crate::ledger::{Ledger, LedgerError};
use crate::models::ExpenseCategory;
use crate::report::Report;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit findash", cmd_quit, r);
    register_command!("quit", "Quit findash", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("ch", "Go to Charts", cmd_charts, r);
    register_command!("charts", "Go to Charts", cmd_charts, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("in", "Set income (e.g. :in 4200)", cmd_income, r);
    register_command!("income", "Set income (e.g. :income 4200)", cmd_income, r);
    register_command!("g", "Set savings goal (e.g. :g 800)", cmd_goal, r);
    register_command!("goal", "Set savings goal (e.g. :goal 800)", cmd_goal, r);
    register_command!("b", "Set budget ceiling (e.g. :b 3000)", cmd_budget, r);
    register_command!(
        "budget",
        "Set budget ceiling (e.g. :budget 3000)",
        cmd_budget,
        r
    );
    register_command!(
        "clear-budget",
        "Remove the budget ceiling",
        cmd_clear_budget,
        r
    );
    register_command!(
        "a",
        "Add expense (e.g. :a Food 12.50 2024-01-15)",
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Add expense (e.g. :add Food 12.50 2024-01-15)",
        cmd_add,
        r
    );
    register_command!("r", "Generate report", cmd_report, r);
    register_command!("report", "Generate report", cmd_report, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    ledger: &mut Ledger,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // aliases are noise as suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Apply a new value to an Overview field. `None` clears the budget.
///
/// Rejections land in the status line; the ledger is left as it was.
pub(crate) fn apply_field(
    app: &mut App,
    ledger: &mut Ledger,
    field: Field,
    value: Option<Decimal>,
) {
    let result = match (field, value) {
        (Field::Income, Some(v)) => ledger.set_income(v),
        (Field::SavingsGoal, Some(v)) => ledger.set_savings_goal(v),
        (Field::Budget, Some(v)) => ledger.set_budget(v),
        (Field::Budget, None) => {
            ledger.clear_budget();
            Ok(())
        }
        (_, None) => {
            app.set_status(format!("{field} needs a value"));
            return;
        }
    };
    match result {
        Ok(()) => {
            app.refresh(ledger);
            match value {
                Some(v) => app.set_status(format!("{field} set to {}", format_amount(v))),
                None => app.set_status("Budget cleared"),
            }
        }
        Err(e) => reject(app, e),
    }
}

/// Step a field by `delta` increments. Going below zero is left to the ledger
/// to reject; going past `Decimal::MAX` is refused here.
pub(crate) fn step_field(app: &mut App, ledger: &mut Ledger, field: Field, delta: i32) {
    let current = app.view.field_value(field);
    if current.is_none() && delta < 0 {
        app.set_status("No budget set");
        return;
    }
    let base = current.unwrap_or(Decimal::ZERO);
    let next = field
        .step()
        .checked_mul(Decimal::from(delta))
        .and_then(|change| base.checked_add(change));
    match next {
        Some(v) => apply_field(app, ledger, field, Some(v)),
        None => app.set_status(format!("{field} value too large to step")),
    }
}

fn reject(app: &mut App, err: LedgerError) {
    app.set_status(format!("Rejected: {err}"));
}

fn set_field_from_args(
    args: &str,
    app: &mut App,
    ledger: &mut Ledger,
    field: Field,
    usage: &str,
) {
    if args.is_empty() {
        app.set_status(usage.to_string());
        return;
    }
    match parse_amount(args) {
        Ok(v) => apply_field(app, ledger, field, Some(v)),
        Err(e) => app.set_status(e.to_string()),
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_charts(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Charts;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    set_field_from_args(args, app, ledger, Field::Income, "Usage: :income <amount>");
    Ok(())
}

fn cmd_goal(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    set_field_from_args(args, app, ledger, Field::SavingsGoal, "Usage: :goal <amount>");
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    set_field_from_args(
        args,
        app,
        ledger,
        Field::Budget,
        "Usage: :budget <amount> (or :clear-budget)",
    );
    Ok(())
}

fn cmd_clear_budget(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if ledger.budget().is_none() {
        app.set_status("No budget set");
        return Ok(());
    }
    apply_field(app, ledger, Field::Budget, None);
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 3 {
        app.set_status(format!(
            "Usage: :add <category> <amount> [YYYY-MM-DD]. Categories: {}",
            ExpenseCategory::names()
        ));
        return Ok(());
    }

    let category = match parse_category(parts[0]) {
        Ok(c) => c,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };
    let amount = match parse_amount(parts[1]) {
        Ok(a) => a,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };
    let date = match parts.get(2).map(|d| parse_date(d)).transpose() {
        Ok(d) => d.unwrap_or(app.today),
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    match ledger.add_expense(category, amount, Some(date)) {
        Ok(()) => {
            info!(%category, %amount, "expense added from command line");
            app.refresh(ledger);
            app.expense_index = app.view.expenses.len().saturating_sub(1);
            app.set_status(format!(
                "Added {category} expense of {} on {date}",
                format_amount(amount)
            ));
        }
        Err(e) => reject(app, e),
    }
    Ok(())
}

fn cmd_report(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.report = Some(Report::from_ledger(ledger));
    app.screen = Screen::Report;
    app.input_mode = InputMode::Normal;
    app.set_status(if ledger.is_empty() {
        "Report generated (no expenses recorded yet)"
    } else {
        "Report generated"
    });
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
