use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{BudgetVariance, Ledger};
use crate::models::{ExpenseCategory, ExpenseRecord};
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    Expenses,
    Charts,
    Report,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Overview, Self::Expenses, Self::Charts, Self::Report]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Charts => write!(f, "Charts"),
            Self::Report => write!(f, "Report"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Ledger inputs that can be edited in place on the Overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Income,
    SavingsGoal,
    Budget,
}

impl Field {
    pub(crate) fn all() -> &'static [Field] {
        &[Self::Income, Self::SavingsGoal, Self::Budget]
    }

    /// Amount added or removed by `+`/`-`.
    pub(crate) fn step(&self) -> Decimal {
        Decimal::ONE_HUNDRED
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::SavingsGoal => write!(f, "Savings Goal"),
            Self::Budget => write!(f, "Budget"),
        }
    }
}

/// Everything the screens draw, recomputed in full from the ledger after each change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LedgerView {
    pub(crate) income: Decimal,
    pub(crate) savings_goal: Decimal,
    pub(crate) budget: Option<Decimal>,
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) total_expenses: Decimal,
    pub(crate) remaining_savings: Decimal,
    pub(crate) savings_progress: Option<Decimal>,
    pub(crate) by_category: Vec<(ExpenseCategory, Decimal)>,
    pub(crate) cumulative: Vec<(Option<NaiveDate>, Decimal)>,
    pub(crate) variance: Option<BudgetVariance>,
}

impl LedgerView {
    pub(crate) fn compute(ledger: &Ledger) -> Self {
        Self {
            income: ledger.income(),
            savings_goal: ledger.savings_goal(),
            budget: ledger.budget(),
            expenses: ledger.expenses().to_vec(),
            total_expenses: ledger.total_expenses(),
            remaining_savings: ledger.remaining_savings(),
            savings_progress: ledger.savings_progress_percent(),
            by_category: ledger.expenses_by_category().into_iter().collect(),
            cumulative: ledger.cumulative_expenses_over_time(),
            variance: ledger.budget_variance(),
        }
    }

    pub(crate) fn field_value(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::Income => Some(self.income),
            Field::SavingsGoal => Some(self.savings_goal),
            Field::Budget => self.budget,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    pub(crate) view: LedgerView,

    // Overview
    pub(crate) field_index: usize,

    // Expenses
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Report snapshot, taken on demand and dropped when the ledger changes
    pub(crate) report: Option<Report>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            view: LedgerView::default(),

            field_index: 0,

            expense_index: 0,
            expense_scroll: 0,

            report: None,

            visible_rows: 20,
        }
    }

    /// Recompute every derived view after a ledger change.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.view = LedgerView::compute(ledger);
        self.report = None;
        let len = self.view.expenses.len();
        if self.expense_index >= len {
            self.expense_index = len.saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn selected_field(&self) -> Field {
        Field::all()
            .get(self.field_index)
            .copied()
            .unwrap_or(Field::Income)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
