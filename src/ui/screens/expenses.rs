use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let expenses = &app.view.expenses;
    if expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <category> <amount> [YYYY-MM-DD]",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(theme::panel("Expenses (0)")),
            area,
        );
        return;
    }

    let header_cells = ["#", "Date", "Category", "Amount", "Running Total"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = expenses
        .iter()
        .zip(app.view.cumulative.iter())
        .enumerate()
        .skip(app.expense_scroll)
        .take(page.max(1))
        .map(|(i, (expense, (_, running)))| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let selected = i == app.expense_index;
            let category_style = if selected {
                style
            } else {
                style.fg(theme::category_color(expense.category))
            };
            let amount_style = if selected {
                style.add_modifier(Modifier::BOLD)
            } else {
                style.patch(theme::expense_style())
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(style),
                Cell::from(expense.date_label()).style(style),
                Cell::from(expense.category.as_str()).style(category_style),
                Cell::from(format_amount(expense.amount)).style(amount_style),
                Cell::from(format_amount(*running)).style(style),
            ])
        })
        .collect();

    let title = format!(
        "Expenses ({}) | Total {}",
        expenses.len(),
        format_amount(app.view.total_expenses)
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(14),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(theme::panel(title));

    f.render_widget(table, area);
}
