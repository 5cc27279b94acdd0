use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::format_percent;
use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, to_f64};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Length(3), // Savings gauge
            Constraint::Min(7),    // Inputs + budget
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_savings_gauge(f, chunks[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_inputs(f, bottom[0], app);
    render_budget(f, bottom[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let view = &app.view;
    let count = view.expenses.len();

    render_card(f, cards[0], "Total Income", view.income, theme::GREEN, None);
    render_card(
        f,
        cards[1],
        "Total Expenses",
        view.total_expenses,
        theme::RED,
        Some(format!(
            "{count} expense{}",
            if count == 1 { "" } else { "s" }
        )),
    );
    render_card(
        f,
        cards[2],
        "Savings Goal",
        view.savings_goal,
        theme::ACCENT,
        None,
    );
    render_card(
        f,
        cards[3],
        "Remaining Savings",
        view.remaining_savings,
        if view.remaining_savings >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_savings_gauge(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel("Savings Progress");
    let Some(pct) = app.view.savings_progress else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No savings goal set. Use :goal <amount>",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    };

    let ratio = (to_f64(pct) / 100.0).clamp(0.0, 1.0);
    let color = if pct >= Decimal::ONE_HUNDRED {
        theme::GREEN
    } else if pct >= Decimal::from(50) {
        theme::YELLOW
    } else {
        theme::RED
    };
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(ratio)
        .label(Span::styled(
            format!(
                "{} of {}",
                format_percent(pct),
                format_amount(app.view.savings_goal)
            ),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, area);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Field::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.field_index;
            let editing = selected && app.input_mode == InputMode::Editing;
            let value = if editing {
                format!("{}▏", app.command_input)
            } else {
                app.view
                    .field_value(*field)
                    .map(format_amount)
                    .unwrap_or_else(|| "not set".into())
            };
            let style = if selected {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<14}", field.to_string()), style),
                Span::styled(format!(" {value}"), style.add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    let list = List::new(items).block(theme::panel("Inputs (j/k, +/-, Enter)"));
    f.render_widget(list, area);
}

fn render_budget(f: &mut Frame, area: Rect, app: &App) {
    let Some(variance) = app.view.variance else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No budget ceiling set", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Use :budget <amount> to compare spending against a limit",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(theme::panel("Budget"));
        f.render_widget(msg, area);
        return;
    };

    let actual_color = if variance.is_over() {
        theme::RED
    } else {
        theme::GREEN
    };
    let bars = [
        Bar::default()
            .value(variance.budget.to_u64().unwrap_or(0))
            .text_value(format_amount(variance.budget))
            .label(Line::from("Budget"))
            .style(Style::default().fg(theme::ACCENT)),
        Bar::default()
            .value(variance.actual.to_u64().unwrap_or(0))
            .text_value(format_amount(variance.actual))
            .label(Line::from("Actual"))
            .style(Style::default().fg(actual_color)),
    ];

    let title = if variance.is_over() {
        format!("Budget (over by {})", format_amount(variance.over_by))
    } else {
        format!(
            "Budget ({} left)",
            format_amount(variance.budget - variance.actual)
        )
    };

    let chart = BarChart::default()
        .block(theme::panel(title))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD));

    f.render_widget(chart, area);
}
