use std::f64::consts::TAU;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, List, ListItem, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::ExpenseCategory;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, to_f64, truncate};

/// Grid resolution used to fill the pie; braille gives 2x4 dots per cell.
const PIE_SAMPLES: usize = 160;

/// One wedge of the pie, measured clockwise from 12 o'clock in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Slice {
    pub(crate) category: ExpenseCategory,
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) percent: f64,
}

pub(crate) fn pie_slices(by_category: &[(ExpenseCategory, Decimal)]) -> Vec<Slice> {
    let total = by_category
        .iter()
        .fold(Decimal::ZERO, |acc, (_, amt)| acc.saturating_add(*amt));
    if total <= Decimal::ZERO {
        return Vec::new();
    }

    let mut start = 0.0;
    let mut slices: Vec<Slice> = by_category
        .iter()
        .filter(|(_, amt)| *amt > Decimal::ZERO)
        .map(|(category, amt)| {
            let fraction = to_f64(*amt / total);
            let slice = Slice {
                category: *category,
                start,
                end: start + fraction * TAU,
                percent: fraction * 100.0,
            };
            start = slice.end;
            slice
        })
        .collect();
    // Float drift must not leave a sliver uncovered at 12 o'clock.
    if let Some(last) = slices.last_mut() {
        last.end = TAU;
    }
    slices
}

/// Clockwise angle from 12 o'clock for a point, in `[0, TAU)`.
pub(crate) fn clock_angle(x: f64, y: f64) -> f64 {
    let angle = x.atan2(y);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Sample points of the unit disc, grouped by the slice they fall in.
pub(crate) fn pie_points(slices: &[Slice], samples: usize) -> Vec<Vec<(f64, f64)>> {
    let mut groups: Vec<Vec<(f64, f64)>> = vec![Vec::new(); slices.len()];
    if slices.is_empty() || samples < 2 {
        return groups;
    }
    let step = 2.0 / (samples - 1) as f64;
    for i in 0..samples {
        for j in 0..samples {
            let x = -1.0 + i as f64 * step;
            let y = -1.0 + j as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = clock_angle(x, y);
            if let Some(idx) = slices
                .iter()
                .position(|s| angle >= s.start && angle < s.end)
            {
                groups[idx].push((x, y));
            }
        }
    }
    groups
}

/// Canvas bounds that keep the pie round on cells roughly twice as tall as wide.
pub(crate) fn pie_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    const R: f64 = 1.1;
    let (w, h) = (f64::from(width.max(1)), f64::from(height.max(1)));
    let x_half = R * w / (2.0 * h);
    if x_half >= R {
        ([-x_half, x_half], [-R, R])
    } else {
        let y_half = R * 2.0 * h / w;
        ([-R, R], [-y_half, y_half])
    }
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.view.by_category.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Nothing to chart yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add expenses with :add <category> <amount>",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(theme::panel("Charts"));
        f.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_pie(f, top[0], app);
    render_category_bars(f, top[1], app);
    render_cumulative_line(f, rows[1], app);
}

fn render_pie(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel("Expenses by Category");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let slices = pie_slices(&app.view.by_category);
    let groups = pie_points(&slices, PIE_SAMPLES);
    let (x_bounds, y_bounds) = pie_bounds(cols[0].width, cols[0].height);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (slice, coords) in slices.iter().zip(groups.iter()) {
                ctx.draw(&Points {
                    coords,
                    color: theme::category_color(slice.category),
                });
            }
        });
    f.render_widget(canvas, cols[0]);

    let legend: Vec<ListItem> = slices
        .iter()
        .map(|slice| {
            let color = theme::category_color(slice.category);
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<14}", slice.category.as_str()),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>5.1}% ", slice.percent),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    progress_bar(slice.percent / 100.0, 8),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(legend), cols[1]);
}

fn render_category_bars(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .view
        .by_category
        .iter()
        .map(|(category, amt)| {
            let color = theme::category_color(*category);
            Bar::default()
                .value(amt.round().to_u64().unwrap_or(0))
                .text_value(format_amount(*amt))
                .label(Line::from(truncate(category.as_str(), 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_cumulative_line(f: &mut Frame, area: Rect, app: &App) {
    let points: Vec<(f64, f64)> = app
        .view
        .cumulative
        .iter()
        .enumerate()
        .map(|(i, (_, total))| ((i + 1) as f64, to_f64(*total)))
        .collect();
    let n = points.len().max(2) as f64;

    let budget_line: Vec<(f64, f64)> = app
        .view
        .budget
        .map(|b| vec![(1.0, to_f64(b)), (n, to_f64(b))])
        .unwrap_or_default();

    let peak = points
        .iter()
        .map(|(_, y)| *y)
        .chain(budget_line.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    let mut datasets = vec![Dataset::default()
        .name("Cumulative")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::YELLOW))
        .data(&points)];
    if !budget_line.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Budget")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::RED))
                .data(&budget_line),
        );
    }

    let first = app.view.cumulative.first().map(date_label).unwrap_or_default();
    let last = app.view.cumulative.last().map(date_label).unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(theme::panel("Cumulative Expenses"))
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([1.0, n])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds([0.0, y_max])
                .labels(vec![
                    "$0".to_string(),
                    format!("${:.0}", y_max / 2.0),
                    format!("${y_max:.0}"),
                ]),
        );

    f.render_widget(chart, area);
}

fn date_label(point: &(Option<chrono::NaiveDate>, Decimal)) -> String {
    point
        .0
        .map(|d| d.format("%m-%d").to_string())
        .unwrap_or_else(|| "-".into())
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod charts_tests;
