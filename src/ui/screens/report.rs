use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(report) = &app.report else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No report generated", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Run :report to summarize the current figures",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(theme::panel("Report"));
        f.render_widget(msg, area);
        return;
    };

    let lines: Vec<Line> = report
        .lines()
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            if i == 0 || text == "Spending by Category:" {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(theme::YELLOW)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if text.contains("Over Budget:") && report.budget.is_some_and(|b| b.is_over()) {
                Line::from(Span::styled(text, theme::expense_style()))
            } else {
                Line::from(Span::styled(text, theme::normal_style()))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(theme::panel("Report")), area);
}
