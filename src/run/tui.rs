use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::config::{parse_amount, SessionConfig};
use crate::ledger::Ledger;
use crate::ui::app::{App, Field, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(args: &[String]) -> Result<()> {
    let mut ledger = SessionConfig::from_args(args)?.build_ledger()?;
    crate::logging::init_tui()?;
    info!("dashboard session started");

    let mut app = App::new(chrono::Local::now().date_naive());
    app.refresh(&ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }
    info!(expenses = ledger.expenses().len(), "dashboard session ended");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Editing => handle_editing_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('a') => {
            app.input_mode = InputMode::Command;
            app.command_input = "add ".into();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Overview),
        KeyCode::Char('2') => switch_screen(app, Screen::Expenses),
        KeyCode::Char('3') => switch_screen(app, Screen::Charts),
        KeyCode::Char('4') => switch_screen(app, Screen::Report),
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => app.set_status(""),
        KeyCode::Char('+') | KeyCode::Char('=') => handle_adjust_field(app, ledger, 1),
        KeyCode::Char('-') => handle_adjust_field(app, ledger, -1),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('R') => commands::handle_command("report", app, ledger)?,
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            let field = app.selected_field();
            if input.trim().is_empty() {
                if field == Field::Budget {
                    commands::apply_field(app, ledger, field, None);
                } else {
                    app.set_status("Edit cancelled");
                }
                return;
            }
            match parse_amount(&input) {
                Ok(v) => commands::apply_field(app, ledger, field, Some(v)),
                Err(e) => app.set_status(e.to_string()),
            }
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '$' | '-') => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

// ── Navigation ───────────────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.set_status(format!("{screen}"));
}

fn cycle_screen(app: &mut App, delta: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0) as isize;
    let next = (idx + delta).rem_euclid(screens.len() as isize) as usize;
    switch_screen(app, screens[next]);
}

fn expense_page(app: &App) -> usize {
    app.visible_rows.saturating_sub(1).max(1)
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Overview => {
            if app.field_index + 1 < Field::all().len() {
                app.field_index += 1;
            }
        }
        Screen::Expenses => {
            let page = expense_page(app);
            scroll_down(
                &mut app.expense_index,
                &mut app.expense_scroll,
                app.view.expenses.len(),
                page,
            );
        }
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Overview => app.field_index = app.field_index.saturating_sub(1),
        Screen::Expenses => scroll_up(&mut app.expense_index, &mut app.expense_scroll),
        _ => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Overview => app.field_index = 0,
        Screen::Expenses => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Overview => app.field_index = Field::all().len() - 1,
        Screen::Expenses => {
            let page = expense_page(app);
            scroll_to_bottom(
                &mut app.expense_index,
                &mut app.expense_scroll,
                app.view.expenses.len(),
                page,
            );
        }
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    if app.screen != Screen::Overview {
        return;
    }
    let field = app.selected_field();
    app.command_input = app
        .view
        .field_value(field)
        .map(|v| v.normalize().to_string())
        .unwrap_or_default();
    app.input_mode = InputMode::Editing;
    app.set_status(if field == Field::Budget {
        "Enter a budget, or leave empty to clear it"
    } else {
        "Enter a new amount"
    });
}

fn handle_adjust_field(app: &mut App, ledger: &mut Ledger, delta: i32) {
    if app.screen != Screen::Overview {
        return;
    }
    let field = app.selected_field();
    commands::step_field(app, ledger, field, delta);
}
