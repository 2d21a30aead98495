//! Terminal front end over [`ComparisonForm`]: edit names, cycle ratings,
//! then write the PDF report to the configured output path. Without a
//! usable terminal the sample report is written instead.

mod app;
mod event;
mod ui;

use crate::demo::write_sample;
use crate::infra::{pdf_service, report_date};
use app::DesktopApp;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use event::{Event, EventHandler};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use scorecard::comparison::{ComparisonForm, ComparisonService};
use scorecard::config::AppConfig;
use scorecard::error::AppError;
use scorecard::report::ReportRenderer;
use std::io::{self, stdout, Stdout};
use std::path::Path;

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = pdf_service(&config.report);
    let output = config.report.output_path.clone();

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => return fall_back_to_sample(&err, &service, &output),
    };

    let mut app = DesktopApp::new(ComparisonForm::default(), service, output);
    let outcome = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    outcome?;
    restored?;
    Ok(())
}

/// Raw mode plus the alternate screen. Raw mode is left again when the
/// screen or the backend cannot be set up.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = enter_screen();
    undo_on_error(entered, disable_raw_mode)
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Runs `undo` when `result` failed. The original error is returned.
fn undo_on_error<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        // The setup error is the one reported.
        let _ = undo();
    }
    result
}

/// Without a usable terminal the form cannot be shown, so the sample
/// comparison is written instead.
fn fall_back_to_sample<R: ReportRenderer>(
    err: &io::Error,
    service: &ComparisonService<R>,
    output: &Path,
) -> Result<(), AppError> {
    eprintln!("Terminal UI unavailable ({err}); writing the sample report instead.");
    write_sample(service, output, report_date(None))
}

fn event_loop<B, R>(terminal: &mut Terminal<B>, app: &mut DesktopApp<R>) -> io::Result<()>
where
    B: Backend,
    R: ReportRenderer,
{
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize | Event::Tick => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard::report::{RenderError, ReportLayout};
    use std::cell::Cell;
    use std::sync::Arc;

    struct StaticRenderer;

    impl ReportRenderer for StaticRenderer {
        fn render(&self, _layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
            Ok(b"%PDF-sample".to_vec())
        }
    }

    #[test]
    fn failed_setup_leaves_raw_mode() {
        let restored = Cell::new(false);
        let result: io::Result<()> = undo_on_error(Err(io::Error::other("no tty")), || {
            restored.set(true);
            Ok(())
        });

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let restored = Cell::new(false);
        let result = undo_on_error(Ok(7), || {
            restored.set(true);
            Ok(())
        });

        assert_eq!(result.expect("setup succeeds"), 7);
        assert!(!restored.get());
    }

    #[test]
    fn setup_error_is_kept_when_restoring_also_fails() {
        let result: io::Result<()> = undo_on_error(
            Err(io::Error::other("alternate screen")),
            || Err(io::Error::other("raw mode")),
        );

        let err = result.expect_err("setup fails");
        assert_eq!(err.to_string(), "alternate screen");
    }

    #[test]
    fn missing_terminal_writes_the_sample_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("product_comparison.pdf");
        let service = ComparisonService::new(Arc::new(StaticRenderer));

        fall_back_to_sample(&io::Error::other("not a terminal"), &service, &output)
            .expect("sample report written");

        let written = std::fs::read(&output).expect("report file");
        assert_eq!(written, b"%PDF-sample");
    }
}
