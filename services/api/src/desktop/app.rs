use crate::infra::report_date;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scorecard::comparison::{
    ComparisonForm, ComparisonService, RatingLabel, NEW_CRITERION_NAME,
};
use scorecard::report::ReportRenderer;
use std::path::PathBuf;

/// Grid position. Row 0 holds the product names and column 0 the criterion
/// names; every other cell is a rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) row: usize,
    pub(crate) column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    Navigate,
    Editing { buffer: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Idle,
    Success(String),
    Failed(String),
}

pub(crate) struct DesktopApp<R> {
    pub(crate) form: ComparisonForm,
    pub(crate) cursor: Cursor,
    pub(crate) mode: Mode,
    pub(crate) status: Status,
    pub(crate) should_quit: bool,
    service: ComparisonService<R>,
    output_path: PathBuf,
}

impl<R> DesktopApp<R>
where
    R: ReportRenderer,
{
    pub(crate) fn new(
        form: ComparisonForm,
        service: ComparisonService<R>,
        output_path: PathBuf,
    ) -> Self {
        Self {
            form,
            cursor: Cursor {
                row: 1,
                column: 1,
            },
            mode: Mode::Navigate,
            status: Status::Idle,
            should_quit: false,
            service,
            output_path,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Navigate => self.handle_navigation(key.code),
            Mode::Editing { .. } => self.handle_editing(key.code),
        }
    }

    fn handle_navigation(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_by(0, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_by(0, 1),
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.rating_cell().is_some() {
                    self.cycle();
                } else {
                    self.begin_edit();
                }
            }
            KeyCode::Char(' ') => self.cycle(),
            KeyCode::Char('1') => self.set_rating(Some(RatingLabel::Excellent)),
            KeyCode::Char('2') => self.set_rating(Some(RatingLabel::Good)),
            KeyCode::Char('3') => self.set_rating(Some(RatingLabel::Fair)),
            KeyCode::Char('4') => self.set_rating(Some(RatingLabel::None)),
            KeyCode::Char('0') | KeyCode::Backspace => self.set_rating(None),
            KeyCode::Char('a') => self.add_criterion(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_criterion(),
            KeyCode::Char('g') => self.generate(),
            _ => {}
        }
    }

    fn handle_editing(&mut self, code: KeyCode) {
        let Mode::Editing { buffer } = &mut self.mode else {
            return;
        };

        match code {
            KeyCode::Char(ch) => buffer.push(ch),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let name = std::mem::take(buffer);
                self.mode = Mode::Navigate;
                self.commit_name(name);
            }
            KeyCode::Esc => self.mode = Mode::Navigate,
            _ => {}
        }
    }

    fn move_by(&mut self, rows: isize, columns: isize) {
        let last_row = self.form.rows().len();
        let last_column = self.form.products().len();
        self.cursor.row = self.cursor.row.saturating_add_signed(rows).min(last_row);
        self.cursor.column = self
            .cursor
            .column
            .saturating_add_signed(columns)
            .min(last_column);
    }

    /// (criterion index, product index) when the cursor is on a rating.
    pub(crate) fn rating_cell(&self) -> Option<(usize, usize)> {
        (self.cursor.row > 0 && self.cursor.column > 0)
            .then(|| (self.cursor.row - 1, self.cursor.column - 1))
    }

    fn cycle(&mut self) {
        if let Some((row, product)) = self.rating_cell() {
            self.form.cycle_rating(row, product);
        }
    }

    fn set_rating(&mut self, rating: Option<RatingLabel>) {
        if let Some((row, product)) = self.rating_cell() {
            self.form.set_rating(row, product, rating);
        }
    }

    fn current_name(&self) -> Option<&str> {
        match (self.cursor.row, self.cursor.column) {
            (0, 0) => None,
            (0, column) => self.form.products().get(column - 1).map(String::as_str),
            (row, 0) => self.form.rows().get(row - 1).map(|row| row.name.as_str()),
            _ => None,
        }
    }

    fn begin_edit(&mut self) {
        if let Some(name) = self.current_name() {
            self.mode = Mode::Editing {
                buffer: name.to_string(),
            };
        }
    }

    fn commit_name(&mut self, name: String) {
        match (self.cursor.row, self.cursor.column) {
            (0, column) if column > 0 => {
                self.form.rename_product(column - 1, name);
            }
            (row, 0) if row > 0 => {
                self.form.rename_criterion(row - 1, name);
            }
            _ => {}
        }
    }

    fn add_criterion(&mut self) {
        let index = self.form.add_criterion(NEW_CRITERION_NAME);
        self.cursor = Cursor {
            row: index + 1,
            column: 0,
        };
    }

    fn remove_criterion(&mut self) {
        if self.cursor.row == 0 {
            return;
        }
        if self.form.remove_criterion(self.cursor.row - 1).is_some() {
            self.cursor.row = self.cursor.row.min(self.form.rows().len());
        }
    }

    fn generate(&mut self) {
        if !self.form.can_generate() {
            self.status = Status::Failed(
                "Add at least one criterion before generating the report".to_string(),
            );
            return;
        }

        let request = self.form.to_request();
        self.status = match self
            .service
            .write_report(&request, report_date(None), &self.output_path)
        {
            Ok(report) => Status::Success(format!(
                "Report saved to {} (winner: {})",
                self.output_path.display(),
                report.comparison.winner
            )),
            Err(err) => Status::Failed(format!("Could not generate the report: {err}")),
        };
    }
}
