use super::app::{DesktopApp, Mode, Status};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use scorecard::comparison::{aggregate, UNRATED_LABEL};
use scorecard::report::ReportRenderer;

const NAVY: Color = Color::Rgb(0x1a, 0x23, 0x7e);
const INDIGO: Color = Color::Rgb(0x3f, 0x51, 0xb5);

pub(crate) fn render<R: ReportRenderer>(frame: &mut Frame, app: &DesktopApp<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Rating grid
            Constraint::Length(3), // Totals
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new("Product comparison").style(Style::default().fg(NAVY).bold()),
        chunks[0],
    );
    render_grid(frame, chunks[1], app);
    render_totals(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
    render_hints(frame, chunks[4], app);
}

fn render_grid<R: ReportRenderer>(frame: &mut Frame, area: Rect, app: &DesktopApp<R>) {
    let products = app.form.products();

    let header_cells = std::iter::once("Criterion".to_string())
        .chain(products.iter().cloned())
        .enumerate()
        .map(|(column, text)| grid_cell(app, 0, column, text));
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::White).bg(NAVY).bold())
        .height(1);

    let rows = app.form.rows().iter().enumerate().map(|(index, row)| {
        let name = grid_cell(app, index + 1, 0, row.name.clone());
        let ratings = row.ratings.iter().enumerate().map(|(product, rating)| {
            let text = match rating {
                Some(rating) => format!("{} ({} pts)", rating.label(), rating.points()),
                None => UNRATED_LABEL.to_string(),
            };
            grid_cell(app, index + 1, product + 1, text)
        });
        Row::new(std::iter::once(name).chain(ratings))
    });

    let widths = std::iter::once(Constraint::Length(28))
        .chain(products.iter().map(|_| Constraint::Min(18)))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(INDIGO))
            .title(" Ratings "),
    );
    frame.render_widget(table, area);
}

fn grid_cell<R: ReportRenderer>(
    app: &DesktopApp<R>,
    row: usize,
    column: usize,
    text: String,
) -> Cell<'static> {
    let selected = app.cursor.row == row && app.cursor.column == column;
    match (&app.mode, selected) {
        (Mode::Editing { buffer }, true) => Cell::from(format!("{buffer}_"))
            .style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        (Mode::Navigate, true) => {
            Cell::from(text).style(Style::default().fg(Color::White).bg(INDIGO).bold())
        }
        _ => Cell::from(text),
    }
}

fn render_totals<R: ReportRenderer>(frame: &mut Frame, area: Rect, app: &DesktopApp<R>) {
    let request = app.form.to_request();
    let comparison = aggregate(&request.products, &request.criteria);

    let mut spans: Vec<Span> = Vec::new();
    for (product, score) in &comparison.products {
        if !spans.is_empty() {
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::styled(product.clone(), Style::default().bold()));
        spans.push(Span::raw(format!(": {} pts", score.total)));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(vec![
            Span::raw("Leader: "),
            Span::styled(comparison.winner.to_string(), Style::default().fg(NAVY).bold()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area.inner(Margin::new(1, 0)));
}

fn render_status<R: ReportRenderer>(frame: &mut Frame, area: Rect, app: &DesktopApp<R>) {
    let line = match &app.status {
        Status::Idle => Line::from(""),
        Status::Success(message) => {
            Line::styled(message.clone(), Style::default().fg(Color::Green))
        }
        Status::Failed(message) => Line::styled(message.clone(), Style::default().fg(Color::Red)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints<R: ReportRenderer>(frame: &mut Frame, area: Rect, app: &DesktopApp<R>) {
    let hints = match app.mode {
        Mode::Navigate => {
            "arrows/hjkl move  enter edit/cycle  space cycle  1-4 rate  0 clear  a add  d delete  g generate  q quit"
        }
        Mode::Editing { .. } => "type to edit  enter save  esc cancel",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
