use super::chart::BarChart;
use super::layout::{ReportLayout, TOTALS_LABEL, TOTALS_PLACEHOLDER};
use super::{RenderError, ReportRenderer};
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Document, Element as _, SimplePageDecorator};
use std::path::PathBuf;

const HEADER_COLOR: Color = Color::Rgb(0x1a, 0x23, 0x7e);

/// Directory and family name of the TrueType fonts used for the report.
/// The directory must hold `<family>-Regular.ttf`, `-Bold`, `-Italic` and
/// `-BoldItalic` files.
#[derive(Debug, Clone)]
pub struct FontSource {
    pub dir: PathBuf,
    pub family: String,
}

/// A4 PDF renderer backed by genpdf.
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    fonts: FontSource,
}

impl PdfReportRenderer {
    pub fn new(fonts: FontSource) -> Self {
        Self { fonts }
    }

    fn document(&self, title: &str) -> Result<Document, RenderError> {
        let family = genpdf::fonts::from_files(&self.fonts.dir, &self.fonts.family, None)
            .map_err(|source| RenderError::Fonts {
                family: self.fonts.family.clone(),
                dir: self.fonts.dir.clone(),
                source,
            })?;

        let mut doc = Document::new(family);
        doc.set_title(title);
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(25);
        doc.set_page_decorator(decorator);
        Ok(doc)
    }
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new(StyledString::new(
        text.to_string(),
        Style::new().bold().with_font_size(14),
    ))
}

fn score_table(layout: &ReportLayout) -> Result<TableLayout, RenderError> {
    let weights = std::iter::once(2)
        .chain(std::iter::repeat(1).take(layout.header.len().saturating_sub(1)))
        .collect();
    let mut table = TableLayout::new(weights);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let header_style = Style::new().bold().with_color(HEADER_COLOR);
    let mut header = table.row();
    for (index, title) in layout.header.iter().enumerate() {
        let cell = Paragraph::new(StyledString::new(title.clone(), header_style));
        let cell = if index == 0 {
            cell
        } else {
            cell.aligned(Alignment::Center)
        };
        header.push_element(cell.padded(1));
    }
    header.push().map_err(RenderError::Document)?;

    for row in &layout.rows {
        let mut table_row = table.row();
        table_row.push_element(Paragraph::new(row.criterion.clone()).padded(1));
        for cell in &row.cells {
            table_row.push_element(
                Paragraph::new(cell.clone())
                    .aligned(Alignment::Center)
                    .padded(1),
            );
        }
        table_row.push_element(
            Paragraph::new(row.total.clone())
                .aligned(Alignment::Center)
                .padded(1),
        );
        table_row.push().map_err(RenderError::Document)?;
    }

    let bold = Style::new().bold();
    let mut totals = table.row();
    totals.push_element(Paragraph::new(StyledString::new(TOTALS_LABEL, bold)).padded(1));
    for total in &layout.totals {
        totals.push_element(
            Paragraph::new(StyledString::new(total.clone(), bold))
                .aligned(Alignment::Center)
                .padded(1),
        );
    }
    totals.push_element(
        Paragraph::new(TOTALS_PLACEHOLDER)
            .aligned(Alignment::Center)
            .padded(1),
    );
    totals.push().map_err(RenderError::Document)?;

    Ok(table)
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
        let mut doc = self.document(layout.title)?;

        doc.push(
            Paragraph::new(StyledString::new(
                layout.title,
                Style::new().bold().with_font_size(20),
            ))
            .aligned(Alignment::Center),
        );
        doc.push(Break::new(1));
        doc.push(heading(&layout.winner_line));
        doc.push(Paragraph::new(format!(
            "Generated on {}",
            layout.generated_on.format("%Y-%m-%d")
        )));
        doc.push(Break::new(1.5));

        doc.push(heading("1. Detailed score table"));
        doc.push(Break::new(0.5));
        doc.push(score_table(layout)?);
        doc.push(Break::new(1.5));

        doc.push(heading("2. Total score comparison"));
        doc.push(Break::new(0.5));
        doc.push(BarChart::new(layout.chart.clone()));
        doc.push(Break::new(1.5));

        doc.push(heading("3. Scoring rules"));
        doc.push(Paragraph::new(
            "Ratings were converted to points using the following scale:",
        ));
        for rule in &layout.scoring_rules {
            doc.push(Paragraph::new(format!("- {rule}")));
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes).map_err(RenderError::Document)?;
        Ok(bytes)
    }
}
