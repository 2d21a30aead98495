use super::layout::ChartSpec;
use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::{Color, Style};
use genpdf::{Context, Element, Mm, Position, RenderResult, Size};

/// Horizontal distance between the vertical strokes that fill a bar.
const STROKE_STEP_MM: f64 = 0.2;

const BAR_COLORS: [Color; 3] = [
    Color::Rgb(0x1a, 0x23, 0x7e),
    Color::Rgb(0x3f, 0x51, 0xb5),
    Color::Rgb(0x79, 0x86, 0xcb),
];

/// Vertical bar chart drawn straight onto the page: a title and axis caption,
/// then one bar per product scaled to the largest value with the value above
/// each bar and the product name below the axis.
pub struct BarChart {
    spec: ChartSpec,
    height: Mm,
}

impl BarChart {
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            height: Mm::from(80.0),
        }
    }
}

/// X positions of the strokes filling a bar `width` wide around `center`.
fn bar_strokes(center: Mm, width: Mm) -> Vec<Mm> {
    let steps = (f64::from(width) / STROKE_STEP_MM).round() as usize;
    if steps == 0 {
        return vec![center];
    }

    let left = center - width / 2.0;
    (0..=steps)
        .map(|step| left + width * (step as f64 / steps as f64))
        .collect()
}

fn non_negative(value: Mm) -> Mm {
    if value < Mm::from(0.0) {
        Mm::from(0.0)
    } else {
        value
    }
}

impl Element for BarChart {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let size = area.size();
        if size.height < self.height {
            return Ok(RenderResult {
                size: Size::new(0.0, 0.0),
                has_more: true,
            });
        }

        let fonts = &context.font_cache;
        let title_style = style.bold();
        let line_height = style.line_height(fonts);

        let title_width = title_style.str_width(fonts, &self.spec.title);
        let title_x = non_negative((size.width - title_width) / 2.0);
        area.print_str(
            fonts,
            Position::new(title_x, 0.0),
            title_style,
            &self.spec.title,
        )?;

        area.print_str(
            fonts,
            Position::new(0.0, line_height * 1.2),
            style.italic(),
            self.spec.y_label,
        )?;

        let plot_top = line_height * 3.0;
        let axis_y = self.height - line_height * 1.5;
        let plot_height = axis_y - plot_top;

        area.draw_line(
            vec![Position::new(0.0, axis_y), Position::new(size.width, axis_y)],
            Style::new(),
        );

        let max_value = self.spec.max_value();
        let slot = size.width / (self.spec.bars.len().max(1) as f64);
        let bar_width = slot * 0.5;

        for (index, bar) in self.spec.bars.iter().enumerate() {
            let center = slot * (index as f64 + 0.5);
            let bar_height = if max_value == 0 {
                Mm::from(0.0)
            } else {
                plot_height * (f64::from(bar.value) / f64::from(max_value))
            };
            let bar_top = axis_y - bar_height;

            if bar.value > 0 {
                let fill = Style::new().with_color(BAR_COLORS[index % BAR_COLORS.len()]);
                for x in bar_strokes(center, bar_width) {
                    area.draw_line(
                        vec![Position::new(x, axis_y), Position::new(x, bar_top)],
                        fill,
                    );
                }
            }

            let value = bar.value.to_string();
            let value_x = non_negative(center - style.str_width(fonts, &value) / 2.0);
            area.print_str(
                fonts,
                Position::new(value_x, bar_top - line_height * 1.2),
                style,
                &value,
            )?;

            let label_x = non_negative(center - style.str_width(fonts, &bar.label) / 2.0);
            area.print_str(
                fonts,
                Position::new(label_x, axis_y + line_height * 0.3),
                style,
                &bar.label,
            )?;
        }

        Ok(RenderResult {
            size: Size::new(size.width, self.height),
            has_more: false,
        })
    }
}
