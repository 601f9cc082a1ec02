//! Page rendering to terminal text.

use crate::config::{APP_SUBTITLE, APP_TITLE, BAR_WIDTH, DEFAULT_PALETTE, PAGE_ICON, SCATTER_COLS, SCATTER_ROWS};
use crate::models::{Block, ChartSpec, DataTable, Geometry, Page, Scalar};

use super::markdown;
use super::theme::Theme;


const MARKERS: [char; 8] = ['●', '■', '▲', '◆', '★', '✚', '○', '□'];
const MAX_CELL_WIDTH: usize = 48;


/// Render the guide header and introduction.
pub fn render_intro(introduction: &str, theme: &Theme) -> String {
    let mut lines = vec![
        theme.heading(&format!("{PAGE_ICON} {APP_TITLE}")),
        theme.dim(APP_SUBTITLE),
        String::new(),
    ];
    lines.extend(markdown::to_lines(introduction, theme));
    lines.join("\n")
}


/// Render a whole page.
pub fn render_page(page: &Page, theme: &Theme) -> String {
    let width = page.title.chars().count() + 4;
    let mut lines = vec![
        format!("┌{}┐", "─".repeat(width - 2)),
        format!("│ {} │", theme.bold(&page.title)),
        format!("└{}┘", "─".repeat(width - 2)),
    ];
    render_blocks(&page.blocks, theme, 0, &mut lines);
    lines.join("\n")
}


fn render_blocks(blocks: &[Block], theme: &Theme, indent: usize, out: &mut Vec<String>) {
    for block in blocks {
        let mut lines = Vec::new();
        render_block(block, theme, &mut lines);
        let pad = " ".repeat(indent);
        out.extend(lines.into_iter().map(|l| if l.is_empty() { l } else { format!("{pad}{l}") }));
    }
}


fn render_block(block: &Block, theme: &Theme, out: &mut Vec<String>) {
    match block {
        Block::Subheader(text) => {
            out.push(String::new());
            out.push(theme.heading(text));
            out.push(theme.dim(&"─".repeat(text.chars().count())));
        }
        Block::Markdown(text) => {
            out.push(String::new());
            out.extend(markdown::to_lines(text, theme));
        }
        Block::Info(text) => callout(text, "ℹ", |s| theme.info(s), theme, out),
        Block::Success(text) => callout(text, "✔", |s| theme.success(s), theme, out),
        Block::Caption(text) => out.push(theme.dim(&markdown::inline(text, theme))),
        Block::Code(text) => {
            out.push(String::new());
            out.extend(text.lines().map(|l| format!("    {}", theme.cyan(l))));
        }
        Block::Table(table) => {
            out.push(String::new());
            out.extend(render_table(table, theme));
        }
        Block::Chart { spec, table } => {
            out.push(String::new());
            out.extend(render_chart(spec, table, theme));
        }
        Block::Expander { title, body } => {
            out.push(String::new());
            out.push(theme.bold(&format!("▸ {title}")));
            render_blocks(body, theme, 4, out);
        }
        Block::Tabs(tabs) => {
            for (label, body) in tabs {
                out.push(String::new());
                out.push(theme.accent(&format!("[ {label} ]")));
                render_blocks(body, theme, 2, out);
            }
        }
        Block::Columns(columns) => {
            for body in columns {
                render_blocks(body, theme, 0, out);
            }
        }
        Block::Progress { fraction, label } => {
            out.push(String::new());
            out.push(render_progress(*fraction, label, theme));
        }
        Block::Card(card) => {
            out.push(String::new());
            out.extend(markdown::to_lines(&card.to_markdown(), theme));
        }
        Block::Error(message) => out.push(theme.error(&format!("! {message}"))),
    }
}


fn callout(
    text: &str,
    icon: &str,
    paint: impl Fn(&str) -> String,
    theme: &Theme,
    out: &mut Vec<String>,
) {
    out.push(String::new());
    for (i, line) in text.lines().enumerate() {
        let marker = if i == 0 { icon } else { "│" };
        out.push(format!("{} {}", paint(marker), markdown::inline(line, theme)));
    }
}


/// Create a simple text bar for visualization.
fn create_bar(
    value: f64,
    max_value: f64,
    width: usize,
    paint: impl Fn(&str) -> String,
    theme: &Theme,
) -> String {
    if max_value <= 0.0 {
        return theme.dim(&"░".repeat(width));
    }

    let filled = ((value / max_value) * width as f64).round().max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", paint(&"█".repeat(filled)), theme.dim(&"░".repeat(width - filled)))
}


/// Progress bar with percentage and caption.
pub fn render_progress(fraction: f64, label: &str, theme: &Theme) -> String {
    let fraction = crate::models::clamp_fraction(fraction);
    let bar = create_bar(fraction, 1.0, BAR_WIDTH, |s| theme.accent(s), theme);
    let mut line = format!("{bar} {:>3.0}%", fraction * 100.0);
    if !label.is_empty() {
        line.push_str(&format!("  {}", theme.dim(label)));
    }
    line
}


fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}


fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}


/// Render a table as an aligned grid.
pub fn render_table(table: &DataTable, theme: &Theme) -> Vec<String> {
    let headers: Vec<String> = table.column_names().map(|n| truncate(n, MAX_CELL_WIDTH)).collect();
    let rows: Vec<Vec<String>> = table
        .records()
        .map(|rec| rec.iter().map(|(_, v)| truncate(&v.to_string(), MAX_CELL_WIDTH)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", parts.join(mid))
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!(" {} ", theme.bold(&pad(h, *w))))
        .collect();
    lines.push(format!("│{}│", header_cells.join("│")));
    lines.push(rule("├", "┼", "┤"));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {} ", pad(c, *w)))
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }

    lines.push(rule("└", "┴", "┘"));
    lines
}


/// Render a chart description as terminal text.
pub fn render_chart(spec: &ChartSpec, table: &DataTable, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();
    if !spec.title.is_empty() {
        lines.push(theme.bold(&spec.title));
    }

    match spec.geometry {
        Geometry::Scatter => lines.extend(render_scatter(spec, table, theme)),
        Geometry::Bar => lines.extend(render_bars(spec, table, theme)),
    }

    lines
}


fn palette(spec: &ChartSpec) -> Vec<&str> {
    if spec.palette.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        spec.palette.iter().map(String::as_str).collect()
    }
}


/// Numeric positions for a column: numbers as-is, text by first appearance.
pub(crate) fn positions(values: &[Scalar]) -> Vec<f64> {
    let mut seen: Vec<String> = Vec::new();
    values
        .iter()
        .map(|v| match v {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => match seen.iter().position(|t| t == s) {
                Some(idx) => idx as f64,
                None => {
                    seen.push(s.clone());
                    (seen.len() - 1) as f64
                }
            },
        })
        .collect()
}


/// Group index per record for the colour channel, plus group names.
pub(crate) fn color_groups(spec: &ChartSpec, table: &DataTable) -> (Vec<usize>, Vec<String>) {
    let Some(values) = spec.color_field.as_deref().and_then(|f| table.column(f)) else {
        return (vec![0; table.len()], Vec::new());
    };

    let mut names: Vec<String> = Vec::new();
    let groups = values
        .iter()
        .map(|v| {
            let key = v.to_string();
            match names.iter().position(|n| *n == key) {
                Some(idx) => idx,
                None => {
                    names.push(key);
                    names.len() - 1
                }
            }
        })
        .collect();

    (groups, names)
}


/// Min/max with a non-zero span.
pub(crate) fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}


fn scale(value: f64, (min, max): (f64, f64), cells: usize) -> usize {
    let ratio = (value - min) / (max - min);
    ((ratio * (cells - 1) as f64).round().max(0.0) as usize).min(cells - 1)
}


fn render_scatter(spec: &ChartSpec, table: &DataTable, theme: &Theme) -> Vec<String> {
    let xs = positions(table.column(&spec.x_field).unwrap_or(&[]));
    let ys = positions(table.column(&spec.y_field).unwrap_or(&[]));
    let x_bounds = bounds(&xs);
    let y_bounds = bounds(&ys);
    let (groups, group_names) = color_groups(spec, table);
    let colors = palette(spec);

    let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; SCATTER_COLS]; SCATTER_ROWS];
    for (i, (x, y)) in xs.iter().zip(&ys).enumerate() {
        let col = scale(*x, x_bounds, SCATTER_COLS);
        let row = SCATTER_ROWS - 1 - scale(*y, y_bounds, SCATTER_ROWS);
        grid[row][col] = Some(i);
    }

    let marker = |i: usize| {
        let g = groups.get(i).copied().unwrap_or(0);
        theme.hex(colors[g % colors.len()], &MARKERS[g % MARKERS.len()].to_string())
    };

    let mut lines = vec![theme.dim(&format!("↑ {}", spec.label_for(&spec.y_field)))];
    for (r, row) in grid.iter().enumerate() {
        let tick = if r == 0 {
            format!("{:>6}", short(y_bounds.1))
        } else if r == SCATTER_ROWS - 1 {
            format!("{:>6}", short(y_bounds.0))
        } else {
            " ".repeat(6)
        };
        let cells: String = row
            .iter()
            .map(|cell| cell.map(marker).unwrap_or_else(|| " ".to_string()))
            .collect();
        lines.push(format!("{} │{}", theme.dim(&tick), cells));
    }
    lines.push(format!("{} └{}", " ".repeat(6), "─".repeat(SCATTER_COLS)));

    let lo = short(x_bounds.0);
    let hi = short(x_bounds.1);
    let gap = SCATTER_COLS.saturating_sub(lo.chars().count() + hi.chars().count());
    lines.push(theme.dim(&format!("{}  {lo}{}{hi}", " ".repeat(6), " ".repeat(gap))));
    lines.push(theme.dim(&format!("{}  → {}", " ".repeat(6), spec.label_for(&spec.x_field))));

    // Legend: one entry per record, labelled by the hover field.
    lines.push(String::new());
    let hover = table.column(&spec.hover_field).unwrap_or(&[]);
    let sizes = spec.size_field.as_deref().and_then(|f| table.column(f));
    for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
        let name = hover.get(i).map(ToString::to_string).unwrap_or_default();
        let mut entry = format!(
            "{} {}  ({}: {}, {}: {})",
            marker(i),
            name,
            spec.label_for(&spec.x_field),
            short(x),
            spec.label_for(&spec.y_field),
            short(y),
        );
        if let (Some(field), Some(value)) = (spec.size_field.as_deref(), sizes.and_then(|v| v.get(i))) {
            entry.push_str(&format!(" {}: {}", spec.label_for(field), value));
        }
        lines.push(entry);
    }

    if group_names.len() > 1 && spec.color_field.as_deref() != Some(spec.hover_field.as_str()) {
        let legend: Vec<String> = group_names
            .iter()
            .enumerate()
            .map(|(g, name)| format!("{} {name}", theme.hex(colors[g % colors.len()], &MARKERS[g % MARKERS.len()].to_string())))
            .collect();
        lines.push(theme.dim(&format!("{}:", spec.label_for(spec.color_field.as_deref().unwrap_or_default()))));
        lines.push(legend.join("   "));
    }

    lines
}


fn render_bars(spec: &ChartSpec, table: &DataTable, theme: &Theme) -> Vec<String> {
    let categories: Vec<String> = table
        .column(&spec.x_field)
        .unwrap_or(&[])
        .iter()
        .map(ToString::to_string)
        .collect();

    let series: Vec<(&str, Vec<f64>)> = spec
        .value_fields()
        .map(|field| {
            let values = table
                .numbers(field)
                .unwrap_or_default()
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect();
            (field, values)
        })
        .collect();

    let max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0, f64::max);
    let label_width = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0).min(28);
    let colors = palette(spec);
    let grouped = series.len() > 1;

    let mut lines = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        for (s, (field, values)) in series.iter().enumerate() {
            let label = if s == 0 { pad(&truncate(category, 28), label_width) } else { " ".repeat(label_width) };
            // Single-series charts colour each category; grouped charts colour each series.
            let slot = if grouped { s } else { i };
            let color = colors[slot % colors.len()];
            let value = values.get(i).copied().unwrap_or(0.0);
            let bar = create_bar(value, max, BAR_WIDTH, |b| theme.hex(color, b), theme);
            let suffix = if grouped { format!("  {}", theme.dim(field)) } else { String::new() };
            lines.push(format!("{label} │{bar} {}{suffix}", short(value)));
        }
    }

    let value_label = spec
        .labels
        .get("value")
        .map(String::as_str)
        .unwrap_or_else(|| spec.label_for(&spec.y_field));
    lines.push(theme.dim(&format!("{} └ {value_label}", " ".repeat(label_width))));

    if grouped {
        let legend: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(s, (field, _))| format!("{} {field}", theme.hex(colors[s % colors.len()], "■")))
            .collect();
        lines.push(legend.join("   "));
    }

    lines
}


/// Compact number formatting for ticks and labels.
fn short(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_bar, build_scatter, column, Orientation};
    use crate::pages::{formation, opportunities};

    #[test]
    fn test_scatter_with_foreign_table_does_not_panic() {
        let wide = DataTable::from_columns(vec![
            column("x", [1, 2, 3]),
            column("y", [4, 5, 6]),
            column("s", [7, 8, 9]),
        ])
        .unwrap();
        let spec = build_scatter(&wide, "x", "y", Some("s"), None, None, None).unwrap();

        let narrow = DataTable::from_columns(vec![column("x", [1, 2]), column("y", [3, 4])]).unwrap();
        let lines = render_chart(&spec, &narrow, &Theme::plain());
        assert_eq!(lines.iter().filter(|l| l.contains("(x: ")).count(), 2);

        let no_y = DataTable::from_columns(vec![column("x", [1])]).unwrap();
        let lines = render_chart(&spec, &no_y, &Theme::plain());
        assert!(!lines.iter().any(|l| l.contains("(x: ")));
    }

    #[test]
    fn test_create_bar_bounds() {
        let theme = Theme::plain();
        assert_eq!(create_bar(5.0, 10.0, 10, |s| s.to_string(), &theme), "█████░░░░░");
        assert_eq!(create_bar(20.0, 10.0, 4, |s| s.to_string(), &theme), "████");
        assert_eq!(create_bar(1.0, 0.0, 3, |s| s.to_string(), &theme), "░░░");
    }

    #[test]
    fn test_render_progress_clamps() {
        let theme = Theme::plain();
        let line = render_progress(3.2, "done", &theme);
        assert!(line.contains("100%"));
        assert!(line.ends_with("done"));
        assert!(render_progress(-1.0, "", &theme).contains("  0%"));
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = formation::cost_table().unwrap();
        let lines = render_table(&table, &Theme::plain());

        assert_eq!(lines.len(), table.len() + 4);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(lines[1].contains("Estimated Cost (ZAR)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }

    #[test]
    fn test_positions_and_bounds() {
        let values = vec![Scalar::from("a"), Scalar::from("b"), Scalar::from("a")];
        assert_eq!(positions(&values), vec![0.0, 1.0, 0.0]);
        assert_eq!(bounds(&[3.0, 3.0]), (2.0, 4.0));
        assert_eq!(bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_scatter_plots_every_record() {
        let table = opportunities::market_table().unwrap();
        let spec = opportunities::opportunity_chart(&table).unwrap();
        let lines = render_chart(&spec, &table, &Theme::plain());

        assert_eq!(lines[0], "Business Opportunity Analysis by Category");
        let plotted: usize = lines
            .iter()
            .filter(|l| l.contains('│'))
            .map(|l| l.chars().filter(|c| MARKERS.contains(c)).count())
            .sum();
        assert_eq!(plotted, table.len());
        assert!(lines.iter().any(|l| l.contains("Fintech")));
    }

    #[test]
    fn test_scatter_without_encodings() {
        let table = DataTable::from_columns(vec![column("x", [1, 2, 3]), column("y", [3, 1, 2])]).unwrap();
        let spec = build_scatter(&table, "x", "y", None, None, None, None).unwrap();
        let lines = render_chart(&spec, &table, &Theme::plain());
        assert!(lines.iter().any(|l| l.starts_with("● 1")));
    }

    #[test]
    fn test_grouped_bars() {
        let table = formation::timeline_table().unwrap();
        let spec = formation::timeline_chart(&table).unwrap();
        let lines = render_chart(&spec, &table, &Theme::plain());

        let bars = lines.iter().filter(|l| l.contains('│')).count();
        assert_eq!(bars, table.len() * 2);
        assert!(lines.iter().any(|l| l.contains("Days Required")));
        assert!(lines.last().unwrap().contains("Maximum Days"));
    }

    #[test]
    fn test_single_series_bars() {
        let table = DataTable::from_columns(vec![column("k", ["a", "b"]), column("v", [1, 2])]).unwrap();
        let spec = build_bar(&table, "k", &["v"], Orientation::Vertical, None).unwrap();
        let lines = render_chart(&spec, &table, &Theme::plain());
        assert_eq!(lines[1], format!("b │{} 2", "█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_render_every_page_plain() {
        for section in crate::pages::SECTIONS {
            let text = render_page(&(section.render)(), &Theme::plain());
            assert!(text.contains(section.name));
            assert!(!text.contains('\x1b'));
        }
    }
}
