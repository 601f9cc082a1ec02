//! Chart export to SVG and PNG.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{DEFAULT_PALETTE, EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::models::{ChartSpec, DataTable, Geometry, Orientation};

use super::terminal::{bounds, color_groups, positions};
use super::theme::hex_to_rgb;


// Light plot theme
const BG: &str = "#FFFFFF";
const PLOT_BG: &str = "#E5ECF6";
const GRID: &str = "#FFFFFF";
const TEXT: &str = "#2A3F5F";

const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MARGIN_RIGHT: f64 = 40.0;
const LEGEND_WIDTH: f64 = 200.0;
const TICKS: usize = 5;
const DEFAULT_MARKER_RADIUS: f64 = 7.0;
const DEFAULT_SIZE_MAX: f64 = 20.0;


/// Plot rectangle inside the canvas.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}


impl Frame {
    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}


/// Export a chart as SVG.
pub fn export_chart_svg(spec: &ChartSpec, table: &DataTable, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(spec, table);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export a chart as PNG.
pub fn export_chart_png(spec: &ChartSpec, table: &DataTable, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(spec, table);

    let mut options = resvg::usvg::Options::default();
    Arc::make_mut(&mut options.fontdb).load_system_fonts();

    // Parse SVG
    let tree = resvg::usvg::Tree::from_str(&svg_content, &options).context("Failed to parse SVG")?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).context("Failed to create pixmap")?;

    let bg = hex_to_rgb(BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Generate SVG content for a chart.
pub fn generate_svg(spec: &ChartSpec, table: &DataTable) -> String {
    let width = EXPORT_WIDTH as f64;
    let height = EXPORT_HEIGHT as f64;

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, EXPORT_WIDTH, EXPORT_HEIGHT),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 18px sans-serif; }}", TEXT),
        format!("  .axis-title {{ fill: {}; font: 13px sans-serif; }}", TEXT),
        format!("  .tick {{ fill: {}; font: 11px sans-serif; }}", TEXT),
        format!("  .legend-text {{ fill: {}; font: 12px sans-serif; }}", TEXT),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, BG),
    ];

    if !spec.title.is_empty() {
        svg_parts.push(format!(
            r#"<text x="{}" y="36" class="title">{}</text>"#,
            24,
            escape(&spec.title)
        ));
    }

    match spec.geometry {
        Geometry::Scatter => svg_parts.extend(scatter_svg(spec, table, width, height)),
        Geometry::Bar => svg_parts.extend(bar_svg(spec, table, width, height)),
    }

    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


fn palette(spec: &ChartSpec) -> Vec<String> {
    if spec.palette.is_empty() {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    } else {
        spec.palette.clone()
    }
}


/// Pad bounds so markers are not clipped at the plot edge.
fn padded((min, max): (f64, f64)) -> (f64, f64) {
    let pad = (max - min) * 0.08;
    (min - pad, max + pad)
}


fn project(value: f64, (min, max): (f64, f64), start: f64, length: f64) -> f64 {
    start + (value - min) / (max - min) * length
}


fn plot_background(frame: Frame) -> String {
    format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
        frame.left, frame.top, frame.width, frame.height, PLOT_BG
    )
}


/// Gridlines and labels along the value axis.
fn value_ticks(range: (f64, f64), frame: Frame, horizontal: bool) -> Vec<String> {
    let mut parts = Vec::new();
    for i in 0..=TICKS {
        let value = range.0 + (range.1 - range.0) * i as f64 / TICKS as f64;
        if horizontal {
            let x = project(value, range, frame.left, frame.width);
            parts.push(format!(
                r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{GRID}" stroke-width="1"/>"#,
                frame.top,
                frame.bottom()
            ));
            parts.push(format!(
                r#"<text x="{x:.1}" y="{:.1}" class="tick" text-anchor="middle">{}</text>"#,
                frame.bottom() + 18.0,
                tick_label(value)
            ));
        } else {
            let y = frame.bottom() - project(value, range, 0.0, frame.height);
            parts.push(format!(
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{GRID}" stroke-width="1"/>"#,
                frame.left,
                frame.right()
            ));
            parts.push(format!(
                r#"<text x="{:.1}" y="{:.1}" class="tick" text-anchor="end">{}</text>"#,
                frame.left - 8.0,
                y + 4.0,
                tick_label(value)
            ));
        }
    }
    parts
}


fn axis_titles(frame: Frame, x_title: &str, y_title: &str) -> Vec<String> {
    let y_mid = frame.top + frame.height / 2.0;
    vec![
        format!(
            r#"<text x="{:.1}" y="{:.1}" class="axis-title" text-anchor="middle">{}</text>"#,
            frame.left + frame.width / 2.0,
            frame.bottom() + 50.0,
            escape(x_title)
        ),
        format!(
            r#"<text x="18" y="{y_mid:.1}" class="axis-title" text-anchor="middle" transform="rotate(-90 18 {y_mid:.1})">{}</text>"#,
            escape(y_title)
        ),
    ]
}


fn legend(title: &str, entries: &[(String, String)], x: f64, y: f64) -> Vec<String> {
    let mut parts = vec![format!(
        r#"<text x="{x:.1}" y="{y:.1}" class="legend-text" font-weight="bold">{}</text>"#,
        escape(title)
    )];
    for (i, (name, color)) in entries.iter().enumerate() {
        let row_y = y + 22.0 * (i + 1) as f64;
        parts.push(format!(
            r#"<rect x="{x:.1}" y="{:.1}" width="12" height="12" fill="{color}"/>"#,
            row_y - 10.0
        ));
        parts.push(format!(
            r#"<text x="{:.1}" y="{row_y:.1}" class="legend-text">{}</text>"#,
            x + 18.0,
            escape(name)
        ));
    }
    parts
}


fn scatter_svg(spec: &ChartSpec, table: &DataTable, width: f64, height: f64) -> Vec<String> {
    let (groups, group_names) = color_groups(spec, table);
    let colors = palette(spec);
    let has_legend = !group_names.is_empty();

    let frame = Frame {
        left: 80.0,
        top: MARGIN_TOP,
        width: width - 80.0 - MARGIN_RIGHT - if has_legend { LEGEND_WIDTH } else { 0.0 },
        height: height - MARGIN_TOP - MARGIN_BOTTOM,
    };

    let xs = positions(table.column(&spec.x_field).unwrap_or(&[]));
    let ys = positions(table.column(&spec.y_field).unwrap_or(&[]));
    let x_range = padded(bounds(&xs));
    let y_range = padded(bounds(&ys));

    // Marker area scales with the size column, capped at size_max diameter.
    let sizes: Option<Vec<f64>> = spec.size_field.as_deref().and_then(|f| table.numbers(f)).map(|v| {
        v.into_iter().map(|n| n.unwrap_or(0.0).max(0.0)).collect()
    });
    let size_peak = sizes
        .as_ref()
        .map(|s| s.iter().copied().fold(0.0, f64::max))
        .unwrap_or(0.0);
    let size_max = spec.size_max.unwrap_or(DEFAULT_SIZE_MAX);

    let mut parts = vec![plot_background(frame)];
    parts.extend(value_ticks(x_range, frame, true));
    parts.extend(value_ticks(y_range, frame, false));

    let hover = table.column(&spec.hover_field).unwrap_or(&[]);
    for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
        let cx = project(x, x_range, frame.left, frame.width);
        let cy = frame.bottom() - project(y, y_range, 0.0, frame.height);
        let radius = match sizes.as_ref().and_then(|s| s.get(i)) {
            Some(size) if size_peak > 0.0 => (size_max / 2.0) * (size / size_peak).sqrt(),
            _ => DEFAULT_MARKER_RADIUS,
        };
        let color = &colors[groups.get(i).copied().unwrap_or(0) % colors.len()];
        let tooltip = format!(
            "{}\n{}: {}\n{}: {}",
            hover.get(i).map(ToString::to_string).unwrap_or_default(),
            spec.label_for(&spec.x_field),
            tick_label(x),
            spec.label_for(&spec.y_field),
            tick_label(y),
        );
        parts.push(format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}" fill="{color}" fill-opacity="0.75" stroke="{BG}" stroke-width="1"><title>{}</title></circle>"#,
            escape(&tooltip)
        ));
    }

    parts.extend(axis_titles(frame, spec.label_for(&spec.x_field), spec.label_for(&spec.y_field)));

    if has_legend {
        let entries: Vec<(String, String)> = group_names
            .iter()
            .enumerate()
            .map(|(g, name)| (name.clone(), colors[g % colors.len()].clone()))
            .collect();
        let title = spec.label_for(spec.color_field.as_deref().unwrap_or_default());
        parts.extend(legend(title, &entries, frame.right() + 24.0, frame.top + 10.0));
    }

    parts
}


fn bar_svg(spec: &ChartSpec, table: &DataTable, width: f64, height: f64) -> Vec<String> {
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

    let colors = palette(spec);
    let grouped = series.len() > 1;
    let horizontal = spec.orientation == Orientation::Horizontal;
    let peak = series
        .iter()
        .flat_map(|(_, v)| v.iter().copied())
        .fold(0.0, f64::max);
    let range = (0.0, if peak > 0.0 { peak * 1.05 } else { 1.0 });

    let left = if horizontal { 190.0 } else { 80.0 };
    let frame = Frame {
        left,
        top: MARGIN_TOP,
        width: width - left - MARGIN_RIGHT - if grouped { LEGEND_WIDTH } else { 0.0 },
        height: height - MARGIN_TOP - MARGIN_BOTTOM,
    };

    let mut parts = vec![plot_background(frame)];
    parts.extend(value_ticks(range, frame, horizontal));

    let band = if horizontal { frame.height } else { frame.width } / categories.len().max(1) as f64;
    let thickness = band * 0.8 / series.len().max(1) as f64;

    for (i, category) in categories.iter().enumerate() {
        let band_start = if horizontal { frame.top } else { frame.left } + band * i as f64;

        for (s, (field, values)) in series.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or(0.0);
            let slot = if grouped { s } else { i };
            let color = &colors[slot % colors.len()];
            let offset = band_start + band * 0.1 + thickness * s as f64;
            let tooltip = escape(&format!("{category}\n{field}: {}", tick_label(value)));

            let rect = if horizontal {
                let length = project(value, range, 0.0, frame.width);
                format!(
                    r#"<rect x="{:.1}" y="{offset:.1}" width="{length:.1}" height="{thickness:.1}" fill="{color}"><title>{tooltip}</title></rect>"#,
                    frame.left
                )
            } else {
                let length = project(value, range, 0.0, frame.height);
                format!(
                    r#"<rect x="{offset:.1}" y="{:.1}" width="{thickness:.1}" height="{length:.1}" fill="{color}"><title>{tooltip}</title></rect>"#,
                    frame.bottom() - length
                )
            };
            parts.push(rect);
        }

        let centre = band_start + band / 2.0;
        parts.push(if horizontal {
            format!(
                r#"<text x="{:.1}" y="{:.1}" class="tick" text-anchor="end">{}</text>"#,
                frame.left - 8.0,
                centre + 4.0,
                escape(category)
            )
        } else {
            format!(
                r#"<text x="{centre:.1}" y="{:.1}" class="tick" text-anchor="middle">{}</text>"#,
                frame.bottom() + 18.0,
                escape(category)
            )
        });
    }

    let value_title = spec
        .labels
        .get("value")
        .map(String::as_str)
        .unwrap_or_else(|| spec.label_for(&spec.y_field));
    let category_title = spec.label_for(&spec.x_field);
    if horizontal {
        parts.extend(axis_titles(frame, value_title, category_title));
    } else {
        parts.extend(axis_titles(frame, category_title, value_title));
    }

    if grouped {
        let entries: Vec<(String, String)> = series
            .iter()
            .enumerate()
            .map(|(s, (field, _))| (field.to_string(), colors[s % colors.len()].clone()))
            .collect();
        let title = spec.labels.get("variable").map(String::as_str).unwrap_or("Series");
        parts.extend(legend(title, &entries, frame.right() + 24.0, frame.top + 10.0));
    }

    parts
}


fn tick_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}


/// Escape text for inclusion in SVG markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_scatter, column};
    use crate::pages::{formation, opportunities};
    use tempfile::TempDir;

    fn sized_spec() -> ChartSpec {
        let table = DataTable::from_columns(vec![
            column("x", [1, 2, 3]),
            column("y", [4, 5, 6]),
            column("s", [1, 2, 3]),
        ])
        .unwrap();
        build_scatter(&table, "x", "y", Some("s"), None, None, None).unwrap()
    }

    #[test]
    fn test_scatter_with_foreign_table_draws_what_it_can() {
        let spec = sized_spec();

        let missing_y = DataTable::from_columns(vec![column("x", [1, 2])]).unwrap();
        assert_eq!(generate_svg(&spec, &missing_y).matches("<circle").count(), 0);

        let missing_size = DataTable::from_columns(vec![column("x", [1, 2]), column("y", [3, 4])]).unwrap();
        let svg = generate_svg(&spec, &missing_size);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"r="7.0""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tech & Software <x>"), "Tech &amp; Software &lt;x&gt;");
    }

    #[test]
    fn test_scatter_svg_has_marker_per_record() {
        let table = opportunities::market_table().unwrap();
        let spec = opportunities::opportunity_chart(&table).unwrap();
        let svg = generate_svg(&spec, &table);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), table.len());
        assert!(svg.contains("Tech &amp; Software"));
        assert!(svg.contains("Business Opportunity Analysis by Category"));
        assert!(svg.contains("Initial Investment Required (Lower is Better)"));
    }

    #[test]
    fn test_largest_market_gets_size_max_marker() {
        let table = opportunities::market_table().unwrap();
        let spec = opportunities::opportunity_chart(&table).unwrap();
        let svg = generate_svg(&spec, &table);
        assert!(svg.contains(r#"r="30.0""#));
    }

    #[test]
    fn test_grouped_bar_svg() {
        let table = formation::timeline_table().unwrap();
        let spec = formation::timeline_chart(&table).unwrap();
        let svg = generate_svg(&spec, &table);

        let bars = svg.matches("<title>").count();
        assert_eq!(bars, table.len() * 2);
        assert!(svg.contains("#2C6EBF"));
        assert!(svg.contains("#4CA3DD"));
        assert!(svg.contains("Days Required"));
        assert!(svg.contains(">Duration<"));
    }

    #[test]
    fn test_export_svg_writes_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("hubs.svg");

        let table = formation::hubs_table().unwrap();
        let spec = formation::hubs_chart(&table).unwrap();
        export_chart_svg(&spec, &table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Gauteng"));
    }

    #[test]
    fn test_export_png_writes_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("timeline.png");

        let table = formation::timeline_table().unwrap();
        let spec = formation::timeline_chart(&table).unwrap();
        export_chart_png(&spec, &table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
