//! Chart export command.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing::info;

use crate::config::ensure_export_dir;
use crate::models::{ChartSpec, DataTable};
use crate::pages::find_section;
use crate::visualization::{export_chart_png, export_chart_svg, open_file, Theme};


/// Exportable charts: name, owning section slug, position among that page's charts.
pub const CHARTS: [(&str, &str, usize); 3] = [
    ("opportunity", "opportunities", 0),
    ("timeline", "formation", 0),
    ("hubs", "formation", 1),
];


/// Render the owning page and take the named chart from it.
pub fn load_chart(name: &str) -> Result<(ChartSpec, DataTable)> {
    let Some(&(_, slug, position)) = CHARTS.iter().find(|(n, _, _)| n.eq_ignore_ascii_case(name)) else {
        let valid: Vec<&str> = CHARTS.iter().map(|(n, _, _)| *n).collect();
        bail!("Unknown chart '{}'. Valid charts: {}", name, valid.join(", "));
    };

    let section = find_section(slug).with_context(|| format!("Missing section '{slug}'"))?;
    let page = (section.render)();
    let Some((spec, table)) = page.charts().get(position).copied() else {
        bail!("Chart '{}' is unavailable on the {} page", name, section.name);
    };

    Ok((spec.clone(), table.clone()))
}


/// Run the chart command.
pub fn run(
    name: &str,
    svg: bool,
    json: bool,
    output: Option<String>,
    should_open: bool,
    theme: &Theme,
) -> Result<()> {
    let (spec, table) = load_chart(name)?;

    if json {
        let rendered = serde_json::to_string_pretty(&spec).context("Failed to serialize chart")?;
        match output {
            Some(path) => {
                std::fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write JSON to {path}"))?;
                println!("{}", theme.success(&format!("+ Exported to: {path}")));
            }
            None => println!("{rendered}"),
        }
        return Ok(());
    }

    // Determine format and output path
    let format_type = if svg { "svg" } else { "png" };
    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => {
            let date = Local::now().format("%Y-%m-%d");
            ensure_export_dir()?.join(format!("sabg-{}-{}.{}", name.to_lowercase(), date, format_type))
        }
    };

    println!("Exporting to {}...", format_type.to_uppercase());
    info!(chart = name, path = %output_path.display(), "exporting chart");

    if svg {
        export_chart_svg(&spec, &table, &output_path)?;
    } else {
        export_chart_png(&spec, &table, &output_path)?;
    }

    println!("{}", theme.success(&format!("+ Exported to: {}", output_path.display())));

    // Open if requested
    if should_open {
        println!("Opening {}...", format_type.to_uppercase());
        open_file(&output_path)?;
    }

    Ok(())
}
