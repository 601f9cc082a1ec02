//! Chart descriptions built from literal tables.
//!
//! A `ChartSpec` names which columns of a `DataTable` feed which visual
//! channel. It carries no data of its own; renderers pair it with the table
//! it was validated against.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::table::DataTable;


pub type ChartResult<T> = Result<T, ChartError>;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("field '{field}' is not a column of the table")]
    InvalidField { field: String },

    #[error("cannot build a chart from an empty table")]
    EmptyTable,

    #[error("bar chart needs at least one value field")]
    NoValueFields,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Scatter,
    Bar,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    /// Categories run down the vertical axis, values along the horizontal.
    Horizontal,
}


/// Abstract description of a chart, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub geometry: Geometry,
    pub x_field: String,
    pub y_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    pub hover_field: String,
    pub title: String,

    /// Extra value columns drawn beside `y_field` (grouped bars).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_fields: Vec<String>,
    pub orientation: Orientation,
    /// Display names overriding raw column names on axes and legends.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,
}


impl ChartSpec {
    /// Display name for a field, honoring label overrides.
    pub fn label_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.labels.get(field).map(String::as_str).unwrap_or(field)
    }

    /// All value fields in draw order: `y_field` then any grouped fields.
    pub fn value_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.y_field.as_str()).chain(self.group_fields.iter().map(String::as_str))
    }

    pub fn with_label(mut self, field: &str, label: &str) -> Self {
        self.labels.insert(field.to_string(), label.to_string());
        self
    }

    /// Largest marker diameter for sized scatter points.
    pub fn with_size_max(mut self, size_max: f64) -> Self {
        self.size_max = Some(size_max);
        self
    }

    pub fn with_palette<S: AsRef<str>>(mut self, colors: &[S]) -> Self {
        self.palette = colors.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }
}


/// Build a scatter chart description.
///
/// The table must be non-empty and every named field must be one of its
/// columns. `hover_field` falls back to `x_field`, `title` to "".
pub fn build_scatter(
    table: &DataTable,
    x_field: &str,
    y_field: &str,
    size_field: Option<&str>,
    color_field: Option<&str>,
    title: Option<&str>,
    hover_field: Option<&str>,
) -> ChartResult<ChartSpec> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let hover_field = hover_field.unwrap_or(x_field);
    let named = [Some(x_field), Some(y_field), size_field, color_field, Some(hover_field)];
    for field in named.into_iter().flatten() {
        require_column(table, field)?;
    }

    Ok(ChartSpec {
        geometry: Geometry::Scatter,
        x_field: x_field.to_string(),
        y_field: y_field.to_string(),
        size_field: size_field.map(String::from),
        color_field: color_field.map(String::from),
        hover_field: hover_field.to_string(),
        title: title.unwrap_or_default().to_string(),
        group_fields: Vec::new(),
        orientation: Orientation::Vertical,
        labels: BTreeMap::new(),
        size_max: None,
        palette: Vec::new(),
    })
}


/// Build a (possibly grouped) bar chart description.
///
/// `category_field` becomes `x_field` and the hover label; the first value
/// field becomes `y_field` and the rest are grouped beside it.
pub fn build_bar(
    table: &DataTable,
    category_field: &str,
    value_fields: &[&str],
    orientation: Orientation,
    title: Option<&str>,
) -> ChartResult<ChartSpec> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let (first, rest) = value_fields.split_first().ok_or(ChartError::NoValueFields)?;

    require_column(table, category_field)?;
    for field in value_fields {
        require_column(table, field)?;
    }

    Ok(ChartSpec {
        geometry: Geometry::Bar,
        x_field: category_field.to_string(),
        y_field: first.to_string(),
        size_field: None,
        color_field: None,
        hover_field: category_field.to_string(),
        title: title.unwrap_or_default().to_string(),
        group_fields: rest.iter().map(|f| f.to_string()).collect(),
        orientation,
        labels: BTreeMap::new(),
        size_max: None,
        palette: Vec::new(),
    })
}


fn require_column(table: &DataTable, field: &str) -> ChartResult<()> {
    if table.has_column(field) {
        Ok(())
    } else {
        Err(ChartError::InvalidField { field: field.to_string() })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::column;

    fn abcd() -> DataTable {
        DataTable::from_columns(vec![
            column("a", ["x", "y"]),
            column("b", [1, 2]),
            column("c", [3.5, 4.5]),
            column("d", ["red", "blue"]),
        ])
        .unwrap()
    }

    fn empty() -> DataTable {
        DataTable::from_columns(vec![
            column("a", Vec::<i64>::new()),
            column("b", Vec::<i64>::new()),
        ])
        .unwrap()
    }

    #[test]
    fn test_scatter_passes_fields_through() {
        let spec = build_scatter(&abcd(), "a", "b", None, None, Some("T"), None).unwrap();

        assert_eq!(spec.geometry, Geometry::Scatter);
        assert_eq!(spec.x_field, "a");
        assert_eq!(spec.y_field, "b");
        assert_eq!(spec.hover_field, "a");
        assert_eq!(spec.title, "T");
    }

    #[test]
    fn test_scatter_explicit_hover_and_default_title() {
        let spec = build_scatter(&abcd(), "b", "c", None, None, None, Some("a")).unwrap();
        assert_eq!(spec.hover_field, "a");
        assert_eq!(spec.title, "");
    }

    #[test]
    fn test_scatter_optional_combinations() {
        let table = abcd();
        let cases = [
            (None, None),
            (Some("c"), None),
            (None, Some("d")),
            (Some("c"), Some("d")),
        ];

        for (size, color) in cases {
            let spec = build_scatter(&table, "a", "b", size, color, None, None).unwrap();
            assert_eq!(spec.size_field.as_deref(), size);
            assert_eq!(spec.color_field.as_deref(), color);
        }
    }

    #[test]
    fn test_scatter_unknown_field_in_each_slot() {
        let table = abcd();
        let missing = || ChartError::InvalidField { field: "zz".to_string() };

        assert_eq!(build_scatter(&table, "zz", "b", None, None, None, None), Err(missing()));
        assert_eq!(build_scatter(&table, "a", "zz", None, None, None, None), Err(missing()));
        assert_eq!(build_scatter(&table, "a", "b", Some("zz"), None, None, None), Err(missing()));
        assert_eq!(build_scatter(&table, "a", "b", None, Some("zz"), None, None), Err(missing()));
        assert_eq!(build_scatter(&table, "a", "b", None, None, None, Some("zz")), Err(missing()));
    }

    #[test]
    fn test_scatter_empty_table_wins_over_field_errors() {
        assert_eq!(
            build_scatter(&empty(), "a", "b", None, None, None, None),
            Err(ChartError::EmptyTable)
        );
        assert_eq!(
            build_scatter(&empty(), "nope", "never", Some("x"), Some("y"), None, None),
            Err(ChartError::EmptyTable)
        );
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let table = abcd();
        let first = build_scatter(&table, "a", "b", Some("c"), Some("d"), Some("t"), None);
        let second = build_scatter(&table, "a", "b", Some("c"), Some("d"), Some("t"), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bar_grouped_fields() {
        let spec = build_bar(&abcd(), "a", &["b", "c"], Orientation::Horizontal, Some("Bars")).unwrap();

        assert_eq!(spec.geometry, Geometry::Bar);
        assert_eq!(spec.x_field, "a");
        assert_eq!(spec.y_field, "b");
        assert_eq!(spec.group_fields, vec!["c".to_string()]);
        assert_eq!(spec.hover_field, "a");
        assert_eq!(spec.value_fields().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_bar_errors() {
        let table = abcd();
        assert_eq!(
            build_bar(&table, "a", &[], Orientation::Vertical, None),
            Err(ChartError::NoValueFields)
        );
        assert_eq!(
            build_bar(&table, "a", &["b", "q"], Orientation::Vertical, None),
            Err(ChartError::InvalidField { field: "q".to_string() })
        );
        assert_eq!(
            build_bar(&empty(), "a", &["b"], Orientation::Vertical, None),
            Err(ChartError::EmptyTable)
        );
    }

    #[test]
    fn test_labels_and_json() {
        let spec = build_scatter(&abcd(), "a", "b", Some("c"), None, None, None)
            .unwrap()
            .with_label("b", "Growth")
            .with_size_max(60.0);

        assert_eq!(spec.label_for("b"), "Growth");
        assert_eq!(spec.label_for("a"), "a");

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["geometry"], "scatter");
        assert_eq!(json["size_field"], "c");
        assert!(json.get("color_field").is_none());
        assert_eq!(json["size_max"], 60.0);
    }
}
