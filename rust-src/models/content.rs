//! Display blocks produced by page render operations.

use super::chart::ChartSpec;
use super::table::DataTable;


/// One rendered section of the guide.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}


/// A unit of display output handed to a host renderer.
#[derive(Debug, Clone)]
pub enum Block {
    Subheader(String),
    Markdown(String),
    Info(String),
    Success(String),
    Caption(String),
    Code(String),
    Table(DataTable),
    Chart { spec: ChartSpec, table: DataTable },
    Expander { title: String, body: Vec<Block> },
    Tabs(Vec<(String, Vec<Block>)>),
    Columns(Vec<Vec<Block>>),
    Progress { fraction: f64, label: String },
    Card(ResourceCard),
    /// Content that could not be assembled; shown in place of it.
    Error(String),
}


impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Charts on this page, including those nested in tabs and expanders.
    pub fn charts(&self) -> Vec<(&ChartSpec, &DataTable)> {
        let mut found = Vec::new();
        collect_charts(&self.blocks, &mut found);
        found
    }
}


fn collect_charts<'a>(blocks: &'a [Block], found: &mut Vec<(&'a ChartSpec, &'a DataTable)>) {
    for block in blocks {
        match block {
            Block::Chart { spec, table } => found.push((spec, table)),
            Block::Expander { body, .. } => collect_charts(body, found),
            Block::Tabs(tabs) => {
                for (_, body) in tabs {
                    collect_charts(body, found);
                }
            }
            Block::Columns(columns) => {
                for body in columns {
                    collect_charts(body, found);
                }
            }
            _ => {}
        }
    }
}


/// Clamp a fraction into [0, 1]. NaN maps to 0.
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}


/// A titled link to an external resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}


impl ResourceCard {
    pub const DEFAULT_ICON: &'static str = "📚";

    pub fn new(title: &str, description: &str, url: Option<&str>) -> Self {
        Self {
            icon: Self::DEFAULT_ICON.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.map(String::from),
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    /// Markdown for the card: heading, description, optional link, rule.
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            format!("### {} {}", self.icon, self.title),
            self.description.clone(),
        ];
        if let Some(url) = &self.url {
            lines.push(format!("[Learn more]({})", url));
        }
        lines.push("---".to_string());
        lines.join("\n")
    }
}


/// Strip the common leading indentation from an indented text literal.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|l| if l.len() >= indent { &l[indent..] } else { l.trim_start() })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chart::build_scatter;
    use crate::models::table::column;

    #[test]
    fn test_clamp_fraction_points() {
        assert_eq!(clamp_fraction(-5.0), 0.0);
        assert_eq!(clamp_fraction(0.5), 0.5);
        assert_eq!(clamp_fraction(1.0), 1.0);
        assert_eq!(clamp_fraction(3.2), 1.0);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
        assert_eq!(clamp_fraction(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_clamp_fraction_identity_inside_range() {
        for step in 0..=100 {
            let v = step as f64 / 100.0;
            assert_eq!(clamp_fraction(v), v);
        }
    }

    #[test]
    fn test_resource_card_markdown() {
        let card = ResourceCard::new("ZATech", "Slack community.", Some("https://zatech.co.za"));
        assert_eq!(
            card.to_markdown(),
            "### 📚 ZATech\nSlack community.\n[Learn more](https://zatech.co.za)\n---"
        );

        let plain = ResourceCard::new("Notes", "No link here.", None).with_icon("💡");
        assert_eq!(plain.to_markdown(), "### 💡 Notes\nNo link here.\n---");
    }

    #[test]
    fn test_dedent() {
        let text = "\n        First line\n          nested\n        Last\n    ";
        assert_eq!(dedent(text), "First line\n  nested\nLast");
    }

    #[test]
    fn test_page_collects_nested_charts() {
        let table = DataTable::from_columns(vec![column("a", [1]), column("b", [2])]).unwrap();
        let spec = build_scatter(&table, "a", "b", None, None, None, None).unwrap();

        let mut page = Page::new("Test");
        page.push(Block::Markdown("intro".to_string()));
        page.push(Block::Tabs(vec![(
            "Tab".to_string(),
            vec![Block::Chart { spec: spec.clone(), table: table.clone() }],
        )]));
        page.push(Block::Chart { spec, table });

        assert_eq!(page.charts().len(), 2);
    }
}
