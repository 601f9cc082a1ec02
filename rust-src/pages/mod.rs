//! Guide sections and the registry that maps labels to render operations.

pub mod about;
pub mod ai_guide;
pub mod education;
pub mod formation;
pub mod opportunities;

use crate::models::{dedent, Block, ChartResult, ChartSpec, DataTable, Page, TableError};


/// A navigable section of the guide.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub slug: &'static str,
    pub render: fn() -> Page,
}


/// Sections in navigation order.
pub static SECTIONS: &[Section] = &[
    Section {
        name: opportunities::NAME,
        slug: "opportunities",
        render: opportunities::show,
    },
    Section {
        name: ai_guide::NAME,
        slug: "ai-guide",
        render: ai_guide::show,
    },
    Section {
        name: education::NAME,
        slug: "education",
        render: education::show,
    },
    Section {
        name: formation::NAME,
        slug: "formation",
        render: formation::show,
    },
    Section {
        name: about::NAME,
        slug: "about",
        render: about::show,
    },
];


/// Find a section by exact name, slug, or case-insensitive name.
pub fn find_section(label: &str) -> Option<&'static Section> {
    let label = label.trim();
    SECTIONS
        .iter()
        .find(|s| s.name == label || s.slug == label)
        .or_else(|| SECTIONS.iter().find(|s| s.name.eq_ignore_ascii_case(label)))
}


/// Introduction shown above every section.
pub fn introduction() -> String {
    dedent(
        "
        Welcome to your comprehensive guide on starting businesses in South Africa using Replit AI.
        This resource is designed to help entrepreneurs identify opportunities,
        leverage technology, and navigate the business landscape in South Africa.

        Replit AI provides powerful tools for entrepreneurs to build, test, and deploy business solutions
        without extensive technical knowledge. From creating websites to developing custom applications,
        Replit AI can accelerate your business journey.
        ",
    )
}


pub(crate) fn markdown(text: &str) -> Block {
    Block::Markdown(dedent(text))
}

pub(crate) fn info(text: &str) -> Block {
    Block::Info(dedent(text))
}

pub(crate) fn success(text: &str) -> Block {
    Block::Success(dedent(text))
}

pub(crate) fn expander(title: &str, text: &str) -> Block {
    Block::Expander {
        title: title.to_string(),
        body: vec![markdown(text)],
    }
}

pub(crate) fn subheader(text: &str) -> Block {
    Block::Subheader(text.to_string())
}


/// A table block, or an error block if the literal is malformed.
pub(crate) fn table_block(table: Result<DataTable, TableError>) -> Block {
    match table {
        Ok(table) => Block::Table(table),
        Err(e) => Block::Error(format!("Table unavailable: {e}")),
    }
}


/// A chart block, or an error block if the table or chart is invalid.
pub(crate) fn chart_block(
    table: Result<DataTable, TableError>,
    build: impl FnOnce(&DataTable) -> ChartResult<ChartSpec>,
) -> Block {
    let table = match table {
        Ok(table) => table,
        Err(e) => return Block::Error(format!("Chart unavailable: {e}")),
    };

    match build(&table) {
        Ok(spec) => Block::Chart { spec, table },
        Err(e) => Block::Error(format!("Chart unavailable: {e}")),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_slugs() {
        let slugs: Vec<_> = SECTIONS.iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["opportunities", "ai-guide", "education", "formation", "about"]);
    }

    #[test]
    fn test_find_section() {
        assert_eq!(find_section("formation").unwrap().name, "Business Formation Process");
        assert_eq!(find_section("About This Guide").unwrap().slug, "about");
        assert_eq!(find_section("about this guide").unwrap().slug, "about");
        assert!(find_section("pricing").is_none());
    }

    #[test]
    fn test_every_section_renders_without_errors() {
        for section in SECTIONS {
            let page = (section.render)();
            assert_eq!(page.title, section.name);
            assert!(!page.blocks.is_empty());
            assert!(
                !page.blocks.iter().any(|b| matches!(b, Block::Error(_))),
                "{} produced an error block",
                section.slug
            );
        }
    }

    #[test]
    fn test_chart_block_reports_invalid_field() {
        use crate::models::{build_scatter, column};

        let table = DataTable::from_columns(vec![column("a", [1])]);
        let block = chart_block(table, |t| build_scatter(t, "a", "missing", None, None, None, None));
        match block {
            Block::Error(msg) => assert!(msg.contains("missing")),
            other => panic!("expected error block, got {other:?}"),
        }
    }
}
