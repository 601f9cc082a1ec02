//! List the guide sections.

use crate::config::PAGE_TITLE;
use crate::pages::SECTIONS;
use crate::visualization::Theme;


/// Print one line per section: index, slug and name.
pub fn run(theme: &Theme) {
    println!("{}", theme.heading(PAGE_TITLE));
    for (idx, section) in SECTIONS.iter().enumerate() {
        println!(
            "  {}. {} {}",
            idx + 1,
            theme.cyan(&format!("{:<14}", section.slug)),
            section.name
        );
    }
    println!();
    println!("{}", theme.dim("Show one with: sabg show <slug>"));
}
