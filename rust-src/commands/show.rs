//! Render one section to stdout.

use anyhow::{bail, Result};
use tracing::debug;

use crate::pages::{find_section, formation, introduction, SECTIONS};
use crate::visualization::{render_intro, render_page, Theme};


/// Run the show command.
pub fn run(
    section: &str,
    structure: Option<&str>,
    completed: Option<usize>,
    theme: &Theme,
) -> Result<()> {
    let Some(found) = find_section(section) else {
        let valid: Vec<&str> = SECTIONS.iter().map(|s| s.slug).collect();
        bail!("Unknown section '{}'. Valid sections: {}", section, valid.join(", "));
    };
    debug!(slug = found.slug, "rendering section");

    let page = if found.slug == "formation" {
        let selected = match structure {
            Some(label) => match formation::find_structure(label) {
                Some(s) => s,
                None => {
                    let valid: Vec<&str> = formation::STRUCTURES.iter().map(|s| s.key).collect();
                    bail!("Unknown business structure '{}'. Valid structures: {}", label, valid.join(", "));
                }
            },
            None => &formation::STRUCTURES[0],
        };
        formation::render(selected, completed)
    } else {
        if structure.is_some() || completed.is_some() {
            bail!("--structure and --completed only apply to the formation section");
        }
        (found.render)()
    };

    println!("{}\n", render_intro(&introduction(), theme));
    println!("{}", render_page(&page, theme));

    Ok(())
}
