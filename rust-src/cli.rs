//! CLI definitions using clap.

use clap::{CommandFactory, Parser, Subcommand};
use tracing::debug;

use crate::commands;
use crate::config::color_enabled;
use crate::pages::introduction;
use crate::visualization::{render_intro, Theme};


/// South African business guide - starting businesses with Replit AI
#[derive(Parser)]
#[command(name = "sabg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable ANSI colours (any non-empty NO_COLOR also disables them)
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// List the guide sections
    Sections,

    /// Render one section of the guide
    Show {
        /// Section slug or name (see `sabg sections`)
        section: String,

        /// Business structure to describe (formation section)
        #[arg(long)]
        structure: Option<String>,

        /// Registration steps completed, shown as a progress bar (formation section)
        #[arg(long)]
        completed: Option<usize>,
    },

    /// Browse the guide interactively
    Browse,

    /// Export a chart as PNG, SVG or JSON
    Chart {
        /// Chart name: opportunity, timeline or hubs
        name: String,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Print the chart description as JSON
        #[arg(long, conflicts_with = "svg")]
        json: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Open file after export
        #[arg(long, conflicts_with = "json")]
        open: bool,
    },

    /// Share feedback about the guide
    Feedback {
        /// Feedback text (read from stdin when omitted)
        text: Option<String>,
    },
}


impl Cli {
    pub fn theme(&self) -> Theme {
        if color_enabled(self.no_color) {
            Theme::colored()
        } else {
            Theme::plain()
        }
    }
}


/// Run the CLI
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let theme = cli.theme();

    match cli.command {
        Some(Commands::Sections) => {
            debug!("dispatch: sections");
            commands::sections::run(&theme);
        }
        Some(Commands::Show { section, structure, completed }) => {
            debug!("dispatch: show");
            commands::show::run(&section, structure.as_deref(), completed, &theme)?;
        }
        Some(Commands::Browse) => {
            debug!("dispatch: browse");
            commands::browse::run()?;
        }
        Some(Commands::Chart { name, svg, json, output, open }) => {
            debug!("dispatch: chart");
            commands::chart::run(&name, svg, json, output, open, &theme)?;
        }
        Some(Commands::Feedback { text }) => {
            debug!("dispatch: feedback");
            commands::feedback::run(text, &theme)?;
        }
        None => {
            println!("{}\n", render_intro(&introduction(), &theme));
            Cli::command().print_help()?;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_formation_flags() {
        let cli = Cli::parse_from(["sabg", "-vv", "show", "formation", "--structure", "trust", "--completed", "3"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Show { section, structure, completed }) => {
                assert_eq!(section, "formation");
                assert_eq!(structure.as_deref(), Some("trust"));
                assert_eq!(completed, Some(3));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_no_color_env_accepts_any_value() {
        std::env::set_var("NO_COLOR", "1");
        let parsed = Cli::try_parse_from(["sabg", "sections"]);
        std::env::remove_var("NO_COLOR");

        let cli = parsed.unwrap();
        assert!(cli.no_color);
        assert!(!cli.theme().color);
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["sabg", "sections", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert!(!cli.theme().color);
    }

    #[test]
    fn test_json_conflicts_with_svg() {
        assert!(Cli::try_parse_from(["sabg", "chart", "hubs", "--json", "--svg"]).is_err());
    }
}
