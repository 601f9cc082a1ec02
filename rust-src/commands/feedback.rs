//! Feedback acknowledgement.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::pages::about::{submit_feedback, FEEDBACK_PROMPT};
use crate::visualization::Theme;


/// Run the feedback command. Reads stdin when no text is given.
pub fn run(text: Option<String>, theme: &Theme) -> Result<()> {
    let feedback = match text {
        Some(text) => text,
        None => {
            if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
                println!("{}", FEEDBACK_PROMPT);
                println!("{}", theme.dim("(finish with Ctrl+D)"));
            }
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read feedback from stdin")?;
            buf
        }
    };

    if feedback.trim().is_empty() {
        warn!("empty feedback submitted");
    }
    debug!(chars = feedback.chars().count(), "feedback received");

    println!("{}", theme.success(submit_feedback(&feedback)));

    Ok(())
}
