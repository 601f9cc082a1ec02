//! Interactive browser command.

use std::io::IsTerminal;

use anyhow::{bail, Result};

use crate::visualization::run_browser;


/// Run the browse command.
pub fn run() -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use 'sabg show <section>' instead");
    }

    run_browser()
}
