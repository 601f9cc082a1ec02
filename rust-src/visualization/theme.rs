//! ANSI styling that can be switched off.

const ORANGE: &str = "\x1b[38;5;208m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}


impl Theme {
    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if self.color {
            format!("{}{}{}", codes.concat(), text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(&[BOLD], text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(&[DIM], text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(&[CYAN], text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(&[ORANGE], text)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(&[BOLD, ORANGE], text)
    }

    pub fn link(&self, url: &str) -> String {
        self.paint(&[UNDERLINE, CYAN], url)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(&[BLUE], text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&[GREEN], text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(&[BOLD, RED], text)
    }

    /// 24-bit foreground colour from a `#rrggbb` string.
    pub fn hex(&self, hex: &str, text: &str) -> String {
        let (r, g, b) = hex_to_rgb(hex);
        self.paint(&[&format!("\x1b[38;2;{r};{g};{b}m")], text)
    }
}


/// Convert hex color to RGB tuple.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return (0, 0, 0);
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}
