use std::ops::Deref;

use colored::{Color, ColoredString};

/// Renders a terminal-coloured string as an inline HTML span, so that
/// explanations stay readable once written to a markdown file.
pub trait Markdown {
    fn markdown(&self) -> String;
}

impl Markdown for ColoredString {
    fn markdown(&self) -> String {
        let color = match self.fgcolor() {
            Some(Color::Black) => "black",
            Some(Color::Red) => "red",
            Some(Color::Green) => "green",
            Some(Color::Yellow) => "yellow",
            Some(Color::Blue) => "blue",
            Some(Color::Magenta) => "magenta",
            Some(Color::Cyan) => "cyan",
            Some(Color::White) => "white",
            _ => return self.deref().to_owned(),
        };

        format!("<span style=\"color: {};\">{}</span>", color, self.deref())
    }
}
