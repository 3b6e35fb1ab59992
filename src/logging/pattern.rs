//! Line pattern templates.
//!
//! Each channel formats its output through a small template:
//!
//! | Directive | Expansion                         |
//! |-----------|-----------------------------------|
//! | `%T`      | wall-clock time, `HH:MM:SS`       |
//! | `%L`      | colorized severity tag            |
//! | `%n`      | channel name                      |
//! | `%m`      | message text                      |
//! | `%%`      | literal `%`                       |
//!
//! Any other `%` directive fails at construction time.

use chrono::{DateTime, Local};
use colored::{Color, Colorize};

use super::severity::Severity;
use crate::error::Error;

/// Default template: `[<time>] [<level>] <channel>: <message>`.
pub const DEFAULT_PATTERN: &str = "[%T] [%L] %n: %m";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Time,
    Level,
    Name,
    Message,
}

/// A parsed line template.
#[derive(Debug, Clone)]
pub struct LinePattern {
    tokens: Vec<Token>,
}

impl LinePattern {
    /// Parse a template string.
    pub fn parse(template: &str) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let directive = chars.next().ok_or(Error::PatternDirective(' '))?;
            if directive == '%' {
                literal.push('%');
                continue;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(match directive {
                'T' => Token::Time,
                'L' => Token::Level,
                'n' => Token::Name,
                'm' => Token::Message,
                other => return Err(Error::PatternDirective(other)),
            });
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self { tokens })
    }

    /// Render one log line. The reset after the name segment leaves the
    /// message in the terminal's default color.
    pub(crate) fn render(
        &self,
        at: &DateTime<Local>,
        severity: Severity,
        name: &str,
        name_color: Color,
        ansi: bool,
        message: &str,
    ) -> String {
        let mut line = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => line.push_str(text),
                Token::Time => line.push_str(&at.format("%H:%M:%S").to_string()),
                Token::Level => {
                    if ansi {
                        line.push_str(&severity.paint().to_string());
                    } else {
                        line.push_str(severity.as_str());
                    }
                }
                Token::Name => {
                    if ansi {
                        line.push_str(&name.color(name_color).to_string());
                    } else {
                        line.push_str(name);
                    }
                }
                Token::Message => line.push_str(message),
            }
        }
        line
    }
}

impl Default for LinePattern {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERN).expect("default pattern is valid")
    }
}
