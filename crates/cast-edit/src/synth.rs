//! Builders for fabricating cast segments.
//!
//! These produce small standalone recordings (a typed command, a shell
//! prompt, an idle gap) meant to be combined into a larger document with
//! [`EditOp::Splice`](crate::edit::EditOp::Splice) or
//! [`EditOp::Append`](crate::edit::EditOp::Append). Every builder returns a
//! cast with a default 80x24 header so the results compose directly.

use rand::Rng;

use crate::document::Cast;
use crate::event::Event;
use crate::header::Header;

/// ANSI SGR shorthands for styling synthesized prompt text.
pub mod ansi {
    /// Faint.
    pub const FAINT: &str = "\x1b[2m";
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Blue, bold.
    pub const BLUE: &str = "\x1b[1;34m";
    /// Green, bold.
    pub const GREEN: &str = "\x1b[1;32m";
    /// Yellow, bold.
    pub const YELLOW: &str = "\x1b[1;33m";
    /// Red, bold.
    pub const RED: &str = "\x1b[1;31m";
    /// Reset to default.
    pub const RESET: &str = "\x1b[0m";
}

/// Fraction of the base delay used as jitter when simulating typing.
const TYPING_JITTER: f64 = 0.3;

/// Simulate typing text, one output event per character.
///
/// `delay` is the average gap between keystrokes in seconds; each actual gap
/// is jittered by up to ±30% so the result reads as human rather than
/// metronomic.
#[must_use]
pub fn type_text(text: &str, delay: f64) -> Cast {
    let mut rng = rand::rng();
    let variance = TYPING_JITTER * delay;
    let mut cast = Cast::new(Header::default());
    let mut elapsed = 0.0;
    for c in text.chars() {
        let jitter = if variance > 0.0 {
            rng.random_range(-variance..variance)
        } else {
            0.0
        };
        elapsed += delay + jitter;
        cast.push(Event::output(elapsed, c.to_string()));
    }
    cast
}

/// An idle gap: a single empty output event after `duration` seconds.
#[must_use]
pub fn wait(duration: f64) -> Cast {
    let mut cast = Cast::new(Header::default());
    cast.push(Event::output(duration.max(0.0), ""));
    cast
}

/// A terminating frame: carriage returns and a newline after `after` seconds.
#[must_use]
pub fn end_frame(after: f64) -> Cast {
    let mut cast = Cast::new(Header::default());
    cast.push(Event::output(after.max(0.0), "\r\r\n"));
    cast
}

/// Builder for a colored `user@host dir $` shell prompt frame.
#[derive(Debug, Clone)]
pub struct Prompt {
    user: String,
    host: String,
    dir: String,
    symbol: String,
    env: Option<String>,
    user_color: &'static str,
    dir_color: &'static str,
    delay: f64,
}

impl Prompt {
    /// Create a prompt for `user@host` with the default style
    /// `user@host ~ $ `, colored red and blue.
    #[must_use]
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            dir: "~".to_string(),
            symbol: " $ ".to_string(),
            env: None,
            user_color: ansi::RED,
            dir_color: ansi::BLUE,
            delay: 0.0,
        }
    }

    /// Set the working directory shown in the prompt.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the prompt symbol (defaults to `" $ "`).
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Show an active environment name, `(env) `, before the prompt.
    #[must_use]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Color for the `user@host` part.
    #[must_use]
    pub const fn user_color(mut self, color: &'static str) -> Self {
        self.user_color = color;
        self
    }

    /// Color for the directory and symbol part.
    #[must_use]
    pub const fn dir_color(mut self, color: &'static str) -> Self {
        self.dir_color = color;
        self
    }

    /// Seconds before the prompt appears.
    #[must_use]
    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Render to a single-event cast.
    #[must_use]
    pub fn build(self) -> Cast {
        let mut text = format!(
            "{}{}@{}{} {}{}{}{}",
            self.user_color,
            self.user,
            self.host,
            ansi::RESET,
            self.dir_color,
            self.dir,
            self.symbol,
            ansi::RESET,
        );
        if let Some(env) = &self.env {
            text = format!("({env}) {text}");
        }

        let mut cast = Cast::new(Header::default());
        cast.push(Event::output(self.delay.max(0.0), text));
        cast
    }
}
