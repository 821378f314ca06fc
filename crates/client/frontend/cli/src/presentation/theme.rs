//! Terminal styling for message tones.
//!
//! The core tags every line with a semantic [`Tone`]; this is the only
//! place that decides what a tone looks like.

use crossterm::style::{Attribute, Color};
use game_core::Tone;

/// Foreground color and optional attribute of a styled span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub attribute: Option<Attribute>,
}

impl Style {
    pub const fn fg(color: Color) -> Self {
        Self {
            color,
            attribute: None,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            attribute: Some(Attribute::Bold),
            ..self
        }
    }
}

pub struct Theme;

impl Theme {
    pub fn tone(tone: Tone) -> Style {
        match tone {
            Tone::Neutral => Style::fg(Color::White),
            Tone::Info => Style::fg(Color::Cyan),
            Tone::Success => Style::fg(Color::Green),
            Tone::Warning => Style::fg(Color::Yellow),
            Tone::Alert => Style::fg(Color::Red),
            Tone::Mystic => Style::fg(Color::Magenta),
            Tone::Ward => Style::fg(Color::Blue),
            Tone::Critical => Style::fg(Color::Red).bold(),
        }
    }

    /// HP meter: red below a quarter, yellow below half.
    pub fn hp(current: u32, maximum: u32) -> Style {
        let current = u64::from(current) * 4;
        let maximum = u64::from(maximum);
        if current < maximum {
            Style::fg(Color::Red).bold()
        } else if current < maximum * 2 {
            Style::fg(Color::Yellow)
        } else {
            Style::fg(Color::Green)
        }
    }

    pub fn mp() -> Style {
        Style::fg(Color::Cyan)
    }

    pub fn heading() -> Style {
        Style::fg(Color::White).bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_meter_thresholds() {
        assert_eq!(Theme::hp(100, 100).color, Color::Green);
        assert_eq!(Theme::hp(49, 100).color, Color::Yellow);
        assert_eq!(Theme::hp(24, 100), Style::fg(Color::Red).bold());
    }

    #[test]
    fn critical_is_emphasised() {
        assert_eq!(Theme::tone(Tone::Critical).attribute, Some(Attribute::Bold));
        assert_eq!(Theme::tone(Tone::Alert).attribute, None);
    }
}
