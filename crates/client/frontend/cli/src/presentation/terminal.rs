//! Line-oriented terminal host for the combat core.
//!
//! Messages are typed out with an optional per-character delay and colored
//! by tone. Menus are numbered lists answered with a line of input.

use std::io::{self, BufRead, Write};
use std::thread;

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use game_core::{
    ChoiceSource, InterfaceError, Message, MessageSink, Pacing, RoundStatus, StatusEntry,
};

use super::theme::{Style, Theme};
use crate::config::CliConfig;

/// Terminal implementation of [`MessageSink`] and [`ChoiceSource`].
pub struct TerminalIo<W, R> {
    config: CliConfig,
    writer: W,
    reader: R,
}

impl TerminalIo<io::Stdout, io::StdinLock<'static>> {
    pub fn stdio(config: CliConfig) -> Self {
        Self::new(config, io::stdout(), io::stdin().lock())
    }
}

impl<W: Write, R: BufRead> TerminalIo<W, R> {
    pub fn new(config: CliConfig, writer: W, reader: R) -> Self {
        Self {
            config,
            writer,
            reader,
        }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn into_inner(self) -> (W, R) {
        (self.writer, self.reader)
    }

    /// Print `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InterfaceError> {
        self.span(Theme::heading(), prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InterfaceError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Write a blank separator line.
    pub fn blank(&mut self) {
        if let Err(error) = writeln!(self.writer) {
            tracing::warn!("terminal write failed: {}", error);
        }
    }

    fn write_message(&mut self, message: &Message) -> io::Result<()> {
        self.begin(Theme::tone(message.tone))?;
        if self.config.text_delay.is_zero() {
            self.writer.write_all(message.text.as_bytes())?;
        } else {
            let mut buffer = [0u8; 4];
            for ch in message.text.chars() {
                self.writer.write_all(ch.encode_utf8(&mut buffer).as_bytes())?;
                self.writer.flush()?;
                thread::sleep(self.config.text_delay);
            }
        }
        self.end()?;
        writeln!(self.writer)?;
        self.writer.flush()
    }

    fn write_status(&mut self, status: &RoundStatus) -> io::Result<()> {
        let (hp, max_hp) = status.player_hp;
        let (mp, max_mp) = status.player_mp;
        self.span(Theme::heading(), &status.player_name)?;
        self.span(Theme::hp(hp, max_hp), &format!(" [HP: {hp}/{max_hp}]"))?;
        self.span(Theme::mp(), &format!(" [MP: {mp}/{max_mp}]"))?;
        write!(self.writer, " [Dodge: {}%]", status.dodge_chance)?;
        self.effect_tags(&status.player_effects)?;
        writeln!(self.writer)?;

        let (enemy_hp, enemy_max) = status.enemy_hp;
        self.span(Theme::heading(), &status.enemy_name)?;
        self.span(
            Theme::hp(enemy_hp, enemy_max),
            &format!(" [HP: {enemy_hp}/{enemy_max}]"),
        )?;
        self.effect_tags(&status.enemy_effects)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }

    fn write_menu(&mut self, options: &[String]) -> io::Result<()> {
        for (index, option) in options.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, option)?;
        }
        Ok(())
    }

    fn effect_tags(&mut self, entries: &[StatusEntry]) -> io::Result<()> {
        for entry in entries {
            self.span(Theme::tone(entry.tone), &format!(" [{entry}]"))?;
        }
        Ok(())
    }

    fn span(&mut self, style: Style, text: &str) -> io::Result<()> {
        self.begin(style)?;
        queue!(self.writer, Print(text))?;
        self.end()
    }

    fn begin(&mut self, style: Style) -> io::Result<()> {
        if !self.config.color {
            return Ok(());
        }
        queue!(self.writer, SetForegroundColor(style.color))?;
        if let Some(attribute) = style.attribute {
            queue!(self.writer, SetAttribute(attribute))?;
        }
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        if !self.config.color {
            return Ok(());
        }
        queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)
    }
}

impl<W: Write, R: BufRead> MessageSink for TerminalIo<W, R> {
    fn emit(&mut self, message: Message) {
        if let Err(error) = self.write_message(&message) {
            tracing::warn!("terminal write failed: {}", error);
        }
    }

    fn pause(&mut self, pacing: Pacing) {
        let delay = match pacing {
            Pacing::EnemyWindup | Pacing::RoundEnd => self.config.pacing,
            Pacing::Beat => self.config.pacing * 2,
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn show_status(&mut self, status: &RoundStatus) {
        if let Err(error) = self.write_status(status) {
            tracing::warn!("terminal write failed: {}", error);
        }
    }
}

impl<W: Write, R: BufRead> ChoiceSource for TerminalIo<W, R> {
    /// Unparsable input maps to 0 so the caller re-prompts.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize, InterfaceError> {
        self.write_menu(options)?;
        let line = self.read_line(prompt)?;
        Ok(line.parse().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use game_core::Tone;

    use super::*;

    fn terminal(input: &str) -> TerminalIo<Vec<u8>, Cursor<Vec<u8>>> {
        TerminalIo::new(
            CliConfig::plain(),
            Vec::new(),
            Cursor::new(input.as_bytes().to_vec()),
        )
    }

    fn output(io: TerminalIo<Vec<u8>, Cursor<Vec<u8>>>) -> String {
        let (writer, _) = io.into_inner();
        String::from_utf8(writer).unwrap()
    }

    #[test]
    fn plain_emit_writes_bare_lines() {
        let mut io = terminal("");
        io.emit(Message::alert("The wheel turns."));
        io.emit(Message::neutral("Again."));
        assert_eq!(output(io), "The wheel turns.\nAgain.\n");
    }

    #[test]
    fn colored_emit_wraps_text_in_escape_codes() {
        let config = CliConfig {
            color: true,
            ..CliConfig::plain()
        };
        let mut io = TerminalIo::new(config, Vec::new(), Cursor::new(Vec::new()));
        io.emit(Message::new(Tone::Critical, "Surge"));
        let text = output(io);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("Surge"));
    }

    #[test]
    fn choose_lists_options_and_parses_selection() {
        let mut io = terminal("2\n");
        let options = vec!["Attack".to_string(), "Defend".to_string()];
        assert_eq!(io.choose("Choose: ", &options).unwrap(), 2);

        let text = output(io);
        assert!(text.contains("  1. Attack\n"));
        assert!(text.contains("  2. Defend\n"));
        assert!(text.ends_with("Choose: "));
    }

    #[test]
    fn unparsable_choice_is_zero() {
        let mut io = terminal("  spin  \n-1\n");
        let options = vec!["Spin".to_string()];
        assert_eq!(io.choose("> ", &options).unwrap(), 0);
        assert_eq!(io.choose("> ", &options).unwrap(), 0);
    }

    #[test]
    fn end_of_input_closes() {
        let mut io = terminal("");
        let options = vec!["Spin".to_string()];
        assert_eq!(
            io.choose("> ", &options),
            Err(InterfaceError::InputClosed)
        );
        assert_eq!(io.read_line("Name: "), Err(InterfaceError::InputClosed));
    }

    #[test]
    fn read_line_trims() {
        let mut io = terminal("  Aria \n");
        assert_eq!(io.read_line("Name: ").unwrap(), "Aria");
    }

    #[test]
    fn status_block_lists_meters_and_effects() {
        let mut io = terminal("");
        io.show_status(&RoundStatus {
            round: 3,
            player_name: "Kael".to_string(),
            player_hp: (10, 20),
            player_mp: (5, 10),
            dodge_chance: 12,
            player_effects: vec![StatusEntry {
                name: "Power".to_string(),
                tone: Tone::Mystic,
                count: 2,
            }],
            enemy_name: "Goblin".to_string(),
            enemy_hp: (7, 30),
            enemy_effects: Vec::new(),
        });
        assert_eq!(
            output(io),
            "Kael [HP: 10/20] [MP: 5/10] [Dodge: 12%] [Power x2]\nGoblin [HP: 7/30]\n"
        );
    }
}
