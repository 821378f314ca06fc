//! Main menu: start, load and erase characters.

use std::io::{BufRead, Write};

use client_frontend_cli::TerminalIo;
use game_content::Content;
use game_core::{Message, MessageSink, Player, RngOracle, Tone};
use runtime::menu::{labels, select};
use runtime::{GameSession, SaveRepository};

const TITLE: &str = "KAEL ARCTIS: THE UNRAVELING";
const DEFAULT_NAME: &str = "Kael";
const FAREWELL: &str = "The Wheel awaits your return, Traveler.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainMenuChoice {
    NewGame,
    LoadGame,
    DeleteSave,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [Self; 4] = [Self::NewGame, Self::LoadGame, Self::DeleteSave, Self::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::LoadGame => "Load Game",
            Self::DeleteSave => "Delete Save",
            Self::Exit => "Exit",
        }
    }
}

/// The top-level loop: everything outside a [`GameSession`].
pub struct App<'a, G> {
    content: &'a Content,
    saves: &'a dyn SaveRepository,
    rng: G,
}

impl<'a, G: RngOracle> App<'a, G> {
    pub fn new(content: &'a Content, saves: &'a dyn SaveRepository, rng: G) -> Self {
        Self {
            content,
            saves,
            rng,
        }
    }

    /// Show the main menu until the player exits or input closes.
    pub fn run<W: Write, R: BufRead>(&mut self, io: &mut TerminalIo<W, R>) -> anyhow::Result<()> {
        loop {
            match self.step(io) {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) if error.is_input_closed() => {
                    tracing::info!("input closed, leaving main menu");
                    io.blank();
                    break;
                }
                Err(error) => return Err(error.into()),
            }
        }

        io.emit(Message::info(FAREWELL));
        Ok(())
    }

    /// One pass through the main menu. `false` means exit.
    fn step<W: Write, R: BufRead>(&mut self, io: &mut TerminalIo<W, R>) -> runtime::Result<bool> {
        io.emit(Message::info(TITLE));
        let options: Vec<_> = MainMenuChoice::ALL.iter().map(|c| c.label()).collect();
        let choice = MainMenuChoice::ALL[select(io, "Main Menu Choice: ", &labels(&options))?];

        match choice {
            MainMenuChoice::NewGame => self.new_game(io)?,
            MainMenuChoice::LoadGame => self.load_game(io)?,
            MainMenuChoice::DeleteSave => self.delete_save(io)?,
            MainMenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn new_game<W: Write, R: BufRead>(&mut self, io: &mut TerminalIo<W, R>) -> runtime::Result<()> {
        let name = io.read_line("Enter your name: ")?;
        let name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name
        };

        if self.saves.exists(&name)? {
            io.emit(Message::warning(format!(
                "A save file for '{name}' already exists."
            )));
            if select(io, "Action: ", &labels(&["Overwrite & Start", "Back"]))? == 1 {
                return Ok(());
            }
        }

        tracing::info!(name = %name, "starting new character");
        let player = self.content.new_player(name);
        self.play(io, player)
    }

    fn load_game<W: Write, R: BufRead>(&mut self, io: &mut TerminalIo<W, R>) -> runtime::Result<()> {
        let Some(slot) = self.pick_save(
            io,
            "No threads of destiny found... (No save files)",
            "Select your Thread:",
            "Load Save: ",
        )?
        else {
            return Ok(());
        };

        match self.saves.load(&slot)? {
            Some(player) => {
                tracing::info!(slot = %slot, "loaded character");
                self.play(io, player)
            }
            None => {
                io.emit(Message::alert("No save file found."));
                Ok(())
            }
        }
    }

    fn delete_save<W: Write, R: BufRead>(
        &mut self,
        io: &mut TerminalIo<W, R>,
    ) -> runtime::Result<()> {
        let Some(slot) = self.pick_save(
            io,
            "Nothing to erase.",
            "Select Save to DELETE:",
            "Erase destiny: ",
        )?
        else {
            return Ok(());
        };

        io.emit(Message::alert(format!(
            "Are you sure you want to permanently erase '{slot}'?"
        )));
        if select(io, "Confirm: ", &labels(&["Erase Forever", "Cancel"]))? == 0 {
            self.saves.delete(&slot)?;
            tracing::info!(slot = %slot, "deleted save");
            io.emit(Message::warning(format!("Thread '{slot}' has been severed.")));
        }
        Ok(())
    }

    /// List saves plus "Back". `None` when there are none or the player backs out.
    fn pick_save<W: Write, R: BufRead>(
        &mut self,
        io: &mut TerminalIo<W, R>,
        empty: &str,
        heading: &str,
        prompt: &str,
    ) -> runtime::Result<Option<String>> {
        let mut slots = self.saves.list()?;
        if slots.is_empty() {
            io.emit(Message::alert(empty));
            return Ok(None);
        }

        io.emit(Message::new(Tone::Neutral, heading));
        let mut options = slots.clone();
        options.push("Back".to_string());
        let index = select(io, prompt, &options)?;
        if index < slots.len() {
            Ok(Some(slots.swap_remove(index)))
        } else {
            Ok(None)
        }
    }

    fn play<W: Write, R: BufRead>(
        &mut self,
        io: &mut TerminalIo<W, R>,
        player: Player,
    ) -> runtime::Result<()> {
        let mut session = GameSession::new(player, self.content, self.saves, &mut self.rng);
        session.run(io)
    }
}
