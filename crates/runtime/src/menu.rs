//! Numbered menus shared by every runtime screen.

use game_core::{CombatIo, GameError, InterfaceError, Message, Tone};
use tracing::warn;

/// Prompt until a listed option is picked. Returns the 0-based index.
pub fn select(
    io: &mut dyn CombatIo,
    prompt: &str,
    options: &[String],
) -> Result<usize, InterfaceError> {
    loop {
        let picked = io.choose(prompt, options)?;
        match picked.checked_sub(1).filter(|index| *index < options.len()) {
            Some(index) => return Ok(index),
            None => {
                warn!(target: "runtime", picked, options = options.len(), "invalid selection");
                io.emit(Message::warning(format!(
                    "Invalid choice. Please select 1-{}.",
                    options.len()
                )));
            }
        }
    }
}

/// Owned labels for [`select`].
pub fn labels<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|item| item.as_ref().to_string()).collect()
}

/// Report a recoverable failure to the player.
pub fn reject<E: GameError>(io: &mut dyn CombatIo, error: &E) {
    warn!(target: "runtime", code = error.error_code(), %error, "request rejected");
    io.emit(Message::new(Tone::Alert, error.to_string()));
}

#[cfg(test)]
mod tests {
    use game_core::ScriptedIo;

    use super::*;

    #[test]
    fn out_of_range_picks_are_retried() {
        let mut io = ScriptedIo::new([0, 4, 2]);
        let index = select(&mut io, "Action: ", &labels(&["A", "B", "C"])).unwrap();

        assert_eq!(index, 1);
        assert!(io.saw("Please select 1-3."));
        assert_eq!(io.prompts.len(), 3);
    }

    #[test]
    fn closed_input_propagates() {
        let mut io = ScriptedIo::new([]);
        let result = select(&mut io, "Action: ", &labels(&["A"]));
        assert_eq!(result, Err(InterfaceError::InputClosed));
    }
}
