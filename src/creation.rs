//! Interactive character creation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::entity::{Player, Role};
use crate::world::RoomId;

/// Print `prompt` and read one line. `None` means the input is exhausted.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        // The bad bytes are consumed; hand back an empty line so the caller rejects it.
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("ignoring unreadable input line: {e}");
            Ok(Some(String::new()))
        }
        Err(e) => Err(e),
    }
}

/// Ask for a name and a class until both are valid.
/// Returns `None` if input ends first, which callers treat as quitting.
pub fn create_player<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    start_room: RoomId,
) -> io::Result<Option<Player>> {
    let name = loop {
        match prompt_line(input, output, "Enter your character's name: ")? {
            None => return Ok(None),
            Some(name) if name.is_empty() => writeln!(output, "Your character needs a name.")?,
            Some(name) => break name,
        }
    };

    let choices = Role::iter().map(|r| r.to_string()).collect::<Vec<_>>().join("/");
    let class_prompt = format!("Choose a class ({}): ", choices);

    let role = loop {
        let Some(answer) = prompt_line(input, output, &class_prompt)? else {
            return Ok(None);
        };
        match Role::from_str(&answer) {
            Ok(role) => break role,
            Err(_) => writeln!(output, "'{}' is not a class you can pick.", answer)?,
        }
    };

    let player = Player::new(name, role, start_room);
    info!(
        "created {} the {} ({} hp, {} atk)",
        player.name, player.role, player.hp, player.attack
    );
    Ok(Some(player))
}
