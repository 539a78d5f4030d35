use crate::entity::Enemy;
use crate::world::RoomId;

pub const WRAP_WIDTH: usize = 60;

/// Greedy word wrap. Existing newlines are kept as hard breaks; a word longer
/// than `width` gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0usize; // in chars, not bytes
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if !line.is_empty() && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Indices of living enemies in `room`, in list order.
pub fn living_enemies_in(enemies: &[Enemy], room: RoomId) -> impl Iterator<Item = usize> + '_ {
    enemies
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.is_alive() && e.room == room)
        .map(|(i, _)| i)
}
