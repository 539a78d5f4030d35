use log::debug;

use crate::engine::output::{Output, Tone};
use crate::world::{RoomId, World};

/// Handle `go <direction>`. Returns true if the player changed rooms.
pub fn handle_go(
    out: &mut Output,
    world: &World,
    current_room: &mut RoomId,
    direction: &str,
) -> bool {
    let direction = direction.trim();
    if direction.is_empty() {
        out.say("Go where?");
        return false;
    }

    match world.room(*current_room).neighbor(direction) {
        Some(next) => {
            debug!(
                "player moves {} from '{}' to '{}'",
                direction,
                world.room(*current_room).key,
                world.room(next).key
            );
            *current_room = next;
            out.event(Tone::Movement, format!("You move {}.", direction));
            true
        }
        None => {
            out.say("You can't go that way.");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn go_north_from_entrance_reaches_hall() {
        let world = World::builtin().unwrap();
        let mut here = world.start_room;
        let mut out = Output::new();

        assert!(handle_go(&mut out, &world, &mut here, "north"));
        assert_eq!(here, world.room_by_key("hall").unwrap());
        assert!(out.contains("You move north."));
    }

    #[test]
    fn missing_direction_asks_where() {
        let world = World::builtin().unwrap();
        let mut here = world.start_room;
        let mut out = Output::new();

        assert!(!handle_go(&mut out, &world, &mut here, "  "));
        assert_eq!(here, world.start_room);
        assert!(out.contains("Go where?"));
    }
}
