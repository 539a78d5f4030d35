use crate::engine::helpers::{WRAP_WIDTH, living_enemies_in, wrap_text};
use crate::engine::output::Output;
use crate::entity::Enemy;
use crate::world::{RoomId, World};

pub fn render_room(out: &mut Output, world: &World, room_id: RoomId, enemies: &[Enemy]) {
    let room = world.room(room_id);

    out.title(format!("== {} ==", room.name));
    out.say(wrap_text(&room.desc, WRAP_WIDTH).join("\n"));

    if room.exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        let list = room
            .exits
            .keys()
            .map(|d| d.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        out.set_exits(format!("Exits: {}", list));
    }

    for i in living_enemies_in(enemies, room_id) {
        out.say(format!("A {} is here!", enemies[i].name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;

    #[test]
    fn renders_header_exits_and_enemies() {
        let world = World::builtin().unwrap();
        let hall = world.room_by_key("hall").unwrap();
        let enemies: Vec<Enemy> = world.enemies.iter().map(Enemy::spawn).collect();

        let mut out = Output::new();
        render_room(&mut out, &world, hall, &enemies);

        assert_eq!(out.blocks[0], OutputBlock::Title("== Hall ==".into()));
        assert!(out.contains("A damp corridor stretches before you."));
        assert!(out.contains("Exits: south, east, west"));
        assert!(out.contains("A Goblin is here!"));
        assert!(!out.contains("Skeleton"));
    }

    #[test]
    fn dead_enemies_are_not_listed() {
        let world = World::builtin().unwrap();
        let hall = world.room_by_key("hall").unwrap();
        let mut enemies: Vec<Enemy> = world.enemies.iter().map(Enemy::spawn).collect();
        enemies[0].hp = -1;

        let mut out = Output::new();
        render_room(&mut out, &world, hall, &enemies);
        assert!(!out.contains("Goblin"));
    }
}
