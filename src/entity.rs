//! Player character and enemies.

use rand::Rng;
use strum::{Display, EnumIter, EnumString};

use crate::world::{EnemySpawn, RoomId, World};

/// Player class. Fixes starting hit points and attack power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Warrior,
    Wizard,
    Rogue,
}

impl Role {
    /// Starting `(hp, attack)`.
    pub const fn base_stats(&self) -> (i32, i32) {
        match self {
            Role::Warrior => (15, 3),
            Role::Wizard => (10, 4),
            Role::Rogue => (12, 3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub hp: i32,
    pub attack: i32,
    pub room: RoomId,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role, room: RoomId) -> Self {
        let (hp, attack) = role.base_stats();
        Player {
            name: name.into(),
            role,
            hp,
            attack,
            room,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// A spawned enemy. Dead enemies stay in the session's list and are skipped by
/// everything that reads it.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub room: RoomId,
    pub wander_chance_percent: u8,
}

impl Enemy {
    pub fn spawn(spawn: &EnemySpawn) -> Self {
        Enemy {
            name: spawn.name.clone(),
            hp: spawn.hp,
            attack: spawn.attack,
            room: spawn.start_room,
            wander_chance_percent: spawn.wander_chance_percent,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Step to a uniformly random neighbor of the current room.
    /// Returns the new room, or `None` if the enemy stayed put.
    pub fn wander<R: Rng>(&mut self, world: &World, rng: &mut R) -> Option<RoomId> {
        if !self.is_alive() {
            return None;
        }

        // Only consume a roll when the outcome is actually uncertain.
        if self.wander_chance_percent < 100
            && rng.gen_range(0..100u8) >= self.wander_chance_percent
        {
            return None;
        }

        let exits = &world.room(self.room).exits;
        if exits.is_empty() {
            return None;
        }

        let (_, &next) = exits.get_index(rng.gen_range(0..exits.len()))?;
        self.room = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_log::test;

    fn world() -> World {
        World::builtin().unwrap()
    }

    fn enemy_at(world: &World, key: &str) -> Enemy {
        Enemy {
            name: "Rat".into(),
            hp: 3,
            attack: 1,
            room: world.room_by_key(key).unwrap(),
            wander_chance_percent: 100,
        }
    }

    #[test]
    fn role_table() {
        assert_eq!(Role::Warrior.base_stats(), (15, 3));
        assert_eq!(Role::Wizard.base_stats(), (10, 4));
        assert_eq!(Role::Rogue.base_stats(), (12, 3));
    }

    #[test]
    fn roles_parse_case_insensitively_and_print_lowercase() {
        assert_eq!(Role::from_str("WiZaRd").unwrap(), Role::Wizard);
        assert!(Role::from_str("paladin").is_err());
        let names: Vec<String> = Role::iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["warrior", "wizard", "rogue"]);
    }

    #[test]
    fn player_takes_stats_from_role() {
        let p = Player::new("Ada", Role::Wizard, RoomId(0));
        assert_eq!((p.hp, p.attack), (10, 4));
        assert!(p.is_alive());
    }

    #[test]
    fn wander_always_lands_on_a_neighbor() {
        let world = world();
        let hall = world.room_by_key("hall").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let mut e = enemy_at(&world, "hall");
            let next = e.wander(&world, &mut rng).expect("hall has exits");
            assert!(world.room(hall).exits.values().any(|&n| n == next));
            assert_eq!(e.room, next);
        }
    }

    #[test]
    fn dead_enemy_never_moves() {
        let world = world();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy_at(&world, "hall");
        e.hp = 0;
        assert_eq!(e.wander(&world, &mut rng), None);
        assert_eq!(e.room, world.room_by_key("hall").unwrap());
    }

    #[test]
    fn zero_wander_chance_stays_put() {
        let world = world();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut e = enemy_at(&world, "armory");
        e.wander_chance_percent = 0;
        for _ in 0..20 {
            assert_eq!(e.wander(&world, &mut rng), None);
        }
    }

    #[test]
    fn enemy_in_a_room_without_exits_stays() {
        let world = crate::world::load_world_from_str(
            r#"
            [world]
            id = "cells"
            name = "Cells"
            start_room = "yard"

            [[room]]
            id = "yard"
            name = "Yard"

            [[room]]
            id = "cell"
            name = "Cell"
            "#,
        )
        .unwrap();
        let cell = world.room_by_key("cell").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut e = enemy_at(&world, "cell");

        for _ in 0..10 {
            assert_eq!(e.wander(&world, &mut rng), None);
            assert_eq!(e.room, cell);
        }
    }

    #[test]
    fn partial_wander_chance_sometimes_moves_sometimes_stays() {
        let world = world();
        let hall = world.room_by_key("hall").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let (mut moved, mut stayed) = (0, 0);

        for _ in 0..200 {
            let mut e = enemy_at(&world, "hall");
            e.wander_chance_percent = 50;
            match e.wander(&world, &mut rng) {
                Some(next) => {
                    assert_ne!(next, hall);
                    moved += 1;
                }
                None => {
                    assert_eq!(e.room, hall);
                    stayed += 1;
                }
            }
        }

        assert!(moved > 50, "moved {moved} of 200");
        assert!(stayed > 50, "stayed {stayed} of 200");
    }
}
