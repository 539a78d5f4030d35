use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::model::{EnemySpawn, Room, RoomId, World};

/// The sample dungeon shipped with the binary.
pub const BUILTIN_WORLD: &str = include_str!("../../public/dungeon.toml");

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("could not read world file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid world file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("world.{0} may not be empty")]
    EmptyHeaderField(&'static str),
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),
    #[error("room '{0}' has an empty name")]
    EmptyRoomName(String),
    #[error("room '{room}' has two exits named '{direction}'")]
    DuplicateExit { room: String, direction: String },
    #[error("room '{room}' exit '{direction}' targets missing room '{target}'")]
    UnknownExitTarget {
        room: String,
        direction: String,
        target: String,
    },
    #[error("start_room '{0}' not found among rooms")]
    UnknownStartRoom(String),
    #[error("duplicate enemy id: {0}")]
    DuplicateEnemy(String),
    #[error("enemy '{0}' has an empty name")]
    EmptyEnemyName(String),
    #[error("enemy '{enemy}' start_room '{room}' not found among rooms")]
    UnknownEnemyRoom { enemy: String, room: String },
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    enemy: Vec<EnemyConfig>, // [[enemy]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct EnemyConfig {
    id: String,
    name: String,
    hp: i32,
    attack: i32,
    start_room: String,

    // defaults to always wandering
    #[serde(default)]
    wander_chance_percent: Option<u8>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::EmptyHeaderField("id"));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::EmptyHeaderField("start_room"));
    }

    // First pass: hand out ids so exits can point forward.
    let mut index: HashMap<String, RoomId> = HashMap::new();
    for (i, room_cfg) in world_file.room.iter().enumerate() {
        if index.insert(room_cfg.id.clone(), RoomId(i)).is_some() {
            return Err(WorldError::DuplicateRoom(room_cfg.id.clone()));
        }
    }

    // Second pass: resolve exits against the index.
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());
    for room_cfg in world_file.room {
        let name = room_cfg.name.trim().to_string();
        if name.is_empty() {
            return Err(WorldError::EmptyRoomName(room_cfg.id));
        }

        let mut exits: IndexMap<String, RoomId> = IndexMap::new();
        for exit in room_cfg.exit {
            let direction = exit.direction.trim().to_lowercase();
            let Some(&target) = index.get(&exit.target) else {
                return Err(WorldError::UnknownExitTarget {
                    room: room_cfg.id,
                    direction,
                    target: exit.target,
                });
            };
            if exits.insert(direction.clone(), target).is_some() {
                return Err(WorldError::DuplicateExit {
                    room: room_cfg.id,
                    direction,
                });
            }
        }

        rooms.push(Room {
            key: room_cfg.id,
            name,
            desc: normalize_multiline_desc(&room_cfg.desc),
            exits,
        });
    }

    let start_room = *index
        .get(&world_file.world.start_room)
        .ok_or_else(|| WorldError::UnknownStartRoom(world_file.world.start_room.clone()))?;

    // Enemies keep file order; combat targets the first match in this order.
    let mut enemies: Vec<EnemySpawn> = Vec::with_capacity(world_file.enemy.len());
    for ec in world_file.enemy {
        if enemies.iter().any(|e| e.id == ec.id) {
            return Err(WorldError::DuplicateEnemy(ec.id));
        }

        let name = ec.name.trim().to_string();
        if name.is_empty() {
            return Err(WorldError::EmptyEnemyName(ec.id));
        }

        let Some(&room) = index.get(&ec.start_room) else {
            return Err(WorldError::UnknownEnemyRoom {
                enemy: ec.id,
                room: ec.start_room,
            });
        };

        enemies.push(EnemySpawn {
            id: ec.id,
            name,
            hp: ec.hp,
            attack: ec.attack,
            start_room: room,
            wander_chance_percent: ec.wander_chance_percent.unwrap_or(100).min(100),
        });
    }

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room,
        rooms,
        enemies,
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation inside TOML strings never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),  // wrapped line
                1 => result.push('\n'), // line break
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
