use std::fmt;

use super::model::World;

/// A content smell that does not stop the game from running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub message: String,
}

impl ValidationWarning {
    fn new(msg: impl Into<String>) -> Self {
        ValidationWarning {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    if world.enemies.is_empty() {
        warnings.push(ValidationWarning::new(
            "world has no enemies; the first turn will end in victory",
        ));
    }

    for id in world.room_ids() {
        let room = world.room(id);

        if room.exits.is_empty() && world.rooms.len() > 1 {
            warnings.push(ValidationWarning::new(format!(
                "room '{}' has no exits",
                room.key
            )));
        }

        // Every edge should have some way back.
        for (direction, &target) in &room.exits {
            let returns = world.room(target).exits.values().any(|&back| back == id);
            if !returns {
                warnings.push(ValidationWarning::new(format!(
                    "room '{}' exit '{}' leads to '{}' with no exit back",
                    room.key,
                    direction,
                    world.room(target).key
                )));
            }
        }
    }

    warnings
}
