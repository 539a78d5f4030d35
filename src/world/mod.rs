mod loader;
mod model;
mod validator;

pub use loader::{BUILTIN_WORLD, WorldError, load_world_from_file, load_world_from_str};

pub use model::{EnemySpawn, Room, RoomId, World};
pub use validator::{ValidationWarning, validate_world};

impl World {
    /// The sample dungeon: Entrance, Hall, Armory and Library with a Goblin and a Skeleton.
    pub fn builtin() -> Result<World, WorldError> {
        load_world_from_str(BUILTIN_WORLD)
    }
}
