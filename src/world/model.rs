use indexmap::IndexMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside [`World::rooms`]. Stable for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: RoomId,
    pub rooms: Vec<Room>,
    pub enemies: Vec<EnemySpawn>,
}

#[derive(Debug)]
pub struct Room {
    pub key: String,
    pub name: String,
    pub desc: String,
    pub exits: IndexMap<String, RoomId>, // direction -> neighbor, authoring order
}

/// Where and how an enemy enters the game.
#[derive(Debug, Clone)]
pub struct EnemySpawn {
    pub id: String,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub start_room: RoomId,
    pub wander_chance_percent: u8,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_by_key(&self, key: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.key == key).map(RoomId)
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(RoomId)
    }
}

impl Room {
    pub fn neighbor(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }
}
