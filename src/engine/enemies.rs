use log::debug;
use rand::Rng;

use crate::engine::output::{Output, Tone};
use crate::entity::{Enemy, Player};
use crate::world::World;

/// Let every living enemy act once, in list order: strike the player when
/// sharing a room, otherwise wander.
pub fn run_enemy_phase<R: Rng>(
    out: &mut Output,
    world: &World,
    player: &mut Player,
    enemies: &mut [Enemy],
    rng: &mut R,
) {
    for enemy in enemies.iter_mut() {
        if !enemy.is_alive() {
            continue;
        }

        if enemy.room == player.room {
            player.hp -= enemy.attack;
            debug!("{} hits player for {} (hp now {})", enemy.name, enemy.attack, player.hp);
            out.event(
                Tone::Hurt,
                format!("The {} hits you! You have {} hp.", enemy.name, player.hp),
            );
        } else {
            let from = enemy.room;
            match enemy.wander(world, rng) {
                Some(to) => debug!(
                    "{} wanders '{}' -> '{}'",
                    enemy.name,
                    world.room(from).key,
                    world.room(to).key
                ),
                None => debug!("{} stays in '{}'", enemy.name, world.room(from).key),
            }
        }
    }
}
