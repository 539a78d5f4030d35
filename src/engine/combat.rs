use log::debug;

use crate::engine::helpers::living_enemies_in;
use crate::engine::output::{Output, Tone};
use crate::entity::{Enemy, Player};

/// Player strikes the first living enemy (in list order) sharing their room.
/// Returns the index of the enemy hit.
pub fn handle_attack(out: &mut Output, player: &Player, enemies: &mut [Enemy]) -> Option<usize> {
    let Some(target) = living_enemies_in(enemies, player.room).next() else {
        out.say("There is nothing to attack.");
        return None;
    };

    let enemy = &mut enemies[target];
    enemy.hp -= player.attack;
    debug!("{} hits {} for {} (hp now {})", player.name, enemy.name, player.attack, enemy.hp);

    out.event(
        Tone::Combat,
        format!("You hit the {}! It has {} hp left.", enemy.name, enemy.hp),
    );
    if !enemy.is_alive() {
        out.event(Tone::Combat, format!("The {} is defeated!", enemy.name));
    }

    Some(target)
}
