pub mod creation;
pub mod display;
pub mod engine;
pub mod entity;
pub mod world;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use engine::{
    Command, HELP_TEXT, Output, Tone, handle_attack, handle_go, render_room, run_enemy_phase,
};
use entity::{Enemy, Player};
use world::World;

pub use world::{WorldError, load_world_from_file, load_world_from_str};

/// Where the session stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Victory,
    Defeat,
    Quit,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Continue
    }
}

#[derive(Debug)]
pub struct StepResult {
    pub output: Output,
    pub outcome: Outcome,
}

/// Everything one play session mutates, in one place.
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub rng: ChaCha8Rng,
    pub turn_index: u64,
    pub outcome: Outcome,
}

impl GameState {
    pub fn new(world: World, player: Player, seed: u64) -> Self {
        let enemies = world.enemies.iter().map(Enemy::spawn).collect();
        info!("new session in '{}' with seed {}", world.id, seed);

        GameState {
            world,
            player,
            enemies,
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn_index: 0,
            outcome: Outcome::Continue,
        }
    }

    /// The room as shown before each command.
    pub fn view(&self) -> Output {
        let mut out = Output::new();
        render_room(&mut out, &self.world, self.player.room, &self.enemies);
        out
    }

    /// Resolve one line of input, then the enemy phase, then win/loss.
    pub fn step(&mut self, input: &str) -> StepResult {
        let mut out = Output::new();

        if self.outcome.is_over() {
            return StepResult {
                output: out,
                outcome: self.outcome,
            };
        }

        let command = Command::parse(input);
        self.turn_index += 1;
        debug!("turn {}: {:?}", self.turn_index, command);

        match command {
            Command::Go(direction) => {
                handle_go(&mut out, &self.world, &mut self.player.room, &direction);
            }
            Command::Attack => {
                handle_attack(&mut out, &self.player, &mut self.enemies);
            }
            Command::Look => {
                render_room(&mut out, &self.world, self.player.room, &self.enemies);
            }
            Command::Stats => {
                let p = &self.player;
                out.say(format!(
                    "{} the {}: {} hp, {} attack",
                    p.name, p.role, p.hp, p.attack
                ));
            }
            Command::Help => out.say(HELP_TEXT),
            Command::Quit => {
                out.say("Goodbye.");
                info!("player quit on turn {}", self.turn_index);
                self.outcome = Outcome::Quit;
                return StepResult {
                    output: out,
                    outcome: self.outcome,
                };
            }
            Command::Unknown(_) => out.say("Unknown command. Type \"help\"."),
        }

        run_enemy_phase(
            &mut out,
            &self.world,
            &mut self.player,
            &mut self.enemies,
            &mut self.rng,
        );

        self.outcome = self.check_outcome();
        match self.outcome {
            Outcome::Victory => out.event(Tone::Victory, "You defeated all enemies. Victory!"),
            Outcome::Defeat => out.event(Tone::Defeat, "You have been defeated..."),
            _ => {}
        }
        if self.outcome.is_over() {
            info!("session ended in {:?} after {} turns", self.outcome, self.turn_index);
        }

        StepResult {
            output: out,
            outcome: self.outcome,
        }
    }

    fn check_outcome(&self) -> Outcome {
        if self.enemies.iter().all(|e| !e.is_alive()) {
            Outcome::Victory
        } else if !self.player.is_alive() {
            Outcome::Defeat
        } else {
            Outcome::Continue
        }
    }
}
