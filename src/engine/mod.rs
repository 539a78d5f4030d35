mod combat;
mod commands;
mod enemies;
mod helpers;
mod movement;
mod output;
mod render;

pub use combat::handle_attack;
pub use commands::{Command, HELP_TEXT};
pub use enemies::run_enemy_phase;
pub use helpers::{WRAP_WIDTH, living_enemies_in, wrap_text};
pub use movement::handle_go;
pub use output::{Output, OutputBlock, Tone};
pub use render::render_room;
