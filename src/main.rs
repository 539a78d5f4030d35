use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use dungeon_crawl::creation::{create_player, prompt_line};
use dungeon_crawl::display::{choose_styler, write_output};
use dungeon_crawl::world::{World, WorldError, load_world_from_file, validate_world};
use dungeon_crawl::GameState;

/// Turn-based dungeon crawl in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// World file to play instead of the built-in dungeon
    world: Option<PathBuf>,

    /// Seed for enemy movement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Never emit ANSI colour codes
    #[arg(long)]
    no_color: bool,
}

fn load_world(path: Option<&PathBuf>) -> Result<World, WorldError> {
    match path {
        Some(p) => load_world_from_file(p),
        None => World::builtin(),
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let world = match load_world(args.world.as_ref()) {
        Ok(w) => w,
        Err(e) => {
            match &args.world {
                Some(p) => eprintln!("Failed to load world file '{}': {e}", p.display()),
                None => eprintln!("Failed to load built-in world: {e}"),
            }
            std::process::exit(1);
        }
    };
    for warning in validate_world(&world) {
        warn!("{}", warning);
    }

    let styler = choose_styler(args.no_color);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "\nWelcome to {}! Type \"help\" for commands.", world.name)?;
    if !world.desc.is_empty() {
        writeln!(stdout, "{}", world.desc)?;
    }

    let Some(player) = create_player(&mut input, &mut stdout, world.start_room)? else {
        writeln!(stdout, "\nGoodbye.")?;
        return Ok(());
    };

    let mut game = GameState::new(world, player, seed);

    loop {
        write_output(&mut stdout, &game.view(), styler.as_ref())?;

        let Some(line) = prompt_line(&mut input, &mut stdout, "> ")? else {
            writeln!(stdout, "\nGoodbye.")?;
            break;
        };

        let result = game.step(&line);
        write_output(&mut stdout, &result.output, styler.as_ref())?;

        if result.outcome.is_over() {
            break;
        }
    }

    Ok(())
}
