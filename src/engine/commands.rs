/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Attack,
    Look,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "Commands: go <direction>, attack, look, stats, help, quit|exit";

impl Command {
    /// Input is trimmed and lowercased before matching.
    pub fn parse(input: &str) -> Command {
        let lower = input.trim().to_lowercase();

        if lower == "go" {
            return Command::Go(String::new());
        }
        if let Some(rest) = lower.strip_prefix("go ") {
            return Command::Go(rest.trim().to_string());
        }

        match lower.as_str() {
            "attack" => Command::Attack,
            "look" => Command::Look,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(lower),
        }
    }
}
