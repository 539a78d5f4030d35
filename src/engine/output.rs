/// What a highlighted line is about. Styling is chosen from this, never from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Movement,
    Combat,
    Hurt,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(Tone, String),
    Exits(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, tone: Tone, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(tone, s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Plain text of every block, one per line.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| match b {
                OutputBlock::Title(s)
                | OutputBlock::Text(s)
                | OutputBlock::Event(_, s)
                | OutputBlock::Exits(s) => s.lines(),
            })
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}
