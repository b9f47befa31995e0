use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
}

impl GameOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "win",
            GameOutcome::Lose => "lose",
        }
    }
}

/// A coin-flip game. Nothing about it is persisted.
#[derive(Debug, Clone)]
pub struct MiniGame {
    name: String,
}

impl MiniGame {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Win or lose with equal odds, decided only by `rng`
    pub fn play<R: Rng>(&self, rng: &mut R) -> GameOutcome {
        if rng.gen_bool(0.5) {
            GameOutcome::Win
        } else {
            GameOutcome::Lose
        }
    }
}
