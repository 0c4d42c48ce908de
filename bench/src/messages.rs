//! Deterministic chat message generation.

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use rusty_hub::{Formatting, Text};

const WORDS: &[&str] = &[
    "hello", "party", "dungeon", "ready", "loot", "boss", "spawn", "trade", "guild", "gg",
];

/// Configuration for generated messages.
#[derive(Debug, Clone)]
pub struct MessageConfig {
    /// Number of messages to generate.
    pub count: usize,
    /// Words per message.
    pub words: usize,
    /// Probability that a word is preceded by a formatting code.
    pub code_density: f64,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            count: 1_000,
            words: 12,
            code_density: 0.3,
            seed: 12345,
        }
    }
}

/// Generates pre-formatted literal messages, like the ones servers send.
pub fn literal_messages(config: &MessageConfig) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            let mut line = String::new();
            for i in 0..config.words {
                if i > 0 {
                    line.push(' ');
                }
                if rng.gen_bool(config.code_density) {
                    let formatting = Formatting::ALL[rng.gen_range(0..Formatting::ALL.len())];
                    line.push_str(&formatting.to_string());
                }
                line.push_str(WORDS.choose(&mut rng).copied().unwrap_or("word"));
            }
            line
        })
        .collect()
}

/// Generates styled text trees with one sibling per word.
pub fn styled_messages(config: &MessageConfig) -> Vec<Text> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            (0..config.words).fold(Text::empty(), |text, _| {
                let word = WORDS.choose(&mut rng).copied().unwrap_or("word");
                let mut sibling = Text::literal(format!("{word} "));
                if rng.gen_bool(config.code_density) {
                    sibling = sibling.formatted(Formatting::ALL[rng.gen_range(0..16)]);
                }
                text.append(sibling)
            })
        })
        .collect()
}
