//! Typewriter text effect
//!
//! Types a phrase one character at a time, pauses, erases it, moves to the
//! next phrase and wraps around. Pure state machine; the browser driver
//! applies each [`TypeStep`] to the DOM and waits `delay_ms` before the next.

use serde::{Deserialize, Serialize};

/// Phrase list and timings (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub typing_delay: u32,
    pub erasing_delay: u32,
    /// Pause after a phrase is fully typed
    pub new_text_delay: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "A B.Tech CSE (AI & ML) Student".to_string(),
                "A Software Developer".to_string(),
                "An AI & ML Enthusiast".to_string(),
            ],
            typing_delay: 100,
            erasing_delay: 60,
            new_text_delay: 2000,
        }
    }
}

impl TypewriterConfig {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Delay before the very first character
    pub fn start_delay(&self) -> u32 {
        self.new_text_delay + 250
    }

    /// Pause after a phrase is fully erased
    pub fn next_phrase_delay(&self) -> u32 {
        self.typing_delay + 1100
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

/// Visible state after one step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    /// Caret is mid-typing (drives the `typing` CSS class)
    pub typing: bool,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase: usize,
    /// Number of visible characters of the current phrase
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type
    pub fn new(config: TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            config,
            phrase: 0,
            chars: 0,
            phase: Phase::Typing,
        })
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    fn current(&self) -> &str {
        &self.config.phrases[self.phrase]
    }

    /// First `n` characters of the current phrase
    fn prefix(&self, n: usize) -> String {
        self.current().chars().take(n).collect()
    }

    /// Perform one type/erase step
    pub fn step(&mut self) -> TypeStep {
        match self.phase {
            Phase::Typing => {
                if self.chars < self.current().chars().count() {
                    self.chars += 1;
                    TypeStep {
                        text: self.prefix(self.chars),
                        typing: true,
                        delay_ms: self.config.typing_delay,
                    }
                } else {
                    self.phase = Phase::Erasing;
                    TypeStep {
                        text: self.prefix(self.chars),
                        typing: false,
                        delay_ms: self.config.new_text_delay,
                    }
                }
            }
            Phase::Erasing => {
                if self.chars > 0 {
                    self.chars -= 1;
                    TypeStep {
                        text: self.prefix(self.chars),
                        typing: true,
                        delay_ms: self.config.erasing_delay,
                    }
                } else {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.config.phrases.len();
                    TypeStep {
                        text: String::new(),
                        typing: false,
                        delay_ms: self.config.next_phrase_delay(),
                    }
                }
            }
        }
    }
}
