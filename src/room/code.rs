//! Code generation and sequential verification.
//!
//! Each room guards itself with a short code over one of two symbol
//! alphabets. Codes come from shuffling the full alphabet with the
//! verifier's own RNG and keeping a prefix, so the symbols of one code
//! are always distinct and a seeded verifier reproduces the same code
//! run after run.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::{DIGIT_SYMBOLS, FRUIT_SYMBOLS};

/// Which symbol set a room's code draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Drawn digits `0..=9`
    #[default]
    Digits,
    /// Fruit-wheel positions `1..=6` (1-based)
    Fruits,
}

impl Alphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Digits => &DIGIT_SYMBOLS,
            Alphabet::Fruits => &FRUIT_SYMBOLS,
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols().contains(&symbol)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols().len()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Alphabet::Digits => "digits",
            Alphabet::Fruits => "fruits",
        }
    }
}

/// What one guess did to the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// The guess matched the expected symbol
    pub correct: bool,
    /// The guess was the final symbol of the code
    pub completed: bool,
}

/// Positional code matcher for one room.
///
/// Tracks how far into the code the player has correctly entered. Only a
/// correct guess advances the position; a wrong guess throws it back to
/// the start. Completing the code also throws it back to the start, so
/// the same code can be entered again.
#[derive(Clone, Debug)]
pub struct CodeVerifier {
    alphabet: Alphabet,
    code_length: usize,
    code: Vec<u8>,
    position: usize,
    rng: StdRng,
}

impl CodeVerifier {
    /// Create a verifier and generate its first code.
    ///
    /// `code_length` must be in `1..=alphabet.symbol_count()`; the config
    /// loader validates this before any verifier is built. With a seed the
    /// code sequence is fully reproducible; without one it comes from OS
    /// entropy.
    pub fn new(alphabet: Alphabet, code_length: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut verifier = Self {
            alphabet,
            code_length,
            code: Vec::new(),
            position: 0,
            rng,
        };
        verifier.generate();
        verifier
    }

    /// Feed one guessed symbol through the verifier.
    ///
    /// The final correct symbol reports `completed` and resets the
    /// position, so the next guess starts the code over.
    pub fn on_guess(&mut self, symbol: u8) -> GuessOutcome {
        if symbol == self.code[self.position] {
            self.position += 1;
            if self.position == self.code.len() {
                self.position = 0;
                return GuessOutcome {
                    correct: true,
                    completed: true,
                };
            }
            GuessOutcome {
                correct: true,
                completed: false,
            }
        } else {
            self.position = 0;
            GuessOutcome {
                correct: false,
                completed: false,
            }
        }
    }

    /// Throw away the current code and draw the next one from the RNG
    /// stream. Entry progress resets with it.
    pub fn reset_code(&mut self) {
        self.generate();
    }

    /// The code currently in force
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Index of the next expected symbol
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn generate(&mut self) {
        let mut symbols: Vec<u8> = self.alphabet.symbols().to_vec();
        symbols.shuffle(&mut self.rng);
        symbols.truncate(self.code_length);
        self.code = symbols;
        self.position = 0;
    }
}
