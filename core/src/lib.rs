#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use grid::*;
pub use sample::*;
pub use session::*;
pub use source::*;

mod error;
mod grid;
mod sample;
mod session;
mod source;

/// Text shown in a cell whose clue has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Categories per board
    pub categories: usize,
    /// Clues sampled from each category
    pub clues_per_category: usize,
    /// How many category ids are requested before sampling
    pub category_pool: usize,
}

impl BoardConfig {
    pub const fn new(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool: 100,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(6, 5)
    }
}

/// Address of one body cell: `category` is the column, `clue` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub category: usize,
    pub clue: usize,
}

impl CellPos {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// Valid transitions:
/// - Unrevealed -> QuestionShown
/// - QuestionShown -> AnswerShown
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Unrevealed,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    /// State after one more click, `None` once the answer is showing
    pub const fn next(self) -> Option<Self> {
        use RevealState::*;
        match self {
            Unrevealed => Some(QuestionShown),
            QuestionShown => Some(AnswerShown),
            AnswerShown => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Unrevealed,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// What the cell for this clue currently displays
    pub fn display_text(&self) -> &str {
        use RevealState::*;
        match self.showing {
            Unrevealed => PLACEHOLDER,
            QuestionShown => &self.question,
            AnswerShown => &self.answer,
        }
    }

    fn advance(&mut self) -> RevealOutcome {
        match self.showing.next() {
            Some(next) => {
                self.showing = next;
                match next {
                    RevealState::QuestionShown => RevealOutcome::QuestionShown,
                    _ => RevealOutcome::AnswerShown,
                }
            }
            None => RevealOutcome::NoChange,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// Outcome of clicking a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl RevealOutcome {
    /// Whether this outcome changed what the board displays
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
        }
    }
}

/// Categories in display order, each holding its clues in display order.
///
/// The shape is fixed once built; a new game builds a new board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of body rows, the clue count of the longest category
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn clue_at(&self, pos: CellPos) -> Option<&Clue> {
        self.categories.get(pos.category)?.clues.get(pos.clue)
    }

    /// Advance the clue at `pos` by one step, unknown positions are ignored
    pub fn reveal(&mut self, pos: CellPos) -> RevealOutcome {
        let Some(clue) = self
            .categories
            .get_mut(pos.category)
            .and_then(|category| category.clues.get_mut(pos.clue))
        else {
            log::debug!("no clue at {:?}, ignoring click", pos);
            return RevealOutcome::NoChange;
        };
        clue.advance()
    }
}
