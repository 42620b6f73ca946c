use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub enum GridCell {
    /// Clickable cell backed by a clue
    Clue {
        pos: CellPos,
        showing: RevealState,
        text: String,
    },
    /// Filler where a category ran short of clues
    Empty,
}

/// What the board table shows: one header per category, one row per clue index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<GridCell>>,
}

impl BoardGrid {
    pub fn from_board(board: &Board) -> Self {
        Self::with_min_rows(board, 0)
    }

    /// Like `from_board`, padding the body with empty rows up to `min_rows`
    pub fn with_min_rows(board: &Board, min_rows: usize) -> Self {
        let headers = board
            .categories()
            .iter()
            .map(|category| category.title.clone())
            .collect();

        let rows = (0..board.rows().max(min_rows))
            .map(|clue| {
                (0..board.categories().len())
                    .map(|category| {
                        let pos = CellPos::new(category, clue);
                        board.clue_at(pos).map_or(GridCell::Empty, |c| GridCell::Clue {
                            pos,
                            showing: c.showing(),
                            text: c.display_text().to_string(),
                        })
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }
}
