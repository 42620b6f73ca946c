use crate::*;

/// Valid transitions:
/// - Idle -> Loading
/// - Loading -> Ready
/// - Loading -> Failed
/// - Ready -> Loading
/// - Failed -> Loading
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GamePhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A board is being fetched
    Loading,
    /// The board is playable
    Ready,
    /// The most recently resolved setup failed
    Failed(FetchError),
}

impl GamePhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Identifies one setup attempt, issued in increasing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u32);

/// Owns the board for the lifetime of the page.
///
/// Setups are not cancelled. Whichever one resolves last replaces the board, even when a newer
/// one was issued after it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    phase: GamePhase,
    board: Option<Board>,
    latest_ticket: Option<LoadTicket>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Start a new setup, the current board stays playable until it resolves
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = LoadTicket(self.latest_ticket.map_or(0, |LoadTicket(n)| n.wrapping_add(1)));
        self.latest_ticket = Some(ticket);
        self.phase = GamePhase::Loading;
        log::debug!("load {:?} started", ticket);
        ticket
    }

    /// Assign the result of a setup, replacing the board wholesale
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Board>) {
        if self.latest_ticket.is_some_and(|latest| latest > ticket) {
            log::debug!(
                "load {:?} resolved after newer load {:?} was issued",
                ticket,
                self.latest_ticket
            );
        }
        match result {
            Ok(board) => {
                log::info!("load {:?} ready", ticket);
                self.board = Some(board);
                self.phase = GamePhase::Ready;
            }
            Err(err) => {
                log::error!("load {:?} failed: {}", ticket, err);
                self.board = None;
                self.phase = GamePhase::Failed(err);
            }
        }
    }

    /// Forward a click to the board, clicks without a board are ignored
    pub fn reveal(&mut self, pos: CellPos) -> RevealOutcome {
        self.board
            .as_mut()
            .map_or(RevealOutcome::NoChange, |board| board.reveal(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::{rng, MemorySource};
    use alloc::string::ToString;
    use alloc::vec;
    use futures_util::FutureExt;

    fn one_category(title: &str) -> Board {
        Board::new(vec![Category::new(title, vec![Clue::new("q", "a")])])
    }

    #[test]
    fn startup_goes_idle_loading_ready() {
        let source = MemorySource::with_categories(10, 5);
        let mut session = GameSession::new();
        assert_eq!(session.phase(), &GamePhase::Idle);
        assert!(session.board().is_none());

        let ticket = session.begin_load();
        assert!(session.phase().is_loading());

        let result = setup_board(&source, &mut rng(2), &BoardConfig::default())
            .now_or_never()
            .unwrap();
        session.finish_load(ticket, result);

        assert_eq!(session.phase(), &GamePhase::Ready);
        assert_eq!(session.board().unwrap().categories().len(), 6);
    }

    #[test]
    fn restart_keeps_old_board_until_replaced() {
        let mut session = GameSession::new();
        let first = session.begin_load();
        session.finish_load(first, Ok(one_category("old")));
        session.reveal(CellPos::new(0, 0));

        let second = session.begin_load();
        assert!(session.phase().is_loading());
        assert_eq!(
            session.reveal(CellPos::new(0, 0)),
            RevealOutcome::AnswerShown
        );

        session.finish_load(second, Ok(one_category("new")));
        let board = session.board().unwrap();
        assert_eq!(board.categories()[0].title, "new");
        assert_eq!(
            board.clue_at(CellPos::new(0, 0)).unwrap().display_text(),
            PLACEHOLDER
        );
    }

    #[test]
    fn last_resolved_load_wins_even_if_issued_first() {
        let mut session = GameSession::new();
        let slow = session.begin_load();
        let fast = session.begin_load();
        assert!(fast > slow);

        session.finish_load(fast, Ok(one_category("fast")));
        session.finish_load(slow, Ok(one_category("slow")));

        assert_eq!(session.phase(), &GamePhase::Ready);
        assert_eq!(session.board().unwrap().categories()[0].title, "slow");
    }

    #[test]
    fn failure_discards_board_and_surfaces_error() {
        let mut source = MemorySource::with_categories(6, 5);
        source.failing = Some(4);
        let mut session = GameSession::new();
        let first = session.begin_load();
        session.finish_load(first, Ok(one_category("old")));

        let ticket = session.begin_load();
        let result = setup_board(&source, &mut rng(8), &BoardConfig::default())
            .now_or_never()
            .unwrap();
        session.finish_load(ticket, result);

        assert_eq!(
            session.phase(),
            &GamePhase::Failed(FetchError::Network("connection reset".to_string()))
        );
        assert!(session.board().is_none());
        assert_eq!(session.reveal(CellPos::new(0, 0)), RevealOutcome::NoChange);
    }

    #[test]
    fn clicks_before_any_board_are_ignored() {
        let mut session = GameSession::new();

        assert_eq!(session.reveal(CellPos::new(0, 0)), RevealOutcome::NoChange);
        assert_eq!(session.phase(), &GamePhase::Idle);
    }
}
