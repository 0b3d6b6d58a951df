use anyhow::{bail, Result};
use log::{info, warn};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    mmove::Move,
    parsers::notation::CoordMove,
    piece::Colour,
    position::{movegen::MoveList, square::Square, Position},
    search::{SearchBuilder, SearchHandle, SearchStatus, Strategy},
};

/// Who chooses the moves for one colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum Player {
    Human,
    Engine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub white: Player,
    pub black: Player,
    pub strategy: Strategy,
    pub depth: u32,
    /// Fixes every random choice the engine makes.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: Player::Human,
            black: Player::Engine,
            strategy: Strategy::Best,
            depth: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn player(&self, colour: Colour) -> Player {
        match colour {
            Colour::White => self.white,
            Colour::Black => self.black,
        }
    }
}

/// What a click on the board did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Click {
    /// The square is now the start of the next move.
    Selected(Square),
    /// The selected square was clicked again.
    Cleared,
    Moved(Move),
}

/// A game in progress: the position, the moves it allows and whoever is
/// thinking about the next one.
pub struct Game {
    config: GameConfig,
    pos: Position,
    valid_moves: MoveList,
    selected: Option<Square>,
    search: Option<SearchHandle>,
    rng: ChaCha8Rng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(config, Position::default())
    }

    pub fn from_position(config: GameConfig, pos: Position) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let valid_moves = pos.valid_moves();

        Self {
            config,
            pos,
            valid_moves,
            selected: None,
            search: None,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    /// Generated moves starting on `src`.
    pub fn moves_from(&self, src: Square) -> impl Iterator<Item = &Move> + '_ {
        self.valid_moves.iter().filter(move |m| m.src == src)
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn is_human_turn(&self) -> bool {
        self.config.player(self.pos.to_play()) == Player::Human
    }

    /// The side to move has nothing to play.
    ///
    /// Checkmate and stalemate are not told apart, and a side whose king has
    /// been taken plays on while it has other pieces.
    pub fn is_over(&self) -> bool {
        self.valid_moves.is_empty()
    }

    pub fn is_thinking(&self) -> bool {
        self.search.is_some()
    }

    pub fn move_log_text(&self) -> Vec<String> {
        self.pos.move_log_text()
    }

    /// Play `src` to `dst` if it is one of the generated moves.
    pub fn try_move(&mut self, src: Square, dst: Square) -> Result<Move> {
        let Some(attempt) = Move::from_board(src, dst, self.pos.board()) else {
            warn!("Rejected {src}{dst}: no piece on {src}");
            bail!("No piece on {src}");
        };

        let Some(m) = self.valid_moves.iter().find(|m| **m == attempt).copied() else {
            warn!("Rejected {attempt:?}: not a valid move");
            bail!("{attempt} is not a valid move");
        };

        self.apply(m);

        Ok(m)
    }

    /// Play a move typed as text, e.g. `e2e4`.
    pub fn try_text_move(&mut self, text: &str) -> Result<Move> {
        let CoordMove { src, dst } = CoordMove::from_text(text)?;

        self.try_move(src, dst)
    }

    /// Select squares one click at a time. The second click completes a move
    /// when it forms a valid one, otherwise it becomes the new selection.
    pub fn click(&mut self, sq: Square) -> Click {
        if self.selected == Some(sq) {
            self.selected = None;
            return Click::Cleared;
        }

        if let Some(src) = self.selected.take() {
            if self.is_human_turn() && !self.is_over() {
                if let Ok(m) = self.try_move(src, sq) {
                    return Click::Moved(m);
                }
            }
        }

        self.selected = Some(sq);
        Click::Selected(sq)
    }

    /// Take back the last move, abandoning any search in progress.
    pub fn undo(&mut self) -> Option<Move> {
        self.cancel_search();
        self.selected = None;

        let m = self.pos.undo_move()?;
        info!("Undo {m}");
        self.valid_moves = self.pos.valid_moves();

        Some(m)
    }

    /// Start again from the initial position.
    pub fn new_game(&mut self) {
        self.cancel_search();
        info!("New game");

        self.pos = Position::default();
        self.valid_moves = self.pos.valid_moves();
        self.selected = None;
    }

    /// Advance the engine without blocking. Starts a search when it is the
    /// engine's turn and returns the move once one has been played.
    pub fn poll_engine(&mut self) -> Option<Move> {
        if !self.start_search() {
            return None;
        }

        let answer = match self.search.as_ref()?.try_result() {
            SearchStatus::Thinking => return None,
            SearchStatus::Done(m) => m,
        };
        self.search = None;

        self.finish_engine_move(answer)
    }

    /// Like [`Game::poll_engine`], but waits for the search to answer.
    pub fn wait_engine(&mut self) -> Option<Move> {
        if !self.start_search() {
            return None;
        }

        let answer = self.search.take()?.wait();

        self.finish_engine_move(answer)
    }

    /// True when a search is running for the side to move.
    fn start_search(&mut self) -> bool {
        if self.is_human_turn() || self.is_over() {
            return false;
        }

        if self.search.is_none() {
            let seed = self
                .config
                .seed
                .map(|s| s.wrapping_add(self.pos.move_log().len() as u64));

            info!(
                "Engine thinking for {:?} ({:?}, depth {})",
                self.pos.to_play(),
                self.config.strategy,
                self.config.depth
            );

            self.search = Some(
                SearchBuilder::new(self.pos.clone())
                    .with_strategy(self.config.strategy)
                    .with_depth(self.config.depth)
                    .with_seed(seed)
                    .build()
                    .spawn(self.valid_moves.clone()),
            );
        }

        true
    }

    fn finish_engine_move(&mut self, answer: Option<Move>) -> Option<Move> {
        let m = match answer {
            Some(m) if self.valid_moves.contains(&m) => m,
            _ => {
                warn!("Engine gave no move, playing a random one");
                *self.valid_moves.choose(&mut self.rng)?
            }
        };

        self.apply(m);

        Some(m)
    }

    fn cancel_search(&mut self) {
        if let Some(search) = self.search.take() {
            warn!("Abandoning engine search");
            search.cancel();
        }
    }

    fn apply(&mut self, m: Move) {
        info!("{:?} plays {m}", self.pos.to_play());

        self.pos.make_move(m);
        self.valid_moves = self.pos.valid_moves();
        self.selected = None;
    }
}
