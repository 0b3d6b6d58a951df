use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, TryRecvError},
        Arc,
    },
    thread,
};

use log::{debug, warn};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    mmove::Move,
    position::{
        eval::Evaluator,
        movegen::{MoveGen, MoveList},
        Position,
    },
};

/// How the engine picks its move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Any move from the list.
    Random,
    /// Material negamax to a fixed depth.
    #[default]
    Best,
}

pub struct Search {
    pos: Position,
    depth: u32,
    strategy: Strategy,
    rng: ChaCha8Rng,
    nodes: u64,
    should_exit: Arc<AtomicBool>,
}

const INF: i32 = i32::MAX - 2;

impl Search {
    /// Pick one of `moves`, which must have been generated for the search's
    /// position. `None` when `moves` is empty or the search was cancelled.
    pub fn go(mut self, moves: &[Move]) -> Option<Move> {
        match self.strategy {
            Strategy::Random => moves.choose(&mut self.rng).copied(),
            Strategy::Best => self.best_move(moves),
        }
    }

    /// Run [`Search::go`] on a worker thread.
    pub fn spawn(self, moves: MoveList) -> SearchHandle {
        let (tx, rx) = mpsc::channel();
        let should_exit = self.should_exit.clone();

        thread::spawn(move || {
            // The receiver is gone if the search was abandoned.
            let _ = tx.send(self.go(&moves));
        });

        SearchHandle { rx, should_exit }
    }

    fn cancelled(&self) -> bool {
        self.should_exit.load(Ordering::Relaxed)
    }

    fn best_move(&mut self, moves: &[Move]) -> Option<Move> {
        let mut root: Vec<Move> = moves.to_vec();
        let mut best = None;
        let mut alpha = -INF;

        // Equal scores go to whichever move comes first.
        root.shuffle(&mut self.rng);
        self.nodes = 0;

        for m in root {
            self.pos.make_move(m);
            let eval = -self.search(-INF, -alpha, self.depth.saturating_sub(1));
            self.pos.undo_move();

            if self.cancelled() {
                warn!("Search cancelled after {} nodes", self.nodes);
                return None;
            }

            if best.is_none() || eval > alpha {
                alpha = eval;
                best = Some(m);
            }
        }

        debug!(
            "depth {} best {} score {} nodes {}",
            self.depth,
            best.map(|m| m.chess_notation()).unwrap_or_default(),
            alpha,
            self.nodes
        );

        best
    }

    fn search(&mut self, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.nodes += 1;

        if depth == 0 || self.cancelled() {
            return Evaluator::eval_for_mover(&self.pos);
        }

        let mmoves = MoveGen::new(&self.pos).gen();

        // Nothing left to move.
        if mmoves.is_empty() {
            return -INF;
        }

        for m in mmoves {
            self.pos.make_move(m);
            let eval = -self.search(-beta, -alpha, depth - 1);
            self.pos.undo_move();

            if eval >= beta {
                return beta;
            }

            if eval > alpha {
                alpha = eval;
            }
        }

        alpha
    }
}

pub struct SearchBuilder {
    srch: Search,
    seed: Option<u64>,
}

impl SearchBuilder {
    pub fn new(pos: Position) -> Self {
        Self {
            srch: Search {
                pos,
                depth: 2,
                strategy: Strategy::default(),
                rng: ChaCha8Rng::seed_from_u64(0),
                nodes: 0,
                should_exit: Arc::new(AtomicBool::new(false)),
            },
            seed: None,
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.srch.depth = depth.max(1);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.srch.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(mut self) -> Search {
        self.srch.rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        self.srch
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchStatus {
    Thinking,
    Done(Option<Move>),
}

/// The caller's end of a search running on another thread.
pub struct SearchHandle {
    rx: mpsc::Receiver<Option<Move>>,
    should_exit: Arc<AtomicBool>,
}

impl SearchHandle {
    pub fn try_result(&self) -> SearchStatus {
        match self.rx.try_recv() {
            Ok(m) => SearchStatus::Done(m),
            Err(TryRecvError::Empty) => SearchStatus::Thinking,
            Err(TryRecvError::Disconnected) => {
                warn!("Search thread went away without a move");
                SearchStatus::Done(None)
            }
        }
    }

    /// Block until the search answers.
    pub fn wait(self) -> Option<Move> {
        self.rx.recv().unwrap_or_else(|_| {
            warn!("Search thread went away without a move");
            None
        })
    }

    pub fn cancel(self) {
        debug!("Cancelling search");
        self.should_exit.store(true, Ordering::Relaxed);
    }
}
