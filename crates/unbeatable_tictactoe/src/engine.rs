//! The move engine: grid ownership and the move-selection priority chain.

use crate::cell::Cell;
use crate::lines::WinLines;
use crate::rules::{check_winner, completes_line, is_fork};
use crate::types::{Board, Player, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe against the automated player.
///
/// The engine owns the grid, the win-line lookup, and the game-over flag.
/// Its move selection follows a fixed priority chain, first match wins:
///
/// 1. complete an own line (win),
/// 2. create an own fork,
/// 3. block an opponent line, random among candidates,
/// 4. block an opponent fork (see the fork-blocking search below),
/// 5. take the center,
/// 6. take the corner opposite a human corner,
/// 7. take any empty corner,
/// 8. random empty cell.
///
/// Rules 1 and 2 are resolved inside one scan of the empty cells: per
/// cell, a win fires before a fork, but a fork found early in the scan
/// wins over anything found later. Creating an own fork therefore takes
/// priority over blocking, which makes the engine very hard to beat but
/// not strictly unbeatable; see `block_forks` for the other deliberate
/// approximation.
///
/// The randomness of rules 3 and 8 is injectable: [`Engine::with_rng`]
/// accepts any [`Rng`], so tests can seed a [`StdRng`] and get
/// reproducible games.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    board: Board,
    lines: WinLines,
    over: bool,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine for a fresh game, seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an engine over an arbitrary position.
    ///
    /// The game counts as over if the position already has a winner or no
    /// empty cell. Mainly useful for driving the engine from a known
    /// mid-game state.
    pub fn from_position(board: Board) -> Self {
        Self::from_position_with_rng(board, StdRng::from_entropy())
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine for a fresh game with an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            lines: WinLines::new(),
            over: false,
            rng,
        }
    }

    /// Creates an engine over an arbitrary position with an injected
    /// random source.
    pub fn from_position_with_rng(board: Board, rng: R) -> Self {
        let over = check_winner(&board).is_some() || board.is_full();
        Self {
            board,
            lines: WinLines::new(),
            over,
            rng,
        }
    }

    /// Read-only view of the grid, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the game has ended. Monotonic: never resets.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The side with three in a line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// Whether `cell` can still be played. No side effects.
    pub fn is_cell_available(&self, cell: Cell) -> bool {
        self.board.is_empty(cell)
    }

    /// Records the human's move at `cell`.
    ///
    /// Returns true on success. Returns false, leaving the grid untouched,
    /// if the game is over or the cell is occupied. The caller is
    /// responsible for having targeted the right cell; the engine only
    /// validates availability.
    #[instrument(skip(self))]
    pub fn record_human_move(&mut self, cell: Cell) -> bool {
        if self.over || !self.board.is_empty(cell) {
            return false;
        }
        self.board.set(cell, Square::Occupied(Player::Human));
        if check_winner(&self.board).is_some() {
            self.over = true;
        }
        true
    }

    /// Selects, places, and returns the automated player's move.
    ///
    /// Returns `None` without touching the grid when the game is already
    /// over; if the board is full, the game-over flag is set instead of a
    /// mark. Calling again after that stays a no-op.
    #[instrument(skip(self))]
    pub fn compute_cpu_move(&mut self) -> Option<Cell> {
        if self.over {
            return None;
        }
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            self.over = true;
            return None;
        }

        // One scan resolves wins and own forks and collects the cells the
        // human could win or fork with. Scan order is the canonical cell
        // order, which decides ties for the first two rules.
        let mut blocks = Vec::new();
        let mut forks = Vec::new();
        for &cell in &empties {
            if completes_line(cell, Player::Cpu, &self.board, &self.lines) {
                debug!(%cell, "winning move");
                self.over = true;
                return Some(self.place(cell));
            }
            if completes_line(cell, Player::Human, &self.board, &self.lines) {
                blocks.push(cell);
            }
            if is_fork(cell, Player::Human, &self.board, &self.lines) {
                forks.push(cell);
            }
            if is_fork(cell, Player::Cpu, &self.board, &self.lines) {
                debug!(%cell, "fork-creating move");
                return Some(self.place(cell));
            }
        }

        if let Some(&cell) = blocks.choose(&mut self.rng) {
            debug!(%cell, candidates = blocks.len(), "blocking move");
            return Some(self.place(cell));
        }

        if !forks.is_empty() {
            let cell = self.block_forks(&forks);
            debug!(%cell, candidates = forks.len(), "fork-blocking move");
            return Some(self.place(cell));
        }

        if self.board.is_empty(Cell::CENTER) {
            debug!("taking center");
            return Some(self.place(Cell::CENTER));
        }

        if let Some(cell) = self.opposite_corner() {
            debug!(%cell, "taking opposite corner");
            return Some(self.place(cell));
        }

        if let Some(cell) = self.empty_corner() {
            debug!(%cell, "taking empty corner");
            return Some(self.place(cell));
        }

        let cell = empties[self.rng.gen_range(0..empties.len())];
        debug!(%cell, "random move");
        Some(self.place(cell))
    }

    fn place(&mut self, cell: Cell) -> Cell {
        self.board.set(cell, Square::Occupied(Player::Cpu));
        cell
    }

    /// The corner opposite the human's, per the fixed corner scan.
    ///
    /// When the human holds several corners, the last one in
    /// [`Cell::CORNERS`] order decides, not the most recently played.
    fn opposite_corner(&self) -> Option<Cell> {
        let mut human_corner = None;
        for corner in Cell::CORNERS {
            if self.board.get(corner) == Square::Occupied(Player::Human) {
                human_corner = Some(corner);
            }
        }
        let opposite = human_corner?.opposite();
        if self.board.is_empty(opposite) {
            Some(opposite)
        } else {
            None
        }
    }

    fn empty_corner(&self) -> Option<Cell> {
        Cell::CORNERS.into_iter().find(|&c| self.board.is_empty(c))
    }

    /// Picks the cell that defuses the most of the human's fork threats.
    ///
    /// A single candidate is blocked directly. Otherwise every empty cell
    /// is tried on a hypothetical copy of the grid: each fork cell is
    /// re-tested there, and a surviving fork still counts as neutralized
    /// if some follow-up cpu mark would open a winning threat elsewhere,
    /// forcing the human to answer it instead of cashing in the fork. The
    /// first cell leaving no live fork wins; failing that, the first cell
    /// with the fewest live forks.
    fn block_forks(&self, forks: &[Cell]) -> Cell {
        if let [only] = forks {
            return *only;
        }

        let empties = self.board.empty_cells();
        let mut best = empties[0];
        let mut best_residual = usize::MAX;
        for &candidate in &empties {
            let mut hyp = self.board.clone();
            hyp.set(candidate, Square::Occupied(Player::Cpu));

            let mut residual = 0;
            for &fork in forks {
                if is_fork(fork, Player::Human, &hyp, &self.lines)
                    && !self.rescue_exists(&hyp, &empties, candidate, fork)
                {
                    residual += 1;
                }
            }
            if residual == 0 {
                return candidate;
            }
            if residual < best_residual {
                best_residual = residual;
                best = candidate;
            }
        }
        best
    }

    /// Looks one cpu move past `candidate` for a counter-threat.
    ///
    /// True if marking some further empty cell would let the cpu complete
    /// a line on a third cell other than the fork cell itself.
    fn rescue_exists(&self, hyp: &Board, empties: &[Cell], candidate: Cell, fork: Cell) -> bool {
        for &setup in empties {
            if setup == candidate {
                continue;
            }
            let mut rescue = hyp.clone();
            rescue.set(setup, Square::Occupied(Player::Cpu));
            for &threat in empties {
                if threat == candidate || threat == setup || threat == fork {
                    continue;
                }
                if completes_line(threat, Player::Cpu, &rescue, &self.lines) {
                    return true;
                }
            }
        }
        false
    }
}
