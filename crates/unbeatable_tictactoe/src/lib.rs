//! Tic-tac-toe move engine built on the classic blocking/forking heuristic.
//!
//! The engine owns a 3×3 grid and picks moves for the automated player
//! through a fixed priority chain: immediate win, own fork, block, fork
//! block, center, opposite corner, empty corner, random. It has no notion
//! of rendering or input devices; a host translates gestures into [`Cell`]
//! coordinates and calls into the engine.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Cell, Engine};
//!
//! let mut engine = Engine::new();
//! assert!(engine.record_human_move(Cell::CENTER));
//! let reply = engine.compute_cpu_move();
//! assert!(reply.is_some());
//! assert!(!engine.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod lines;
mod rules;
mod types;

pub use cell::Cell;
pub use engine::Engine;
pub use lines::{LINES, Line, WinLines};
pub use rules::{check_winner, completes_line, is_fork};
pub use types::{Board, Player, Square};
