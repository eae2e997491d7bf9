//! Line-evaluation predicates used by the move engine.

mod fork;
mod win;

pub use fork::is_fork;
pub use win::{check_winner, completes_line};
