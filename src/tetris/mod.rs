pub mod game;
pub mod piece;
mod queue;
mod stack;

pub use game::{Game, Outcome};
pub use piece::{Generator, Piece, Shape};
pub use queue::Queue;
pub use stack::Stack;

pub mod consts
{
    /// The number of upcoming pieces visible in the queue.
    pub const QUEUE_CAPACITY: usize = 5;

    /// The number of pieces that can be held in reserve.
    pub const RESERVE_CAPACITY: usize = 3;

    /// The number of pieces exchanged on each side by a triple swap.
    pub const TRIPLE: usize = 3;
}
