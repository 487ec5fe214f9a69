use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::{prelude::*, tetris::consts::TRIPLE};

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a successful action moved.
///
/// Pieces named here are snapshots for reporting; the live pieces stay wherever the action put them.
pub enum Outcome
{
    Played
    {
        piece: Piece,
        drawn: Piece,
    },
    Reserved
    {
        piece: Piece,
        drawn: Piece,
    },
    Swapped
    {
        /// Now at the front of the queue.
        queued:   Piece,
        /// Now on top of the reserve.
        reserved: Piece,
    },
    TripleSwapped
    {
        /// The front of the queue, front to back.
        queued:   ArrayVec<Piece, TRIPLE>,
        /// The top of the reserve, top down.
        reserved: ArrayVec<Piece, TRIPLE>,
    },
    Used
    {
        piece: Piece,
    },
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Played { piece, drawn } => write!(f, "You played {}. {} joins the queue.", piece, drawn),
            | Self::Reserved { piece, drawn } => write!(f, "{} moved to the reserve. {} joins the queue.", piece, drawn),
            | Self::Swapped { queued, reserved } =>
            {
                write!(f, "{} is now current, {} is now reserved.", queued, reserved)
            }
            | Self::TripleSwapped { queued, reserved } => write!(
                f,
                "{} are now current, {} are now reserved.",
                queued.iter().join(" "),
                reserved.iter().join(" ")
            ),
            | Self::Used { piece } => write!(f, "You used reserved piece {}.", piece),
        }
    }
}
