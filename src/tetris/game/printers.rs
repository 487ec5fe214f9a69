use itertools::Itertools;

use crate::prelude::*;

impl std::fmt::Display for Game
{
    /// Queue front to back, then the reserve top down, each with its fill counter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let queue = self.queue();
        let reserve = self.reserve();

        writeln!(f, "Queue:   {}   ({}/{})", Game::row(queue.iter()), queue.len(), queue.capacity())?;
        write!(f, "Reserve: {}   ({}/{})", Game::row(reserve.iter()), reserve.len(), reserve.capacity())
    }
}

impl Game
{
    fn row<'a>(mut pieces: impl Iterator<Item = &'a Piece>) -> String
    {
        let row = pieces.join(" ");
        if row.is_empty()
        {
            "(empty)".into()
        }
        else
        {
            row
        }
    }
}
