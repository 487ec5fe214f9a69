use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::prelude::*;

mod outcome;
mod printers;

pub use outcome::Outcome;

use super::consts::*;

#[derive(Clone, Debug)]
/// A session: the upcoming pieces, the reserve, and the generator that refills them.
///
/// Every action either succeeds and describes what moved, or fails and leaves the session exactly as it was,
/// including the id counter.
pub struct Game
{
    /// Deals every piece in the session, so ids are unique across the queue and the reserve.
    generator: Generator,

    /// The upcoming pieces; topped back up after each action that takes from it.
    queue: Queue<Piece, QUEUE_CAPACITY>,

    /// Pieces held back by the player. Never refilled automatically.
    reserve: Stack<Piece, RESERVE_CAPACITY>,
}

impl Game
{
    /// Starts a session with a full queue and an empty reserve.
    pub fn new(generator: Generator) -> Result<Game>
    {
        let mut game = Game {
            generator,
            queue: Queue::new(),
            reserve: Stack::new(),
        };

        while !game.queue.is_full()
        {
            game.draw()?;
        }

        log::debug!("dealt the opening queue: {}", game.queue.iter().join(" "));
        Ok(game)
    }

    /// Resumes a session from existing containers, as they are.
    ///
    /// The queue is not topped up here; the next consuming action refills it one piece at a time.
    pub fn from_parts(generator: Generator, queue: Queue<Piece, QUEUE_CAPACITY>, reserve: Stack<Piece, RESERVE_CAPACITY>) -> Game
    {
        Game { generator, queue, reserve }
    }

    pub fn generator(&self) -> &Generator
    {
        &self.generator
    }

    pub fn queue(&self) -> &Queue<Piece, QUEUE_CAPACITY>
    {
        &self.queue
    }

    pub fn reserve(&self) -> &Stack<Piece, RESERVE_CAPACITY>
    {
        &self.reserve
    }
}

impl Game
{
    /// Plays the piece at the front of the queue and draws its replacement.
    pub fn play(&mut self) -> Result<Outcome>
    {
        let piece = self.queue.dequeue()?;

        // A slot was just freed, so the draw cannot find the queue full.
        let drawn = self.draw().map_err(Error::invariant)?;

        log::debug!("played {piece}, drew {drawn}");
        Ok(Outcome::Played { piece, drawn })
    }

    /// Moves the piece at the front of the queue into the reserve and draws its replacement.
    pub fn reserve_current(&mut self) -> Result<Outcome>
    {
        if self.reserve.is_full()
        {
            return Err(Error::new(Kind::StackFull, format!("The reserve already holds {} pieces.", RESERVE_CAPACITY)));
        }

        let piece = self.queue.dequeue()?;
        let reserved = piece.clone();
        self.reserve.push(piece).map_err(Error::invariant)?;
        let drawn = self.draw().map_err(Error::invariant)?;

        log::debug!("reserved {reserved}, drew {drawn}");
        Ok(Outcome::Reserved { piece: reserved, drawn })
    }

    /// Exchanges the front of the queue with the top of the reserve.
    pub fn swap_current(&mut self) -> Result<Outcome>
    {
        if self.queue.is_empty()
        {
            return Err(Error::new(Kind::QueueEmpty, "There is no current piece to swap.".into()));
        }
        if self.reserve.is_empty()
        {
            return Err(Error::new(Kind::StackEmpty, "There is no reserved piece to swap.".into()));
        }

        let (Some(front), Some(top)) = (self.queue.get_mut(0), self.reserve.get_mut(0))
        else
        {
            return Err(Error::invariant(Error::empty(Kind::InternalError)));
        };
        std::mem::swap(front, top);

        let (queued, reserved) = (front.clone(), top.clone());
        log::debug!("swapped: {queued} is current, {reserved} is reserved");
        Ok(Outcome::Swapped { queued, reserved })
    }

    /// Exchanges the first three queued pieces with the top three reserved pieces.
    ///
    /// Queue position `i` trades places with the piece `i` below the top of the reserve, so the reserve's top lands at
    /// the front of the queue and the front of the queue lands on top of the reserve. Neither side is reversed.
    pub fn swap_triple(&mut self) -> Result<Outcome>
    {
        let (queued, reserved) = (self.queue.len(), self.reserve.len());
        if queued < TRIPLE || reserved < TRIPLE
        {
            return Err(Error::insufficient(TRIPLE, queued, reserved));
        }

        for i in 0..TRIPLE
        {
            let (Some(front), Some(top)) = (self.queue.get_mut(i), self.reserve.get_mut(i))
            else
            {
                return Err(Error::invariant(Error::empty(Kind::InternalError)));
            };
            std::mem::swap(front, top);
        }

        let queued: ArrayVec<Piece, TRIPLE> = self.queue.iter().take(TRIPLE).cloned().collect();
        let reserved: ArrayVec<Piece, TRIPLE> = self.reserve.iter().take(TRIPLE).cloned().collect();

        log::debug!("swapped three: {} are current, {} are reserved", queued.iter().join(" "), reserved.iter().join(" "));
        Ok(Outcome::TripleSwapped { queued, reserved })
    }

    /// Takes the top piece off the reserve and plays it. The reserve is not refilled.
    pub fn use_reserved(&mut self) -> Result<Outcome>
    {
        let piece = self.reserve.pop()?;

        log::debug!("used reserved {piece}");
        Ok(Outcome::Used { piece })
    }
}

impl Game
{
    /// Generates a piece onto the back of the queue, returning a copy of it for reporting.
    ///
    /// Checks for room first so a full queue never costs an id.
    fn draw(&mut self) -> Result<Piece>
    {
        if self.queue.is_full()
        {
            return Err(Error::new(Kind::QueueFull, format!("The queue already holds {} pieces.", QUEUE_CAPACITY)));
        }

        let piece = self.generator.generate();
        self.queue.enqueue(piece.clone())?;
        Ok(piece)
    }
}
