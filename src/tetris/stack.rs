use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// A fixed-capacity LIFO.
///
/// Positions are counted down from the top: position 0 is the most recently pushed item.
pub struct Stack<T, const N: usize>
{
    items: ArrayVec<T, N>,
}

impl<T, const N: usize> Default for Stack<T, N>
{
    fn default() -> Self
    {
        Stack::new()
    }
}

impl<T, const N: usize> Stack<T, N>
{
    /// Creates an empty stack.
    pub fn new() -> Self
    {
        Stack { items: ArrayVec::new() }
    }

    pub fn capacity(&self) -> usize
    {
        N
    }

    /// Mutable access to the item `position` places below the top.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T>
    {
        let index = self.index(position)?;
        self.items.get_mut(index)
    }

    pub fn is_empty(&self) -> bool
    {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool
    {
        self.items.is_full()
    }

    /// Iterates from the top down to the base.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_
    {
        self.items.iter().rev()
    }

    pub fn len(&self) -> usize
    {
        self.items.len()
    }

    /// Looks at the item `position` places below the top without removing it.
    pub fn peek_at(&self, position: usize) -> Option<&T>
    {
        let index = self.index(position)?;
        self.items.get(index)
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T>
    {
        self.items
            .pop()
            .ok_or_else(|| Error::new(Kind::StackEmpty, "There are no pieces in reserve.".into()))
    }

    /// Places an item on top. A full stack rejects the item and is left as it was.
    pub fn push(&mut self, item: T) -> Result<()>
    {
        self.items
            .try_push(item)
            .map_err(|_| Error::new(Kind::StackFull, format!("The reserve already holds {} pieces.", N)))
    }

    /// Overwrites the item `position` places below the top, returning the one it replaced.
    ///
    /// Out of range positions leave the stack untouched and give back `None`.
    pub fn replace_at(&mut self, position: usize, item: T) -> Option<T>
    {
        self.get_mut(position).map(|current| std::mem::replace(current, item))
    }

    /// Turns a position from the top into an index into the backing storage.
    fn index(&self, position: usize) -> Option<usize>
    {
        self.items.len().checked_sub(position)?.checked_sub(1)
    }
}
