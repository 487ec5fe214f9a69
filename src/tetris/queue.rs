use crate::prelude::*;

#[derive(Clone, Debug)]
/// A fixed-capacity circular FIFO.
///
/// Logical position `k` (0 is the front) lives in physical slot `(head + k) % N`, so enqueueing and dequeueing
/// never shift the stored items.
pub struct Queue<T, const N: usize>
{
    slots: [Option<T>; N],
    head:  usize,
    len:   usize,
}

impl<T, const N: usize> Default for Queue<T, N>
{
    fn default() -> Self
    {
        Queue::new()
    }
}

impl<T, const N: usize> Queue<T, N>
{
    /// Creates an empty queue.
    pub fn new() -> Self
    {
        Queue {
            slots: std::array::from_fn(|_| None),
            head:  0,
            len:   0,
        }
    }

    pub fn capacity(&self) -> usize
    {
        N
    }

    /// Removes and returns the item at the front.
    pub fn dequeue(&mut self) -> Result<T>
    {
        if self.is_empty()
        {
            return Err(Error::new(Kind::QueueEmpty, "There are no pieces in the queue.".into()));
        }

        let Some(item) = self.slots[self.head].take()
        else
        {
            return Err(Error::invariant(Error::new(Kind::QueueEmpty, format!("Slot {} at the front was vacant.", self.head))));
        };

        self.head = (self.head + 1) % N;
        self.len -= 1;
        Ok(item)
    }

    /// Appends an item at the back. A full queue rejects the item and is left as it was.
    pub fn enqueue(&mut self, item: T) -> Result<()>
    {
        if self.is_full()
        {
            return Err(Error::new(Kind::QueueFull, format!("The queue already holds {} pieces.", N)));
        }

        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Mutable access to the item at a logical position, for exchanging it in place.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T>
    {
        if position >= self.len
        {
            return None;
        }

        let slot = self.slot(position);
        self.slots[slot].as_mut()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    pub fn is_full(&self) -> bool
    {
        self.len == N
    }

    /// Iterates from the front to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_
    {
        (0..self.len).filter_map(move |k| {
            let item = self.slots[self.slot(k)].as_ref();
            debug_assert!(item.is_some(), "slot {} inside the queue was vacant", self.slot(k));
            item
        })
    }

    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Looks at the item `position` places behind the front without removing it.
    pub fn peek_at(&self, position: usize) -> Option<&T>
    {
        if position >= self.len
        {
            return None;
        }

        self.slots[self.slot(position)].as_ref()
    }

    /// Overwrites the item at a logical position, returning the one it replaced.
    ///
    /// Out of range positions leave the queue untouched and give back `None`.
    pub fn replace_at(&mut self, position: usize, item: T) -> Option<T>
    {
        self.get_mut(position).map(|current| std::mem::replace(current, item))
    }

    /// Maps a logical position onto its physical slot. Only valid for `position < N`.
    fn slot(&self, position: usize) -> usize
    {
        (self.head + position) % N
    }
}
