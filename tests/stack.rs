mod common;
use common::*;

#[cfg(test)]
mod stack
{
    use super::*;
    use tetris_stack::prelude::*;

    fn contents(stack: &Stack<u32, 3>) -> Vec<u32>
    {
        stack.iter().copied().collect()
    }

    #[test]
    fn starts_empty()
    {
        let _setup = setup::setup();
        let stack: Stack<u32, 3> = Stack::new();

        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 3);
        assert_eq!(stack.peek_at(0), None);
    }

    #[test]
    fn lifo()
    {
        let _setup = setup::setup();
        let mut stack: Stack<u32, 3> = Stack::new();

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.pop().unwrap(), 2);
        stack.push(3).unwrap();
        stack.push(4).unwrap();
        assert!(stack.is_full());

        assert_eq!(stack.pop().unwrap(), 4);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn push_full()
    {
        let _setup = setup::setup();
        let mut stack: Stack<u32, 3> = Stack::new();
        for n in 0..3
        {
            stack.push(n).unwrap();
        }

        let err = stack.push(9).unwrap_err();
        assert_eq!(err.kind, Kind::StackFull);
        assert!(!err.fatal());
        assert_eq!(contents(&stack), vec![2, 1, 0]);
    }

    #[test]
    fn pop_empty()
    {
        let _setup = setup::setup();
        let mut stack: Stack<u32, 3> = Stack::new();

        assert_eq!(stack.pop().unwrap_err().kind, Kind::StackEmpty);
        assert_eq!(stack.len(), 0);

        stack.push(5).unwrap();
        assert_eq!(stack.pop().unwrap(), 5);
        assert_eq!(stack.pop().unwrap_err().kind, Kind::StackEmpty);
    }

    #[test]
    fn positions_count_down_from_the_top()
    {
        let _setup = setup::setup();
        let mut stack: Stack<u32, 3> = Stack::new();
        stack.push(10).unwrap();
        stack.push(11).unwrap();
        stack.push(12).unwrap();

        assert_eq!(stack.peek_at(0), Some(&12));
        assert_eq!(stack.peek_at(2), Some(&10));
        assert_eq!(stack.peek_at(3), None);

        assert_eq!(stack.replace_at(1, 21), Some(11));
        assert_eq!(stack.replace_at(3, 99), None);
        assert_eq!(contents(&stack), vec![12, 21, 10]);

        if let Some(top) = stack.get_mut(0)
        {
            *top = 32;
        }
        assert_eq!(stack.pop().unwrap(), 32);
        assert_eq!(stack.peek_at(0), Some(&21));
    }

    #[test]
    fn far_out_of_range_positions()
    {
        let _setup = setup::setup();
        let mut stack: Stack<u32, 3> = Stack::new();

        assert_eq!(stack.peek_at(usize::MAX), None);
        assert_eq!(stack.replace_at(usize::MAX, 9), None);
        assert!(stack.is_empty());

        stack.push(1).unwrap();
        assert_eq!(stack.peek_at(usize::MAX), None);
        assert_eq!(stack.get_mut(usize::MAX), None);
        assert_eq!(stack.replace_at(usize::MAX, 9), None);
        assert_eq!(contents(&stack), vec![1]);
    }
}
