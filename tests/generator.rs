mod common;
use common::*;

#[cfg(test)]
mod generator
{
    use std::collections::HashSet;

    use super::*;
    use tetris_stack::prelude::*;

    #[test]
    fn ids_start_at_zero_and_increase()
    {
        let _setup = setup::setup();
        let mut generator = Generator::new();
        assert_eq!(generator.next_id(), 0);

        let ids: Vec<u32> = (0..50).map(|_| generator.generate().id()).collect();
        assert_eq!(ids, (0..50).collect::<Vec<u32>>());
        assert_eq!(generator.next_id(), 50);
    }

    #[test]
    fn seeded_is_reproducible()
    {
        let _setup = setup::setup();
        let mut a = Generator::seeded(42);
        let mut b = Generator::seeded(42);

        let shapes_a: Vec<Shape> = (0..32).map(|_| a.generate().shape()).collect();
        let shapes_b: Vec<Shape> = (0..32).map(|_| b.generate().shape()).collect();
        assert_eq!(shapes_a, shapes_b);
    }

    #[test]
    fn every_shape_is_dealt()
    {
        let _setup = setup::setup();
        let mut generator = Generator::seeded(7);

        let seen: HashSet<Shape> = (0..400).map(|_| generator.generate().shape()).collect();
        assert_eq!(seen.len(), Shape::COUNT);
        for shape in Shape::all()
        {
            assert!(seen.contains(&shape), "{} was never dealt", shape);
        }
    }

    #[test]
    fn display()
    {
        let _setup = setup::setup();
        assert_eq!(Piece::new(Shape::T, 3).to_string(), "[T 3]");
        assert_eq!(Piece::new(Shape::I, 0).to_string(), "[I 0]");
        assert_eq!(Shape::all().map(|s| s.to_string()), ["I", "O", "T", "L"]);
    }
}
