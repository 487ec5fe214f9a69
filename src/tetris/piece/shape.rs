#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The tetromino shapes a generated piece can take.
pub enum Shape
{
    I = 0,
    O = 1,
    T = 2,
    L = 3,
}

impl std::fmt::Display for Shape
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::I => "I",
            | Self::O => "O",
            | Self::T => "T",
            | Self::L => "L",
        };
        write!(f, "{name}")
    }
}

impl Shape
{
    /// The number of distinct shapes.
    pub const COUNT: usize = 4;

    /// Returns the shapes in discriminant order.
    pub fn all() -> [Shape; Shape::COUNT]
    {
        [Self::I, Self::O, Self::T, Self::L]
    }
}
