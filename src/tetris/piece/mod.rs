mod generator;
mod shape;

pub use generator::Generator;
pub use shape::Shape;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A piece waiting to be played.
///
/// Pieces have a shape and an id that is unique within a session.
///
/// For example, the fourth piece dealt, if it is a T, is [T 3].
///
/// Pieces are deliberately not `Copy`; moving one between the queue and the reserve moves it.
pub struct Piece
{
    shape: Shape,
    id:    u32,
}

impl Piece
{
    /// Creates a piece. Outside of tests, pieces should come from a `Generator`.
    pub fn new(shape: Shape, id: u32) -> Self
    {
        Piece { shape, id }
    }

    pub fn id(&self) -> u32
    {
        self.id
    }

    pub fn shape(&self) -> Shape
    {
        self.shape
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "[{} {}]", self.shape, self.id)
    }
}
