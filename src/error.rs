pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents an application error in the piece simulator.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind
{
    InsufficientItems
    {
        required: usize,
        queue:    usize,
        stack:    usize,
    },
    InternalError,
    InvalidOption,
    IoError,
    LoggerError,
    QueueEmpty,
    QueueFull,
    StackEmpty,
    StackFull,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let kind = match self.kind
        {
            | Kind::InsufficientItems { .. } => "InsufficientItems".to_owned(),
            | other => format!("{:?}", other),
        };
        write!(f, "{}{}{}", kind, Error::spacer_no_newline(&self.msg), self.msg)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error {
            kind: Kind::IoError,
            msg:  value.to_string(),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for Error
{
    fn from(value: flexi_logger::FlexiLoggerError) -> Self
    {
        Error {
            kind: Kind::LoggerError,
            msg:  value.to_string(),
        }
    }
}

impl Error
{
    /// Chains an error into an error stack.
    pub fn chain(&self, base: Error) -> Error
    {
        let self_as = &format!("{}", self);
        let msg = format!("{}{}{}", base.msg, Error::spacer(self_as), self_as);
        Error::new(base.kind, msg)
    }

    /// Creates an error with no message.
    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, "".into())
    }

    /// Whether this error is fatal or recoverable.
    pub fn fatal(&self) -> bool
    {
        matches!(self.kind, Kind::InternalError | Kind::IoError)
    }

    /// Creates the error for a multi-piece action that lacks pieces on either side.
    pub fn insufficient(required: usize, queue: usize, stack: usize) -> Error
    {
        let msg = format!("Need {} pieces on each side (queue has {}, reserve has {}).", required, queue, stack);
        Error::new(Kind::InsufficientItems { required, queue, stack }, msg)
    }

    /// Wraps an error that should be unreachable if the containers keep their invariants.
    pub fn invariant(err: Error) -> Error
    {
        err.chain(Error::new(Kind::InternalError, "A container invariant was broken.".into()))
    }

    /// Creates a new error.
    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// Gives the message changing spacer for the given string.
    fn spacer(s: &str) -> &'static str
    {
        if s.is_empty()
        {
            ""
        }
        else
        {
            "\n\tdue to "
        }
    }

    /// An inline spacer.
    fn spacer_no_newline(s: &str) -> &'static str
    {
        if s.is_empty()
        {
            ""
        }
        else
        {
            ": "
        }
    }
}
