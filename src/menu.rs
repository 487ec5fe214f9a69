use std::io::{BufRead, Write};

use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct MenuOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long)]
    /// seed for reproducible piece shapes
    pub seed: Option<u64>,
}

impl Default for MenuOptions
{
    fn default() -> Self
    {
        MenuOptions {
            log_level: "info".into(),
            seed:      None,
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The selections offered by the menu, numbered as the player types them.
pub enum Action
{
    Exit        = 0,
    Play        = 1,
    Reserve     = 2,
    UseReserved = 3,
    SwapCurrent = 4,
    SwapTriple  = 5,
}

impl std::fmt::Display for Action
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let label = match self
        {
            | Self::Exit => "Exit",
            | Self::Play => "Play the current piece",
            | Self::Reserve => "Reserve the current piece",
            | Self::UseReserved => "Use a reserved piece",
            | Self::SwapCurrent => "Swap the current piece with the top of the reserve",
            | Self::SwapTriple => "Swap the first three pieces with the three in reserve",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Action
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Ok(n) = s.trim().parse::<u8>()
        else
        {
            return Err(Error::new(Kind::InvalidOption, format!("'{}' is not a number.", s.trim())));
        };

        Action::all()
            .into_iter()
            .find(|action| *action as u8 == n)
            .ok_or_else(|| Error::new(Kind::InvalidOption, format!("{} is not on the menu.", n)))
    }
}

impl Action
{
    /// Returns the actions in menu order, with Exit last.
    pub fn all() -> [Action; 6]
    {
        [
            Self::Play,
            Self::Reserve,
            Self::UseReserved,
            Self::SwapCurrent,
            Self::SwapTriple,
            Self::Exit,
        ]
    }
}

/// Drives a game from numbered selections, one per line.
pub struct Menu
{
    game: Game,
}

impl Menu
{
    /// Creates a menu over a freshly dealt game.
    pub fn new(options: &MenuOptions) -> Result<Self>
    {
        let generator = match options.seed
        {
            | Some(seed) =>
            {
                log::info!("dealing pieces from seed {seed}");
                Generator::seeded(seed)
            }
            | None => Generator::new(),
        };

        Ok(Menu { game: Game::new(generator)? })
    }

    pub fn game(&self) -> &Game
    {
        &self.game
    }

    /// Runs the menu until the player exits or the input ends.
    ///
    /// Recoverable errors are reported on `output` and the menu carries on; fatal ones are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()>
    {
        loop
        {
            self.show(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0
            {
                log::info!("input closed, leaving the menu");
                return self.farewell(&mut output);
            }

            let cmd = line.trim();
            if cmd.is_empty()
            {
                continue;
            }

            if !self.apply(cmd, &mut output)?
            {
                return self.farewell(&mut output);
            }
        }
    }
}

impl Menu
{
    /// Matches the selection to a game action. Returns whether the menu should keep going.
    fn apply<W: Write>(&mut self, cmd: &str, output: &mut W) -> Result<bool>
    {
        let result = cmd.parse::<Action>().and_then(|action| self.perform(action));

        match result
        {
            | Ok(Some(outcome)) =>
            {
                log::debug!("action completed successfully: {cmd}");
                writeln!(output, "\n[OK] {}", outcome)?;
                Ok(true)
            }
            | Ok(None) => Ok(false),
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = Menu::err(output, &err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    Menu::err(output, &err)?;
                    Ok(true)
                }
            },
        }
    }

    /// Prints an error for the player.
    fn err<W: Write>(output: &mut W, err: &Error) -> Result<()>
    {
        writeln!(output, "\n[ERROR] {}", err)?;
        Ok(())
    }

    fn farewell<W: Write>(&self, output: &mut W) -> Result<()>
    {
        writeln!(output, "\nThanks for playing!")?;
        output.flush()?;
        Ok(())
    }

    /// Performs an action, or returns `None` for Exit.
    fn perform(&mut self, action: Action) -> Result<Option<Outcome>>
    {
        let outcome = match action
        {
            | Action::Exit => return Ok(None),
            | Action::Play => self.game.play()?,
            | Action::Reserve => self.game.reserve_current()?,
            | Action::UseReserved => self.game.use_reserved()?,
            | Action::SwapCurrent => self.game.swap_current()?,
            | Action::SwapTriple => self.game.swap_triple()?,
        };
        Ok(Some(outcome))
    }

    /// Prints the game state, the choices, and the prompt.
    fn show<W: Write>(&self, output: &mut W) -> Result<()>
    {
        writeln!(output, "\n{}\n", self.game)?;
        for action in Action::all()
        {
            writeln!(output, "{} - {}", action as u8, action)?;
        }
        write!(output, "> ")?;
        output.flush()?;
        Ok(())
    }
}
