pub(crate) mod error;
pub(crate) mod menu;
pub mod tetris;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        error::{Error, Kind, Result},
        menu::{Action, Menu, MenuOptions},
        tetris::*,
    };
}
