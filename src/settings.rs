use std::path::PathBuf;

use anyhow::Result;
use render::{DisplayMode, PaletteStrategy};

use crate::args::{Args, PaletteArg};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no stack specified")]
    NoStackSpecified,
    #[error("snapshot file does not exist: '{0}'")]
    SnapshotNotFound(String),
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. flags are combined into modes.
#[derive(Debug)]
pub struct Settings {
    pub stack: String,
    pub snapshot: PathBuf,
    pub output: Option<PathBuf>,
    pub verbose: u8,
    pub recursive: bool,
    pub mode: DisplayMode,
    pub palette: PaletteStrategy,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.stack.is_empty() {
            return Err(Error::NoStackSpecified.into());
        }

        let snapshot = PathBuf::from(&args.snapshot);
        if !snapshot.exists() {
            return Err(Error::SnapshotNotFound(args.snapshot).into());
        }

        // -K is shorthand for --palette kelly:
        let palette = match (args.kelly, args.palette) {
            (true, _) | (false, PaletteArg::Kelly) => PaletteStrategy::Kelly,
            (false, PaletteArg::Auto) => PaletteStrategy::Auto,
        };

        Ok(Self {
            stack: args.stack,
            snapshot,
            output: args.output.map(PathBuf::from),
            verbose: args.verbose,
            recursive: args.recursive,
            mode: DisplayMode::from_flags(args.colors, args.detailed),
            palette,
        })
    }
}
