use clap::{Parser, ValueEnum};

const CMD_NAME: &str = "dotstack";

/// Palette choices on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteArg {
    /// Evenly spaced hues, one per resource type
    #[default]
    Auto,
    /// Kenneth Kelly's high contrast colors
    Kelly,
}

/// Stores our command-line args format.
#[derive(Parser)]
#[command(name = CMD_NAME, version, about = "Render a heat stack as a graphviz digraph", long_about = None)]
pub struct Args {
    /// Name or id of the stack
    #[arg(value_name = "STACK")]
    pub stack: String,

    /// Stack snapshot to read stacks and resources from
    #[arg(short, long, value_name = "FILE")]
    #[arg(env = "DOTSTACK_SNAPSHOT")]
    pub snapshot: String,

    /// Descend into nested stacks
    #[arg(short, long)]
    pub recursive: bool,

    /// Colorize graph nodes
    #[arg(short = 'C', long)]
    pub colors: bool,

    /// Produce detailed nodes in graph
    #[arg(short = 'D', long)]
    pub detailed: bool,

    /// Color palette for resource types
    #[arg(long, value_enum, default_value_t = PaletteArg::Auto)]
    pub palette: PaletteArg,

    /// Use Kenneth Kelly's high contrast color palette ('--palette kelly')
    #[arg(short = 'K', long, conflicts_with = "palette")]
    pub kelly: bool,

    /// Write the graph to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
