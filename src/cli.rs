use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(
    name = "gimmef",
    about = "Extract typed values from text with a printf-style format",
    version
)]
pub struct Cli {
    /// Format with %s, %d and %t verbs, e.g. "%d + %d = %d"
    pub format: String,

    /// Strings to scan; one per line from stdin when omitted
    pub inputs: Vec<String>,

    /// Print each result as a JSON array
    #[arg(short, long)]
    pub json: bool,

    /// Only report whether each input matches the format
    #[arg(short, long, conflicts_with = "json")]
    pub check: bool,

    /// Scan inputs sequentially instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log matching details to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
