use clap::Parser;

/// Default example frame call, selecting ball detection.
pub const EXAMPLE_COMMAND: &str =
    "-t b -i inputxxx -game xxxxxxxgame -live livexxxx --image_scale 0.5 -v 3 -v3";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command token string selecting the execution unit via `-t <code>`
    #[arg(long, env = "FIELDTRACK_COMMAND", default_value = EXAMPLE_COMMAND)]
    pub command: String,

    /// Frame number to process (negative values are dropped from the call)
    #[arg(long, default_value_t = 1)]
    pub frame: i64,

    /// Free-text annotation attached to the frame
    #[arg(long, default_value = "test info")]
    pub info: String,

    /// Opaque image reference passed to the unit
    #[arg(long, default_value = "test image")]
    pub image: String,

    /// Emit the invocation as a JSON record instead of the raw output string
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
