use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mic-toggle",
    version,
    about = "Toggle microphone capture mute via amixer"
)]
pub struct Cli {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print debug trace lines to stderr
    #[arg(long)]
    pub debug: bool,

    /// Mixer program to run (default: amixer)
    #[arg(long)]
    pub program: Option<String>,

    /// Mixer device passed to -D (default: pulse)
    #[arg(long)]
    pub device: Option<String>,

    /// Mixer control to toggle (default: Capture)
    #[arg(long)]
    pub control: Option<String>,

    /// Read config from this file instead of the default location
    #[arg(long)]
    pub config: Option<String>,

    /// Print config path and exit
    #[arg(long)]
    pub show_config_path: bool,
}
