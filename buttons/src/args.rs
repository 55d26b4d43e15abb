use clap::Parser;

/// Two triangles: 1 toggles transparency, 2 recolours, 3 and 4 move, space shows wireframe
#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// Seed for the colour changes, taken from the clock when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}
