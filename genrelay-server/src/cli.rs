use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "genrelay",
    about = "genrelay - authenticated relay for generative model calls",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, env = "GENRELAY_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    #[arg(short, long, env = "GENRELAY_PORT", default_value = "8045", global = true)]
    pub port: u16,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[arg(short, long, env = "GENRELAY_CONFIG", global = true, help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the relay server (default if no command specified)")]
    Serve,

    #[command(about = "Wrap raw 16-bit little-endian PCM in a WAVE container")]
    EncodeWav {
        #[arg(short, long, help = "Raw s16le PCM input file")]
        input: PathBuf,

        #[arg(short, long, help = "WAVE output file")]
        output: PathBuf,

        #[arg(long, default_value = "24000")]
        sample_rate: u32,

        #[arg(long, default_value = "1")]
        channels: u16,

        #[arg(long, help = "Encode only the first N frames")]
        frames: Option<usize>,
    },
}
