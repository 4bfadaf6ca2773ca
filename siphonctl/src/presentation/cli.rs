use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "siphonctl CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream a source image through the transform device into an output file
    Dump {
        source: PathBuf,
        dest: PathBuf,

        /// serial device path
        #[arg(long, default_value = "/dev/ttyS0")]
        port: String,

        /// baud rate
        #[arg(long, default_value_t = 115_200)]
        baud: u32,

        /// byte offset into the source, decimal or 0x-prefixed hex
        #[arg(long, default_value = "0")]
        offset: String,

        /// bytes per chunk
        #[arg(long = "chunk-size", default_value_t = siphon_core::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// stop after this many chunks (default: run to end-of-file)
        #[arg(long)]
        limit: Option<u64>,

        /// swap the serial backend for an in-memory echo channel (no hardware)
        #[arg(long)]
        loopback: bool,

        /// print run statistics as JSON on stdout
        #[arg(long = "stats-json")]
        stats_json: bool,
    },

    /// List serial devices visible on this host
    Ports,
}
