pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use siphon_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Dump {
            source,
            dest,
            port,
            baud,
            offset,
            chunk_size,
            limit,
            loopback,
            stats_json,
        } => handlers::handle_dump(
            source, dest, port, baud, offset, chunk_size, limit, loopback, stats_json,
        ),
        Commands::Ports => handlers::handle_ports(),
    }
}
