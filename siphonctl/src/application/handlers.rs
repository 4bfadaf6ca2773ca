use serialport::SerialPortType;
use siphon_core::channel::DEFAULT_POLL_TIMEOUT;
use siphon_core::error::Result;
use siphon_core::progress::TermProgress;
use siphon_core::util::num::parse_byte_offset;
use siphon_core::{Backend, PortParams, TransferOptions, open_channel, pump};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn handle_dump(
    source: PathBuf,
    dest: PathBuf,
    port: String,
    baud: u32,
    offset: String,
    chunk_size: usize,
    limit: Option<u64>,
    loopback: bool,
    stats_json: bool,
) -> Result<()> {
    let seek_offset = parse_byte_offset(&offset)?;
    let backend = if loopback {
        tracing::info!("using loopback backend, no device involved");
        Backend::Loopback
    } else {
        Backend::Serial
    };
    let params = PortParams {
        path: port,
        baud_rate: baud,
        poll_timeout: DEFAULT_POLL_TIMEOUT,
    };
    let mut channel = open_channel(backend, params)?;

    let opts = TransferOptions {
        seek_offset,
        chunk_size,
        chunk_limit: limit,
    };
    let stats = pump(channel.as_mut(), &source, &dest, &opts, &mut TermProgress)?;

    if stats_json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        println!("{json}");
    }
    Ok(())
}

pub fn handle_ports() -> Result<()> {
    let ports = serialport::available_ports()?;
    if ports.is_empty() {
        eprintln!("no serial ports found");
        return Ok(());
    }
    for p in ports {
        match p.port_type {
            SerialPortType::UsbPort(usb) => {
                println!("{}  usb {:04x}:{:04x}", p.port_name, usb.vid, usb.pid)
            }
            _ => println!("{}", p.port_name),
        }
    }
    Ok(())
}
