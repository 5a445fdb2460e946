//! Header inspection command
//!
//! Prints the leading bytes of each file and what they identify, to
//! help diagnose why a file was rejected.

use async_trait::async_trait;
use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::input_files;
use crate::io::byte_order::ByteOrder;
use crate::io::candidate::{CandidateFile, LocalFile};
use crate::validation::errors::GuardResult;
use crate::validation::format::ImageFormat;

/// Bytes read for inspection: TIFF header plus first IFD offset
const INSPECT_LEN: usize = 8;

/// Command for inspecting file headers
pub struct InspectCommand {
    input_files: Vec<String>,
}

impl InspectCommand {
    pub fn new(args: &ArgMatches) -> GuardResult<Self> {
        Ok(InspectCommand {
            input_files: input_files(args)?,
        })
    }
}

/// Human-readable description of a file header
pub fn describe_header(header: &[u8]) -> Vec<String> {
    let mut lines = vec![format!("  Header: {}", hex_bytes(header))];

    match ByteOrder::from_header(header) {
        Ok(byte_order) => {
            lines.push(format!("  TIFF byte order: {}", byte_order.name()));
            if header.len() >= INSPECT_LEN {
                let mut offset_bytes = &header[4..INSPECT_LEN];
                if let Ok(offset) = byte_order.create_handler().read_u32(&mut offset_bytes) {
                    lines.push(format!("  First IFD offset: {}", offset));
                }
            }
        }
        Err(e) => {
            lines.push(format!("  TIFF byte order: not detected ({})", e));
            for format in [ImageFormat::Png, ImageFormat::Jpeg] {
                if format.matches_signature(header) {
                    lines.push(format!("  Signature: {}", format.name()));
                }
            }
        }
    }

    lines
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Command for InspectCommand {
    async fn execute(&self) -> GuardResult<bool> {
        for path in &self.input_files {
            let file = LocalFile::with_guessed_type(path);
            let header = file.read_range(0, INSPECT_LEN).await?;

            println!("{}", path);
            println!("  Declared type: {}", file.declared_type());
            println!("  Length read: {} byte(s)", header.len());
            for line in describe_header(&header) {
                println!("{}", line);
            }
        }
        Ok(true)
    }
}
