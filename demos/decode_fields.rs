//! Decodes a binary file made of fixed bit-layout records into CSV.
//!
//!     decode_fields <file> <layout>
//!
//! The layout is a comma separated list of fields: `uN` for an unsigned
//! N-bit field, `sN` for a signed one, `b` for a single flag bit and `align`
//! to skip to the next byte boundary. Records repeat until the file ends.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, bail, Context, Result};
use bitcursor::read_source::ReadSource;
use bitcursor::{BitReader, ByteSource};
use log::{info, warn};

enum Field {
    Unsigned(u32),
    Signed(u32),
    Flag,
    Align,
}

fn parse_layout(layout: &str) -> Result<Vec<Field>> {
    layout
        .split(',')
        .map(|token| {
            let token = token.trim();
            let width = |digits: &str| -> Result<u32> {
                digits
                    .parse::<u32>()
                    .with_context(|| format!("bad field width in {:?}", token))
            };
            Ok(match token {
                "b" => Field::Flag,
                "align" => Field::Align,
                _ if token.starts_with('u') => Field::Unsigned(width(&token[1..])?),
                _ if token.starts_with('s') => Field::Signed(width(&token[1..])?),
                _ => bail!("unknown field {:?}", token),
            })
        })
        .collect()
}

/// Whether a record with this layout moves the reader forward.
fn consumes_bits(layout: &[Field]) -> bool {
    layout.iter().any(|field| match *field {
        Field::Unsigned(n) | Field::Signed(n) => n > 0,
        Field::Flag => true,
        Field::Align => false,
    })
}

fn read_record<S: ByteSource>(reader: &mut BitReader<S>, layout: &[Field]) -> bitcursor::Result<Vec<String>> {
    let mut row = Vec::with_capacity(layout.len());
    for field in layout {
        match *field {
            Field::Unsigned(n) => row.push(reader.read_unsigned(n)?.to_string()),
            Field::Signed(n) => row.push(reader.read_signed(n)?.to_string()),
            Field::Flag => row.push((reader.read_bit()? as u8).to_string()),
            Field::Align => reader.align(),
        }
    }
    Ok(row)
}

fn main() -> Result<()> {
    init_logger()?;

    let mut args = env::args().skip(1);
    let (path, layout) = match (args.next(), args.next()) {
        (Some(path), Some(layout)) => (path, layout),
        _ => {
            println!("decode_fields <file> <layout>");
            return Ok(());
        }
    };

    let layout = parse_layout(&layout)?;
    if !consumes_bits(&layout) {
        return Err(anyhow!("layout reads no bits, records would never end"));
    }

    let file = File::open(&path).with_context(|| format!("opening {}", path))?;
    let mut source = ReadSource::new(BufReader::new(file));
    let mut reader = BitReader::new(&mut source);

    let mut out = csv::Writer::from_writer(io::stdout());
    let mut records = 0;
    while !reader.at_end() {
        match read_record(&mut reader, &layout) {
            Ok(row) => out.write_record(&row)?,
            Err(e) if e.is_eof() => {
                warn!("input ends inside record {}, dropping it", records);
                break;
            }
            Err(e) => return Err(e.into()),
        }
        records += 1;
    }
    out.flush()?;

    info!("decoded {} records from {}", records, path);
    Ok(())
}

fn init_logger() -> Result<()> {
    let level = env::var("BITCURSOR_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{} : {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}
