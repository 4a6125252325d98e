use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::debug;
use memmap2::Mmap;

use kmodes::{checked_bound, KModes, Strategy};

/// Print the k most frequent whitespace-separated words of the input
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of most frequent words to report
    #[arg(allow_negative_numbers = true)]
    k: i64,

    /// How the tracked minimum is maintained
    #[arg(short, long, value_enum, default_value_t = Strategy::Heap)]
    strategy: Strategy,

    /// Print each word's count, highest first, instead of the sorted words
    #[arg(short, long)]
    counts: bool,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn ingest(modes: &mut KModes<String>, bytes: &[u8]) {
    for word in String::from_utf8_lossy(bytes).split_whitespace() {
        modes.add(word.to_owned());
    }
}

fn ingest_file(modes: &mut KModes<String>, path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(());
    }
    // Safety: the file is only read, and the map is dropped before returning.
    let mmap = unsafe { Mmap::map(&file)? };
    debug!("mapped {} bytes from {}", mmap.len(), path.display());
    ingest(modes, &mmap);
    Ok(())
}

fn ingest_stdin(modes: &mut KModes<String>) -> io::Result<()> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    debug!("read {} bytes from stdin", buf.len());
    ingest(modes, &buf);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let k = checked_bound(args.k).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let mut modes = KModes::new(k, args.strategy);
    let read = match args.file.as_deref() {
        Some(path) => ingest_file(&mut modes, path),
        None => ingest_stdin(&mut modes),
    };
    if let Err(e) = read {
        eprintln!("Failed to read input: {}", e);
        process::exit(1);
    }

    if args.counts {
        for node in modes.list() {
            println!("{} {}", node.item, node.count);
        }
    } else {
        for word in modes.snapshot() {
            println!("{}", word);
        }
    }
}
