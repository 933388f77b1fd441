//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, BufRead};

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffman::compression::compress;
use huffman::tools::cli::{huffopts_init, HuffOpts};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Logs go to stderr so the report on stdout stays clean.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let opts = huffopts_init();
    let text = read_input(&opts)?;

    let stdout = io::stdout();
    let result = compress(&opts, &text, &mut stdout.lock());

    info!("Done.");
    result
}

/// The text from the command line, or else one line from stdin without its line ending.
fn read_input(opts: &HuffOpts) -> io::Result<String> {
    if let Some(text) = &opts.text {
        return Ok(text.clone());
    }
    println!("HUFFMAN CODING");
    println!("> ENTER TEXT TO BE COMPRESSED");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(len);
    Ok(line)
}
