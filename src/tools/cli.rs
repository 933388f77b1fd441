use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::info;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Log level matching this verbosity.
    pub fn level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Text to compress. Read from stdin when None.
    pub text: Option<String>,
    /// Character displayed for a 0 bit
    pub zero: char,
    /// Character displayed for a 1 bit
    pub one: char,
    /// Print the huffman tree
    pub show_tree: bool,
    /// Print the encoded stream packed into bytes
    pub packed: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            text: None,
            zero: '0',
            one: '1',
            show_tree: false,
            packed: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build a huffman code for a line of text and show the encoded result",
    long_about = "
    Counts how often each character appears, builds a huffman tree by repeatedly
    joining the two lightest nodes, and prints the resulting prefix-free code along
    with the encoded text and how much space it saves over 8 bits per character."
)]
pub struct Args {
    /// Text to compress. One line is read from stdin if omitted.
    #[clap()]
    text: Option<String>,

    /// Character displayed for a 0 bit
    #[clap(short = '0', long = "zero", default_value_t = '0')]
    zero: char,

    /// Character displayed for a 1 bit
    #[clap(short = '1', long = "one", default_value_t = '1')]
    one: char,

    /// Print the huffman tree
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Print the encoded stream packed into bytes (hex)
    #[clap(short = 'p', long = "packed")]
    packed: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u64,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<Args> for HuffOpts {
    /// Put command line information from CLAP into our internal structure.
    fn from(args: Args) -> Self {
        let verbose = match (args.quiet, args.v) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        Self {
            text: args.text,
            zero: args.zero,
            one: args.one,
            show_tree: args.tree,
            packed: args.packed,
            verbose,
        }
    }
}

/// Parse the command line, set the log level and report the options in use.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level());

    // Below we report initialization status to the user
    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    match &opts.text {
        Some(text) => info!("Compressing {} chars from the command line", text.chars().count()),
        None => info!("Reading one line from stdin"),
    }
    info!("Displaying bits as '{}' and '{}'", opts.zero, opts.one);
    if opts.show_tree {
        info!("Printing the huffman tree")
    };
    if opts.packed {
        info!("Printing the packed stream")
    };
    info!("---- Huffman Initialization End ----");
    opts
}
