use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// items to add to the bag, in order
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// also add the whitespace separated items of this file
    ///
    /// They come after the positional items. Use `-` to read stdin.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// remove one occurence of ITEM
    ///
    /// Can be repeated, removals happen in the given order
    #[arg(short, long, value_name = "ITEM")]
    pub remove: Vec<String>,

    /// check whether ITEM is in the bag (after the removals)
    #[arg(short, long, value_name = "ITEM")]
    pub contains: Vec<String>,

    /// copy the bag into an array starting at this index
    #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
    pub copy_offset: Option<isize>,

    /// length of the array used by `copy-offset`
    ///
    /// defaults to exactly what is needed
    #[arg(long, value_name = "LEN", requires = "copy_offset")]
    pub copy_len: Option<usize>,

    /// empty the bag at the very end
    #[arg(long, default_value_t = false)]
    pub clear: bool,

    #[arg(short, long, value_enum, default_value_t = Output::Stdout)]
    pub output_format: Output,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Quiet,
    Stdout,
    Json,
    PrettyJson,
}
