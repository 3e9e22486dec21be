use std::{
    fs::read_to_string,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::Context;
use linked_bag::Bag;
use log::{debug, trace};

pub mod cli;
pub use report::{Check, Report};
mod report;

use cli::Args;

/// placeholder for the cells of the copy destination that the bag did not fill
pub const EMPTY_CELL: &str = "_";

/// Builds the bag described by `args` and runs the requested operations on it
pub fn run(args: &Args) -> anyhow::Result<Report> {
    let mut items = args.items.clone();
    if let Some(file) = &args.file {
        items.extend(read_items(file)?);
    }
    Ok(run_on(items, args))
}

fn read_items(file: &Path) -> anyhow::Result<Vec<String>> {
    trace!("read input...");
    let input = if file == Path::new("-") {
        let mut buf = String::new();
        Read::read_to_string(&mut io::stdin(), &mut buf).context("unable to read stdin")?;
        buf
    } else {
        read_to_string(file).with_context(|| format!("unable to read \"{}\"", file.display()))?
    };
    trace!("input read");
    Ok(input.split_whitespace().map(str::to_owned).collect())
}

fn run_on(items: Vec<String>, args: &Args) -> Report {
    let mut bag: Bag<String> = items.into_iter().collect();
    let added = bag.len();
    debug!("bag built with {added} items");

    let removed = args
        .remove
        .iter()
        .map(|item| Check::new(item, bag.remove(item)))
        .collect();

    let contains = args
        .contains
        .iter()
        .map(|item| Check::new(item, bag.contains(item)))
        .collect();

    let copy = args
        .copy_offset
        .map(|offset| copy_out(&bag, offset, args.copy_len));

    if args.clear {
        bag.clear();
    }

    Report {
        added,
        removed,
        contains,
        copy,
        cleared: args.clear,
        bag,
    }
}

/// Copies `bag` into a fresh array of `len` cells (by default just what is
/// needed) starting at `offset`
fn copy_out(bag: &Bag<String>, offset: isize, len: Option<usize>) -> Result<Vec<String>, String> {
    let len = match len {
        Some(len) => len,
        None => usize::try_from(offset)
            .unwrap_or(0)
            .checked_add(bag.len())
            .ok_or_else(|| format!("no array can hold {} elements from {offset}", bag.len()))?,
    };
    let mut destination = Vec::new();
    destination
        .try_reserve_exact(len)
        .map_err(|e| format!("cannot allocate {len} cells: {e}"))?;
    destination.resize(len, EMPTY_CELL.to_owned());
    bag.copy_to(Some(destination.as_mut_slice()), offset)
        .map(|()| destination)
        .map_err(|e| format!("{e}"))
}

pub fn init_logger() {
    env_logger::Builder::new()
        .format(|buf, record| {
            let str = record.args().to_string().replace("\n", "\n\t");
            writeln!(
                buf,
                "[{}] in {}:{}\n\t{}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                str
            )
        })
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::cli::Output;

    fn run_cmd(cmd: &[&str]) -> Report {
        let args = Args::parse_from(std::iter::once("bag").chain(cmd.iter().copied()));
        run(&args).unwrap()
    }

    fn content(report: &Report) -> Vec<&str> {
        report.bag.iter().map(String::as_str).collect()
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["bag"]);
        assert!(args.items.is_empty());
        assert_eq!(args.output_format, Output::Stdout);
        assert!(!args.clear);
        assert_eq!(args.copy_offset, None);
    }

    #[test]
    fn remove_then_contains() {
        let report = run_cmd(&[
            "a", "b", "a", "-r", "a", "-r", "z", "-c", "a", "-c", "b", "-c", "z",
        ]);
        assert_eq!(report.added, 3);
        assert_eq!(
            report.removed,
            [Check::new("a", true), Check::new("z", false)]
        );
        assert_eq!(
            report.contains,
            [
                Check::new("a", true),
                Check::new("b", true),
                Check::new("z", false)
            ]
        );
        assert_eq!(content(&report), ["b", "a"]);
    }

    #[test]
    fn copy_with_offset() {
        let report = run_cmd(&["x", "y", "--copy-offset", "1", "--copy-len", "4"]);
        assert_eq!(
            report.copy,
            Some(Ok(vec![
                EMPTY_CELL.to_owned(),
                "x".to_owned(),
                "y".to_owned(),
                EMPTY_CELL.to_owned()
            ]))
        );
    }

    #[test]
    fn copy_errors_are_reported() {
        let report = run_cmd(&["x", "--copy-offset=-1"]);
        assert_eq!(
            report.copy,
            Some(Err("start index -1 is out of range".to_owned()))
        );

        let report = run_cmd(&["x", "y", "--copy-offset", "1", "--copy-len", "2"]);
        assert!(matches!(report.copy, Some(Err(_))));
    }

    #[test]
    fn oversized_copies_are_refused() {
        let offset = isize::MAX.to_string();
        let report = run_cmd(&["x", "--copy-offset", offset.as_str()]);
        assert!(matches!(report.copy, Some(Err(_))));

        let len = usize::MAX.to_string();
        let report = run_cmd(&["x", "--copy-offset", "0", "--copy-len", len.as_str()]);
        assert!(matches!(report.copy, Some(Err(_))));
        assert_eq!(content(&report), ["x"]);
    }

    #[test]
    fn clear_happens_last() {
        let report = run_cmd(&["x", "y", "-c", "x", "--clear"]);
        assert!(report.cleared);
        assert_eq!(report.contains, [Check::new("x", true)]);
        assert!(report.bag.is_empty());
    }

    #[test]
    fn items_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "b c\n\tb").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let report = run_cmd(&["a", "--file", path.as_str()]);
        assert_eq!(content(&report), ["a", "b", "c", "b"]);
    }

    #[test]
    fn missing_file() {
        let args = Args::parse_from(["bag", "--file", "/this/file/does/not/exist"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err}").starts_with("unable to read"));
    }
}
