//! Builds a tree of strings and prints its shape.
//!
//! Built only with `--features demo`. The log level comes from `BST_LOG`
//! (`off`, `error`, `warn`, `info`, `debug` or `trace`) and defaults to `warn`.

use std::cmp::Ordering;
use std::env;

use bst_set::{Comparator, Tree};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn initialize_logging() {
    let level = env::var("BST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);

    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("logging disabled: {}", e);
    }
}

/// Dictionary order: letters compare case-insensitively first, and only
/// strings that are equal ignoring case fall back to lowercase-before-uppercase.
fn dictionary_order(a: &String, b: &String) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| b.cmp(a))
}

fn main() {
    initialize_logging();

    let mut tree = Tree::with_comparator(Comparator::from_fn(dictionary_order));
    tree.insert("Aa".to_string());
    for c in 'A'..='Z' {
        tree.insert(format!("{}{}", c, c));
        tree.insert(c.to_string());
    }
    info!("built a tree of {} values, height {}", tree.len(), tree.height());

    println!("{}", tree);
}
