//! Bookmarks CLI
//!
//! Reads a Netscape bookmark export, applies folder edits and writes it
//! back out in canonical form.
//!
//! - bookmarks bookmarks.html --tree              # Print the folder outline
//! - bookmarks in.html -o out.html --rename 0=x   # Rename an entry and save

mod edits;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bookmarks_common::warning::clear_warnings;
use bookmarks_html::{ParseIssue, Parser as BookmarkParser, Tokenizer};
use bookmarks_tree::{BookMark, Entry, EntryPath, FileObject};
use clap::Parser;
use owo_colors::OwoColorize;

use edits::{Move, Rename};

/// Edit Netscape bookmark files from the terminal
#[derive(Parser, Debug)]
#[command(name = "bookmarks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"PATHS:
    Entries are addressed by child indices from the root folder, joined
    with dots: 0 is the first child, 0.2 the third child of that folder.
    `root` (or an empty path) names the root folder itself.

EXAMPLES:
    # Print the folder outline with entry paths
    bookmarks bookmarks.html --tree

    # Swap the names of a folder and its first sub-folder
    bookmarks in.html -o out.html --rename 0=github --rename 0.0=zhihu

    # Move the second root entry into the first folder, at the front
    bookmarks in.html -o out.html --move 1:0:0

    # Dump the tree as JSON
    bookmarks bookmarks.html --json
")]
struct Cli {
    /// Bookmark file to read
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Rename the entry at PATH (repeatable, applied after moves)
    #[arg(long = "rename", value_name = "PATH=TITLE")]
    renames: Vec<Rename>,

    /// Move an entry into a folder, appending unless INDEX is given (repeatable)
    #[arg(long = "move", value_name = "FROM:TO_PARENT[:INDEX]")]
    moves: Vec<Move>,

    /// Print an outline of the tree instead of HTML
    #[arg(long, conflicts_with_all = ["json", "output"])]
    tree: bool,

    /// Print the tree as JSON instead of HTML
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Reject attribute values that are not double-quoted
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut root, issues) = load_bookmarks(&cli.input, cli.strict)?;
    report_issues(&issues);

    edits::apply(&mut root, &cli.moves, &cli.renames)?;

    if cli.tree {
        print_outline(&root);
    } else if cli.json {
        let json = serde_json::to_string_pretty(&root).context("failed to encode tree as JSON")?;
        println!("{json}");
    } else if let Some(ref output_path) = cli.output {
        fs::write(output_path, root.to_string())
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        println!("Bookmarks saved to: {}", output_path.display());
    } else {
        println!("{root}");
    }
    Ok(())
}

/// Read and parse a bookmark file
fn load_bookmarks(path: &Path, strict: bool) -> Result<(BookMark, Vec<ParseIssue>)> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    clear_warnings();
    let mut parser = BookmarkParser::new(Tokenizer::new(&html));
    if strict {
        parser = parser.with_strict_attributes();
    }
    parser
        .run_with_issues()
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn report_issues(issues: &[ParseIssue]) {
    if issues.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        format!("{} issue(s) while parsing:", issues.len()).yellow()
    );
    for issue in issues {
        eprintln!("  offset {}: {}", issue.offset, issue.message);
    }
}

/// Print the tree as an indented outline, one entry per line with its path
fn print_outline(root: &BookMark) {
    println!(
        "{} {}",
        root.content().bold(),
        format!("(toolbar: {})", root.personal_toolbar_folder).dimmed()
    );
    print_entries(root.children(), &EntryPath::root(), 1);
}

fn print_entries(entries: &[Entry], parent: &EntryPath, depth: usize) {
    let indent = "  ".repeat(depth);
    for (index, entry) in entries.iter().enumerate() {
        let mut path = parent.clone();
        path.0.push(index);
        match entry {
            Entry::Directory(directory) => {
                println!(
                    "{indent}{} {}/",
                    path.dimmed(),
                    directory.content.blue().bold()
                );
                print_entries(&directory.children, &path, depth + 1);
            }
            Entry::File(file) => {
                println!("{indent}{} {} {}", path.dimmed(), file.content, file.href.cyan());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_file_conflicts_with_terminal_views() {
        for flag in ["--tree", "--json"] {
            let err = Cli::try_parse_from(["bookmarks", "in.html", "-o", "out.html", flag])
                .unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }
        assert!(Cli::try_parse_from(["bookmarks", "in.html", "--tree", "--json"]).is_err());
    }

    #[test]
    fn test_output_file_with_edits() {
        let cli = Cli::try_parse_from([
            "bookmarks",
            "in.html",
            "-o",
            "out.html",
            "--rename",
            "0=github",
            "--move",
            "1:0",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.renames.len(), 1);
        assert_eq!(cli.moves.len(), 1);
        assert!(!cli.tree && !cli.json);
    }
}
