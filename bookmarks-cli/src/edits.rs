//! Edit requests given on the command line.

use std::str::FromStr;

use anyhow::{Context, Error, Result, bail};
use bookmarks_tree::{BookMark, EntryPath};

/// `--rename PATH=TITLE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub path: EntryPath,
    pub title: String,
}

/// `--move FROM:TO_PARENT[:INDEX]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: EntryPath,
    pub to: EntryPath,
    pub index: Option<usize>,
}

impl FromStr for Rename {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((path, title)) = s.split_once('=') else {
            bail!("expected PATH=TITLE, got {s:?}");
        };
        if title.is_empty() {
            bail!("title for {path:?} must not be empty");
        }
        Ok(Self {
            path: path.parse()?,
            title: title.to_string(),
        })
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let (Some(from), Some(to)) = (parts.next(), parts.next()) else {
            bail!("expected FROM:TO_PARENT[:INDEX], got {s:?}");
        };
        let index = parts
            .next()
            .map(|index| {
                index
                    .parse::<usize>()
                    .with_context(|| format!("invalid index {index:?}"))
            })
            .transpose()?;
        if parts.next().is_some() {
            bail!("expected FROM:TO_PARENT[:INDEX], got {s:?}");
        }
        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
            index,
        })
    }
}

/// Apply all moves, then all renames, stopping at the first failure.
pub fn apply(root: &mut BookMark, moves: &[Move], renames: &[Rename]) -> Result<()> {
    for request in moves {
        root.move_entry(request.from.as_slice(), request.to.as_slice(), request.index)
            .with_context(|| format!("cannot move {} to {}", request.from, request.to))?;
    }
    for request in renames {
        root.rename(request.path.as_slice(), request.title.clone())
            .with_context(|| format!("cannot rename {}", request.path))?;
    }
    Ok(())
}
