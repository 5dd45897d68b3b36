use core::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{BookMark, Entry, FileObject, Folder};

/// Errors raised by structural edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The operation needs a path naming an entry, not the root.
    #[error("path must name an entry below the root")]
    EmptyPath,
    /// A child index is outside the folder's child list.
    #[error("index {index} is out of bounds for a folder with {len} children")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of children in the folder.
        len: usize,
    },
    /// No entry exists at the path.
    #[error("no entry at path {path}")]
    NoSuchEntry {
        /// Path that was looked up.
        path: EntryPath,
    },
    /// The path names a bookmark where a folder is required.
    #[error("entry at path {path} is not a folder")]
    NotAFolder {
        /// Path that was looked up.
        path: EntryPath,
    },
    /// A folder cannot be moved into itself or one of its descendants.
    #[error("cannot move {from} into {to}, which is inside it")]
    MoveIntoSelf {
        /// Entry being moved.
        from: EntryPath,
        /// Requested destination folder.
        to: EntryPath,
    },
    /// A dotted path string could not be parsed.
    #[error("invalid entry path {0:?}")]
    InvalidPath(String),
}

/// Position of an entry as child indices from the root, e.g. `0.2.1`.
///
/// The empty path names the root itself and is written `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntryPath(pub Vec<usize>);

impl EntryPath {
    /// The path of the root folder.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Child indices from the root.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether this path names the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[usize]> for EntryPath {
    fn from(path: &[usize]) -> Self {
        Self(path.to_vec())
    }
}

impl From<Vec<usize>> for EntryPath {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

impl AsRef<[usize]> for EntryPath {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl FromStr for EntryPath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }
        trimmed
            .split('.')
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
            .map_err(|_| TreeError::InvalidPath(s.to_string()))
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl BookMark {
    /// Look up the entry at `path`. The empty path yields `None`, since the
    /// root is not an [`Entry`].
    #[must_use]
    pub fn entry(&self, path: &[usize]) -> Option<&Entry> {
        let (&first, rest) = path.split_first()?;
        let mut current = self.children.get(first)?;
        for &index in rest {
            current = current.children().get(index)?;
        }
        Some(current)
    }

    /// Mutable variant of [`BookMark::entry`].
    pub fn entry_mut(&mut self, path: &[usize]) -> Option<&mut Entry> {
        let (&first, rest) = path.split_first()?;
        let mut current = self.children.get_mut(first)?;
        for &index in rest {
            current = current.as_directory_mut()?.children.get_mut(index)?;
        }
        Some(current)
    }

    /// The folder at `path`: the root for the empty path, otherwise a
    /// [`Directory`](crate::Directory).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoSuchEntry`] if nothing lives at `path` and
    /// [`TreeError::NotAFolder`] if it is a bookmark.
    pub fn folder_mut(&mut self, path: &[usize]) -> Result<&mut dyn Folder, TreeError> {
        if path.is_empty() {
            return Ok(self);
        }
        match self.entry_mut(path) {
            Some(Entry::Directory(directory)) => Ok(directory),
            Some(Entry::File(_)) => Err(TreeError::NotAFolder { path: path.into() }),
            None => Err(TreeError::NoSuchEntry { path: path.into() }),
        }
    }

    /// Number of children of the folder at `path`.
    fn folder_len(&self, path: &[usize]) -> Result<usize, TreeError> {
        if path.is_empty() {
            return Ok(self.children.len());
        }
        match self.entry(path) {
            Some(Entry::Directory(directory)) => Ok(directory.children.len()),
            Some(Entry::File(_)) => Err(TreeError::NotAFolder { path: path.into() }),
            None => Err(TreeError::NoSuchEntry { path: path.into() }),
        }
    }

    /// Set the title of the entry at `path`; the empty path renames the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoSuchEntry`] if nothing lives at `path`.
    pub fn rename(&mut self, path: &[usize], title: impl Into<String>) -> Result<(), TreeError> {
        if path.is_empty() {
            self.content = title.into();
            return Ok(());
        }
        self.entry_mut(path)
            .ok_or_else(|| TreeError::NoSuchEntry { path: path.into() })?
            .set_content(title.into());
        Ok(())
    }

    /// Detach the entry at `from` and insert it into the folder `to_parent`
    /// at `index`, or append it when `index` is `None`.
    ///
    /// Both paths are interpreted against the tree *before* the move, while
    /// `index` is a position in the destination *after* the entry has been
    /// detached. The tree is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyPath`] if `from` names the root.
    /// - [`TreeError::NoSuchEntry`] / [`TreeError::NotAFolder`] for bad paths.
    /// - [`TreeError::MoveIntoSelf`] if `to_parent` is `from` or lies inside it.
    /// - [`TreeError::IndexOutOfBounds`] if `index` is past the end of the
    ///   destination.
    pub fn move_entry(
        &mut self,
        from: &[usize],
        to_parent: &[usize],
        index: Option<usize>,
    ) -> Result<(), TreeError> {
        let Some((&last, parent)) = from.split_last() else {
            return Err(TreeError::EmptyPath);
        };
        if self.entry(from).is_none() {
            return Err(TreeError::NoSuchEntry { path: from.into() });
        }
        if to_parent.starts_with(from) {
            return Err(TreeError::MoveIntoSelf {
                from: from.into(),
                to: to_parent.into(),
            });
        }

        // Removing `from` shifts later siblings on the way to the destination.
        let mut destination = to_parent.to_vec();
        if destination.len() > parent.len()
            && destination.starts_with(parent)
            && destination[parent.len()] > last
        {
            destination[parent.len()] -= 1;
        }

        let mut len = self.folder_len(to_parent)?;
        if to_parent == parent {
            len -= 1;
        }
        let index = index.unwrap_or(len);
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }

        let entry = self.folder_mut(parent)?.remove_child(last)?;
        self.folder_mut(&destination)?.insert_child(index, entry)
    }
}
