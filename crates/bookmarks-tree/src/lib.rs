//! Bookmark entity tree for Netscape bookmark files.
//!
//! # Design
//!
//! A bookmark file describes exactly three shapes, so the tree is a closed
//! set of types rather than an open hierarchy:
//!
//! - [`BookMark`] is the document root. It is its own type and can never be
//!   nested inside another node.
//! - [`Directory`] is a folder holding an ordered list of [`Entry`] values.
//! - [`File`] is a leaf bookmark. It has no `children` field at all, so a
//!   file with children cannot be represented.
//!
//! Ownership is strictly tree-shaped: parents own their children and there
//! are no back-links. Child order is the display order and is preserved by
//! every operation in this crate.
//!
//! Date fields are opaque strings; they are reproduced, never interpreted.
//!
//! The [`FileObject`] trait is the capability shared by all three kinds,
//! [`Folder`] adds child mutation for the two container kinds, and the
//! [`fmt::Display`](std::fmt::Display) impls in [`serialize`] regenerate
//! canonical markup.

use serde::{Deserialize, Serialize};

/// Structural edits: index paths, reordering and moving entries.
pub mod edit;
/// Canonical markup output.
pub mod serialize;

pub use edit::{EntryPath, TreeError};

/// Capability shared by every node of the tree.
pub trait FileObject {
    /// The visible title of the node.
    fn content(&self) -> &str;

    /// Replace the visible title of the node.
    fn set_content(&mut self, content: String);

    /// Ordered children of the node. Always empty for a [`File`].
    fn children(&self) -> &[Entry];
}

/// A node that can hold children: the root [`BookMark`] or a [`Directory`].
pub trait Folder: FileObject {
    /// Mutable access to the ordered child list.
    fn children_mut(&mut self) -> &mut Vec<Entry>;

    /// Append `entry` as the last child.
    fn append_child(&mut self, entry: Entry) {
        self.children_mut().push(entry);
    }

    /// Insert `entry` so that it ends up at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfBounds`] if `index` is greater than the
    /// number of children.
    fn insert_child(&mut self, index: usize, entry: Entry) -> Result<(), TreeError> {
        let children = self.children_mut();
        if index > children.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: children.len(),
            });
        }
        children.insert(index, entry);
        Ok(())
    }

    /// Detach and return the child at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfBounds`] if there is no such child.
    fn remove_child(&mut self, index: usize) -> Result<Entry, TreeError> {
        let children = self.children_mut();
        if index >= children.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: children.len(),
            });
        }
        Ok(children.remove(index))
    }

    /// Reorder: move the child at `from` so that it ends up at position `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfBounds`] if either index does not name
    /// an existing child.
    fn move_child(&mut self, from: usize, to: usize) -> Result<(), TreeError> {
        let len = self.children().len();
        if to >= len {
            return Err(TreeError::IndexOutOfBounds { index: to, len });
        }
        let entry = self.remove_child(from)?;
        self.children_mut().insert(to, entry);
        Ok(())
    }
}

/// The document root: the personal toolbar folder that wraps every entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMark {
    /// Title of the root folder.
    pub content: String,
    /// `ADD_DATE` attribute, kept verbatim.
    pub add_date: String,
    /// `LAST_MODIFIED` attribute, kept verbatim.
    pub last_modified: String,
    /// `PERSONAL_TOOLBAR_FOLDER` attribute, kept verbatim.
    pub personal_toolbar_folder: String,
    /// Top-level entries in display order.
    pub children: Vec<Entry>,
}

/// A folder nested somewhere below the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    /// Folder title.
    pub content: String,
    /// `ADD_DATE` attribute, kept verbatim.
    pub add_date: String,
    /// `LAST_MODIFIED` attribute, kept verbatim.
    pub last_modified: String,
    /// Entries in display order.
    pub children: Vec<Entry>,
}

/// A leaf bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Link title.
    pub content: String,
    /// `HREF` attribute.
    pub href: String,
    /// `ADD_DATE` attribute, kept verbatim.
    pub add_date: String,
    /// `ICON` attribute, usually a `data:` URL. Absent when the source had none.
    pub icon: Option<String>,
}

/// A child of a [`BookMark`] or [`Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    /// A nested folder.
    Directory(Directory),
    /// A leaf bookmark.
    File(File),
}

impl BookMark {
    /// Create a root with no children.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        add_date: impl Into<String>,
        last_modified: impl Into<String>,
        personal_toolbar_folder: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            add_date: add_date.into(),
            last_modified: last_modified.into(),
            personal_toolbar_folder: personal_toolbar_folder.into(),
            children: Vec::new(),
        }
    }
}

impl Directory {
    /// Create an empty folder.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        add_date: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            add_date: add_date.into(),
            last_modified: last_modified.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`Folder::append_child`].
    #[must_use]
    pub fn with_child(mut self, entry: impl Into<Entry>) -> Self {
        self.children.push(entry.into());
        self
    }
}

impl File {
    /// Create a bookmark without an icon.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        href: impl Into<String>,
        add_date: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            href: href.into(),
            add_date: add_date.into(),
            icon: None,
        }
    }

    /// Attach an `ICON` value.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Entry {
    /// The folder inside this entry, if it is one.
    #[must_use]
    pub const fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(directory) => Some(directory),
            Self::File(_) => None,
        }
    }

    /// Mutable access to the folder inside this entry, if it is one.
    pub const fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Self::Directory(directory) => Some(directory),
            Self::File(_) => None,
        }
    }

    /// The leaf bookmark inside this entry, if it is one.
    #[must_use]
    pub const fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }
}

impl From<Directory> for Entry {
    fn from(directory: Directory) -> Self {
        Self::Directory(directory)
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl FileObject for BookMark {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn children(&self) -> &[Entry] {
        &self.children
    }
}

impl Folder for BookMark {
    fn children_mut(&mut self) -> &mut Vec<Entry> {
        &mut self.children
    }
}

impl FileObject for Directory {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn children(&self) -> &[Entry] {
        &self.children
    }
}

impl Folder for Directory {
    fn children_mut(&mut self) -> &mut Vec<Entry> {
        &mut self.children
    }
}

impl FileObject for File {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn children(&self) -> &[Entry] {
        &[]
    }
}

impl FileObject for Entry {
    fn content(&self) -> &str {
        match self {
            Self::Directory(directory) => directory.content(),
            Self::File(file) => file.content(),
        }
    }

    fn set_content(&mut self, content: String) {
        match self {
            Self::Directory(directory) => directory.set_content(content),
            Self::File(file) => file.set_content(content),
        }
    }

    fn children(&self) -> &[Entry] {
        match self {
            Self::Directory(directory) => directory.children(),
            Self::File(file) => file.children(),
        }
    }
}
