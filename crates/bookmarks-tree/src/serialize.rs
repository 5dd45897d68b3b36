//! Canonical markup output.
//!
//! Every node renders itself with [`fmt::Display`], so `to_string()` is the
//! serializer. Output depends only on the tree, never on the formatting of
//! the text it was parsed from. A child's rendering is a multi-line block
//! with no trailing newline; its parent re-prefixes every line of that block
//! with its own indentation, so indentation accumulates with depth.
//!
//! Attribute values and titles are written back exactly as stored. The
//! output only round-trips byte-for-byte when they contain neither `"` nor
//! `<`/`>`.

use core::fmt;

use crate::{BookMark, Directory, Entry, File};

/// Fixed header written before the root folder.
pub const PREAMBLE: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

/// One indentation step.
const INDENT: &str = "    ";

/// Write each child's block with every line prefixed by `indent`.
fn write_children(f: &mut fmt::Formatter<'_>, children: &[Entry], indent: &str) -> fmt::Result {
    for child in children {
        let block = child.to_string();
        for line in block.split('\n') {
            writeln!(f, "{indent}{line}")?;
        }
    }
    Ok(())
}

impl fmt::Display for BookMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREAMBLE)?;
        f.write_str("<DL><p>\n")?;
        writeln!(
            f,
            "{INDENT}<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\" PERSONAL_TOOLBAR_FOLDER=\"{}\">{}</H3>",
            self.add_date, self.last_modified, self.personal_toolbar_folder, self.content
        )?;
        writeln!(f, "{INDENT}<DL><p>")?;
        write_children(f, &self.children, &INDENT.repeat(2))?;
        writeln!(f, "{INDENT}</DL><p>")?;
        f.write_str("</DL><p>")
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">{}</H3>",
            self.add_date, self.last_modified, self.content
        )?;
        f.write_str("<DL><p>\n")?;
        write_children(f, &self.children, INDENT)?;
        f.write_str("</DL><p>")
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<DT><A HREF=\"{}\" ADD_DATE=\"{}\"", self.href, self.add_date)?;
        if let Some(icon) = &self.icon {
            write!(f, " ICON=\"{icon}\"")?;
        }
        write!(f, ">{}</A>", self.content)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(directory) => fmt::Display::fmt(directory, f),
            Self::File(file) => fmt::Display::fmt(file, f),
        }
    }
}
