//! Tests for tree edits: rename, reorder, move.

use bookmarks_tree::{BookMark, Directory, Entry, File, FileObject, Folder, TreeError};

/// Helper to build a small tree:
///
/// ```text
/// root
/// ├── 0 Dev
/// │   ├── 0.0 GitHub
/// │   └── 0.1 Docs
/// │       └── 0.1.0 Rust
/// ├── 1 News
/// └── 2 Social
///     └── 2.0 Zhihu
/// ```
fn sample_tree() -> BookMark {
    let mut root = BookMark::new("Bookmarks bar", "1", "2", "true");
    root.append_child(
        Directory::new("Dev", "3", "4")
            .with_child(File::new("GitHub", "https://github.com", "5"))
            .with_child(
                Directory::new("Docs", "6", "7")
                    .with_child(File::new("Rust", "https://doc.rust-lang.org", "8")),
            )
            .into(),
    );
    root.append_child(File::new("News", "https://news.ycombinator.com", "9").into());
    root.append_child(
        Directory::new("Social", "10", "11")
            .with_child(File::new("Zhihu", "https://zhihu.com", "12"))
            .into(),
    );
    root
}

/// Helper to list the titles of the root's direct children.
fn titles(children: &[Entry]) -> Vec<&str> {
    children.iter().map(FileObject::content).collect()
}

// ========== lookup ==========

#[test]
fn test_entry_lookup_by_path() {
    let root = sample_tree();
    assert_eq!(root.entry(&[0]).map(FileObject::content), Some("Dev"));
    assert_eq!(root.entry(&[0, 1, 0]).map(FileObject::content), Some("Rust"));
    assert!(root.entry(&[]).is_none());
    assert!(root.entry(&[5]).is_none());
    // A file has no children to descend into
    assert!(root.entry(&[1, 0]).is_none());
}

#[test]
fn test_file_has_no_children() {
    let root = sample_tree();
    let news = root.entry(&[1]).unwrap();
    assert!(news.as_file().is_some());
    assert!(news.children().is_empty());
}

// ========== rename ==========

#[test]
fn test_rename_two_folders() {
    let mut root = sample_tree();
    root.rename(&[0], "github").unwrap();
    root.rename(&[0, 0], "zhihu").unwrap();

    assert_eq!(root.entry(&[0]).unwrap().content(), "github");
    assert_eq!(root.entry(&[0, 0]).unwrap().content(), "zhihu");
    // Nothing else moved
    assert_eq!(titles(&root.children), vec!["github", "News", "Social"]);
}

#[test]
fn test_rename_root() {
    let mut root = sample_tree();
    root.rename(&[], "Toolbar").unwrap();
    assert_eq!(root.content(), "Toolbar");
}

#[test]
fn test_rename_missing_entry() {
    let mut root = sample_tree();
    let err = root.rename(&[7], "x").unwrap_err();
    assert_eq!(err, TreeError::NoSuchEntry { path: vec![7].into() });
}

// ========== reorder ==========

#[test]
fn test_move_child_forward_and_back() {
    let mut root = sample_tree();
    root.move_child(0, 2).unwrap();
    assert_eq!(titles(&root.children), vec!["News", "Social", "Dev"]);

    root.move_child(2, 0).unwrap();
    assert_eq!(titles(&root.children), vec!["Dev", "News", "Social"]);
}

#[test]
fn test_move_child_out_of_bounds() {
    let mut root = sample_tree();
    assert_eq!(
        root.move_child(0, 3),
        Err(TreeError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        root.move_child(9, 0),
        Err(TreeError::IndexOutOfBounds { index: 9, len: 3 })
    );
    assert_eq!(titles(&root.children), vec!["Dev", "News", "Social"]);
}

#[test]
fn test_insert_and_remove_child() {
    let mut root = sample_tree();
    root.insert_child(1, File::new("Inserted", "http://i", "0").into())
        .unwrap();
    assert_eq!(titles(&root.children), vec!["Dev", "Inserted", "News", "Social"]);

    let removed = root.remove_child(1).unwrap();
    assert_eq!(removed.content(), "Inserted");
    assert_eq!(titles(&root.children), vec!["Dev", "News", "Social"]);

    assert!(root.insert_child(9, removed).is_err());
}

// ========== move_entry ==========

#[test]
fn test_move_entry_into_other_folder() {
    let mut root = sample_tree();
    // News -> Social, appended
    root.move_entry(&[1], &[2], None).unwrap();

    assert_eq!(titles(&root.children), vec!["Dev", "Social"]);
    let social = root.entry(&[1]).unwrap();
    assert_eq!(titles(social.children()), vec!["Zhihu", "News"]);
}

#[test]
fn test_move_entry_to_front_of_folder() {
    let mut root = sample_tree();
    root.move_entry(&[2, 0], &[0], Some(0)).unwrap();

    let dev = root.entry(&[0]).unwrap();
    assert_eq!(titles(dev.children()), vec!["Zhihu", "GitHub", "Docs"]);
    assert!(root.entry(&[2]).unwrap().children().is_empty());
}

#[test]
fn test_move_entry_out_to_root() {
    let mut root = sample_tree();
    root.move_entry(&[0, 1, 0], &[], Some(1)).unwrap();
    assert_eq!(titles(&root.children), vec!["Dev", "Rust", "News", "Social"]);
    assert!(root.entry(&[0, 1]).unwrap().children().is_empty());
}

#[test]
fn test_move_entry_within_same_folder() {
    let mut root = sample_tree();
    root.move_entry(&[0], &[], None).unwrap();
    assert_eq!(titles(&root.children), vec!["News", "Social", "Dev"]);
}

#[test]
fn test_move_entry_into_itself_is_rejected() {
    let mut root = sample_tree();
    let before = root.clone();

    let err = root.move_entry(&[0], &[0, 1], None).unwrap_err();
    assert!(matches!(err, TreeError::MoveIntoSelf { .. }));
    let err = root.move_entry(&[0], &[0], None).unwrap_err();
    assert!(matches!(err, TreeError::MoveIntoSelf { .. }));

    assert_eq!(root, before);
}

#[test]
fn test_move_entry_errors_leave_tree_untouched() {
    let mut root = sample_tree();
    let before = root.clone();

    assert_eq!(root.move_entry(&[], &[0], None), Err(TreeError::EmptyPath));
    assert_eq!(
        root.move_entry(&[0], &[1], None),
        Err(TreeError::NotAFolder { path: vec![1].into() })
    );
    assert_eq!(
        root.move_entry(&[4], &[0], None),
        Err(TreeError::NoSuchEntry { path: vec![4].into() })
    );
    assert_eq!(
        root.move_entry(&[1], &[2], Some(5)),
        Err(TreeError::IndexOutOfBounds { index: 5, len: 1 })
    );

    assert_eq!(root, before);
}

#[test]
fn test_move_entry_shifts_destination_after_removal() {
    let mut root = sample_tree();
    // Dev (index 0) into Social (index 2 before, index 1 once Dev is detached)
    root.move_entry(&[0], &[2], Some(0)).unwrap();

    assert_eq!(titles(&root.children), vec!["News", "Social"]);
    let social = root.entry(&[1]).unwrap();
    assert_eq!(titles(social.children()), vec!["Dev", "Zhihu"]);
    assert_eq!(root.entry(&[1, 0, 1, 0]).unwrap().content(), "Rust");
}

// ========== serde ==========

#[test]
fn test_json_dump_is_tagged() {
    let root = sample_tree();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["children"][0]["type"], "directory");
    assert_eq!(json["children"][1]["type"], "file");
    assert_eq!(json["children"][1]["icon"], serde_json::Value::Null);

    let back: BookMark = serde_json::from_value(json).unwrap();
    assert_eq!(back, root);
}
