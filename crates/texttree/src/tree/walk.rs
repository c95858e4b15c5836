//! Filesystem walking that builds a tree of loaded nodes.
//!
//! - Walk builds a `Node` tree (not a flat list)
//! - Sibling entries are read in parallel, then sorted by name
//! - Files at or above the size limit never enter the tree
//!
//! Sorting during the walk makes the later preorder traversal visit nodes in
//! lexicographic path order, so key assignment is deterministic.

use std::fs::{self, DirEntry};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::{Result, TextTreeError};

/// A node in the tree built during walking.
#[derive(Debug)]
pub struct Node {
    /// The filename (not the full path).
    pub name: Box<str>,
    pub kind: NodeKind,
}

#[derive(Debug)]
pub enum NodeKind {
    /// Child nodes, sorted by name.
    Directory(Vec<Node>),
    /// Full file contents.
    File(Box<[u8]>),
}

impl Node {
    pub fn directory(name: impl Into<Box<str>>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(children),
        }
    }

    pub fn file(name: impl Into<Box<str>>, content: impl Into<Box<[u8]>>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File(content.into()),
        }
    }

    /// Consumes a directory node into its children; empty for files.
    pub fn into_children(self) -> Vec<Node> {
        match self.kind {
            NodeKind::Directory(children) => children,
            NodeKind::File(_) => Vec::new(),
        }
    }

    /// Children of a directory node; empty for files.
    #[cfg(test)]
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory(children) => children,
            NodeKind::File(_) => &[],
        }
    }
}

/// Data passed to the parallel walker.
#[derive(Debug)]
pub struct WalkData<'a> {
    /// Number of files loaded (atomic counter).
    pub num_files: AtomicUsize,
    /// Number of directories visited below the root (atomic counter).
    pub num_dirs: AtomicUsize,
    /// Root path being loaded.
    pub root_path: &'a Path,
    /// Exclusive upper bound on file size.
    pub max_file_size: u64,
}

impl<'a> WalkData<'a> {
    pub fn new(root_path: &'a Path, max_file_size: u64) -> Self {
        Self {
            num_files: AtomicUsize::new(0),
            num_dirs: AtomicUsize::new(0),
            root_path,
            max_file_size,
        }
    }

    fn qualifies(&self, size: u64) -> bool {
        size < self.max_file_size
    }
}

/// Walks the root directory and returns its node.
///
/// The root itself must be a directory. Any unreadable directory or
/// qualifying file aborts the whole walk.
pub fn walk_it(walk_data: &WalkData) -> Result<Node> {
    let root = walk_data.root_path;
    let metadata = fs::metadata(root).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => TextTreeError::PathNotFound(root.to_path_buf()),
        _ => TextTreeError::io(root, err),
    })?;
    if !metadata.is_dir() {
        return Err(TextTreeError::NotADirectory(root.to_path_buf()));
    }

    let children = walk_dir(root, walk_data)?;
    Ok(Node::directory(entry_name(root), children))
}

/// Reads one directory level, recursing into subdirectories in parallel.
fn walk_dir(path: &Path, walk_data: &WalkData) -> Result<Vec<Node>> {
    let entries = fs::read_dir(path)
        .and_then(|read_dir| read_dir.collect::<std::io::Result<Vec<_>>>())
        .map_err(|err| TextTreeError::io(path, err))?;

    let children: Vec<Option<Node>> = entries
        .into_par_iter()
        .map(|entry| walk_entry(&entry, walk_data))
        .collect::<Result<_>>()?;

    let mut children: Vec<Node> = children.into_iter().flatten().collect();

    // Sort children by name for deterministic preorder traversal
    children.sort_unstable_by(|a, b| a.name.cmp(&b.name));

    Ok(children)
}

/// Walks a single directory entry.
///
/// Returns `None` for entries that are not indexed: oversized files and
/// symlinks to directories. Names that are not valid UTF-8 fail the walk.
fn walk_entry(entry: &DirEntry, walk_data: &WalkData) -> Result<Option<Node>> {
    let path = entry.path();
    // Keys are strings; a lossy conversion could merge two distinct names
    let name = entry.file_name().into_string().map_err(|_| {
        TextTreeError::InvalidInput(format!("name is not valid UTF-8: {}", path.display()))
    })?;

    // Get file type without following symlinks
    let file_type = entry
        .file_type()
        .map_err(|err| TextTreeError::io(&path, err))?;

    if file_type.is_dir() {
        walk_data.num_dirs.fetch_add(1, Ordering::Relaxed);
        let children = walk_dir(&path, walk_data)?;
        return Ok(Some(Node::directory(name, children)));
    }

    // Resolve symlinks; a dangling link surfaces as an I/O error
    let metadata = if file_type.is_symlink() {
        fs::metadata(&path)
    } else {
        entry.metadata()
    }
    .map_err(|err| TextTreeError::io(&path, err))?;

    if metadata.is_dir() {
        log::debug!("not descending into symlinked directory {}", path.display());
        return Ok(None);
    }

    if !walk_data.qualifies(metadata.len()) {
        return Ok(None);
    }

    let content = fs::read(&path).map_err(|err| TextTreeError::io(&path, err))?;
    walk_data.num_files.fetch_add(1, Ordering::Relaxed);

    Ok(Some(Node::file(name, content)))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        // Handle root paths like "/" or "."
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
