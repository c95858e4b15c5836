//! Indexed filesystem nodes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Entity kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    File,
    Directory,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// A file loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntity {
    filename: Box<str>,
    content: Box<[u8]>,
}

impl FileEntity {
    pub fn new(filename: impl Into<Box<str>>, content: impl Into<Box<[u8]>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Base name with extension, as it appeared on disk.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// A subdirectory marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntity {
    name: Box<str>,
}

impl DirectoryEntity {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One indexed filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    File(FileEntity),
    Directory(DirectoryEntity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::File(_) => EntityKind::File,
            Self::Directory(_) => EntityKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Base name of the node (with extension for files).
    pub fn filename(&self) -> &str {
        match self {
            Self::File(file) => file.filename(),
            Self::Directory(dir) => dir.name(),
        }
    }

    /// Raw content. A directory marker yields its bare name.
    pub fn content(&self) -> &[u8] {
        match self {
            Self::File(file) => file.content(),
            Self::Directory(dir) => dir.name().as_bytes(),
        }
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }

    pub fn as_file(&self) -> Option<&FileEntity> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryEntity> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}

impl From<FileEntity> for Entity {
    fn from(file: FileEntity) -> Self {
        Self::File(file)
    }
}

impl From<DirectoryEntity> for Entity {
    fn from(dir: DirectoryEntity) -> Self {
        Self::Directory(dir)
    }
}
