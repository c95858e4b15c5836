//! Key assignment from a walked `Node` tree.
//!
//! Directories become markers keyed `dir + name + "/"`. Files are keyed by
//! their stem (`dir + stem`) unless a sibling already claimed that stem, in
//! which case both files move to their full filenames:
//!
//! ```text
//! visit b/hello.md   -> "b/hello"     = hello.md
//! visit b/hello.txt  -> "b/hello"     removed
//!                       "b/hello.md"  = hello.md
//!                       "b/hello.txt" = hello.txt
//! visit b/hello.yaml -> "b/hello"     = hello.yaml   (stem is free again)
//! ```
//!
//! The outcome depends on visitation order. The walk sorts siblings by name,
//! so for a given tree the result is always the same.

use fnv::FnvHashMap;

use super::walk::{Node, NodeKind};
use crate::entity::{DirectoryEntity, Entity, FileEntity};
use crate::key::{directory_key, KeyParts};

/// Lookup key to entity mapping.
pub type Cache = FnvHashMap<Box<str>, Entity>;

/// Builds the cache one entity at a time, resolving stem collisions.
#[derive(Debug, Default)]
pub struct KeyAssigner {
    cache: Cache,
}

impl KeyAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a directory marker for `name` inside `dir`.
    pub fn insert_directory(&mut self, dir: &str, name: &str) {
        let key = directory_key(dir, name);
        self.cache
            .insert(key.into_boxed_str(), DirectoryEntity::new(name).into());
    }

    /// Inserts a file found in `dir` (root-relative, with trailing `/`).
    pub fn insert_file(&mut self, dir: &str, file: FileEntity) {
        let stem_key = KeyParts::new(dir, file.filename()).stem_key();

        match self.cache.remove(stem_key.as_str()) {
            None => {
                self.cache.insert(stem_key.into_boxed_str(), file.into());
            }
            Some(existing) => {
                // Both the previous owner of the stem and the newcomer fall
                // back to their full filenames
                self.place_full(dir, existing);
                self.place_full(dir, file.into());
            }
        }
    }

    /// Stores an entity under `dir + filename`.
    ///
    /// Full filenames are unique within a directory, so an occupant here holds
    /// the key as its stem. It is moved to its own full filename first.
    fn place_full(&mut self, dir: &str, entity: Entity) {
        let key = KeyParts::new(dir, entity.filename()).full_key();
        if let Some(occupant) = self.cache.remove(key.as_str()) {
            if occupant.filename() != entity.filename() {
                self.place_full(dir, occupant);
            }
        }
        self.cache.insert(key.into_boxed_str(), entity);
    }

    pub fn into_cache(self) -> Cache {
        self.cache
    }
}

/// Constructs the cache from the walked root node.
///
/// The root itself is never represented.
pub fn construct_cache(root: Node) -> Cache {
    let mut assigner = KeyAssigner::new();
    let mut dir = String::new();
    for child in root.into_children() {
        construct_node_recursive(child, &mut dir, &mut assigner);
    }
    assigner.into_cache()
}

/// Preorder traversal; `dir` is the root-relative prefix of `node`'s parent.
fn construct_node_recursive(node: Node, dir: &mut String, assigner: &mut KeyAssigner) {
    match node.kind {
        NodeKind::File(content) => {
            assigner.insert_file(dir, FileEntity::new(node.name, content));
        }
        NodeKind::Directory(children) => {
            assigner.insert_directory(dir, &node.name);

            let parent_len = dir.len();
            dir.push_str(&node.name);
            dir.push('/');
            for child in children {
                construct_node_recursive(child, dir, assigner);
            }
            dir.truncate(parent_len);
        }
    }
}
