//! Load the bundled sample tree and print a few lookups.
//!
//! Usage: cargo run --example sample [ROOT]

use std::path::PathBuf;

use texttree::{EntityStore, DEFAULT_MAX_FILE_SIZE};

fn main() {
    env_logger::init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample"));

    let store = match EntityStore::load(&root, DEFAULT_MAX_FILE_SIZE) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load {}: {}", root.display(), e);
            std::process::exit(1);
        }
    };

    let mut keys = store.entities();
    keys.sort_unstable();
    println!("{:?}", keys);

    for key in ["a/hello", "b/hello.txt"] {
        match store.get_string_if_exists(key) {
            Some(text) => print!("{key}: {text}"),
            None => println!("{key}: <missing>"),
        }
    }
    match store.get_string_sub("b", "c/quack") {
        Ok(text) => print!("b + c/quack: {text}"),
        Err(e) => println!("b + c/quack: {e}"),
    }
}
