// src/core/mod.rs

pub mod converter;
pub mod engine;
pub mod script;
pub mod session;
pub mod table;
pub mod trie;
pub mod types;
