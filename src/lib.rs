// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod host;
pub mod persistence;
pub mod settings;
pub mod trace_init;

pub use crate::core::converter::Transliterator;
pub use crate::core::engine::ImeEngine;
pub use crate::core::session::InputSession;
pub use crate::core::table::PatternTable;
pub use crate::core::types::{EditAction, KeyEvent, LogicalKey};
