//! Capabilities the host provides at the system boundary.
//!
//! The engine never sees raw key codes or touches the focused application
//! directly: a [`KeyCodeResolver`] turns raw codes into logical keys and an
//! [`EditActionSink`] carries out the resulting edits.

mod document;
mod vkey;

pub use document::TextDocument;
pub use vkey::{key_name, RawVirtualKey, VirtualKeyResolver, VK_F10};

use crate::core::types::{EditAction, KeyEvent, LogicalKey};

/// Maps a host-specific raw key (code plus modifier state) to a logical key.
/// `None` means the engine has no interest in the key and the host should
/// handle it normally.
pub trait KeyCodeResolver {
    type Raw;

    fn resolve(&self, raw: &Self::Raw) -> Option<LogicalKey>;

    /// Human-readable name of the key that resolves to the toggle hotkey.
    fn toggle_key_name(&self) -> Option<String> {
        None
    }
}

/// Applies edit actions to the real input stream, in the order received.
pub trait EditActionSink {
    fn apply(&mut self, event: &KeyEvent, action: &EditAction);
}

impl<S: EditActionSink + ?Sized> EditActionSink for &mut S {
    fn apply(&mut self, event: &KeyEvent, action: &EditAction) {
        (**self).apply(event, action)
    }
}
