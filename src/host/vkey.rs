use crate::core::types::LogicalKey;
use crate::host::KeyCodeResolver;

pub const VK_BACK: u32 = 0x08;
pub const VK_TAB: u32 = 0x09;
pub const VK_RETURN: u32 = 0x0D;
pub const VK_SPACE: u32 = 0x20;
pub const VK_F10: u32 = 0x79;
pub const VK_OEM_1: u32 = 0xBA; // ;:
pub const VK_OEM_MINUS: u32 = 0xBD;
pub const VK_OEM_PERIOD: u32 = 0xBE;

/// A Windows-style virtual key as delivered by a low-level keyboard hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawVirtualKey {
    pub vk_code: u32,
    pub shift: bool,
    pub ctrl: bool,
}

impl RawVirtualKey {
    pub fn new(vk_code: u32) -> Self {
        Self { vk_code, ..Self::default() }
    }

    pub fn shifted(vk_code: u32) -> Self {
        Self { vk_code, shift: true, ..Self::default() }
    }

    pub fn with_ctrl(vk_code: u32) -> Self {
        Self { vk_code, ctrl: true, ..Self::default() }
    }
}

/// Virtual-key resolver for the US layout keys the phonetic scheme uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKeyResolver {
    toggle_key: u32,
}

impl VirtualKeyResolver {
    pub fn new(toggle_key: u32) -> Self {
        Self { toggle_key }
    }

    pub fn toggle_key(&self) -> u32 {
        self.toggle_key
    }
}

/// Display name for a virtual key code, e.g. "F10".
pub fn key_name(vk_code: u32) -> String {
    match vk_code {
        0x70..=0x87 => format!("F{}", vk_code - 0x70 + 1),
        0x30..=0x39 | 0x41..=0x5A => ((vk_code as u8) as char).to_string(),
        _ => format!("VK 0x{vk_code:02X}"),
    }
}

impl Default for VirtualKeyResolver {
    fn default() -> Self {
        Self::new(VK_F10)
    }
}

impl KeyCodeResolver for VirtualKeyResolver {
    type Raw = RawVirtualKey;

    fn resolve(&self, raw: &RawVirtualKey) -> Option<LogicalKey> {
        if raw.vk_code == self.toggle_key {
            return Some(LogicalKey::ToggleHotkey);
        }
        // Ctrl chords (copy, paste, undo...) belong to the application.
        if raw.ctrl {
            return None;
        }

        let ch = match raw.vk_code {
            vk @ 0x41..=0x5A => {
                let offset = (vk - 0x41) as u8;
                if raw.shift {
                    (b'A' + offset) as char
                } else {
                    (b'a' + offset) as char
                }
            }
            vk @ 0x30..=0x39 => (b'0' + (vk - 0x30) as u8) as char,
            VK_BACK => return Some(LogicalKey::Backspace),
            VK_SPACE => ' ',
            VK_RETURN => '\n',
            VK_TAB => '\t',
            VK_OEM_PERIOD => '.',
            VK_OEM_1 => ':',
            VK_OEM_MINUS => '_',
            _ => return None,
        };
        Some(LogicalKey::Char(ch))
    }

    fn toggle_key_name(&self) -> Option<String> {
        Some(key_name(self.toggle_key))
    }
}
