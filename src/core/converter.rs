use crate::core::script::ends_with_consonant;
use crate::core::table::PatternTable;
use tracing::debug_span;

/// Greedy, single-pass phonetic to Bengali converter.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t PatternTable,
}

impl Transliterator<'static> {
    pub fn bengali() -> Self {
        Self::new(PatternTable::bengali())
    }
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t PatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t PatternTable {
        self.table
    }

    /// Converts one buffered word. Chars no pattern covers are copied
    /// through one at a time.
    pub fn convert(&self, word: &str) -> String {
        let _span = debug_span!("convert", word).entered();

        let chars: Vec<char> = word.chars().collect();
        let mut result = String::with_capacity(word.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            let Some(m) = self.table.longest_match_at(&chars, i) else {
                result.push(chars[i]);
                i += 1;
                continue;
            };

            if !m.is_vowel {
                result.push_str(m.script);
            } else if !ends_with_consonant(&result) {
                result.push_str(m.script);
            } else if m.is_inherent {
                // the consonant already carries it
            } else if let Some(sign) = m.diacritic {
                result.push_str(sign);
            } else {
                result.push_str(m.script);
            }
            i += m.len;
        }

        result
    }
}
