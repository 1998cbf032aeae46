// File: src/core/table.rs
use crate::core::trie::PatternTrie;
use crate::core::types::{PatternEntry, PatternMatch};
use crate::error::TableError;
use serde::Deserialize;
use std::sync::OnceLock;

/// The shipped phonetic Bengali layout.
pub const BENGALI_TOML: &str = include_str!("bengali.toml");

#[derive(Deserialize)]
struct TableFile {
    inherent: String,
    #[serde(default)]
    vowels: Vec<VowelRow>,
    #[serde(default)]
    patterns: Vec<PatternRow>,
}

#[derive(Deserialize)]
struct VowelRow {
    pattern: String,
    independent: String,
    diacritic: Option<String>,
}

#[derive(Deserialize)]
struct PatternRow {
    pattern: String,
    script: String,
}

/// Immutable phonetic pattern table.
///
/// Entries keep their declaration order. Patterns are unique, so at any
/// input position there is at most one match of each length and the
/// longest one is unambiguous.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
    trie: PatternTrie,
    inherent: String,
}

impl PatternTable {
    /// The compiled-in Bengali table, parsed on first use.
    pub fn bengali() -> &'static PatternTable {
        static INSTANCE: OnceLock<PatternTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            PatternTable::from_toml(BENGALI_TOML).expect("embedded Bengali table must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let file: TableFile =
            toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

        let vowels = file.vowels.into_iter().map(|row| PatternEntry {
            pattern: row.pattern,
            script: row.independent,
            is_vowel: true,
            diacritic: row.diacritic,
        });
        let others = file.patterns.into_iter().map(|row| PatternEntry {
            pattern: row.pattern,
            script: row.script,
            is_vowel: false,
            diacritic: None,
        });

        Self::build(vowels.chain(others).collect(), file.inherent)
    }

    /// Builds the table from entries in canonical order.
    pub fn build(entries: Vec<PatternEntry>, inherent: String) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut trie = PatternTrie::new();
        for (id, entry) in entries.iter().enumerate() {
            if entry.pattern.is_empty() {
                return Err(TableError::EmptyPattern);
            }
            if !entry.pattern.is_ascii() {
                return Err(TableError::NonAsciiPattern(entry.pattern.clone()));
            }
            if entry.script.is_empty() {
                return Err(TableError::EmptyScript(entry.pattern.clone()));
            }
            trie.insert(&entry.pattern, id)
                .map_err(|_| TableError::DuplicatePattern(entry.pattern.clone()))?;
        }

        let inherent_entry = trie
            .get(&inherent)
            .map(|id| &entries[id])
            .filter(|entry| entry.is_vowel)
            .ok_or_else(|| TableError::InherentNotVowel(inherent.clone()))?;
        if inherent_entry.diacritic.as_deref().is_some_and(|d| !d.is_empty()) {
            return Err(TableError::InherentHasDiacritic(inherent));
        }

        Ok(Self { entries, trie, inherent })
    }

    /// Longest pattern that starts at `word[pos]`, compared char by char,
    /// case-sensitive.
    pub fn longest_match_at(&self, word: &[char], pos: usize) -> Option<PatternMatch<'_>> {
        let rest = word.get(pos..)?;
        let (id, len) = self.trie.longest_prefix(rest)?;
        let entry = &self.entries[id];
        Some(PatternMatch {
            len,
            script: &entry.script,
            is_vowel: entry.is_vowel,
            diacritic: entry.diacritic.as_deref(),
            is_inherent: entry.pattern == self.inherent,
        })
    }

    pub fn get(&self, pattern: &str) -> Option<&PatternEntry> {
        self.trie.get(pattern).map(|id| &self.entries[id])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn inherent_pattern(&self) -> &str {
        &self.inherent
    }

    pub fn is_inherent(&self, pattern: &str) -> bool {
        pattern == self.inherent
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
