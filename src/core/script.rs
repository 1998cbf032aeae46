//! Bengali code point classification.

pub const NUKTA: char = '\u{09bc}';
pub const HASANTA: char = '\u{09cd}';

/// ক..=হ plus the letters that live outside that block range:
/// ড় ঢ় য় (precomposed) and ৎ.
pub fn is_consonant(ch: char) -> bool {
    ('\u{0995}'..='\u{09b9}').contains(&ch)
        || matches!(ch, '\u{09dc}' | '\u{09dd}' | '\u{09df}' | '\u{09ce}')
}

/// True when the last glyph of `output` is a consonant a vowel sign can
/// attach to. A trailing nukta counts when it follows a consonant, since
/// the table writes ড় ঢ় য় in decomposed form.
pub fn ends_with_consonant(output: &str) -> bool {
    let mut rev = output.chars().rev();
    match rev.next() {
        Some(NUKTA) => rev.next().is_some_and(is_consonant),
        Some(ch) => is_consonant(ch),
        None => false,
    }
}
