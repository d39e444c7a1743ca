//! Emoji sequences and variation bases
//!
//! `emoji-sequences.txt` and `emoji-zwj-sequences.txt` list every
//! recommended emoji, from single code points to ZWJ sequences:
//!
//! ```text
//! 231A..231B    ; Basic_Emoji    ; watch..hourglass done     # E0.6   [2] (⌚..⌛)
//! 0023 FE0F 20E3; Emoji_Keycap_Sequence ; keycap: \x{23}     # E0.6   [1] (#️⃣)
//! ```
//!
//! Ranges list names as ranges too, so only the first and last code points of
//! a range get names. The CLDR annotations fill in the rest, as well as the
//! names of Emoji 1.0, which has no sequence files. Before Emoji 5.0,
//! comments carry UCD ages rather than emoji versions, so those entries have
//! no age.

use std::collections::{BTreeSet, HashMap};
use ucdb_core::{CodePoint, CodePointSequence, CodePoints, Result, Version};
use ucdb_mirror::Annotations;
use ucdb_parser::emoji_age;

/// Name and age of an emoji sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiSequence {
    /// CLDR short name, if the data files name the sequence
    pub name: Option<String>,
    /// Emoji version that introduced the sequence
    pub age: Option<Version>,
}

/// All emoji sequences of one UCD version
#[derive(Debug, Clone, Default)]
pub struct EmojiSequences {
    entries: HashMap<CodePointSequence, EmojiSequence>,
}

impl EmojiSequences {
    /// Build from records of the sequence files, parsed with their comments
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (CodePoints, Vec<String>)>,
    {
        let mut entries = HashMap::new();
        for (codepoints, fields) in records {
            let name = if fields.len() == 3 {
                Some(fields[1].clone())
            } else {
                None
            };
            let age = fields.last().and_then(|comment| emoji_age(comment));

            match codepoints {
                CodePoints::Range(range) => {
                    let (first, last) = match &name {
                        Some(name) => match name.split_once("..") {
                            Some((first, last)) => (Some(first.trim()), Some(last.trim())),
                            None => (Some(name.as_str()), None),
                        },
                        None => (None, None),
                    };
                    for cp in range.codepoints() {
                        let name = if cp == range.start() {
                            first
                        } else if cp == range.stop() {
                            last
                        } else {
                            None
                        };
                        entries.insert(
                            cp.to_sequence(),
                            EmojiSequence {
                                name: name.map(str::to_string),
                                age,
                            },
                        );
                    }
                }
                other => {
                    entries.insert(other.to_sequence()?, EmojiSequence { name, age });
                }
            }
        }
        Ok(EmojiSequences { entries })
    }

    /// Build from bare keys, without names or ages
    ///
    /// Emoji 1.0 has no sequence files. Its `emoji-data.txt` lists code
    /// points and sequences instead of properties.
    pub fn from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = CodePoints>,
    {
        let mut entries = HashMap::new();
        for key in keys {
            match key {
                CodePoints::Range(range) => {
                    for cp in range.codepoints() {
                        entries.insert(cp.to_sequence(), EmojiSequence::default());
                    }
                }
                other => {
                    entries.insert(other.to_sequence()?, EmojiSequence::default());
                }
            }
        }
        Ok(EmojiSequences { entries })
    }

    /// Name sequences the data files leave unnamed
    ///
    /// Returns the number of newly named sequences.
    pub fn fill_names(&mut self, annotations: &Annotations) -> usize {
        let mut filled = 0;
        for (sequence, entry) in self.entries.iter_mut() {
            if entry.name.is_some() {
                continue;
            }
            if let Some(name) = annotations.get(sequence.as_slice()) {
                entry.name = Some(name.to_string());
                filled += 1;
            }
        }
        filled
    }

    /// Look up a sequence
    ///
    /// Unlike the data files, this also recognizes a listed code point
    /// followed by the emoji variation selector.
    pub fn get(&self, codepoints: &[CodePoint]) -> Option<&EmojiSequence> {
        let sequence = CodePointSequence::new(codepoints.to_vec()).ok()?;
        if let Some(entry) = self.entries.get(&sequence) {
            return Some(entry);
        }
        match codepoints {
            [head, CodePoint::EMOJI_VARIATION_SELECTOR] => self.entries.get(&head.to_sequence()),
            _ => None,
        }
    }

    /// Number of sequences
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no sequences
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All sequences in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&CodePointSequence, &EmojiSequence)> {
        self.entries.iter()
    }
}

/// Code points with text and emoji variants
///
/// The keys of `emoji-variation-sequences.txt` are pairs of a base and a
/// variation selector; only the bases matter.
pub fn variation_bases<I>(keys: I) -> BTreeSet<CodePoint>
where
    I: IntoIterator<Item = CodePoints>,
{
    keys.into_iter().map(|key| key.head()).collect()
}
