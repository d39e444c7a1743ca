//! Curated selections of code points and sequences
//!
//! Each selection is a short list of characters that exercise some aspect of
//! rendering, such as arrows of matching lengths or emoji sequences of
//! increasing complexity. Entries are stored as text and converted lazily.

use ucdb_core::{CodePointSequence, CodePoints};

/// Named list of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Human-readable title
    pub title: &'static str,
    entries: &'static [&'static str],
}

impl Selection {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty selection
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as text
    pub fn texts(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().copied()
    }

    /// Entries as code points, with multi-character entries as sequences
    pub fn codepoints(&self) -> impl Iterator<Item = CodePoints> {
        self.entries.iter().filter_map(|text| {
            let sequence = CodePointSequence::from_text(text).ok()?;
            Some(match sequence.to_singleton() {
                Ok(cp) => CodePoints::Point(cp),
                Err(_) => CodePoints::Sequence(sequence),
            })
        })
    }
}

/// Short and long arrows, pairwise
pub const ARROWS: Selection = Selection {
    title: "Arrows",
    entries: &[
        "\u{2190}", "\u{27F5}", "\u{2192}", "\u{27F6}", "\u{2194}", "\u{27F7}", "\u{21D0}",
        "\u{27F8}", "\u{21D2}", "\u{27F9}", "\u{21D4}", "\u{27FA}", "\u{21A4}", "\u{27FB}",
        "\u{21A6}", "\u{27FC}", "\u{2906}", "\u{27FD}", "\u{2907}", "\u{27FE}", "\u{21DC}",
        "\u{2B33}", "\u{21DD}", "\u{27FF}",
    ],
};

/// Greater-than signs and right-pointing angle brackets
pub const CHEVRONS: Selection = Selection {
    title: "Chevrons",
    entries: &[
        "\u{003E}", "\u{203A}", "\u{227B}", "\u{22B1}", "\u{276F}", "\u{27A2}", "\u{27A3}",
        "\u{27A4}", "\u{27E9}", "\u{297C}", "\u{29FD}", "\u{3009}", "\u{FE65}", "\u{FF1E}",
        "\u{00BB}", "\u{226B}", "\u{27EB}", "\u{2A20}", "\u{2AA2}", "\u{2ABC}", "\u{300B}",
        "\u{22D9}", "\u{2AF8}", "\u{29D8}", "\u{29DA}",
    ],
};

/// A death by a thousand cuts for fixed-width renderers
pub const LINGCHI: Selection = Selection {
    title: "Lingchi",
    entries: &[
        "\u{200B}", " ", "\u{2588}", "\u{2042}", "\u{2234}", "\u{0B83}", "%", "\u{2030}",
        "\u{2031}", "\u{2103}", "\u{2122}", "\u{3390}", "\u{33AF}", "\u{222B}", "\u{222C}",
        "\u{222D}", "\u{2A0C}", "\u{21A6}", "\u{27FC}", "\u{2640}\u{FE0E}", "\u{26A2}",
        "\u{264B}\u{FE0E}", "\u{51CC}", "\u{9072}", "!", "\u{FF01}", "\u{2755}", "\u{2757}",
        "\u{2763}", "#",
    ],
};

/// Dashes of increasing length
pub const MAD_DASH: Selection = Selection {
    title: "Mad Dash",
    entries: &[
        "-", "\u{2212}", "\u{2013}", "\u{2014}", "\u{FF0D}", "\u{2E3A}", "\u{2E3B}",
    ],
};

/// Emoji from single code points to ZWJ sequences
pub const TASTE_OF_EMOJI: Selection = Selection {
    title: "Taste of Emoji",
    entries: &[
        "\u{200D}",
        "\u{1F1E9}",
        "\u{26A1}",
        "\u{2692}",
        "\u{1F3DD}",
        "\u{1F596}",
        "\u{1F9D1}",
        "\u{1F4BB}",
        "\u{1F9D1}\u{200D}\u{1F4BB}",
        "\u{1F9D1}\u{200D}\u{1F9B0}",
        "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        "\u{1F1E9}\u{1F1EA}",
        "\u{1F442}\u{1F3FE}",
    ],
};

/// One emoji from each of several emoji versions
///
/// Which of them a terminal renders as a single wide glyph hints at the
/// emoji version it supports.
pub const VERSION_ORACLE: Selection = Selection {
    title: "Version Oracle",
    entries: &[
        "\u{1F4A9}",
        "\u{1F408}\u{FE0F}",
        "\u{1F918}",
        "\u{1F991}",
        "\u{1F9DB}",
        "\u{1F973}",
        "\u{1F9A9}",
        "\u{1FA86}",
        "\u{1FAA9}",
        "\u{1FAE8}",
    ],
};

/// Bases of keycap sequences
pub const KEYCAP_BASES: Selection = Selection {
    title: "Keycap Bases",
    entries: &["#", "*", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
};

/// Fullwidth punctuation
pub const FULLWIDTH_PUNCTUATION: Selection = Selection {
    title: "Fullwidth Punctuation",
    entries: &[
        "\u{FF01}", "\u{FF0C}", "\u{FF0E}", "\u{FF1A}", "\u{FF1B}", "\u{FF1F}",
    ],
};

/// All selections
pub const ALL: &[Selection] = &[
    ARROWS,
    CHEVRONS,
    LINGCHI,
    MAD_DASH,
    TASTE_OF_EMOJI,
    VERSION_ORACLE,
    KEYCAP_BASES,
    FULLWIDTH_PUNCTUATION,
];
