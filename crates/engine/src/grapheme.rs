//! Extended grapheme cluster boundaries
//!
//! Segmentation runs in two steps. First, every code point is classified
//! into a [`BreakClass`], which layers Extended_Pictographic and
//! Indic_Conjunct_Break on top of Grapheme_Cluster_Break. Second,
//! [`BreakState`] walks the classes once, deciding for every position
//! between two code points whether it is a boundary.
//!
//! The rules are those of UAX #29, checked in order:
//!
//! | Rule    | Pattern                                                  |
//! |---------|----------------------------------------------------------|
//! | GB3     | CR × LF                                                  |
//! | GB4/5   | (Control \| CR \| LF) ÷, ÷ (Control \| CR \| LF)          |
//! | GB6–8   | Hangul syllable sequences                                |
//! | GB9     | × (Extend \| ZWJ)                                        |
//! | GB9a/b  | × SpacingMark, Prepend ×                                 |
//! | GB9c    | InCB Consonant [Extend Linker]* Linker [Extend Linker]* × InCB Consonant |
//! | GB10    | (E_Base \| E_Base_GAZ) Extend* × E_Modifier               |
//! | GB11    | ExtPict Extend* ZWJ × ExtPict; ZWJ × (Glue_After_Zwj \| E_Base_GAZ) |
//! | GB12/13 | pairs of Regional_Indicator                              |
//! | GB999   | ÷ everywhere else                                        |
//!
//! Rules only fire when the data has the classes they mention. Hence the
//! emoji modifier rules only apply to 9.0 and 10.0, and the Indic conjunct
//! rule only to 15.1 and later. Regional indicators pair up from 9.0 onward;
//! before, they never break.

use ucdb_core::{CodePoint, GraphemeClusterBreak, IndicConjunctBreak, Version};

/// First version in which regional indicators pair up
const RI_PAIRING_VERSION: Version = Version::new(9, 0, 0);

/// Grapheme cluster break class of a code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakClass {
    /// Prepended concatenation mark
    Prepend,
    /// Carriage return
    CR,
    /// Line feed
    LF,
    /// Other control
    Control,
    /// Grapheme extender
    Extend,
    /// Regional indicator, one half of a flag
    RegionalIndicator,
    /// Spacing combining mark
    SpacingMark,
    /// Hangul leading consonant
    L,
    /// Hangul vowel
    V,
    /// Hangul trailing consonant
    T,
    /// Hangul LV syllable
    LV,
    /// Hangul LVT syllable
    LVT,
    /// Zero width joiner
    ZWJ,
    /// Anything else
    Other,
    /// Extended pictographic
    ExtendedPictographic,
    /// Emoji modifier base, 9.0 and 10.0
    EBase,
    /// Emoji modifier base after ZWJ, 9.0 and 10.0
    EBaseGAZ,
    /// Emoji modifier, 9.0 and 10.0
    EModifier,
    /// Glue after ZWJ, 9.0 and 10.0
    GlueAfterZwj,
    /// Indic conjunct consonant
    InCBConsonant,
    /// Indic conjunct extender
    InCBExtend,
    /// Indic conjunct linker
    InCBLinker,
}

impl BreakClass {
    /// Classify a code point from its properties
    pub fn classify(
        cp: CodePoint,
        is_extended_pictographic: bool,
        conjunct: IndicConjunctBreak,
        cluster: GraphemeClusterBreak,
    ) -> BreakClass {
        if is_extended_pictographic {
            return BreakClass::ExtendedPictographic;
        }
        if cp != CodePoint::ZERO_WIDTH_JOINER {
            match conjunct {
                IndicConjunctBreak::Consonant => return BreakClass::InCBConsonant,
                IndicConjunctBreak::Extend => return BreakClass::InCBExtend,
                IndicConjunctBreak::Linker => return BreakClass::InCBLinker,
                IndicConjunctBreak::None => {}
            }
        }
        BreakClass::from(cluster)
    }

    fn is_control(self) -> bool {
        matches!(self, BreakClass::Control | BreakClass::CR | BreakClass::LF)
    }

    /// Grapheme_Cluster_Break=Extend, including the Indic conjunct carve-outs
    fn is_extend(self) -> bool {
        matches!(
            self,
            BreakClass::Extend | BreakClass::InCBExtend | BreakClass::InCBLinker
        )
    }
}

impl From<GraphemeClusterBreak> for BreakClass {
    fn from(value: GraphemeClusterBreak) -> Self {
        use GraphemeClusterBreak as GCB;
        match value {
            GCB::Control => BreakClass::Control,
            GCB::CR => BreakClass::CR,
            GCB::E_Base => BreakClass::EBase,
            GCB::E_Base_GAZ => BreakClass::EBaseGAZ,
            GCB::E_Modifier => BreakClass::EModifier,
            GCB::Extend => BreakClass::Extend,
            GCB::Glue_After_Zwj => BreakClass::GlueAfterZwj,
            GCB::L => BreakClass::L,
            GCB::LF => BreakClass::LF,
            GCB::LV => BreakClass::LV,
            GCB::LVT => BreakClass::LVT,
            GCB::Prepend => BreakClass::Prepend,
            GCB::Regional_Indicator => BreakClass::RegionalIndicator,
            GCB::SpacingMark => BreakClass::SpacingMark,
            GCB::T => BreakClass::T,
            GCB::V => BreakClass::V,
            GCB::Other => BreakClass::Other,
            GCB::ZWJ => BreakClass::ZWJ,
        }
    }
}

// ============================================================================
// State machine
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pictographic {
    None,
    /// ExtPict Extend*
    Seen,
    /// ExtPict Extend* ZWJ
    Joined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conjunct {
    None,
    /// Consonant [Extend Linker]* without Linker
    Consonant,
    /// Consonant [Extend Linker]* with at least one Linker
    Linked,
}

/// Boundary state machine over break classes
///
/// Feed classes in order with [`BreakState::advance`]; each call after the
/// first reports whether there is a boundary before the new class.
#[derive(Clone, Debug)]
pub struct BreakState {
    pair_regional_indicators: bool,
    previous: Option<BreakClass>,
    regional_indicators: usize,
    pictographic: Pictographic,
    conjunct: Conjunct,
    emoji_base: bool,
}

impl BreakState {
    /// Fresh state for the rules of a UCD version
    pub fn new(version: Version) -> Self {
        BreakState {
            pair_regional_indicators: version >= RI_PAIRING_VERSION,
            previous: None,
            regional_indicators: 0,
            pictographic: Pictographic::None,
            conjunct: Conjunct::None,
            emoji_base: false,
        }
    }

    /// Consume the next class, returning whether a boundary precedes it
    ///
    /// The first class always starts a cluster.
    pub fn advance(&mut self, class: BreakClass) -> bool {
        let boundary = match self.previous {
            None => true,
            Some(previous) => self.is_boundary(previous, class),
        };
        self.update(class);
        boundary
    }

    fn is_boundary(&self, previous: BreakClass, class: BreakClass) -> bool {
        use BreakClass::*;

        // GB3
        if previous == CR && class == LF {
            return false;
        }
        // GB4, GB5
        if previous.is_control() || class.is_control() {
            return true;
        }
        // GB6, GB7, GB8
        match (previous, class) {
            (L, L | V | LV | LVT) | (LV | V, V | T) | (LVT | T, T) => return false,
            _ => {}
        }
        // GB9, GB9a, GB9b
        if class.is_extend() || class == ZWJ || class == SpacingMark || previous == Prepend {
            return false;
        }
        // GB9c
        if self.conjunct == Conjunct::Linked && class == InCBConsonant {
            return false;
        }
        // GB10
        if self.emoji_base && class == EModifier {
            return false;
        }
        // GB11
        if self.pictographic == Pictographic::Joined && class == ExtendedPictographic {
            return false;
        }
        if previous == ZWJ && matches!(class, GlueAfterZwj | EBaseGAZ) {
            return false;
        }
        // GB12, GB13
        if previous == RegionalIndicator && class == RegionalIndicator {
            return self.pair_regional_indicators && self.regional_indicators % 2 == 0;
        }
        // GB999
        true
    }

    fn update(&mut self, class: BreakClass) {
        use BreakClass::*;

        self.regional_indicators = if class == RegionalIndicator {
            self.regional_indicators + 1
        } else {
            0
        };

        self.pictographic = match class {
            ExtendedPictographic => Pictographic::Seen,
            _ if class.is_extend() => match self.pictographic {
                Pictographic::Seen => Pictographic::Seen,
                _ => Pictographic::None,
            },
            ZWJ if self.pictographic == Pictographic::Seen => Pictographic::Joined,
            _ => Pictographic::None,
        };

        self.conjunct = match class {
            InCBConsonant => Conjunct::Consonant,
            InCBExtend | ZWJ => self.conjunct,
            InCBLinker if self.conjunct != Conjunct::None => Conjunct::Linked,
            _ => Conjunct::None,
        };

        self.emoji_base = match class {
            EBase | EBaseGAZ => true,
            Extend => self.emoji_base,
            _ => false,
        };

        self.previous = Some(class);
    }
}

/// Boundary positions of a classified sequence, including 0 and its length
///
/// An empty sequence has no boundaries.
pub fn grapheme_breaks(classes: &[BreakClass], version: Version) -> Vec<usize> {
    if classes.is_empty() {
        return Vec::new();
    }

    let mut state = BreakState::new(version);
    let mut breaks: Vec<usize> = classes
        .iter()
        .enumerate()
        .filter_map(|(index, class)| state.advance(*class).then_some(index))
        .collect();
    breaks.push(classes.len());
    breaks
}
