//! Binary properties

use super::normalize_name;
use std::fmt;

/// Supported binary properties
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum BinaryProperty {
    /// Dash punctuation and similar
    Dash,
    /// Ignored by rendering unless explicitly supported
    Default_Ignorable_Code_Point,
    /// Emoji
    Emoji,
    /// Component of emoji sequences, such as keycap bases and skin tones
    Emoji_Component,
    /// Skin tone modifier
    Emoji_Modifier,
    /// Base of a skin tone modifier sequence
    Emoji_Modifier_Base,
    /// Emoji presentation by default
    Emoji_Presentation,
    /// Pictographic symbol, including reserved ranges
    Extended_Pictographic,
    /// Permanently reserved for internal use
    Noncharacter_Code_Point,
    /// Variation selector
    Variation_Selector,
    /// Whitespace
    White_Space,
}

impl BinaryProperty {
    /// All binary properties
    pub const ALL: &'static [BinaryProperty] = &[
        BinaryProperty::Dash,
        BinaryProperty::Default_Ignorable_Code_Point,
        BinaryProperty::Emoji,
        BinaryProperty::Emoji_Component,
        BinaryProperty::Emoji_Modifier,
        BinaryProperty::Emoji_Modifier_Base,
        BinaryProperty::Emoji_Presentation,
        BinaryProperty::Extended_Pictographic,
        BinaryProperty::Noncharacter_Code_Point,
        BinaryProperty::Variation_Selector,
        BinaryProperty::White_Space,
    ];

    /// Long name
    pub const fn name(self) -> &'static str {
        match self {
            BinaryProperty::Dash => "Dash",
            BinaryProperty::Default_Ignorable_Code_Point => "Default_Ignorable_Code_Point",
            BinaryProperty::Emoji => "Emoji",
            BinaryProperty::Emoji_Component => "Emoji_Component",
            BinaryProperty::Emoji_Modifier => "Emoji_Modifier",
            BinaryProperty::Emoji_Modifier_Base => "Emoji_Modifier_Base",
            BinaryProperty::Emoji_Presentation => "Emoji_Presentation",
            BinaryProperty::Extended_Pictographic => "Extended_Pictographic",
            BinaryProperty::Noncharacter_Code_Point => "Noncharacter_Code_Point",
            BinaryProperty::Variation_Selector => "Variation_Selector",
            BinaryProperty::White_Space => "White_Space",
        }
    }

    /// Short alias
    pub const fn alias(self) -> &'static str {
        match self {
            BinaryProperty::Dash => "Dash",
            BinaryProperty::Default_Ignorable_Code_Point => "DI",
            BinaryProperty::Emoji => "Emoji",
            BinaryProperty::Emoji_Component => "EComp",
            BinaryProperty::Emoji_Modifier => "EMod",
            BinaryProperty::Emoji_Modifier_Base => "EBase",
            BinaryProperty::Emoji_Presentation => "EPres",
            BinaryProperty::Extended_Pictographic => "ExtPict",
            BinaryProperty::Noncharacter_Code_Point => "NChar",
            BinaryProperty::Variation_Selector => "VS",
            BinaryProperty::White_Space => "WSpace",
        }
    }

    /// UCD file listing the property
    pub const fn file(self) -> &'static str {
        match self {
            BinaryProperty::Default_Ignorable_Code_Point => "DerivedCoreProperties.txt",
            BinaryProperty::Dash
            | BinaryProperty::Noncharacter_Code_Point
            | BinaryProperty::Variation_Selector
            | BinaryProperty::White_Space => "PropList.txt",
            _ => "emoji-data.txt",
        }
    }

    /// Check for one of the emoji properties, which come from `emoji-data.txt`
    pub const fn is_emoji(self) -> bool {
        matches!(
            self,
            BinaryProperty::Emoji
                | BinaryProperty::Emoji_Component
                | BinaryProperty::Emoji_Modifier
                | BinaryProperty::Emoji_Modifier_Base
                | BinaryProperty::Emoji_Presentation
                | BinaryProperty::Extended_Pictographic
        )
    }

    /// Look up a property by name or alias under loose matching
    pub fn lookup(text: &str) -> Option<BinaryProperty> {
        let key = normalize_name(text);
        Self::ALL
            .iter()
            .copied()
            .find(|p| normalize_name(p.name()) == key || normalize_name(p.alias()) == key)
    }
}

impl fmt::Display for BinaryProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
