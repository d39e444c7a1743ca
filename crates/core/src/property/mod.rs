//! Unicode properties and their values
//!
//! Every supported property is a closed enumeration. Values carry their long
//! name and short aliases and are looked up by name under Unicode's loose
//! matching rule (UAX44-LM3), implemented by [`normalize_name`]:
//! - a leading `is` is dropped
//! - spaces, hyphens and underscores are ignored
//! - case is ignored
//!
//! The value tables of the complex properties live in `generated.rs`, which
//! `ucdb-codegen` writes from `PropertyValueAliases.txt`.

use crate::error::{FormatError, Result};

mod binary;
mod combining;
mod predicate;

/// Normalize a property or property value name for loose matching
pub fn normalize_name(name: &str) -> String {
    let name = name.strip_prefix("is").unwrap_or(name);
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check whether two names match under loose matching
pub fn are_same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Common interface of enumerated property values
pub trait PropertyValue: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Long name of the property, e.g. `General_Category`
    const PROPERTY: &'static str;

    /// All values in declaration order
    fn all() -> &'static [Self];

    /// Long name of the value
    fn name(self) -> &'static str;

    /// Look up a value by long name or alias under loose matching
    fn lookup(text: &str) -> Option<Self>;

    /// Look up a value, failing with a format error
    fn parse_value(text: &str) -> Result<Self> {
        Self::lookup(text).ok_or_else(|| {
            FormatError::UnknownValue {
                property: Self::PROPERTY,
                value: text.to_string(),
            }
            .into()
        })
    }
}

macro_rules! property_values {
    (
        $(#[$meta:meta])*
        $name:ident ($property:literal, $short:literal) {
            $( $variant:ident = $alias:literal $(| $more:literal)* ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[allow(non_camel_case_types, missing_docs)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            /// Short alias of the property
            pub const SHORT: &'static str = $short;

            /// All values in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Long name of the value
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )*
                }
            }

            /// Preferred short alias of the value
            pub const fn alias(self) -> &'static str {
                match self {
                    $( $name::$variant => $alias, )*
                }
            }

            /// All aliases of the value
            pub const fn aliases(self) -> &'static [&'static str] {
                match self {
                    $( $name::$variant => &[$alias $(, $more)*], )*
                }
            }

            /// Look up a value by long name or alias under loose matching
            pub fn lookup(text: &str) -> Option<Self> {
                static TABLE: once_cell::sync::Lazy<std::collections::HashMap<String, $name>> =
                    once_cell::sync::Lazy::new(|| {
                        let mut table = std::collections::HashMap::new();
                        for value in $name::ALL {
                            table.insert($crate::property::normalize_name(value.name()), *value);
                            for alias in value.aliases() {
                                table.insert($crate::property::normalize_name(alias), *value);
                            }
                        }
                        table
                    });
                TABLE.get(&$crate::property::normalize_name(text)).copied()
            }
        }

        impl $crate::property::PropertyValue for $name {
            const PROPERTY: &'static str = $property;

            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn lookup(text: &str) -> Option<Self> {
                $name::lookup(text)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <$name as $crate::property::PropertyValue>::parse_value(s)
            }
        }
    };
}

mod generated;

pub use binary::BinaryProperty;
pub use combining::CanonicalCombiningClass;
pub use generated::{
    Age, Block, EastAsianWidth, GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak,
    IndicSyllabicCategory, Script,
};
pub use predicate::Predicate;

// =============================================================================
// Hand-written extensions of the generated values
// =============================================================================

impl Age {
    /// Age for a version, `None` if the version assigned no characters
    pub fn of(version: crate::version::Version) -> Option<Age> {
        Age::lookup(&version.short_format()).filter(|age| *age != Age::Unassigned)
    }
}

impl GeneralCategory {
    fn group(self) -> char {
        self.alias().chars().next().unwrap_or('C')
    }

    /// Check for a group value such as `L` or `LC` rather than a leaf category
    pub fn is_group(self) -> bool {
        self.alias().len() == 1 || self == GeneralCategory::Cased_Letter
    }

    /// Check whether this value belongs to `group`, or is `group`
    pub fn belongs_to(self, group: GeneralCategory) -> bool {
        if self == group {
            return true;
        }
        match group {
            GeneralCategory::Cased_Letter => matches!(
                self,
                GeneralCategory::Uppercase_Letter
                    | GeneralCategory::Lowercase_Letter
                    | GeneralCategory::Titlecase_Letter
            ),
            g if g.is_group() => !self.is_group() && self.group() == g.group(),
            _ => false,
        }
    }

    /// Letter
    pub fn is_letter(self) -> bool {
        self.group() == 'L'
    }

    /// Mark
    pub fn is_mark(self) -> bool {
        self.group() == 'M'
    }

    /// Number
    pub fn is_number(self) -> bool {
        self.group() == 'N'
    }

    /// Punctuation
    pub fn is_punctuation(self) -> bool {
        self.group() == 'P'
    }

    /// Symbol
    pub fn is_symbol(self) -> bool {
        self.group() == 'S'
    }

    /// Separator
    pub fn is_separator(self) -> bool {
        self.group() == 'Z'
    }

    /// Other, which includes unassigned code points
    pub fn is_other(self) -> bool {
        self.group() == 'C'
    }
}

impl EastAsianWidth {
    /// Fullwidth or Wide
    pub fn is_wide(self) -> bool {
        matches!(self, EastAsianWidth::Fullwidth | EastAsianWidth::Wide)
    }

    /// Halfwidth or Narrow
    pub fn is_narrow(self) -> bool {
        matches!(self, EastAsianWidth::Halfwidth | EastAsianWidth::Narrow)
    }
}

// =============================================================================
// Complex properties
// =============================================================================

/// The complex properties held as range tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexProperty {
    /// Age
    Age,
    /// Block
    Block,
    /// Canonical_Combining_Class
    CanonicalCombiningClass,
    /// East_Asian_Width
    EastAsianWidth,
    /// General_Category
    GeneralCategory,
    /// Grapheme_Cluster_Break
    GraphemeClusterBreak,
    /// Indic_Conjunct_Break
    IndicConjunctBreak,
    /// Indic_Syllabic_Category
    IndicSyllabicCategory,
    /// Script
    Script,
}

impl ComplexProperty {
    /// All complex properties
    pub const ALL: &'static [ComplexProperty] = &[
        ComplexProperty::Age,
        ComplexProperty::Block,
        ComplexProperty::CanonicalCombiningClass,
        ComplexProperty::EastAsianWidth,
        ComplexProperty::GeneralCategory,
        ComplexProperty::GraphemeClusterBreak,
        ComplexProperty::IndicConjunctBreak,
        ComplexProperty::IndicSyllabicCategory,
        ComplexProperty::Script,
    ];

    /// Long name
    pub fn name(self) -> &'static str {
        match self {
            ComplexProperty::Age => "Age",
            ComplexProperty::Block => "Block",
            ComplexProperty::CanonicalCombiningClass => "Canonical_Combining_Class",
            ComplexProperty::EastAsianWidth => "East_Asian_Width",
            ComplexProperty::GeneralCategory => "General_Category",
            ComplexProperty::GraphemeClusterBreak => "Grapheme_Cluster_Break",
            ComplexProperty::IndicConjunctBreak => "Indic_Conjunct_Break",
            ComplexProperty::IndicSyllabicCategory => "Indic_Syllabic_Category",
            ComplexProperty::Script => "Script",
        }
    }

    /// UCD file holding the property
    pub fn file(self) -> &'static str {
        match self {
            ComplexProperty::Age => "DerivedAge.txt",
            ComplexProperty::Block => "Blocks.txt",
            ComplexProperty::CanonicalCombiningClass => "DerivedCombiningClass.txt",
            ComplexProperty::EastAsianWidth => "EastAsianWidth.txt",
            ComplexProperty::GeneralCategory => "DerivedGeneralCategory.txt",
            ComplexProperty::GraphemeClusterBreak => "GraphemeBreakProperty.txt",
            ComplexProperty::IndicConjunctBreak => "DerivedCoreProperties.txt",
            ComplexProperty::IndicSyllabicCategory => "IndicSyllabicCategory.txt",
            ComplexProperty::Script => "Scripts.txt",
        }
    }

    /// Value of code points not listed in the property's file
    pub fn default_predicate(self) -> Predicate {
        match self {
            ComplexProperty::Age => Predicate::Age(Age::Unassigned),
            ComplexProperty::Block => Predicate::Block(Block::No_Block),
            ComplexProperty::CanonicalCombiningClass => {
                Predicate::CombiningClass(CanonicalCombiningClass::NOT_REORDERED)
            }
            ComplexProperty::EastAsianWidth => {
                Predicate::EastAsianWidth(EastAsianWidth::Neutral)
            }
            ComplexProperty::GeneralCategory => Predicate::Category(GeneralCategory::Unassigned),
            ComplexProperty::GraphemeClusterBreak => {
                Predicate::GraphemeClusterBreak(GraphemeClusterBreak::Other)
            }
            ComplexProperty::IndicConjunctBreak => {
                Predicate::IndicConjunctBreak(IndicConjunctBreak::None)
            }
            ComplexProperty::IndicSyllabicCategory => {
                Predicate::IndicSyllabicCategory(IndicSyllabicCategory::Other)
            }
            ComplexProperty::Script => Predicate::Script(Script::Common),
        }
    }

    /// Look up a property by name or alias under loose matching
    pub fn lookup(text: &str) -> Option<ComplexProperty> {
        let key = normalize_name(text);
        let aliases: [(ComplexProperty, &str); 9] = [
            (ComplexProperty::Age, Age::SHORT),
            (ComplexProperty::Block, Block::SHORT),
            (ComplexProperty::CanonicalCombiningClass, "ccc"),
            (ComplexProperty::EastAsianWidth, EastAsianWidth::SHORT),
            (ComplexProperty::GeneralCategory, GeneralCategory::SHORT),
            (ComplexProperty::GraphemeClusterBreak, GraphemeClusterBreak::SHORT),
            (ComplexProperty::IndicConjunctBreak, IndicConjunctBreak::SHORT),
            (ComplexProperty::IndicSyllabicCategory, IndicSyllabicCategory::SHORT),
            (ComplexProperty::Script, Script::SHORT),
        ];
        aliases
            .into_iter()
            .find(|(p, alias)| normalize_name(p.name()) == key || normalize_name(alias) == key)
            .map(|(p, _)| p)
    }
}

impl std::fmt::Display for ComplexProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
