//! Canonical_Combining_Class

use crate::error::{FormatError, Result};
use std::fmt;

/// Canonical combining class, a number in `0..=254`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalCombiningClass(pub u8);

const NAMES: &[(u8, &str, &str)] = &[
    (0, "Not_Reordered", "NR"),
    (1, "Overlay", "OV"),
    (6, "Han_Reading", "HANR"),
    (7, "Nukta", "NK"),
    (8, "Kana_Voicing", "KV"),
    (9, "Virama", "VR"),
    (200, "Attached_Below_Left", "ATBL"),
    (202, "Attached_Below", "ATB"),
    (214, "Attached_Above", "ATA"),
    (216, "Attached_Above_Right", "ATAR"),
    (218, "Below_Left", "BL"),
    (220, "Below", "B"),
    (222, "Below_Right", "BR"),
    (224, "Left", "L"),
    (226, "Right", "R"),
    (228, "Above_Left", "AL"),
    (230, "Above", "A"),
    (232, "Above_Right", "AR"),
    (233, "Double_Below", "DB"),
    (234, "Double_Above", "DA"),
    (240, "Iota_Subscript", "IS"),
];

impl CanonicalCombiningClass {
    /// Class 0, the default
    pub const NOT_REORDERED: CanonicalCombiningClass = CanonicalCombiningClass(0);

    /// Parse the numeric value or the name of a named class
    pub fn parse(text: &str) -> Result<Self> {
        if let Ok(value) = text.trim().parse::<u8>() {
            return Ok(CanonicalCombiningClass(value));
        }
        let key = super::normalize_name(text);
        NAMES
            .iter()
            .find(|(_, name, alias)| {
                super::normalize_name(name) == key || super::normalize_name(alias) == key
            })
            .map(|(value, _, _)| CanonicalCombiningClass(*value))
            .ok_or_else(|| {
                FormatError::UnknownValue {
                    property: "Canonical_Combining_Class",
                    value: text.to_string(),
                }
                .into()
            })
    }

    /// Name of a named class; fixed position classes have none
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(value, _, _)| *value == self.0)
            .map(|(_, name, _)| *name)
    }
}

impl fmt::Display for CanonicalCombiningClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "CCC{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(CanonicalCombiningClass::parse("230").unwrap().0, 230);
        assert_eq!(CanonicalCombiningClass::parse("Above").unwrap().0, 230);
        assert_eq!(CanonicalCombiningClass::parse("nk").unwrap().0, 7);
        assert!(CanonicalCombiningClass::parse("Sideways").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CanonicalCombiningClass(0).to_string(), "Not_Reordered");
        assert_eq!(CanonicalCombiningClass(84).to_string(), "CCC84");
    }
}
