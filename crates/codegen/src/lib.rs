//! Generation of the property value tables in `ucdb-core`
//!
//! Property values come from `PropertyValueAliases.txt` of the latest
//! mirrored UCD version. Under Unicode's stability policy, values are never
//! removed, so the latest version also covers all earlier ones. The one
//! exception is Indic_Syllabic_Category, which was provisional in 6.0: 7.0
//! split its value Consonant_Repha into Consonant_Preceding_Repha and
//! Consonant_Succeeding_Repha. Consonant_Repha is patched back in so that 6.0
//! data still parses.
//!
//! The output is a sequence of `property_values!` invocations, one per
//! enumerated property, written to `crates/core/src/property/generated.rs`.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};
use ucdb_core::{Error, FormatError, Result, Version};
use ucdb_mirror::Mirror;
use ucdb_parser::{partition_records, ParseOptions, Record, Records};

/// Source file of the property values
pub const ALIASES_FILE: &str = "PropertyValueAliases.txt";

/// Location of the generated module, relative to the workspace root
pub const GENERATED_PATH: &str = "crates/core/src/property/generated.rs";

const HEADER: &str = "// This file is machine-generated by ucdb-codegen. Do not edit by hand.\n";

/// Provisional Indic_Syllabic_Category value of 6.0
const CONSONANT_REPHA: &str = "Consonant_Repha";

/// An enumerated property with a generated value table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedProperty {
    /// Rust type name
    pub type_name: &'static str,
    /// Long property name
    pub property: &'static str,
    /// Short property name, the first field in the alias file
    pub short: &'static str,
    /// Doc comment of the generated type
    pub doc: &'static str,
}

/// Generated properties in output order
pub const PROPERTIES: &[GeneratedProperty] = &[
    GeneratedProperty {
        type_name: "Age",
        property: "Age",
        short: "age",
        doc: "Age of a code point, the version that first assigned it.",
    },
    GeneratedProperty {
        type_name: "Block",
        property: "Block",
        short: "blk",
        doc: "Named block of code points.",
    },
    GeneratedProperty {
        type_name: "EastAsianWidth",
        property: "East_Asian_Width",
        short: "ea",
        doc: "East Asian width.",
    },
    GeneratedProperty {
        type_name: "GeneralCategory",
        property: "General_Category",
        short: "gc",
        doc: "General category, including the group values.",
    },
    GeneratedProperty {
        type_name: "GraphemeClusterBreak",
        property: "Grapheme_Cluster_Break",
        short: "GCB",
        doc: "Grapheme cluster break property, including the values retired after 10.0.",
    },
    GeneratedProperty {
        type_name: "IndicConjunctBreak",
        property: "Indic_Conjunct_Break",
        short: "InCB",
        doc: "Indic conjunct break, new in 15.1.",
    },
    GeneratedProperty {
        type_name: "IndicSyllabicCategory",
        property: "Indic_Syllabic_Category",
        short: "InSC",
        doc: "Indic syllabic category, including the provisional Consonant_Repha.",
    },
    GeneratedProperty {
        type_name: "Script",
        property: "Script",
        short: "sc",
        doc: "Script.",
    },
];

/// One property value with its aliases
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValueAlias {
    /// Long name, the enumeration variant
    pub name: String,
    /// Preferred short alias
    pub alias: String,
    /// Further aliases
    pub more: Vec<String>,
}

/// Values per short property name
pub type PropertyValues = BTreeMap<&'static str, Vec<ValueAlias>>;

// ============================================================================
// Collection
// ============================================================================

/// Collect the values of the generated properties from alias records
///
/// Records must be parsed with [`ParseOptions::without_codepoints`]. Values
/// keep their order in the file, except for Indic_Syllabic_Category, which is
/// sorted after patching.
///
/// # Errors
///
/// Fails on malformed records and if a generated property has no values.
pub fn collect_values<I>(records: I) -> Result<PropertyValues>
where
    I: IntoIterator<Item = Result<Record>>,
{
    let partitioned = partition_records(records, |_, mut fields| {
        if fields.len() < 3 {
            return Err(FormatError::MalformedRecord {
                line: fields.join("; "),
            }
            .into());
        }
        let Some(property) = PROPERTIES.iter().find(|p| p.short == fields[0]) else {
            return Ok(None);
        };

        let more = fields.split_off(3);
        let name = fields.swap_remove(2);
        let alias = fields.swap_remove(1);
        let more = more.into_iter().filter(|m| *m != name && *m != alias).collect();
        Ok(Some((property.short, ValueAlias { name, alias, more })))
    })?;

    let mut values = PropertyValues::new();
    for (short, value) in partitioned.records {
        values.entry(short).or_default().push(value);
    }

    if let Some(categories) = values.get_mut("InSC") {
        if !categories.iter().any(|v| v.name == CONSONANT_REPHA) {
            debug!(target: "ucdb::codegen", "Patching in {CONSONANT_REPHA}");
            categories.push(ValueAlias {
                name: CONSONANT_REPHA.to_string(),
                alias: CONSONANT_REPHA.to_string(),
                more: Vec::new(),
            });
        }
        categories.sort();
    }

    for property in PROPERTIES {
        if values.get(property.short).map_or(true, Vec::is_empty) {
            return Err(Error::InvalidOperation(format!(
                "{ALIASES_FILE} has no values for {}",
                property.property
            )));
        }
    }
    Ok(values)
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the generated module
pub fn render(values: &PropertyValues) -> String {
    let mut out = String::from(HEADER);
    for property in PROPERTIES {
        let _ = write!(
            out,
            "\nproperty_values! {{\n    /// {}\n    {}(\"{}\", \"{}\") {{\n",
            property.doc, property.type_name, property.property, property.short
        );
        for value in values.get(property.short).into_iter().flatten() {
            let _ = write!(out, "        {} = \"{}\"", value.name, value.alias);
            for more in &value.more {
                let _ = write!(out, " | \"{more}\"");
            }
            out.push_str(",\n");
        }
        out.push_str("    }\n}\n");
    }
    out
}

// ============================================================================
// Driver
// ============================================================================

/// Generate the module from the latest version of a mirror
///
/// Retrieves the version's files if the mirror lacks them. Returns the
/// version used.
pub fn generate(mirror: &mut Mirror, output: &Path) -> Result<Version> {
    let version = mirror.require(mirror.latest_version())?;
    let file = mirror.open(ALIASES_FILE, version)?.ok_or_else(|| {
        Error::UnsupportedFile(format!("{ALIASES_FILE} for {version}"))
    })?;

    let records = Records::new(
        BufReader::new(file).lines(),
        ParseOptions::without_codepoints(),
    );
    let values = collect_values(records)?;
    fs::write(output, render(&values))?;

    info!(
        target: "ucdb::codegen",
        %version,
        output = %output.display(),
        values = values.values().map(Vec::len).sum::<usize>(),
        "Generated property values"
    );
    Ok(version)
}
