//! Ingested property data of one UCD version
//!
//! [`UcdData::load`] reads every mirrored file of a version exactly once and
//! turns it into lookup structures:
//! - a [`RangeTable`] per complex property
//! - a [`RangeList`] per binary property
//! - character names, emoji variation bases and emoji sequences
//!
//! Emoji sequences without names in the UCD files take their names from the
//! CLDR annotations, if the mirror has them.
//!
//! Files that validly do not exist for a version load as empty. Three files
//! hold several properties at once, keyed by the first field of each record:
//! `DerivedCoreProperties.txt`, `PropList.txt` and `emoji-data.txt`. The
//! first emoji release bundled with 8.0 is the odd one out: its
//! `emoji-data.txt` lists emoji rather than properties, so under 8.0 the
//! emoji properties are empty and the file's keys become emoji sequences.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};
use ucdb_core::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, CodePoint, CodePointRange,
    CodePointSet, CodePoints, ComplexProperty, EastAsianWidth, FormatError,
    GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, IndicSyllabicCategory, Predicate,
    PropertyValue, Result, Script, Version,
};
use ucdb_mirror::{Annotations, FileManager};
use ucdb_parser::{ingest, ParseOptions, Partitioned};

use crate::emoji::{variation_bases, EmojiSequences};
use crate::names::Names;
use crate::tables::{RangeList, RangeTable};
use crate::width::WidthProperties;

/// Key of the records of multi-property files that hold Indic_Conjunct_Break
const INCB_KEY: &str = "InCB";

/// Emoji release without property data
const KEYS_ONLY_EMOJI: Version = Version::new(1, 0, 0);

type Raw = Partitioned<(CodePoints, Vec<String>)>;

/// Property whose non-default values can be counted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyId {
    /// A binary property
    Binary(BinaryProperty),
    /// A complex property
    Complex(ComplexProperty),
    /// The emoji sequence table
    EmojiSequence,
}

impl From<BinaryProperty> for PropertyId {
    fn from(property: BinaryProperty) -> Self {
        PropertyId::Binary(property)
    }
}

impl From<ComplexProperty> for PropertyId {
    fn from(property: ComplexProperty) -> Self {
        PropertyId::Complex(property)
    }
}

/// All property data of one UCD version
#[derive(Debug, Clone)]
pub struct UcdData {
    version: Version,
    age: RangeTable<Age>,
    block: RangeTable<Block>,
    combining_class: RangeTable<CanonicalCombiningClass>,
    east_asian_width: RangeTable<EastAsianWidth>,
    general_category: RangeTable<GeneralCategory>,
    grapheme_break: RangeTable<GraphemeClusterBreak>,
    indic_conjunct_break: RangeTable<IndicConjunctBreak>,
    indic_syllabic: RangeTable<IndicSyllabicCategory>,
    script: RangeTable<Script>,
    binary: BTreeMap<BinaryProperty, RangeList>,
    names: Names,
    emoji_variations: BTreeSet<CodePoint>,
    emoji_sequences: EmojiSequences,
}

// ============================================================================
// Loading
// ============================================================================

struct Loader<'a> {
    files: &'a FileManager,
    version: Version,
}

impl Loader<'_> {
    fn read(&self, filename: &str, options: ParseOptions) -> Result<Raw> {
        if self.files.url(filename, self.version)?.is_none() {
            debug!(
                target: "ucdb::db",
                file = filename,
                version = %self.version,
                "File does not exist for version, treating as empty"
            );
            return Ok(Partitioned::default());
        }
        let path = self.files.path(filename, self.version);
        ingest(&path, options, |codepoints, fields| Ok(Some((codepoints, fields))))
    }

    fn read_records(&self, filename: &str) -> Result<Raw> {
        self.read(filename, ParseOptions::default())
    }
}

fn first_field<'a>(codepoints: &CodePoints, fields: &'a [String]) -> Result<&'a str> {
    fields.first().map(String::as_str).ok_or_else(|| {
        FormatError::MalformedRecord {
            line: codepoints.to_string(),
        }
        .into()
    })
}

fn check_cardinality(fields: &[String], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(FormatError::DefaultCardinality {
            expected,
            actual: fields.len(),
        }
        .into());
    }
    Ok(())
}

/// Build the table of a property stored alone in its file
fn build_table<V, F>(raw: Raw, fallback: V, parse: F) -> Result<RangeTable<V>>
where
    V: Copy + PartialEq,
    F: Fn(&str) -> Result<V>,
{
    let mut records = Vec::with_capacity(raw.records.len());
    for (codepoints, fields) in &raw.records {
        let value = parse(first_field(codepoints, fields)?)?;
        records.push((codepoints.to_range()?, value));
    }

    let mut declarations = Vec::with_capacity(raw.defaults.len());
    for (codepoints, fields) in &raw.defaults {
        check_cardinality(fields, 1)?;
        declarations.push((codepoints.to_range()?, parse(&fields[0])?));
    }

    Ok(RangeTable::new(records, declarations, fallback))
}

fn is_yes(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "y" | "yes" | "t" | "true")
}

/// Collect the binary properties of a multi-property file
fn collect_binary(
    filename: &str,
    raw: &Raw,
    lists: &mut BTreeMap<BinaryProperty, Vec<CodePointRange>>,
) -> Result<()> {
    let of_file = |name: &str| BinaryProperty::lookup(name).filter(|p| p.file() == filename);

    for (codepoints, fields) in &raw.records {
        if let Some(property) = of_file(first_field(codepoints, fields)?) {
            lists.entry(property).or_default().push(codepoints.to_range()?);
        }
    }

    for (codepoints, fields) in &raw.defaults {
        check_cardinality(fields, 2)?;
        let Some(property) = of_file(&fields[0]) else {
            continue;
        };
        if !is_yes(&fields[1]) {
            continue;
        }
        let list = lists.entry(property).or_default();
        let listed: CodePointSet = list.iter().copied().collect();
        let declared = CodePointSet::from_ranges([codepoints.to_range()?]).difference(&listed);
        list.extend(declared.ranges().iter().copied());
    }
    Ok(())
}

/// Build the Indic_Conjunct_Break table from `DerivedCoreProperties.txt`
fn build_conjunct_break(raw: &Raw) -> Result<RangeTable<IndicConjunctBreak>> {
    let value_of = |codepoints: &CodePoints, fields: &[String]| -> Result<IndicConjunctBreak> {
        match fields.get(1) {
            Some(value) => IndicConjunctBreak::parse_value(value),
            None => Err(FormatError::MalformedRecord {
                line: codepoints.to_string(),
            }
            .into()),
        }
    };

    let mut records = Vec::new();
    for (codepoints, fields) in &raw.records {
        if first_field(codepoints, fields)? == INCB_KEY {
            records.push((codepoints.to_range()?, value_of(codepoints, fields)?));
        }
    }

    let mut declarations = Vec::new();
    for (codepoints, fields) in &raw.defaults {
        check_cardinality(fields, 2)?;
        if fields[0] == INCB_KEY {
            declarations.push((codepoints.to_range()?, value_of(codepoints, fields)?));
        }
    }

    Ok(RangeTable::new(
        records,
        declarations,
        IndicConjunctBreak::None,
    ))
}

impl UcdData {
    /// Load all property data of a mirrored UCD version
    pub fn load(files: &FileManager, version: Version, annotations: &Annotations) -> Result<Self> {
        let loader = Loader { files, version };

        let age = build_table(loader.read_records("DerivedAge.txt")?, Age::Unassigned, Age::parse_value)?;
        let block = build_table(loader.read_records("Blocks.txt")?, Block::No_Block, Block::parse_value)?;
        let combining_class = build_table(
            loader.read_records("DerivedCombiningClass.txt")?,
            CanonicalCombiningClass::NOT_REORDERED,
            CanonicalCombiningClass::parse,
        )?;
        let east_asian_width = build_table(
            loader.read_records("EastAsianWidth.txt")?,
            EastAsianWidth::Neutral,
            EastAsianWidth::parse_value,
        )?;

        // Unassigned is the default; listing it explicitly only adds ranges
        let mut categories = loader.read_records("DerivedGeneralCategory.txt")?;
        categories.records.retain(|(_, fields)| {
            fields
                .first()
                .and_then(|value| GeneralCategory::lookup(value))
                != Some(GeneralCategory::Unassigned)
        });
        let general_category = build_table(
            categories,
            GeneralCategory::Unassigned,
            GeneralCategory::parse_value,
        )?;

        let grapheme_break = build_table(
            loader.read_records("GraphemeBreakProperty.txt")?,
            GraphemeClusterBreak::Other,
            GraphemeClusterBreak::parse_value,
        )?;
        let indic_syllabic = build_table(
            loader.read_records("IndicSyllabicCategory.txt")?,
            IndicSyllabicCategory::Other,
            IndicSyllabicCategory::parse_value,
        )?;
        let script = build_table(loader.read_records("Scripts.txt")?, Script::Common, Script::parse_value)?;

        let mut lists: BTreeMap<BinaryProperty, Vec<CodePointRange>> = BinaryProperty::ALL
            .iter()
            .map(|property| (*property, Vec::new()))
            .collect();

        let core_properties = loader.read_records("DerivedCoreProperties.txt")?;
        collect_binary("DerivedCoreProperties.txt", &core_properties, &mut lists)?;
        let indic_conjunct_break = build_conjunct_break(&core_properties)?;
        collect_binary("PropList.txt", &loader.read_records("PropList.txt")?, &mut lists)?;

        let emoji_data = loader.read_records("emoji-data.txt")?;
        let mut emoji_sequences = if version.to_emoji() == KEYS_ONLY_EMOJI {
            EmojiSequences::from_keys(emoji_data.records.into_iter().map(|(key, _)| key))?
        } else {
            collect_binary("emoji-data.txt", &emoji_data, &mut lists)?;
            let mut records = loader
                .read("emoji-sequences.txt", ParseOptions::with_comment())?
                .records;
            records.extend(
                loader
                    .read("emoji-zwj-sequences.txt", ParseOptions::with_comment())?
                    .records,
            );
            EmojiSequences::from_records(records)?
        };

        let named = emoji_sequences.fill_names(annotations);
        debug!(target: "ucdb::db", %version, named, "Named emoji sequences from CLDR");

        let emoji_variations = variation_bases(
            loader
                .read_records("emoji-variation-sequences.txt")?
                .records
                .into_iter()
                .map(|(key, _)| key),
        );

        let names = Names::from_records(
            loader
                .read_records("UnicodeData.txt")?
                .records
                .into_iter()
                .map(Ok),
        )?;

        let binary = lists
            .into_iter()
            .map(|(property, ranges)| (property, RangeList::new(ranges)))
            .collect();

        let data = UcdData {
            version,
            age,
            block,
            combining_class,
            east_asian_width,
            general_category,
            grapheme_break,
            indic_conjunct_break,
            indic_syllabic,
            script,
            binary,
            names,
            emoji_variations,
            emoji_sequences,
        };

        info!(
            target: "ucdb::db",
            %version,
            names = data.names.len(),
            emoji_sequences = data.emoji_sequences.len(),
            "Loaded UCD data"
        );
        Ok(data)
    }

    /// The UCD version of the data
    pub fn version(&self) -> Version {
        self.version
    }
}

// ============================================================================
// Point lookups
// ============================================================================

impl UcdData {
    /// Age
    pub fn age(&self, cp: CodePoint) -> Age {
        self.age.get(cp)
    }

    /// Block
    pub fn block(&self, cp: CodePoint) -> Block {
        self.block.get(cp)
    }

    /// Canonical_Combining_Class
    pub fn combining_class(&self, cp: CodePoint) -> CanonicalCombiningClass {
        self.combining_class.get(cp)
    }

    /// East_Asian_Width
    pub fn east_asian_width(&self, cp: CodePoint) -> EastAsianWidth {
        self.east_asian_width.get(cp)
    }

    /// General_Category
    pub fn general_category(&self, cp: CodePoint) -> GeneralCategory {
        self.general_category.get(cp)
    }

    /// Grapheme_Cluster_Break
    pub fn grapheme_break(&self, cp: CodePoint) -> GraphemeClusterBreak {
        self.grapheme_break.get(cp)
    }

    /// Indic_Conjunct_Break
    pub fn indic_conjunct_break(&self, cp: CodePoint) -> IndicConjunctBreak {
        self.indic_conjunct_break.get(cp)
    }

    /// Indic_Syllabic_Category
    pub fn indic_syllabic_category(&self, cp: CodePoint) -> IndicSyllabicCategory {
        self.indic_syllabic.get(cp)
    }

    /// Script
    pub fn script(&self, cp: CodePoint) -> Script {
        self.script.get(cp)
    }

    /// Properties that determine the fixed width
    pub fn width_properties(&self, cp: CodePoint) -> WidthProperties {
        WidthProperties::new(self.general_category(cp), self.east_asian_width(cp))
            .combining_class(self.combining_class(cp))
            .default_ignorable(self.test(cp, BinaryProperty::Default_Ignorable_Code_Point))
    }

    /// Value of a complex property as a predicate
    pub fn resolve(&self, cp: CodePoint, property: ComplexProperty) -> Predicate {
        match property {
            ComplexProperty::Age => self.age(cp).into(),
            ComplexProperty::Block => self.block(cp).into(),
            ComplexProperty::CanonicalCombiningClass => self.combining_class(cp).into(),
            ComplexProperty::EastAsianWidth => self.east_asian_width(cp).into(),
            ComplexProperty::GeneralCategory => self.general_category(cp).into(),
            ComplexProperty::GraphemeClusterBreak => self.grapheme_break(cp).into(),
            ComplexProperty::IndicConjunctBreak => self.indic_conjunct_break(cp).into(),
            ComplexProperty::IndicSyllabicCategory => self.indic_syllabic_category(cp).into(),
            ComplexProperty::Script => self.script(cp).into(),
        }
    }

    /// Check whether a code point has a binary property
    pub fn test(&self, cp: CodePoint, property: BinaryProperty) -> bool {
        self.binary
            .get(&property)
            .is_some_and(|list| list.contains(cp))
    }

    /// All binary properties of a code point
    pub fn flags(&self, cp: CodePoint) -> BTreeSet<BinaryProperty> {
        self.binary
            .iter()
            .filter(|(_, list)| list.contains(cp))
            .map(|(property, _)| *property)
            .collect()
    }

    /// Character name
    pub fn name(&self, cp: CodePoint) -> Option<String> {
        self.names.get(cp)
    }

    /// Check whether a code point has text and emoji variants
    pub fn has_emoji_variation(&self, cp: CodePoint) -> bool {
        self.emoji_variations.contains(&cp)
    }

    /// Emoji sequences
    pub fn emoji_sequences(&self) -> &EmojiSequences {
        &self.emoji_sequences
    }

    /// Ranges of the Extended_Pictographic property
    pub fn extended_pictographic(&self) -> &[CodePointRange] {
        self.binary
            .get(&BinaryProperty::Extended_Pictographic)
            .map(RangeList::ranges)
            .unwrap_or(&[])
    }
}

// ============================================================================
// Counting, materialization and optimization
// ============================================================================

impl UcdData {
    /// Number of explicitly listed code points and of ranges of a property
    pub fn count_nondefault_values(&self, property: PropertyId) -> (usize, usize) {
        match property {
            PropertyId::Binary(property) => self
                .binary
                .get(&property)
                .map(RangeList::count_nondefault_values)
                .unwrap_or((0, 0)),
            PropertyId::Complex(property) => match property {
                ComplexProperty::Age => self.age.count_nondefault_values(),
                ComplexProperty::Block => self.block.count_nondefault_values(),
                ComplexProperty::CanonicalCombiningClass => {
                    self.combining_class.count_nondefault_values()
                }
                ComplexProperty::EastAsianWidth => self.east_asian_width.count_nondefault_values(),
                ComplexProperty::GeneralCategory => {
                    self.general_category.count_nondefault_values()
                }
                ComplexProperty::GraphemeClusterBreak => {
                    self.grapheme_break.count_nondefault_values()
                }
                ComplexProperty::IndicConjunctBreak => {
                    self.indic_conjunct_break.count_nondefault_values()
                }
                ComplexProperty::IndicSyllabicCategory => {
                    self.indic_syllabic.count_nondefault_values()
                }
                ComplexProperty::Script => self.script.count_nondefault_values(),
            },
            PropertyId::EmojiSequence => {
                let count = self.emoji_sequences.len();
                (count, count)
            }
        }
    }

    /// All code points matching a predicate
    ///
    /// General category groups such as `L` match all their member categories.
    pub fn materialize(&self, predicate: Predicate) -> CodePointSet {
        match predicate {
            Predicate::Binary(property) => self
                .binary
                .get(&property)
                .map(RangeList::materialize)
                .unwrap_or_default(),
            Predicate::Age(value) => self.age.materialize(value),
            Predicate::Block(value) => self.block.materialize(value),
            Predicate::Category(group) if group.is_group() => GeneralCategory::ALL
                .iter()
                .filter(|category| !category.is_group() && category.belongs_to(group))
                .fold(CodePointSet::new(), |set, category| {
                    set.union(&self.general_category.materialize(*category))
                }),
            Predicate::Category(value) => self.general_category.materialize(value),
            Predicate::CombiningClass(value) => self.combining_class.materialize(value),
            Predicate::EastAsianWidth(value) => self.east_asian_width.materialize(value),
            Predicate::GraphemeClusterBreak(value) => self.grapheme_break.materialize(value),
            Predicate::IndicConjunctBreak(value) => self.indic_conjunct_break.materialize(value),
            Predicate::IndicSyllabicCategory(value) => self.indic_syllabic.materialize(value),
            Predicate::Script(value) => self.script.materialize(value),
        }
    }

    /// Number of code points matching a predicate
    pub fn count(&self, predicate: Predicate) -> usize {
        self.materialize(predicate).len()
    }

    /// Merge adjacent ranges with equal values in every table
    pub fn simplify(&mut self) {
        self.age.simplify();
        self.block.simplify();
        self.combining_class.simplify();
        self.east_asian_width.simplify();
        self.general_category.simplify();
        self.grapheme_break.simplify();
        self.indic_conjunct_break.simplify();
        self.indic_syllabic.simplify();
        self.script.simplify();
        for list in self.binary.values_mut() {
            list.simplify();
        }
    }
}
