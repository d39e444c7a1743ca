//! Database facade
//!
//! A [`Database`] answers property queries for one UCD version. It goes
//! through three states:
//!
//! 1. **Unconfigured**: [`Database::use_path`], [`Database::use_version`] and
//!    [`Database::use_transport`] may change the configuration.
//! 2. **Prepared**: the mirror is set up, the version's files are mirrored
//!    and ingested. Preparation happens at most once, either explicitly via
//!    [`Database::prepare`] or implicitly on the first query. Configuration
//!    methods fail from here on.
//! 3. **Optimized** (optional): [`Database::optimize`] has merged adjacent
//!    ranges in every table.
//!
//! ## Concurrency
//!
//! Queries take `&self` and may run from several threads once the database
//! is prepared. Preparation itself is serialized by a `OnceCell`.
//! `optimize` takes `&mut self`.

pub mod config;
mod registry;

pub use config::{DatabaseConfig, CONFIG_FILE_NAME};

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use ucdb_core::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, CodePoint, CodePointRange, CodePointSet,
    ComplexProperty, EastAsianWidth, Error, GeneralCategory, GraphemeClusterBreak,
    IndicConjunctBreak, IndicSyllabicCategory, Predicate, Result, Script, Version,
};
use ucdb_mirror::{Annotations, HttpTransport, Mirror, Transport};

use crate::character::CharacterData;
use crate::data::{PropertyId, UcdData};
use crate::emoji::EmojiSequence;
use crate::grapheme::{grapheme_breaks, BreakClass};
use crate::width::{fixed_width, total_width};

/// Width of a recommended emoji sequence
const EMOJI_SEQUENCE_WIDTH: i8 = 2;

struct Prepared {
    mirror: Mirror,
    data: UcdData,
    is_optimized: bool,
}

/// Unicode character database for one UCD version
pub struct Database {
    config: DatabaseConfig,
    transport: Arc<dyn Transport>,
    prepared: OnceCell<Prepared>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("config", &self.config)
            .field("is_prepared", &self.is_prepared())
            .field("is_optimized", &self.is_optimized())
            .finish_non_exhaustive()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Configuration
// ============================================================================

impl Database {
    /// Database with the default configuration, using the network as needed
    pub fn new() -> Self {
        Self::with_config(DatabaseConfig::default())
    }

    /// Database with an explicit configuration
    pub fn with_config(config: DatabaseConfig) -> Self {
        Database {
            config,
            transport: Arc::new(HttpTransport::new()),
            prepared: OnceCell::new(),
        }
    }

    /// Replace the transport used for retrieving files
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Open the database whose mirror lives in `path`.
    ///
    /// Reads `ucdb.toml` from the directory, creating a default one if it
    /// does not exist yet. The mirror root is `path` unless the file names
    /// another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the config file
    /// cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        DatabaseConfig::write_default_if_missing(&config_path)?;
        let mut config = DatabaseConfig::from_file(&config_path)?;
        if config.root.is_none() {
            config.root = Some(data_dir);
        }

        Ok(Self::with_config(config))
    }

    /// The configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn check_unconfigured(&self, operation: &str) -> Result<()> {
        if self.is_prepared() {
            return Err(Error::InvalidOperation(format!(
                "cannot {operation} after the database has been prepared"
            )));
        }
        Ok(())
    }

    /// Use the mirror at `root`
    pub fn use_path(&mut self, root: impl Into<PathBuf>) -> Result<&mut Self> {
        self.check_unconfigured("change the mirror root")?;
        self.config.root = Some(root.into());
        Ok(self)
    }

    /// Use a specific UCD version instead of the latest one
    pub fn use_version(&mut self, version: Version) -> Result<&mut Self> {
        self.check_unconfigured("change the version")?;
        let version = version.validate_ucd()?;
        self.config.version = Some(version.to_string());
        Ok(self)
    }

    /// Use a different transport for retrieving files
    pub fn use_transport(&mut self, transport: Arc<dyn Transport>) -> Result<&mut Self> {
        self.check_unconfigured("change the transport")?;
        self.transport = transport;
        Ok(self)
    }
}

// ============================================================================
// Preparation and optimization
// ============================================================================

impl Database {
    /// Check whether the database has been prepared
    pub fn is_prepared(&self) -> bool {
        self.prepared.get().is_some()
    }

    /// Set up the mirror, mirror the version's files and ingest them.
    ///
    /// Idempotent. Every query calls this first.
    pub fn prepare(&self) -> Result<()> {
        self.prepared().map(|_| ())
    }

    fn prepared(&self) -> Result<&Prepared> {
        self.prepared.get_or_try_init(|| {
            let configured = self.config.version()?;
            let mut mirror = Mirror::setup(self.config.mirror_config(), Arc::clone(&self.transport))?;
            let version = configured.unwrap_or_else(|| mirror.latest_version());
            let version = mirror.require(version)?;
            let annotations = match &mirror.manifest().cldr {
                Some(cldr) => Annotations::load(mirror.root(), cldr)?,
                None => Annotations::default(),
            };
            let data = UcdData::load(&mirror.files(), version, &annotations)?;

            info!(
                target: "ucdb::db",
                root = %mirror.root().display(),
                %version,
                "Prepared database"
            );
            Ok(Prepared {
                mirror,
                data,
                is_optimized: false,
            })
        })
    }

    fn data(&self) -> Result<&UcdData> {
        Ok(&self.prepared()?.data)
    }

    /// The UCD version of the database
    pub fn version(&self) -> Result<Version> {
        Ok(self.data()?.version())
    }

    /// The mirror backing the database
    pub fn mirror(&self) -> Result<&Mirror> {
        Ok(&self.prepared()?.mirror)
    }

    /// Check whether [`Database::optimize`] has run
    pub fn is_optimized(&self) -> bool {
        self.prepared.get().is_some_and(|p| p.is_optimized)
    }

    /// Merge adjacent ranges with equal values in every table.
    ///
    /// Idempotent. Never changes which code points have which values; only
    /// the number of ranges may shrink.
    pub fn optimize(&mut self) -> Result<()> {
        self.prepare()?;
        let Some(prepared) = self.prepared.get_mut() else {
            return Ok(());
        };
        if prepared.is_optimized {
            return Ok(());
        }

        let properties = all_properties();
        let before: Vec<(usize, usize)> = properties
            .iter()
            .map(|p| prepared.data.count_nondefault_values(*p))
            .collect();

        prepared.data.simplify();

        let mut ranges_before = 0;
        let mut ranges_after = 0;
        for (property, (points, ranges)) in properties.iter().zip(before) {
            let (points_after, ranges_now) = prepared.data.count_nondefault_values(*property);
            assert_eq!(
                points, points_after,
                "optimizing changed the number of code points of {property:?}"
            );
            assert!(ranges_now <= ranges, "optimizing added ranges to {property:?}");
            ranges_before += ranges;
            ranges_after += ranges_now;
        }

        prepared.is_optimized = true;
        info!(
            target: "ucdb::db",
            version = %prepared.data.version(),
            ranges_before,
            ranges_after,
            "Optimized database"
        );
        Ok(())
    }
}

/// Every property with countable values
pub fn all_properties() -> Vec<PropertyId> {
    BinaryProperty::ALL
        .iter()
        .map(|p| PropertyId::Binary(*p))
        .chain(ComplexProperty::ALL.iter().map(|p| PropertyId::Complex(*p)))
        .chain(std::iter::once(PropertyId::EmojiSequence))
        .collect()
}

// ============================================================================
// Point lookups
// ============================================================================

impl Database {
    /// Everything about one code point
    pub fn lookup(&self, cp: CodePoint) -> Result<CharacterData> {
        let data = self.data()?;
        Ok(CharacterData {
            codepoint: cp,
            category: data.general_category(cp),
            east_asian_width: data.east_asian_width(cp),
            combining_class: data.combining_class(cp),
            age: Some(data.age(cp)).filter(|age| *age != Age::Unassigned),
            name: data.name(cp),
            block: Some(data.block(cp)).filter(|block| *block != Block::No_Block),
            flags: data.flags(cp),
        })
    }

    /// Value of a complex property
    pub fn resolve(&self, cp: CodePoint, property: ComplexProperty) -> Result<Predicate> {
        Ok(self.data()?.resolve(cp, property))
    }

    /// Age, `None` for unassigned code points
    pub fn resolve_age(&self, cp: CodePoint) -> Result<Option<Age>> {
        Ok(Some(self.data()?.age(cp)).filter(|age| *age != Age::Unassigned))
    }

    /// Block, `None` outside of all blocks
    pub fn resolve_block(&self, cp: CodePoint) -> Result<Option<Block>> {
        Ok(Some(self.data()?.block(cp)).filter(|block| *block != Block::No_Block))
    }

    /// Canonical_Combining_Class
    pub fn resolve_combining_class(&self, cp: CodePoint) -> Result<CanonicalCombiningClass> {
        Ok(self.data()?.combining_class(cp))
    }

    /// East_Asian_Width
    pub fn resolve_east_asian_width(&self, cp: CodePoint) -> Result<EastAsianWidth> {
        Ok(self.data()?.east_asian_width(cp))
    }

    /// General_Category
    pub fn resolve_general_category(&self, cp: CodePoint) -> Result<GeneralCategory> {
        Ok(self.data()?.general_category(cp))
    }

    /// Grapheme_Cluster_Break
    pub fn resolve_grapheme_cluster_break(&self, cp: CodePoint) -> Result<GraphemeClusterBreak> {
        Ok(self.data()?.grapheme_break(cp))
    }

    /// Indic_Conjunct_Break
    pub fn resolve_indic_conjunct_break(&self, cp: CodePoint) -> Result<IndicConjunctBreak> {
        Ok(self.data()?.indic_conjunct_break(cp))
    }

    /// Indic_Syllabic_Category
    pub fn resolve_indic_syllabic_category(&self, cp: CodePoint) -> Result<IndicSyllabicCategory> {
        Ok(self.data()?.indic_syllabic_category(cp))
    }

    /// Script
    pub fn resolve_script(&self, cp: CodePoint) -> Result<Script> {
        Ok(self.data()?.script(cp))
    }

    /// Character name
    pub fn name(&self, cp: CodePoint) -> Result<Option<String>> {
        Ok(self.data()?.name(cp))
    }

    /// Check whether a code point has a binary property
    pub fn test(&self, cp: CodePoint, property: BinaryProperty) -> Result<bool> {
        Ok(self.data()?.test(cp, property))
    }

    /// Fixed display width of a code point, -1 if it cannot be displayed
    pub fn fixed_width(&self, cp: CodePoint) -> Result<i8> {
        let data = self.data()?;
        Ok(fixed_width(cp, data.width_properties(cp)))
    }

    /// Display width of a sequence
    ///
    /// Emoji sequences are two columns wide. Other sequences are as wide as
    /// the sum of their code points' fixed widths, or -1 if any code point
    /// cannot be displayed.
    pub fn width(&self, codepoints: &[CodePoint]) -> Result<i8> {
        if self.is_emoji_sequence(codepoints)? {
            return Ok(EMOJI_SEQUENCE_WIDTH);
        }
        let widths = codepoints
            .iter()
            .map(|cp| self.fixed_width(*cp))
            .collect::<Result<Vec<_>>>()?;
        Ok(total_width(widths))
    }
}

// ============================================================================
// Emoji
// ============================================================================

impl Database {
    /// Check whether a code point has text and emoji variants
    pub fn has_emoji_variation(&self, cp: CodePoint) -> Result<bool> {
        Ok(self.data()?.has_emoji_variation(cp))
    }

    /// Check whether code points form a recommended emoji sequence
    pub fn is_emoji_sequence(&self, codepoints: &[CodePoint]) -> Result<bool> {
        Ok(self.data()?.emoji_sequences().get(codepoints).is_some())
    }

    /// Name and age of an emoji sequence
    pub fn emoji_sequence_data(&self, codepoints: &[CodePoint]) -> Result<Option<EmojiSequence>> {
        Ok(self.data()?.emoji_sequences().get(codepoints).cloned())
    }

    /// Ranges of the Extended_Pictographic property
    pub fn extended_pictographic_ranges(&self) -> Result<Vec<CodePointRange>> {
        Ok(self.data()?.extended_pictographic().to_vec())
    }
}

// ============================================================================
// Counting and materialization
// ============================================================================

impl Database {
    /// Number of explicitly listed code points and of ranges of a property
    pub fn count_nondefault_values(&self, property: impl Into<PropertyId>) -> Result<(usize, usize)> {
        Ok(self.data()?.count_nondefault_values(property.into()))
    }

    /// Number of code points matching a predicate
    pub fn count(&self, predicate: impl Into<Predicate>) -> Result<usize> {
        Ok(self.data()?.count(predicate.into()))
    }

    /// All code points matching a predicate
    pub fn materialize(&self, predicate: impl Into<Predicate>) -> Result<CodePointSet> {
        Ok(self.data()?.materialize(predicate.into()))
    }
}

// ============================================================================
// Grapheme clusters
// ============================================================================

impl Database {
    /// Grapheme cluster break class of a code point
    pub fn grapheme_cluster(&self, cp: CodePoint) -> Result<BreakClass> {
        let data = self.data()?;
        Ok(BreakClass::classify(
            cp,
            data.test(cp, BinaryProperty::Extended_Pictographic),
            data.indic_conjunct_break(cp),
            data.grapheme_break(cp),
        ))
    }

    /// Grapheme cluster boundaries of a sequence, including 0 and its length
    pub fn grapheme_cluster_breaks(&self, codepoints: &[CodePoint]) -> Result<Vec<usize>> {
        let classes = codepoints
            .iter()
            .map(|cp| self.grapheme_cluster(*cp))
            .collect::<Result<Vec<_>>>()?;
        Ok(grapheme_breaks(&classes, self.version()?))
    }

    /// Check whether a non-empty sequence forms exactly one grapheme cluster
    pub fn is_grapheme_cluster(&self, codepoints: &[CodePoint]) -> Result<bool> {
        let breaks = self.grapheme_cluster_breaks(codepoints)?;
        Ok(breaks.len() == 2)
    }
}
