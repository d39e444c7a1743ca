//! Sorted range data with bisecting lookup
//!
//! A [`RangeTable`] holds the values of one enumerated property. It keeps
//! three layers, consulted in order:
//! - ranges listed explicitly in the property's file
//! - ranges covered by the file's `# @missing:` declarations, flattened so
//!   that a later declaration overrides an earlier one on its sub-range
//! - a fixed fallback for code points covered by neither
//!
//! A [`RangeList`] holds the code points of one binary property.
//!
//! Both look up code points by bisecting on each range's end, then check
//! containment. `simplify` merges adjacent ranges without ever changing the
//! set of code points matching any value.

use ucdb_core::{CodePoint, CodePointRange, CodePointSet};
use ucdb_parser::{simplify_range_data, simplify_ranges};

// ============================================================================
// Bisection
// ============================================================================

/// Index of the only range that may contain `cp`
///
/// That is the first range ending at or after `cp`, or `ranges.len()` if all
/// ranges end before `cp`.
fn bisect<T>(ranges: &[T], cp: CodePoint, range_of: impl Fn(&T) -> CodePointRange) -> usize {
    let index = ranges.partition_point(|item| range_of(item).stop() < cp);

    if cfg!(debug_assertions) {
        if index == ranges.len() {
            if let Some(last) = ranges.last() {
                debug_assert!(range_of(last).stop() < cp, "{cp} should come after last range");
            }
        } else {
            let range = range_of(&ranges[index]);
            if !range.contains(cp) {
                debug_assert!(cp < range.start(), "{cp} should come before {range}");
            }
            if index > 0 {
                let previous = range_of(&ranges[index - 1]);
                debug_assert!(previous.stop() < cp, "{cp} should come after {previous}");
            }
        }
    }

    index
}

fn sort_by_start<T>(items: &mut [T], range_of: impl Fn(&T) -> CodePointRange) {
    items.sort_by_key(|item| range_of(item).start());
}

// ============================================================================
// Range tables
// ============================================================================

/// Values of an enumerated property, by code point range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable<V> {
    ranges: Vec<(CodePointRange, V)>,
    defaults: Vec<(CodePointRange, V)>,
    fallback: V,
}

impl<V: Copy + PartialEq> RangeTable<V> {
    /// Create a table without any ranges
    pub fn empty(fallback: V) -> Self {
        RangeTable {
            ranges: Vec::new(),
            defaults: Vec::new(),
            fallback,
        }
    }

    /// Create a table from explicit records and default declarations
    ///
    /// Records may come in any order but must not overlap. Declarations are
    /// applied in order.
    pub fn new<R, D>(records: R, declarations: D, fallback: V) -> Self
    where
        R: IntoIterator<Item = (CodePointRange, V)>,
        D: IntoIterator<Item = (CodePointRange, V)>,
    {
        let mut ranges: Vec<(CodePointRange, V)> = records.into_iter().collect();
        sort_by_start(&mut ranges, |(r, _)| *r);

        let mut defaults = Vec::new();
        for (range, value) in declarations {
            overlay(&mut defaults, range, value);
        }

        RangeTable {
            ranges,
            defaults,
            fallback,
        }
    }

    /// Value for a code point
    pub fn get(&self, cp: CodePoint) -> V {
        self.get_explicit(cp)
            .or_else(|| find(&self.defaults, cp))
            .unwrap_or(self.fallback)
    }

    /// Value for a code point if listed explicitly
    pub fn get_explicit(&self, cp: CodePoint) -> Option<V> {
        find(&self.ranges, cp)
    }

    /// Value of code points covered neither by records nor declarations
    pub fn fallback(&self) -> V {
        self.fallback
    }

    /// The explicit records, sorted
    pub fn ranges(&self) -> &[(CodePointRange, V)] {
        &self.ranges
    }

    /// The flattened default declarations, sorted
    pub fn defaults(&self) -> &[(CodePointRange, V)] {
        &self.defaults
    }

    /// Number of explicitly listed code points and of explicit ranges
    pub fn count_nondefault_values(&self) -> (usize, usize) {
        let points = self.ranges.iter().map(|(r, _)| r.len()).sum();
        (points, self.ranges.len())
    }

    /// All code points with `value`
    pub fn materialize(&self, value: V) -> CodePointSet {
        let listed = CodePointSet::from_ranges(self.ranges.iter().map(|(r, _)| *r));
        let explicit = select(&self.ranges, value);
        let declared = select(&self.defaults, value).difference(&listed);
        let mut result = explicit.union(&declared);

        if self.fallback == value {
            let covered = listed.union(&CodePointSet::from_ranges(
                self.defaults.iter().map(|(r, _)| *r),
            ));
            result = result.union(&covered.complement());
        }
        result
    }

    /// Number of code points with `value`
    pub fn count(&self, value: V) -> usize {
        self.materialize(value).len()
    }

    /// Merge adjacent ranges with equal values
    pub fn simplify(&mut self) {
        self.ranges = simplify_range_data(std::mem::take(&mut self.ranges));
        self.defaults = simplify_range_data(std::mem::take(&mut self.defaults));
    }
}

fn find<V: Copy>(ranges: &[(CodePointRange, V)], cp: CodePoint) -> Option<V> {
    let index = bisect(ranges, cp, |(r, _)| *r);
    ranges
        .get(index)
        .filter(|(range, _)| range.contains(cp))
        .map(|(_, value)| *value)
}

fn select<V: PartialEq>(ranges: &[(CodePointRange, V)], value: V) -> CodePointSet {
    ranges
        .iter()
        .filter(|(_, v)| *v == value)
        .map(|(r, _)| *r)
        .collect()
}

/// Lay `range` with `value` over sorted, disjoint `layers`
fn overlay<V: Copy>(layers: &mut Vec<(CodePointRange, V)>, range: CodePointRange, value: V) {
    let mut result = Vec::with_capacity(layers.len() + 2);
    for (existing, existing_value) in layers.drain(..) {
        if existing.stop() < range.start() || range.stop() < existing.start() {
            result.push((existing, existing_value));
            continue;
        }
        if let Some(stop) = range.start().prev() {
            if let Ok(left) = CodePointRange::new(existing.start(), stop) {
                result.push((left, existing_value));
            }
        }
        if let Some(start) = range.stop().next() {
            if let Ok(right) = CodePointRange::new(start, existing.stop()) {
                result.push((right, existing_value));
            }
        }
    }
    result.push((range, value));
    sort_by_start(&mut result, |(r, _)| *r);
    *layers = result;
}

// ============================================================================
// Range lists
// ============================================================================

/// Code points of a binary property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList {
    ranges: Vec<CodePointRange>,
}

impl RangeList {
    /// Create a list from non-overlapping ranges in any order
    pub fn new<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        let mut ranges: Vec<CodePointRange> = ranges.into_iter().collect();
        sort_by_start(&mut ranges, |r| *r);
        RangeList { ranges }
    }

    /// Check whether the list contains `cp`
    pub fn contains(&self, cp: CodePoint) -> bool {
        let index = bisect(&self.ranges, cp, |r| *r);
        self.ranges.get(index).is_some_and(|r| r.contains(cp))
    }

    /// The ranges, sorted
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Number of code points and of ranges
    pub fn count_nondefault_values(&self) -> (usize, usize) {
        (self.ranges.iter().map(CodePointRange::len).sum(), self.ranges.len())
    }

    /// All code points in the list
    pub fn materialize(&self) -> CodePointSet {
        CodePointSet::from_ranges(self.ranges.iter().copied())
    }

    /// Merge adjacent ranges
    pub fn simplify(&mut self) {
        self.ranges = simplify_ranges(std::mem::take(&mut self.ranges));
    }
}
