//! Sets of code points
//!
//! A [`CodePointSet`] stores sorted, disjoint, non-adjacent ranges. All set
//! operations are linear merges over the range lists, so the complement of a
//! small set costs a handful of ranges rather than a million code points.

use crate::codepoint::{CodePoint, CodePointRange};
use std::fmt;

/// A normalized set of code points
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    ranges: Vec<CodePointRange>,
}

impl CodePointSet {
    /// The empty set
    pub fn new() -> Self {
        CodePointSet { ranges: Vec::new() }
    }

    /// All code points
    pub fn all() -> Self {
        CodePointSet {
            ranges: vec![CodePointRange::ALL],
        }
    }

    /// Build a set from ranges in any order, overlapping or not
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        let mut ranges: Vec<CodePointRange> = ranges.into_iter().collect();
        ranges.sort_by_key(|r| (r.start(), r.stop()));

        let mut normalized: Vec<CodePointRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            if let Some(last) = normalized.last_mut() {
                if let Some(merged) = last.merge(&range) {
                    *last = merged;
                    continue;
                }
            }
            normalized.push(range);
        }
        CodePointSet { ranges: normalized }
    }

    /// The ranges, sorted and disjoint
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Number of code points
    pub fn len(&self) -> usize {
        self.ranges.iter().map(CodePointRange::len).sum()
    }

    /// Check for the empty set
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Check membership
    pub fn contains(&self, cp: CodePoint) -> bool {
        let index = self.ranges.partition_point(|r| r.stop() < cp);
        self.ranges.get(index).is_some_and(|r| r.contains(cp))
    }

    /// Iterate over the code points in ascending order
    pub fn iter(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.ranges.iter().flat_map(|r| r.codepoints())
    }

    /// All code points not in this set
    pub fn complement(&self) -> CodePointSet {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = Some(CodePoint::MIN);
        for range in &self.ranges {
            if let (Some(start), Some(stop)) = (next, range.start().prev()) {
                if start <= stop {
                    ranges.extend(CodePointRange::new(start, stop).ok());
                }
            }
            next = range.stop().next();
        }
        if let Some(start) = next {
            ranges.extend(CodePointRange::new(start, CodePoint::MAX).ok());
        }
        CodePointSet { ranges }
    }

    /// Code points in either set
    pub fn union(&self, other: &CodePointSet) -> CodePointSet {
        CodePointSet::from_ranges(self.ranges.iter().chain(other.ranges.iter()).copied())
    }

    /// Code points in both sets
    pub fn intersection(&self, other: &CodePointSet) -> CodePointSet {
        let mut ranges = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let (a, b) = (self.ranges[i], other.ranges[j]);
            let start = a.start().max(b.start());
            let stop = a.stop().min(b.stop());
            if start <= stop {
                ranges.extend(CodePointRange::new(start, stop).ok());
            }
            if a.stop() < b.stop() {
                i += 1;
            } else {
                j += 1;
            }
        }
        CodePointSet { ranges }
    }

    /// Code points in this set but not in `other`
    pub fn difference(&self, other: &CodePointSet) -> CodePointSet {
        self.intersection(&other.complement())
    }
}

impl FromIterator<CodePointRange> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        CodePointSet::from_ranges(iter)
    }
}

impl FromIterator<CodePoint> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = CodePoint>>(iter: I) -> Self {
        CodePointSet::from_ranges(iter.into_iter().map(CodePoint::to_range))
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}
