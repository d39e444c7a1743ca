//! Range compaction

use ucdb_core::CodePointRange;

/// Merge consecutive ranges that touch and carry equal values
///
/// Order is preserved, so sorted input stays sorted. The number of code
/// points covered by each value never changes.
pub fn simplify_range_data<V, I>(range_data: I) -> Vec<(CodePointRange, V)>
where
    V: PartialEq,
    I: IntoIterator<Item = (CodePointRange, V)>,
{
    let mut result: Vec<(CodePointRange, V)> = Vec::new();
    for (range, value) in range_data {
        if let Some((last_range, last_value)) = result.last_mut() {
            if *last_value == value {
                if let Some(merged) = last_range.merge(&range) {
                    *last_range = merged;
                    continue;
                }
            }
        }
        result.push((range, value));
    }
    result
}

/// Merge consecutive ranges that touch
pub fn simplify_ranges<I>(ranges: I) -> Vec<CodePointRange>
where
    I: IntoIterator<Item = CodePointRange>,
{
    simplify_range_data(ranges.into_iter().map(|r| (r, ())))
        .into_iter()
        .map(|(r, ())| r)
        .collect()
}
