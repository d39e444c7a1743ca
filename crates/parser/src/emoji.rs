//! Comments of the emoji data files

use ucdb_core::{regex, Version};

/// Emoji version at the start of an emoji data comment, e.g. `E13.1 [1] (🫁) lungs`
///
/// Files before E5.0 annotate ages differently; their comments yield `None`.
pub fn emoji_age(comment: &str) -> Option<Version> {
    let captures = regex!(r"^E(\d+\.\d+)").captures(comment.trim_start())?;
    Version::parse(&captures[1]).ok()
}
