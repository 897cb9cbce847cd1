// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages that are never linted.
//!
//! Git and hosting services write merge and revert messages themselves, and
//! `fixup!`/`squash!` commits are rewritten before they land.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"^Merge pull request",
        r"^Merge .+ into .+",
        r"^Merge branch .+",
        r"^Merge tag .+",
        r"^Merge remote-tracking branch",
        r"^Merged .+ (in|into) .+",
        r"^Merged PR .+: .+",
        r"^Automatic merge",
        r"^Auto-merged .+ into .+",
        r"^(R|r)evert ",
        r"^(amend|fixup|squash)! ",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("ignore pattern is valid"))
    .collect();
}

/// Check whether a message matches one of the default ignore patterns.
///
/// Only the header is inspected.
pub fn is_ignored(message: &str) -> bool {
    let header = message.trim_start().lines().next().unwrap_or("");
    DEFAULT_IGNORES.iter().any(|re| re.is_match(header))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_messages_are_ignored() {
        assert!(is_ignored("Merge branch 'main' into feature/x"));
        assert!(is_ignored("Merge pull request #12 from user/branch"));
        assert!(is_ignored("Merge remote-tracking branch 'origin/main'"));
        assert!(is_ignored("Merge tag 'v1.2.0'"));
    }

    #[test]
    fn test_fixup_and_revert_are_ignored() {
        assert!(is_ignored("fixup! feat: add thing"));
        assert!(is_ignored("squash! fix: typo"));
        assert!(is_ignored("Revert \"feat: add thing\"\n\nThis reverts commit abc."));
    }

    #[test]
    fn test_regular_messages_are_not_ignored() {
        assert!(!is_ignored("feat: merge configuration files"));
        assert!(!is_ignored("hotfix: patch prod"));
        assert!(!is_ignored("revert: undo the thing"));
    }
}
