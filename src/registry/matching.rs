//! Prefix matching, ordering and completion helpers for command names.
//!
//! A line is split at its first space into a keyword and an argument. Only the
//! keyword is compared, and only over the keyword's own length: a candidate matches
//! when its name starts with the keyword. An exact name therefore still matches
//! every longer name it is a prefix of ("Go" hits both "Go" and "Gop").

use super::Command;
use core::cmp::Ordering;

/// Result of resolving a line against the registry.
#[derive(Debug, Clone, Copy)]
pub struct PrefixMatch<'a> {
    count: usize,
    last: Option<&'a Command<'a>>,
    keyword_len: usize,
}

impl<'a> PrefixMatch<'a> {
    pub(crate) fn new(keyword_len: usize) -> Self {
        Self {
            count: 0,
            last: None,
            keyword_len,
        }
    }

    pub(crate) fn record(&mut self, command: &'a Command<'a>) {
        self.count += 1;
        self.last = Some(command);
    }

    /// Number of commands the keyword matched.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The matched command, if exactly one matched.
    pub fn unique(&self) -> Option<&'a Command<'a>> {
        if self.count == 1 { self.last } else { None }
    }

    /// Length of the compared keyword (index of the first space, or whole line).
    pub fn keyword_len(&self) -> usize {
        self.keyword_len
    }

    /// Argument part of `text`: everything after the first space, or empty.
    pub fn args<'t>(&self, text: &'t str) -> &'t str {
        split_keyword(text).1
    }
}

/// Split a line at its first space into keyword and argument.
pub fn split_keyword(text: &str) -> (&str, &str) {
    match text.find(' ') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    }
}

/// Byte offset of the argument within a line (end of line if there is none).
pub fn args_offset(text: &str) -> usize {
    text.find(' ').map_or(text.len(), |i| i + 1)
}

/// True if `name` starts with `keyword` under the case rule.
pub fn name_matches(keyword: &str, name: &str, case_insensitive: bool) -> bool {
    let Some(head) = name.as_bytes().get(..keyword.len()) else {
        return false;
    };
    if case_insensitive {
        head.eq_ignore_ascii_case(keyword.as_bytes())
    } else {
        head == keyword.as_bytes()
    }
}

/// True if `keyword` must be rewritten to show `name` exactly.
pub fn needs_canonical(keyword: &str, name: &str) -> bool {
    keyword != name
}

/// Registry ordering of an existing name against a new one.
///
/// Case-insensitive, and limited to the first `new.len()` bytes of `existing`.
pub fn collate(existing: &str, new: &str) -> Ordering {
    let lhs = existing
        .bytes()
        .take(new.len())
        .map(|b| b.to_ascii_lowercase());
    let rhs = new.bytes().map(|b| b.to_ascii_lowercase());
    lhs.cmp(rhs)
}

/// Characters Tab would append to `text` to complete `command`'s name.
///
/// Returns `None` once arguments have started or the name is already complete.
#[cfg_attr(not(feature = "completion"), allow(dead_code))]
pub fn completion_suffix<'c>(text: &str, command: &Command<'c>) -> Option<&'c str> {
    if text.contains(' ') {
        return None;
    }
    match command.name.get(text.len()..) {
        Some(rest) if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Action, RunResult};

    fn nop(_args: &str, _out: &mut dyn core::fmt::Write) -> RunResult {
        RunResult::Continue
    }

    static HELP: Command = Command::new("Help", "", Action::Run(&nop));

    #[test]
    fn test_split_keyword() {
        assert_eq!(split_keyword("Help"), ("Help", ""));
        assert_eq!(split_keyword("Help a b"), ("Help", "a b"));
        assert_eq!(split_keyword("Help "), ("Help", ""));
        assert_eq!(split_keyword(" x"), ("", "x"));
    }

    #[test]
    fn test_args_offset() {
        assert_eq!(args_offset("Help"), 4);
        assert_eq!(&"Echo on"[args_offset("Echo on")..], "on");
        assert_eq!(&"Echo "[args_offset("Echo ")..], "");
    }

    #[test]
    fn test_name_matches() {
        assert!(name_matches("He", "Help", false));
        assert!(name_matches("Help", "Help", false));
        assert!(!name_matches("Helpx", "Help", false));
        assert!(!name_matches("he", "Help", false));
        assert!(name_matches("hE", "Help", true));
        assert!(name_matches("", "Help", false));
    }

    #[test]
    fn test_needs_canonical() {
        assert!(needs_canonical("He", "Help"));
        assert!(needs_canonical("help", "Help"));
        assert!(!needs_canonical("Help", "Help"));
    }

    #[test]
    fn test_collate_limited_to_new_name() {
        assert_eq!(collate("about", "Help"), Ordering::Less);
        assert_eq!(collate("History", "Help"), Ordering::Greater);
        assert_eq!(collate("HELP", "help"), Ordering::Equal);
        // Only "He" of "Help" is compared
        assert_eq!(collate("Help", "He"), Ordering::Equal);
        assert_eq!(collate("Go", "Gop"), Ordering::Less);
    }

    #[test]
    fn test_completion_suffix() {
        assert_eq!(completion_suffix("Hel", &HELP), Some("p"));
        assert_eq!(completion_suffix("hel", &HELP), Some("p"));
        assert_eq!(completion_suffix("Help", &HELP), None);
        assert_eq!(completion_suffix("He x", &HELP), None);
    }

    #[test]
    fn test_prefix_match_unique() {
        let mut found = PrefixMatch::new(2);
        assert!(found.unique().is_none());
        found.record(&HELP);
        assert_eq!(found.unique().map(|c| c.name), Some("Help"));
        found.record(&HELP);
        assert_eq!(found.count(), 2);
        assert!(found.unique().is_none());
        assert_eq!(found.args("He 42"), "42");
    }
}
