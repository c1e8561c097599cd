//! Fixed-priority line classification.
//!
//! Each rule pairs a prefix predicate with a handler that builds the
//! [`ParsedLine`] and returns the updated counters. Rules are tried in table
//! order and the first match wins, so a `+++` header never reaches the `+`
//! rule and an unparseable `@@` line is still a hunk. New kinds slot in by
//! adding a row at the right priority.

use super::hunk::{LineCounters, parse_hunk_header};
use super::model::{LineKind, ParsedLine};

/// Builds the classified line of the given kind and the counters for the next line.
type Handler = fn(LineKind, &str, LineCounters) -> (ParsedLine, LineCounters);

/// One row of the classification table.
struct Rule {
    kind: LineKind,
    matches: fn(&str) -> bool,
    apply: Handler,
}

const HEADER_RULE: Rule = Rule {
    kind: LineKind::Header,
    matches: |line| line.starts_with("---") || line.starts_with("+++"),
    apply: |kind, line, counters| (ParsedLine::verbatim(kind, line), counters),
};

const HUNK_RULE: Rule = Rule {
    kind: LineKind::Hunk,
    matches: |line| line.starts_with("@@"),
    apply: |kind, line, counters| {
        // A malformed header keeps whatever numbering was in effect.
        let counters = parse_hunk_header(line)
            .map(|header| LineCounters::at_hunk(&header))
            .unwrap_or(counters);
        (ParsedLine::verbatim(kind, line), counters)
    },
};

const NO_NEWLINE_RULE: Rule = Rule {
    kind: LineKind::NoNewline,
    matches: |line| line.starts_with("\\ No newline"),
    apply: |kind, line, counters| (ParsedLine::verbatim(kind, line), counters),
};

const ADD_RULE: Rule = Rule {
    kind: LineKind::Add,
    matches: |line| line.starts_with('+'),
    apply: |kind, line, counters| {
        let parsed = ParsedLine {
            kind,
            text: line.strip_prefix('+').unwrap_or(line).to_string(),
            old_line_number: None,
            new_line_number: Some(counters.new),
            raw_text: line.to_string(),
        };
        (parsed, counters.next_new())
    },
};

const DELETE_RULE: Rule = Rule {
    kind: LineKind::Delete,
    matches: |line| line.starts_with('-'),
    apply: |kind, line, counters| {
        let parsed = ParsedLine {
            kind,
            text: line.strip_prefix('-').unwrap_or(line).to_string(),
            old_line_number: Some(counters.old),
            new_line_number: None,
            raw_text: line.to_string(),
        };
        (parsed, counters.next_old())
    },
};

const CONTEXT_RULE: Rule = Rule {
    kind: LineKind::Context,
    matches: |_| true,
    apply: |kind, line, counters| {
        let parsed = ParsedLine {
            kind,
            text: line.strip_prefix(' ').unwrap_or(line).to_string(),
            old_line_number: Some(counters.old),
            new_line_number: Some(counters.new),
            raw_text: line.to_string(),
        };
        (parsed, counters.next_both())
    },
};

/// Classification rules in priority order. Context is the catch-all and must stay last.
const RULES: &[Rule] = &[
    HEADER_RULE,
    HUNK_RULE,
    NO_NEWLINE_RULE,
    ADD_RULE,
    DELETE_RULE,
    CONTEXT_RULE,
];

fn rule_for(line: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .unwrap_or(&CONTEXT_RULE)
}

/// Classify `raw` against the current counters.
///
/// A trailing `\r` is ignored for matching and kept out of `text`, but
/// stays in `raw_text`. Returns the parsed line and the counters to use for
/// the next line.
pub(super) fn classify_line(raw: &str, counters: LineCounters) -> (ParsedLine, LineCounters) {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    let rule = rule_for(line);
    let (mut parsed, counters) = (rule.apply)(rule.kind, line, counters);
    if line.len() != raw.len() {
        parsed.raw_text = raw.to_string();
    }
    (parsed, counters)
}
