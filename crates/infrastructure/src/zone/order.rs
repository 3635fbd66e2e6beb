//! Declaration order of record-sets in master file text.
//!
//! hickory's parser hands back record-sets keyed in canonical order; this scan
//! recovers the order in which each (owner, type) pair first appears so the
//! comparison walks the zone the way its author wrote it. The text has already
//! been accepted by the real parser, so anything unrecognised is skipped.

use hickory_proto::rr::{DNSClass, LowerName, Name, RecordType, RrKey};
use hickory_proto::serialize::txt::Parser;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Record-set keys in first-appearance order, without duplicates.
pub(crate) fn declaration_order(contents: &str, origin: Option<Name>) -> Vec<RrKey> {
    let mut origin = origin;
    let mut owner: Option<Name> = None;
    let mut seen = BTreeSet::new();
    let mut order = Vec::new();

    for entry in logical_entries(contents) {
        let mut tokens = entry.text.split_whitespace();

        let owner_token = if entry.continues_owner {
            None
        } else {
            match tokens.next() {
                Some(token) => Some(token),
                None => continue,
            }
        };

        if let Some(token) = owner_token {
            if token.starts_with('$') {
                if token.eq_ignore_ascii_case("$ORIGIN") {
                    if let Some(name) = tokens.next().and_then(|n| Name::parse(n, None).ok()) {
                        origin = Some(name);
                    }
                }
                continue;
            }

            owner = if token == "@" {
                origin.clone()
            } else {
                Name::parse(token, origin.as_ref()).ok()
            };
        }

        let (Some(name), Some(record_type)) = (owner.as_ref(), record_type(tokens)) else {
            continue;
        };

        let key = RrKey::new(LowerName::from(name.clone()), record_type);
        if seen.insert(key.clone()) {
            order.push(key);
        }
    }

    order
}

/// Skips the optional TTL and class (in either order) and reads the type.
fn record_type<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<RecordType> {
    for token in tokens {
        if Parser::parse_time(token).is_ok() {
            continue;
        }

        let upper = token.to_ascii_uppercase();
        if DNSClass::from_str(&upper).is_ok() {
            continue;
        }

        return RecordType::from_str(&upper).ok();
    }

    None
}

struct LogicalEntry {
    /// Line began with whitespace: the owner is the previous entry's.
    continues_owner: bool,
    text: String,
}

/// Joins parenthesised continuations, drops comments and blanks out quoted text.
fn logical_entries(contents: &str) -> Vec<LogicalEntry> {
    let mut entries = Vec::new();
    let mut text = String::new();
    let mut continues_owner = false;
    let mut at_line_start = true;
    let mut depth = 0usize;
    let mut quoted = false;
    let mut comment = false;
    let mut chars = contents.chars();

    while let Some(ch) = chars.next() {
        if at_line_start {
            continues_owner = ch == ' ' || ch == '\t';
            at_line_start = false;
        }

        if ch == '\n' {
            comment = false;
            if depth == 0 && !quoted {
                entries.push(LogicalEntry {
                    continues_owner,
                    text: std::mem::take(&mut text),
                });
                at_line_start = true;
            } else {
                text.push(' ');
            }
            continue;
        }

        if comment {
            continue;
        }

        match ch {
            '\\' => {
                let escaped = chars.next();
                if quoted {
                    text.push('x');
                } else {
                    text.push('\\');
                    text.extend(escaped);
                }
            }
            '"' => {
                quoted = !quoted;
                text.push('"');
            }
            _ if quoted => text.push('x'),
            ';' => comment = true,
            '(' => {
                depth += 1;
                text.push(' ');
            }
            ')' => {
                depth = depth.saturating_sub(1);
                text.push(' ');
            }
            '\r' => text.push(' '),
            _ => text.push(ch),
        }
    }

    if !text.trim().is_empty() {
        entries.push(LogicalEntry {
            continues_owner,
            text,
        });
    }

    entries
}
