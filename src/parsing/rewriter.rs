//! Query rewriting
//!
//! Replaces each matched literal region with placeholder text in a
//! single left-to-right pass, copying every untouched byte through
//! verbatim. Substitution is keyed on the recorded byte offsets, never
//! on the literal's textual content, so a value that appears in two
//! conditions (or coincidentally elsewhere in the statement) can never
//! be substituted in the wrong place.

use super::matcher::{ConditionMatch, MatchKind};
use crate::coercion::coerce_literal;
use crate::error::Result;
use crate::types::{ParsedQuery, Value};

/// Rewrite `source` using its condition matches, producing the
/// parameterized statement and its ordered parameter list.
///
/// Parameters are collected in span order (ascending offset), which is
/// exactly the order placeholders appear in the output. A coercion
/// failure aborts the whole rewrite; a partial result would break the
/// placeholder/parameter count invariant.
pub(crate) fn rewrite(source: &str, matches: &[ConditionMatch]) -> Result<ParsedQuery> {
    let mut statement = String::with_capacity(source.len());
    let mut params: Vec<Value> = Vec::with_capacity(matches.len());
    let mut cursor = 0;

    for m in matches {
        statement.push_str(&source[cursor..m.region_start()]);
        push_placeholders(&mut statement, m);
        for span in &m.spans {
            params.push(coerce_literal(&source[span.start..span.end])?);
        }
        cursor = m.region_end();
    }
    statement.push_str(&source[cursor..]);

    Ok(ParsedQuery { statement, params })
}

/// Emit the placeholder text for one match: a single `?` for the
/// comparison shapes, `?, ?, ...` for `IN`, `? AND ?` for `BETWEEN`.
fn push_placeholders(statement: &mut String, m: &ConditionMatch) {
    match m.kind {
        MatchKind::Between => statement.push_str("? AND ?"),
        MatchKind::In => {
            for i in 0..m.spans.len() {
                if i > 0 {
                    statement.push_str(", ");
                }
                statement.push('?');
            }
        }
        _ => statement.push('?'),
    }
}
