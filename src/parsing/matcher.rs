//! Condition matching
//!
//! Scans statement text for the recognized condition shapes and records
//! the byte spans of their literal values. The scanner recognizes a
//! fixed set of shapes, each anchored on a bare column identifier:
//!
//! - `col IN (v1, v2, ...)`
//! - `col = v`, `col < v`, `col > v`, `col >= v`, `col <= v`, `col != v`
//! - `col BETWEEN v1 AND v2`
//!
//! Anything else (connectors, joins, grouping, column lists, aliases)
//! contributes no match and is copied through verbatim by the rewriter.
//! Free-standing quoted strings are skipped whole, so condition-shaped
//! text inside a string can never produce a match.

/// Byte range of one literal token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

/// Which condition shape produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    In,
    Eq,
    Lt,
    Gt,
    Ge,
    Le,
    Ne,
    Between,
}

/// One recognized condition: its shape and the spans of its literal values.
///
/// The column name and operator text are not retained. The rewriter only
/// needs the spans, since it copies untouched source bytes around them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ConditionMatch {
    pub kind: MatchKind,
    pub spans: Vec<Span>,
}

impl ConditionMatch {
    /// Start of the region the rewriter replaces.
    pub fn region_start(&self) -> usize {
        self.spans[0].start
    }

    /// End of the region the rewriter replaces.
    pub fn region_end(&self) -> usize {
        self.spans[self.spans.len() - 1].end
    }
}

/// Scan `source` for condition shapes.
///
/// Matches come back ordered by the start of their first literal span,
/// non-overlapping. Pure function of the input; reentrant.
pub(crate) fn scan(source: &str) -> Vec<ConditionMatch> {
    let mut scanner = Scanner {
        src: source.as_bytes(),
        pos: 0,
    };
    let mut matches = Vec::new();

    while scanner.pos < scanner.src.len() {
        match scanner.src[scanner.pos] {
            quote @ (b'\'' | b'"') => scanner.skip_quoted(quote),
            b if is_ident_start(b) => {
                scanner.scan_identifier();
                if let Some(m) = scanner.try_condition() {
                    scanner.pos = m.region_end();
                    matches.push(m);
                }
            }
            _ => scanner.pos += 1,
        }
    }

    matches
}

struct Scanner<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    /// Consume a quoted run including both delimiters. An unterminated
    /// quote runs to the end of input.
    fn skip_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while self.pos < self.src.len() {
            let b = self.src[self.pos];
            self.pos += 1;
            if b == quote {
                return;
            }
        }
    }

    /// Consume the identifier starting at the current position.
    fn scan_identifier(&mut self) {
        while self.pos < self.src.len() && is_ident_byte(self.src[self.pos]) {
            self.pos += 1;
        }
    }

    fn skip_ws(&self, mut i: usize) -> usize {
        while i < self.src.len() && self.src[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    }

    /// Identifier word starting at `i` and the offset just past it.
    fn word_at(&self, i: usize) -> (&[u8], usize) {
        let mut end = i;
        while end < self.src.len() && is_ident_byte(self.src[end]) {
            end += 1;
        }
        (&self.src[i..end], end)
    }

    /// Attempt to match a condition whose column identifier just ended at
    /// the current position. Leaves the position untouched; the caller
    /// advances past the match region on success.
    fn try_condition(&self) -> Option<ConditionMatch> {
        let i = self.skip_ws(self.pos);

        // Longer operator forms first, so `>=` is never mis-split into
        // `>` plus a malformed comparand.
        let op = match (self.src.get(i).copied(), self.src.get(i + 1).copied()) {
            (Some(b'>'), Some(b'=')) => Some((MatchKind::Ge, 2)),
            (Some(b'<'), Some(b'=')) => Some((MatchKind::Le, 2)),
            (Some(b'!'), Some(b'=')) => Some((MatchKind::Ne, 2)),
            (Some(b'='), _) => Some((MatchKind::Eq, 1)),
            (Some(b'<'), _) => Some((MatchKind::Lt, 1)),
            (Some(b'>'), _) => Some((MatchKind::Gt, 1)),
            _ => None,
        };
        if let Some((kind, len)) = op {
            let value_at = self.skip_ws(i + len);
            let span = self.scan_literal(value_at)?;
            return Some(ConditionMatch {
                kind,
                spans: vec![span],
            });
        }

        if !matches!(self.src.get(i).copied(), Some(b) if is_ident_start(b)) {
            return None;
        }
        let (word, word_end) = self.word_at(i);
        if word.eq_ignore_ascii_case(b"IN") {
            return self.try_in_list(word_end);
        }
        if word.eq_ignore_ascii_case(b"BETWEEN") {
            return self.try_between(word_end);
        }
        None
    }

    /// `IN ( e1, e2, ... )` with at least one element. Every element must
    /// be a quoted string, a numeric literal, or a bare identifier word;
    /// anything else (a `?` placeholder, a subquery) disqualifies the
    /// whole clause, which keeps re-parsing of rewritten output a no-op.
    fn try_in_list(&self, after_keyword: usize) -> Option<ConditionMatch> {
        let mut i = self.skip_ws(after_keyword);
        if self.src.get(i).copied() != Some(b'(') {
            return None;
        }
        i += 1;

        let mut spans = Vec::new();
        loop {
            i = self.skip_ws(i);
            let span = self.scan_element(i)?;
            i = self.skip_ws(span.end);
            spans.push(span);
            match self.src.get(i).copied() {
                Some(b',') => i += 1,
                Some(b')') => {
                    return Some(ConditionMatch {
                        kind: MatchKind::In,
                        spans,
                    });
                }
                _ => return None,
            }
        }
    }

    /// `BETWEEN v1 AND v2`, keywords separated by whitespace.
    fn try_between(&self, after_keyword: usize) -> Option<ConditionMatch> {
        let low_at = self.skip_ws(after_keyword);
        if low_at == after_keyword {
            return None;
        }
        let low = self.scan_literal(low_at)?;

        let and_at = self.skip_ws(low.end);
        if and_at == low.end {
            return None;
        }
        let (word, word_end) = self.word_at(and_at);
        if !word.eq_ignore_ascii_case(b"AND") {
            return None;
        }

        let high_at = self.skip_ws(word_end);
        if high_at == word_end {
            return None;
        }
        let high = self.scan_literal(high_at)?;

        Some(ConditionMatch {
            kind: MatchKind::Between,
            spans: vec![low, high],
        })
    }

    /// A literal token: single-quoted string or `-?digits(.digits)?`.
    fn scan_literal(&self, i: usize) -> Option<Span> {
        match self.src.get(i).copied()? {
            b'\'' => self.scan_quoted(i),
            b'-' | b'0'..=b'9' => self.scan_number(i),
            _ => None,
        }
    }

    /// Quoted string with verbatim contents; no escape processing, so
    /// the first closing quote ends the token. Unterminated quotes do
    /// not form a literal.
    fn scan_quoted(&self, i: usize) -> Option<Span> {
        let mut end = i + 1;
        while end < self.src.len() {
            if self.src[end] == b'\'' {
                return Some(Span {
                    start: i,
                    end: end + 1,
                });
            }
            end += 1;
        }
        None
    }

    fn scan_number(&self, i: usize) -> Option<Span> {
        let mut end = i;
        if self.src.get(end).copied() == Some(b'-') {
            end += 1;
        }
        let int_start = end;
        while end < self.src.len() && self.src[end].is_ascii_digit() {
            end += 1;
        }
        if end == int_start {
            return None;
        }
        if self.src.get(end).copied() == Some(b'.') {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < self.src.len() && self.src[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if frac_end > frac_start {
                end = frac_end;
            }
        }
        // A trailing identifier byte or second point means this is not a
        // plain numeric literal.
        match self.src.get(end).copied() {
            Some(b) if is_ident_byte(b) || b == b'.' => None,
            _ => Some(Span { start: i, end }),
        }
    }

    /// An IN-list element: a literal token or a bare identifier word.
    fn scan_element(&self, i: usize) -> Option<Span> {
        if let Some(span) = self.scan_literal(i) {
            return Some(span);
        }
        match self.src.get(i).copied() {
            Some(b) if is_ident_start(b) => {
                let (_, end) = self.word_at(i);
                Some(Span { start: i, end })
            }
            _ => None,
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
