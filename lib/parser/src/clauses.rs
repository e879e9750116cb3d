//! Removes solution modifiers and other clauses that do not contain triple patterns.

use crate::lexical::{keyword_at, skip_group, skip_opaque, skip_whitespace};
use std::borrow::Cow;

/// Removes `FILTER`, `BIND`, `GROUP BY`, `HAVING`, `ORDER BY`, `LIMIT` and `OFFSET` clauses from a
/// block.
///
/// Filter and bind expressions are removed up to their balanced closing parenthesis, so that
/// separators within them (`FILTER(STRSTARTS(STR(?x), "http://a.b/"))`) cannot leak into the
/// triple patterns. `FILTER NOT EXISTS { ... }` is removed with its group. `GROUP BY`, `HAVING`
/// and `ORDER BY` extend to the next `.` or `}`, `LIMIT` and `OFFSET` cover their integer
/// argument. Every removed clause is replaced by a single space.
pub fn strip_clauses(block: &str) -> Cow<'_, str> {
    let bytes = block.as_bytes();
    let mut stripped = String::new();
    let mut copied = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if let Some(end) = skip_opaque(block, idx) {
            idx = end;
            continue;
        }
        if let Some(end) = clause_end(block, idx) {
            stripped.push_str(&block[copied..idx]);
            stripped.push(' ');
            idx = end;
            copied = end;
            continue;
        }
        idx += 1;
    }

    if copied == 0 {
        return Cow::Borrowed(block);
    }
    stripped.push_str(&block[copied..]);
    Cow::Owned(stripped)
}

/// Returns the end of the clause starting at `start`, if a clause starts there.
fn clause_end(block: &str, start: usize) -> Option<usize> {
    if !block.as_bytes()[start].is_ascii_alphabetic() {
        return None;
    }
    if keyword_at(block, start, "FILTER") {
        return filter_end(block, start + "FILTER".len());
    }
    if keyword_at(block, start, "BIND") {
        let open = skip_whitespace(block, start + "BIND".len());
        return skip_group(block, open, b'(', b')');
    }
    if keyword_at(block, start, "HAVING") {
        return Some(modifier_end(block, start + "HAVING".len()));
    }
    for keyword in ["GROUP", "ORDER"] {
        if keyword_at(block, start, keyword) {
            let by = skip_whitespace(block, start + keyword.len());
            return keyword_at(block, by, "BY").then(|| modifier_end(block, by + "BY".len()));
        }
    }
    for keyword in ["LIMIT", "OFFSET"] {
        if keyword_at(block, start, keyword) {
            return integer_end(block, start + keyword.len());
        }
    }
    None
}

/// `FILTER` is followed by a bracketed expression, by a function call (`regex(...)`) or by
/// `[NOT] EXISTS { ... }`.
fn filter_end(block: &str, after_keyword: usize) -> Option<usize> {
    let bytes = block.as_bytes();
    let mut idx = skip_whitespace(block, after_keyword);
    loop {
        match bytes.get(idx)? {
            b'(' => return skip_group(block, idx, b'(', b')'),
            b'{' => return skip_group(block, idx, b'{', b'}'),
            byte if byte.is_ascii_alphabetic() => {
                while bytes
                    .get(idx)
                    .is_some_and(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b':'))
                {
                    idx += 1;
                }
                idx = skip_whitespace(block, idx);
            }
            _ => return None,
        }
    }
}

/// Solution modifiers extend up to the next `.` or `}` (exclusive).
fn modifier_end(block: &str, from: usize) -> usize {
    let bytes = block.as_bytes();
    let mut idx = from;
    while idx < bytes.len() {
        if let Some(end) = skip_opaque(block, idx) {
            idx = end;
            continue;
        }
        if matches!(bytes[idx], b'.' | b'}') {
            return idx;
        }
        idx += 1;
    }
    bytes.len()
}

fn integer_end(block: &str, after_keyword: usize) -> Option<usize> {
    let start = skip_whitespace(block, after_keyword);
    let digits = block.as_bytes()[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    (digits > 0).then_some(start + digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(block: &str) -> String {
        strip_clauses(block)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_block_without_clauses_is_borrowed() {
        assert!(matches!(
            strip_clauses("?x dbo:filter ?y . ?y rdfs:label \"FILTER(\""),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_nested_filter_is_removed() {
        assert_eq!(
            strip(r#"?x a dbo:City . FILTER(STRSTARTS(STR(?x), "http://a.b/")) ?x dbo:country ?c"#),
            "?x a dbo:City . ?x dbo:country ?c"
        );
    }

    #[test]
    fn test_filter_functions_and_exists() {
        assert_eq!(
            strip(r#"?x rdfs:label ?l filter regex(?l, "^A", "i") . ?x a ?t"#),
            "?x rdfs:label ?l . ?x a ?t"
        );
        assert_eq!(
            strip("?x a ?t FILTER NOT EXISTS { ?x dbo:dead ?d } . ?x ?p ?o"),
            "?x a ?t . ?x ?p ?o"
        );
        assert_eq!(strip("?x a ?t FILTER ?x"), "?x a ?t FILTER ?x");
    }

    #[test]
    fn test_bind_is_removed() {
        assert_eq!(
            strip("?x dbo:height ?h . BIND((?h * 100) AS ?cm) ?x a ?t"),
            "?x dbo:height ?h . ?x a ?t"
        );
    }

    #[test]
    fn test_solution_modifiers_are_removed() {
        assert_eq!(
            strip("?x dbo:population ?p . ORDER BY DESC(?p) LIMIT 5 OFFSET 10"),
            "?x dbo:population ?p ."
        );
        assert_eq!(
            strip("?x ?p ?o group by ?x having (count(?o) > 3) . ?x a ?t"),
            "?x ?p ?o . ?x a ?t"
        );
        assert_eq!(strip("?x ?p ?o LIMIT 3 ?a ?b ?c"), "?x ?p ?o ?a ?b ?c");
    }

    #[test]
    fn test_keywords_inside_names_are_kept() {
        assert_eq!(
            strip("?x dbo:limit ?l . ?x dbp:orderBy ?o . ?x ex:group ?g"),
            "?x dbo:limit ?l . ?x dbp:orderBy ?o . ?x ex:group ?g"
        );
        assert_eq!(strip("?x ?p ?o LIMIT ?x"), "?x ?p ?o LIMIT ?x");
    }
}
