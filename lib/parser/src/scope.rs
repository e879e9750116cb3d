//! Locates the matching clause of a query and splits it into top-level blocks.

use crate::lexical::{skip_group, skip_opaque};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static WHERE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWHERE\s*\{").expect("valid WHERE pattern"));

/// Returns the interior of the first `WHERE { ... }` clause of `query`.
///
/// The clause ends at the brace that balances the opening one; braces within literals and IRIs
/// are ignored. Returns [`None`] if there is no `WHERE` clause or if it is never closed.
pub fn matching_clause(query: &str) -> Option<&str> {
    let open = WHERE_OPEN.find(query)?.end() - 1;
    let close = skip_group(query, open, b'{', b'}')?;
    Some(&query[open + 1..close - 1])
}

/// Splits the body of a matching clause into its top-level blocks.
///
/// Every depth-1 brace group is one block, and so is every non-blank piece of text between
/// them. Deeper groups are not split further: their braces stay in the text of the enclosing
/// block. Hence `{ A } UNION { B }` yields the blocks `A`, `UNION` and `B`.
///
/// The body is scanned once, tracking the nesting depth in a single counter. A stray closing
/// brace ends the current piece of text. If a group is never closed, its remaining text is the
/// last block.
pub fn top_level_blocks(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut blocks = Vec::new();
    let mut depth = 0_usize;
    let mut segment_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if let Some(end) = skip_opaque(body, idx) {
            idx = end;
            continue;
        }
        match bytes[idx] {
            b'{' => {
                if depth == 0 {
                    push_loose(&mut blocks, &body[segment_start..idx]);
                    segment_start = idx + 1;
                }
                depth += 1;
            }
            b'}' if depth <= 1 => {
                if depth == 1 {
                    blocks.push(body[segment_start..idx].trim());
                } else {
                    push_loose(&mut blocks, &body[segment_start..idx]);
                }
                segment_start = idx + 1;
                depth = 0;
            }
            b'}' => depth -= 1,
            _ => {}
        }
        idx += 1;
    }

    let tail = &body[segment_start..];
    if depth > 0 {
        blocks.push(tail.trim());
    } else {
        push_loose(&mut blocks, tail);
    }
    blocks
}

fn push_loose<'body>(blocks: &mut Vec<&'body str>, text: &'body str) {
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_clause() {
        assert_eq!(
            matching_clause("SELECT ?x WHERE { ?x ?p ?o } LIMIT 1"),
            Some(" ?x ?p ?o ")
        );
        assert_eq!(
            matching_clause("select ?x where{ { ?x a ?t } UNION { ?x ?p \"}\" } }"),
            Some(" { ?x a ?t } UNION { ?x ?p \"}\" } ")
        );
    }

    #[test]
    fn test_missing_or_unbalanced_clause() {
        assert_eq!(matching_clause("ASK { ?x ?p ?o }"), None);
        assert_eq!(matching_clause("SELECT ?x WHERE { ?x ?p ?o"), None);
        assert_eq!(matching_clause("SELECT ?x WHERE ?x"), None);
    }

    #[test]
    fn test_flat_body_is_one_block() {
        assert_eq!(
            top_level_blocks(" ?x ?p ?o . ?x a ?t "),
            vec!["?x ?p ?o . ?x a ?t"]
        );
    }

    #[test]
    fn test_union_alternatives_are_separate_blocks() {
        assert_eq!(
            top_level_blocks(" { ?x a dbo:Person } UNION { ?x a dbo:Place } "),
            vec!["?x a dbo:Person", "UNION", "?x a dbo:Place"]
        );
    }

    #[test]
    fn test_deeper_groups_stay_in_their_block() {
        assert_eq!(
            top_level_blocks("?s ?p ?o . { ?s a ?t OPTIONAL { ?s ?q ?r } } ?s ?k ?v"),
            vec!["?s ?p ?o .", "?s a ?t OPTIONAL { ?s ?q ?r }", "?s ?k ?v"]
        );
    }

    #[test]
    fn test_block_count_matches_groups_and_fragments() {
        // 3 depth-1 groups (one empty) and 2 loose fragments.
        let body = "a { b { c } } d {} { e { f { g } } }";
        let blocks = top_level_blocks(body);
        assert_eq!(blocks, vec!["a", "b { c }", "d", "", "e { f { g } }"]);
    }

    #[test]
    fn test_braces_in_literals_are_ignored() {
        assert_eq!(
            top_level_blocks(r#"{ ?x rdfs:label "a { b" } ?y ?p "}""#),
            vec![r#"?x rdfs:label "a { b""#, r#"?y ?p "}""#]
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(top_level_blocks("?a ?b ?c } ?d ?e ?f"), vec!["?a ?b ?c", "?d ?e ?f"]);
        assert_eq!(top_level_blocks("?a ?b ?c { ?d ?e ?f"), vec!["?a ?b ?c", "?d ?e ?f"]);
    }
}
