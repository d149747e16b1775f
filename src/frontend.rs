//! Textual grammar/input front-end: the line reader and `->`/`|`/`ε`
//! splitter. This is deliberately kept thin and separate from the Grammar
//! Store — it owns raw-text concerns only, and hands the core already
//! tokenized data (`String` left-hand side, `Vec<Vec<String>>`
//! alternatives) so nothing downstream ever touches raw text again.

use crate::error::{GrammarError, Result};
use std::io::BufRead;

/// Splits one grammar line of the form `L -> α₁ | α₂ | …` into its
/// left-hand side and the token sequence for each alternative.
///
/// `ε` (used literally as a token) denotes the empty body and yields an
/// empty token vector for that alternative. Consecutive whitespace is a
/// single delimiter. An alternative that is empty after trimming is
/// rejected unless it is spelled exactly `ε`.
pub fn split_grammar_line(line: &str) -> Result<(String, Vec<Vec<String>>)> {
    let arrow = line.find("->").ok_or_else(|| {
        GrammarError::GrammarSyntaxError(format!("missing '->' in line: {line:?}"))
    })?;

    let lhs = line[..arrow].trim();
    if lhs.is_empty() {
        return Err(GrammarError::GrammarSyntaxError(format!(
            "empty left-hand side in line: {line:?}"
        )));
    }

    let rhs = line[arrow + 2..].trim();
    let mut alternatives = Vec::new();
    for alt in rhs.split('|') {
        let alt = alt.trim();
        if alt.is_empty() {
            return Err(GrammarError::GrammarSyntaxError(format!(
                "empty alternative (write 'ε' for an empty production) in line: {line:?}"
            )));
        }
        if alt == "ε" {
            alternatives.push(Vec::new());
        } else {
            alternatives.push(alt.split_whitespace().map(str::to_string).collect());
        }
    }

    Ok((lhs.to_string(), alternatives))
}

/// Reads grammar lines from `reader` until EOF or a blank line, matching
/// the external interface's "an empty line terminates input".
pub fn read_grammar_lines(reader: &mut impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Splits a single input sentence into whitespace-delimited tokens. The
/// trailing `#` is never supplied here; the recognizer appends it.
pub fn tokenize_sentence(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_alternatives() {
        let (lhs, alts) = split_grammar_line("E -> E + T | T").unwrap();
        assert_eq!(lhs, "E");
        assert_eq!(alts, vec![vec!["E", "+", "T"], vec!["T"]]);
    }

    #[test]
    fn treats_epsilon_as_empty_body() {
        let (_, alts) = split_grammar_line("A -> a | ε").unwrap();
        assert_eq!(alts, vec![vec!["a".to_string()], Vec::<String>::new()]);
    }

    #[test]
    fn collapses_consecutive_whitespace() {
        let (_, alts) = split_grammar_line("S  ->   a    b").unwrap();
        assert_eq!(alts, vec![vec!["a", "b"]]);
    }

    #[test]
    fn rejects_missing_arrow() {
        assert!(split_grammar_line("S => a").is_err());
    }

    #[test]
    fn rejects_empty_left_hand_side() {
        assert!(split_grammar_line(" -> a").is_err());
    }

    #[test]
    fn rejects_empty_alternative() {
        assert!(split_grammar_line("S -> a | ").is_err());
    }

    #[test]
    fn read_grammar_lines_stops_at_blank_line() {
        let input = b"S -> a\nA -> b\n\nignored\n";
        let mut reader: &[u8] = input;
        let lines = read_grammar_lines(&mut reader).unwrap();
        assert_eq!(lines, vec!["S -> a".to_string(), "A -> b".to_string()]);
    }

    #[test]
    fn tokenizes_sentence_on_whitespace() {
        assert_eq!(
            tokenize_sentence("id  +   id * id"),
            vec!["id", "+", "id", "*", "id"]
        );
    }
}
