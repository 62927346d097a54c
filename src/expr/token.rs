use crate::expr::op::OperatorType;
use crate::foundation::error::{VisifError, VisifResult};

/// Classified lexical unit of a visibleif expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Byte offset of the first character in the source string.
    pub offset: usize,
}

/// Token classification.
///
/// Parentheses stay their own kinds until the builder stage; they never
/// reach a finished tree.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `true` or `false` (case-sensitive keywords).
    Bool(bool),
    /// Decimal float literal.
    Float(f64),
    /// Reference to a sibling input, by identifier.
    Ident(String),
    /// Any operator, including the postfix component accessors.
    Op(OperatorType),
    /// `(`.
    LeftParen,
    /// `)`.
    RightParen,
}

/// Split an expression source string into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Multi-character
/// operators are matched before single-character ones, so `>=` never lexes
/// as `>` `=`. Identifiers are `[A-Za-z_$][A-Za-z0-9_]*`; the framework's
/// `input["name"]` reference form lexes to a single identifier token holding
/// the quoted name.
pub fn tokenize(source: &str) -> VisifResult<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Two-character operators take priority over their one-character
        // prefixes.
        if i + 1 < bytes.len() {
            let op = match &bytes[i..i + 2] {
                b"||" => Some(OperatorType::Or),
                b"&&" => Some(OperatorType::And),
                b"==" => Some(OperatorType::CompEq),
                b"!=" => Some(OperatorType::CompNeq),
                b">=" => Some(OperatorType::CompGe),
                b"<=" => Some(OperatorType::CompLe),
                _ => None,
            };
            if let Some(op) = op {
                tokens.push(Token {
                    kind: TokenKind::Op(op),
                    offset: i,
                });
                i += 2;
                continue;
            }
        }

        let start = i;
        let kind = match b {
            b'(' => {
                i += 1;
                TokenKind::LeftParen
            }
            b')' => {
                i += 1;
                TokenKind::RightParen
            }
            b'+' => {
                i += 1;
                TokenKind::Op(OperatorType::Plus)
            }
            b'-' => {
                i += 1;
                TokenKind::Op(OperatorType::Minus)
            }
            b'*' => {
                i += 1;
                TokenKind::Op(OperatorType::Mul)
            }
            b'/' => {
                i += 1;
                TokenKind::Op(OperatorType::Div)
            }
            b'!' => {
                i += 1;
                TokenKind::Op(OperatorType::Not)
            }
            b'>' => {
                i += 1;
                TokenKind::Op(OperatorType::CompGt)
            }
            b'<' => {
                i += 1;
                TokenKind::Op(OperatorType::CompLt)
            }
            b'.' => {
                let op = lex_component_accessor(bytes, start)?;
                i += 2;
                TokenKind::Op(op)
            }
            _ if b.is_ascii_digit() => {
                let (value, end) = lex_float(source, start)?;
                i = end;
                TokenKind::Float(value)
            }
            _ if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {
                let (ident, end, quoted) = lex_identifier(source, start)?;
                i = end;
                // Keyword recognition never applies to the quoted reference
                // form; `input["true"]` names an input called "true".
                match ident.as_str() {
                    "true" if !quoted => TokenKind::Bool(true),
                    "false" if !quoted => TokenKind::Bool(false),
                    _ => TokenKind::Ident(ident),
                }
            }
            _ => {
                return Err(VisifError::syntax(format!(
                    "unrecognized character {:?} at offset {start}",
                    source[start..].chars().next().unwrap_or('?')
                )));
            }
        };

        tokens.push(Token { kind, offset: start });
    }

    Ok(tokens)
}

/// Lex `.x`/`.y`/`.z`/`.w` starting at the dot.
fn lex_component_accessor(bytes: &[u8], start: usize) -> VisifResult<OperatorType> {
    let op = match bytes.get(start + 1) {
        Some(b'x') => OperatorType::GetComp1,
        Some(b'y') => OperatorType::GetComp2,
        Some(b'z') => OperatorType::GetComp3,
        Some(b'w') => OperatorType::GetComp4,
        _ => {
            return Err(VisifError::syntax(format!(
                "expected component accessor .x/.y/.z/.w at offset {start}"
            )));
        }
    };
    // `.xy` and friends are not accessors.
    if let Some(&next) = bytes.get(start + 2) {
        if next.is_ascii_alphanumeric() || next == b'_' {
            return Err(VisifError::syntax(format!(
                "unknown component accessor at offset {start}"
            )));
        }
    }
    Ok(op)
}

/// Lex a decimal float literal starting at a digit. Returns the value and
/// the byte offset one past the literal.
fn lex_float(source: &str, start: usize) -> VisifResult<(f64, usize)> {
    let bytes = source.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // A fraction needs a digit after the dot; `2.x` is a literal followed by
    // a component accessor.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let text = &source[start..end];
    let value: f64 = text
        .parse()
        .map_err(|_| VisifError::syntax(format!("malformed number '{text}' at offset {start}")))?;
    Ok((value, end))
}

/// Lex an identifier, expanding the `input["name"]` reference form. The
/// boolean distinguishes the quoted form from a bare word.
fn lex_identifier(source: &str, start: usize) -> VisifResult<(String, usize, bool)> {
    let bytes = source.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }

    let word = &source[start..end];
    if word == "input" && bytes.get(end) == Some(&b'[') {
        if bytes.get(end + 1) != Some(&b'"') {
            return Err(VisifError::syntax(format!(
                "expected '\"' after 'input[' at offset {end}"
            )));
        }
        let name_start = end + 2;
        let Some(rel_quote) = source[name_start..].find('"') else {
            return Err(VisifError::syntax(format!(
                "unterminated input reference at offset {start}"
            )));
        };
        let name_end = name_start + rel_quote;
        if bytes.get(name_end + 1) != Some(&b']') {
            return Err(VisifError::syntax(format!(
                "expected ']' to close input reference at offset {start}"
            )));
        }
        if name_end == name_start {
            return Err(VisifError::syntax(format!(
                "empty input reference at offset {start}"
            )));
        }
        return Ok((source[name_start..name_end].to_string(), name_end + 2, true));
    }

    Ok((word.to_string(), end, false))
}

#[cfg(test)]
#[path = "../../tests/unit/expr/token.rs"]
mod tests;
