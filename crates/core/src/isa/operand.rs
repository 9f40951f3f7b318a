//! Operand Tokenizer and Resolver.
//!
//! Turns raw operand text into resolved values. It handles:
//! 1. **Registers:** `$name` or `$number`, through the fixed ABI table.
//! 2. **Integers:** Decimal or `0x` hexadecimal, optionally signed.
//! 3. **Memory operands:** `offset(register)`, resolved as an offset then a base.
//!
//! Resolution failures are returned as [`DiagnosticKind`] values; callers decide the
//! line and the fallback.

use crate::common::constants::{COMMENT_CHAR, REGISTER_SIGIL};
use crate::common::error::DiagnosticKind;
use crate::isa::abi;

/// A resolved operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A register index (0-31).
    Register(usize),
    /// An integer literal.
    Value(i64),
    /// An `offset(base)` pair; the offset comes first.
    Memory {
        /// Byte offset.
        offset: i64,
        /// Base register index.
        base: usize,
    },
}

/// Splits an operand list on commas and trims each piece.
///
/// A `#` inside a piece ends the list: the text before it is kept as the last
/// operand (if non-empty) and everything after is dropped.
pub fn split_operands(list: &str) -> Vec<&str> {
    let mut operands = Vec::new();
    for piece in list.split(',') {
        if let Some(pos) = piece.find(COMMENT_CHAR) {
            let kept = piece[..pos].trim();
            if !kept.is_empty() {
                operands.push(kept);
            }
            break;
        }
        operands.push(piece.trim());
    }
    operands
}

/// Resolves a `$`-prefixed register name or number.
pub fn resolve_register(token: &str) -> Result<usize, DiagnosticKind> {
    token
        .strip_prefix(REGISTER_SIGIL)
        .and_then(abi::lookup)
        .ok_or_else(|| DiagnosticKind::InvalidRegister(token.to_string()))
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer with an optional sign.
pub fn parse_value(token: &str) -> Result<i64, DiagnosticKind> {
    let unknown = || DiagnosticKind::UnknownValue(token.to_string());
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(unknown());
    }
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(|_| unknown())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Splits `offset(register)` into its resolved offset and base register.
///
/// An empty offset (`($sp)`) means zero.
pub fn resolve_memory(token: &str) -> Result<(i64, usize), DiagnosticKind> {
    let (offset_text, rest) = token
        .split_once('(')
        .ok_or_else(|| DiagnosticKind::UnknownValue(token.to_string()))?;
    let base_text = rest
        .strip_suffix(')')
        .ok_or_else(|| DiagnosticKind::UnknownValue(token.to_string()))?;
    let offset_text = offset_text.trim();
    let offset = if offset_text.is_empty() {
        0
    } else {
        parse_value(offset_text)?
    };
    let base = resolve_register(base_text.trim())?;
    Ok((offset, base))
}

/// Resolves any operand to a register, a value, or a memory pair.
pub fn tokenize(token: &str) -> Result<Token, DiagnosticKind> {
    if token.starts_with(REGISTER_SIGIL) {
        resolve_register(token).map(Token::Register)
    } else if token.ends_with(')') {
        resolve_memory(token).map(|(offset, base)| Token::Memory { offset, base })
    } else {
        parse_value(token).map(Token::Value)
    }
}
