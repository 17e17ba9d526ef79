//! # romana
//!
//! romana is a roman numeral parser written in Rust.
//! It tokenizes, validates, and evaluates numerals in standard subtractive
//! notation, rejecting malformed input with a human-readable reason.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    parser::{rules, tokenizer::Tokenizer},
};

/// Provides the unified error type for parsing.
///
/// This module defines all errors that can be raised while tokenizing or
/// validating a roman numeral. It standardizes error reporting and carries
/// the details needed for user feedback, such as the offending character or
/// the rendered text of conflicting tokens.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes of the parser.
/// - Renders each failure as a human-readable description.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages a numeral passes through.
///
/// This module ties together tokenization and grammar validation. The
/// tokenizer groups characters into tokens while the rules decide which
/// tokens, and which orderings of tokens, are legal.
///
/// # Responsibilities
/// - Coordinates the tokenizer and the validation rules.
/// - Manages the flow of data and errors between stages.
pub mod parser;
/// Defines the structure of tokenized numerals.
///
/// This module declares the `Digit` and `Token` types that represent the
/// pieces of a roman numeral. Tokens are built by the tokenizer, checked by
/// the validation rules, and evaluated into their numeric contribution.
///
/// # Responsibilities
/// - Defines the seven roman digits and their two-way character mapping.
/// - Defines repeat and pair tokens with exhaustive pattern matching.
/// - Evaluates tokens and renders them back into text.
pub mod token;

/// Parses the numerical value of a roman numeral.
///
/// The input is one line of text: parsing stops at a newline character or
/// at the end of the string, whichever comes first. Whitespace is not
/// trimmed; any character outside the seven roman digits fails the parse.
///
/// # Errors
/// Returns an error describing the first problem encountered: empty input,
/// a character that is not a roman digit, a subtractive pair that does not
/// exist, a digit repeated too often, or two tokens in an order the
/// grammar forbids.
///
/// # Examples
/// ```
/// use romana::parse_roman_number;
///
/// assert_eq!(parse_roman_number("MCMXCIV").unwrap(), 1994);
///
/// // LL is not a valid numeral: L may not repeat.
/// assert!(parse_roman_number("LL").is_err());
/// ```
pub fn parse_roman_number(input: &str) -> Result<u32, ParseError> {
    let mut tokenizer = Tokenizer::new(input);

    if tokenizer.is_exhausted() {
        return Err(ParseError::EmptyInput);
    }

    // The first token seeds the tally.
    let mut prev = tokenizer.next_token()?;
    let mut tally = prev.value();

    // Every remaining token must be allowed to follow its predecessor.
    while !tokenizer.is_exhausted() {
        let next = tokenizer.next_token()?;

        if !rules::valid_sequence(prev, next) {
            return Err(ParseError::InvalidSequence { first:  prev.to_string(),
                                                     second: next.to_string(), });
        }

        tally += next.value();
        prev = next;
    }

    Ok(tally)
}
