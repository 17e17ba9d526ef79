use crate::{
    error::ParseError,
    parser::rules,
    token::{Digit, Token},
};

/// Splits one line of input into roman numeral tokens, one per call.
///
/// The tokenizer holds the remaining unconsumed input. Each call to
/// [`next_token`](Self::next_token) reads the next token and advances past
/// the characters it consumed. A newline terminates the numeral just like
/// the end of the string; anything after it is never read.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over one line of input.
    pub const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Whether the remaining input is used up.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.rest.chars().next(), None | Some('\n'))
    }

    /// Reads the next token and consumes its characters.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] when no input remains,
    /// [`ParseError::InvalidCharacter`] for a character outside the roman
    /// digits, [`ParseError::InvalidPair`] for a subtractive pair that
    /// does not exist, and [`ParseError::InvalidRepeatCount`] for a run
    /// that is too long for its digit.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let mut chars = self.rest.chars();

        let Some(first_char) = chars.next().filter(|&c| c != '\n') else {
            return Err(ParseError::UnexpectedEndOfInput);
        };
        let first = decode(first_char)?;

        // The second character decides between pair and repeat.
        let Some(second_char) = chars.next().filter(|&c| c != '\n') else {
            self.consume(1);
            return Ok(Token::Repeat { digit: first, count: 1 });
        };
        let second = decode(second_char)?;

        if first < second {
            // A pair, like XL or IV.
            if !rules::valid_pair(first, second) {
                return Err(ParseError::InvalidPair { prefix: first_char,
                                                     suffix: second_char, });
            }
            self.consume(2);
            return Ok(Token::Pair { prefix: first, suffix: second });
        }

        if first > second {
            // A lonely digit (trivial repeat). Only the first character is
            // consumed; the next invocation deals with the second one.
            self.consume(1);
            return Ok(Token::Repeat { digit: first, count: 1 });
        }

        // A repetition. Keep reading until the digit changes.
        let mut count = 2;
        for c in chars {
            if c == '\n' || decode(c)? != first {
                break;
            }
            count += 1;
        }

        if !rules::valid_repeats(first, count) {
            return Err(ParseError::InvalidRepeatCount { digit: first_char,
                                                        count });
        }
        self.consume(count as usize);
        Ok(Token::Repeat { digit: first, count })
    }

    // Roman digits are ASCII, so consumed characters and bytes count the
    // same.
    fn consume(&mut self, chars: usize) {
        self.rest = &self.rest[chars..];
    }
}

/// Parses the numeric value of a single character.
fn decode(c: char) -> Result<Digit, ParseError> {
    Digit::from_char(c).ok_or(ParseError::InvalidCharacter { found: c })
}
