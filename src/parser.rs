/// The tokenizer module splits raw input into roman numeral tokens.
///
/// The tokenizer reads one line of text left to right and produces one
/// token per call: either a run of identical digits or a subtractive pair.
/// This is the first stage of parsing and the only one that touches the
/// input text.
///
/// # Responsibilities
/// - Groups input characters into `Repeat` and `Pair` tokens.
/// - Tracks how much of the input each token consumed.
/// - Reports invalid characters, impossible pairs, and over-long runs.
pub mod tokenizer;

/// The rules module holds the grammar predicates of roman numerals.
///
/// Three checks decide whether a numeral is well formed: a subtractive
/// pair must be one of the six canonical combinations, a digit may only
/// repeat a limited number of times, and adjacent tokens must appear in
/// strictly decreasing order. The tokenizer and the parse driver consult
/// these predicates; the predicates themselves never construct tokens.
///
/// # Responsibilities
/// - Validates prefix-suffix pairs against the canonical pair table.
/// - Validates repetition counts per digit.
/// - Validates the ordering of adjacent tokens.
pub mod rules;
