//! Single-answer prompts: validated input and yes/no questions.
//!
//! Both are read-check-retry loops. A bad answer prints a notice and asks
//! again, without limit; only a dead console ends the loop early.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::console::{Console, PromptError, PROMPT_MARKER};

const INVALID_VALUE: &str = "Invalid value";
const ANSWER_YES_OR_NO: &str = "Please answer 'y'es or 'n'o";

const AFFIRMATIVE: [&str; 4] = ["y", "yes", "1", "true"];
const NEGATIVE: [&str; 4] = ["n", "no", "0", "false"];

// ============================================================================
// PARSERS
// ============================================================================

/// A rejected answer. Recoverable: the prompt reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Turns raw answer text into a typed value.
pub trait Parser<T> {
    fn parse(&self, text: &str) -> Result<T, ParseError>;
}

impl<T, F> Parser<T> for F
where
    F: Fn(&str) -> Result<T, ParseError>,
{
    fn parse(&self, text: &str) -> Result<T, ParseError> {
        self(text)
    }
}

/// Parser for any `FromStr` type. Surrounding whitespace is ignored.
pub fn parsed<T>() -> impl Fn(&str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    |text: &str| {
        text.trim()
            .parse::<T>()
            .map_err(|e| ParseError::new(e.to_string()))
    }
}

/// Parser that accepts the answer verbatim when `predicate` holds.
pub fn validate<P>(predicate: P) -> impl Fn(&str) -> Result<String, ParseError>
where
    P: Fn(&str) -> bool,
{
    move |text: &str| {
        if predicate(text) {
            Ok(text.to_string())
        } else {
            Err(ParseError::new(format!("{:?} failed validation", text)))
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Free-form answer run through a parser until it parses.
pub struct Input<T, P> {
    prompt: String,
    parser: P,
    _value: std::marker::PhantomData<fn() -> T>,
}

impl<T, P: Parser<T>> Input<T, P> {
    pub fn new(prompt: impl Into<String>, parser: P) -> Self {
        Input {
            prompt: prompt.into(),
            parser,
            _value: std::marker::PhantomData,
        }
    }

    /// Ask on stdin/stdout.
    pub fn ask(&self) -> Result<T, PromptError> {
        self.ask_on(&mut Console::stdio())
    }

    pub fn ask_on<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<T, PromptError> {
        let text = format!("{}:\n{}", self.prompt, PROMPT_MARKER);
        loop {
            let answer = console.read_answer(&text)?;
            match self.parser.parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(prompt = %self.prompt, error = %e, "rejected input");
                    console.line(INVALID_VALUE)?;
                }
            }
        }
    }
}

// ============================================================================
// BINARY
// ============================================================================

/// Yes/no question with an optional default for an empty answer.
#[derive(Debug, Clone)]
pub struct Binary {
    prompt: String,
    default: Option<bool>,
}

impl Binary {
    /// A question with no default: an empty answer is asked again.
    pub fn new(prompt: impl Into<String>) -> Self {
        Binary {
            prompt: prompt.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    /// Ask on stdin/stdout.
    pub fn ask(&self) -> Result<bool, PromptError> {
        self.ask_on(&mut Console::stdio())
    }

    pub fn ask_on<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<bool, PromptError> {
        let text = format!("{}\n{}{}", self.prompt, hint(self.default), PROMPT_MARKER);
        loop {
            let answer = console.read_answer(&text)?;
            match interpret(&answer, self.default) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!(prompt = %self.prompt, answer = %answer, "unrecognized yes/no answer");
                    console.line(ANSWER_YES_OR_NO)?;
                }
            }
        }
    }
}

/// The options hint; the capital letter is what an empty answer means.
pub fn hint(default: Option<bool>) -> &'static str {
    match default {
        None => "(y/n)",
        Some(true) => "(Y/n)",
        Some(false) => "(y/N)",
    }
}

/// Read a yes/no answer. `None` means ask again.
pub fn interpret(answer: &str, default: Option<bool>) -> Option<bool> {
    let normalized = answer.trim().to_lowercase();

    if normalized.is_empty() {
        return default;
    }
    if AFFIRMATIVE.contains(&normalized.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    // --- Parsers ---

    #[test]
    fn parsed_int_ignores_whitespace() {
        let parser = parsed::<i64>();
        assert_eq!(parser.parse(" 42 "), Ok(42));
        assert!(parser.parse("abc").is_err());
    }

    #[test]
    fn validate_passes_text_through_when_predicate_holds() {
        let parser = validate(|s| s.contains('a'));
        assert_eq!(parser.parse("banana"), Ok("banana".to_string()));
        assert!(parser.parse("plum").is_err());
    }

    #[test]
    fn closures_are_parsers() {
        let even = |s: &str| match s.parse::<u32>() {
            Ok(n) if n % 2 == 0 => Ok(n),
            _ => Err(ParseError::new("not even")),
        };
        assert_eq!(even.parse("4"), Ok(4));
        assert_eq!(even.parse("3"), Err(ParseError::new("not even")));
    }

    // --- Input ---

    #[test]
    fn input_returns_parsed_value() {
        let mut c = console("42\n");
        let value = Input::new("How many pies?", parsed::<i32>()).ask_on(&mut c).unwrap();
        assert_eq!(value, 42);
        assert_eq!(transcript(&c), "How many pies?:\n? ");
    }

    #[test]
    fn input_retries_after_invalid_value() {
        let mut c = console("abc\n\n7\n");
        let value = Input::new("Count", parsed::<u8>()).ask_on(&mut c).unwrap();
        assert_eq!(value, 7);

        let out = transcript(&c);
        assert_eq!(out.matches("Invalid value").count(), 2);
        assert_eq!(out.matches("Count:").count(), 3);
    }

    #[test]
    fn input_with_validator_hands_back_raw_answer() {
        let mut c = console("xyz\n has a \n");
        let value = Input::new("Word", validate(|s| s.contains('a'))).ask_on(&mut c).unwrap();
        assert_eq!(value, " has a ");
    }

    #[test]
    fn input_propagates_closed_stream() {
        let mut c = console("nope\n");
        let result = Input::new("Count", parsed::<u8>()).ask_on(&mut c);
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    // --- Binary ---

    #[test]
    fn hint_marks_default_with_capital() {
        assert_eq!(hint(None), "(y/n)");
        assert_eq!(hint(Some(true)), "(Y/n)");
        assert_eq!(hint(Some(false)), "(y/N)");
    }

    #[test]
    fn interpret_accepts_token_sets() {
        for yes in ["y", "YES", " true ", "1"] {
            assert_eq!(interpret(yes, None), Some(true), "{yes}");
        }
        for no in ["n", "No", "FALSE", "0"] {
            assert_eq!(interpret(no, None), Some(false), "{no}");
        }
        assert_eq!(interpret("maybe", Some(true)), None);
    }

    #[test]
    fn empty_answer_takes_default() {
        let mut c = console("\n");
        assert!(Binary::new("Sure?").with_default(true).ask_on(&mut c).unwrap());

        let mut c = console("\n");
        assert!(!Binary::new("Sure?").with_default(false).ask_on(&mut c).unwrap());
    }

    #[test]
    fn empty_answer_without_default_asks_again() {
        let mut c = console("\n  \ny\n");
        assert!(Binary::new("Sure?").ask_on(&mut c).unwrap());
        assert_eq!(transcript(&c).matches("Please answer").count(), 2);
    }

    #[test]
    fn empty_answers_without_default_never_resolve() {
        let mut c = console("\n\n\n");
        let result = Binary::new("Sure?").ask_on(&mut c);
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    #[test]
    fn binary_renders_prompt_and_hint() {
        let mut c = console("no\n");
        let answer = Binary::new("Delete?").with_default(false).ask_on(&mut c).unwrap();
        assert!(!answer);
        assert_eq!(transcript(&c), "Delete?\n(y/N)? ");
    }
}
