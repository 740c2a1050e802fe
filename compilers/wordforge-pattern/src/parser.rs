use core::iter::FusedIterator;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::anychar,
    combinator::{map, map_opt, value},
    multi::fold_many0,
    IResult,
};
use wordforge_protocol::{Error, Mod, Result, WordClass};

use crate::token::{Span, Token, TokenKind};

const ESCAPE: char = '%';

fn literal(input: &str) -> IResult<&str, TokenKind> {
    map(take_while1(|c: char| c != ESCAPE), |_| TokenKind::Literal)(input)
}

fn percent(input: &str) -> IResult<&str, TokenKind> {
    value(TokenKind::Percent, tag("%%"))(input)
}

/// Zero or more modifier letters, folded into one set. Repeats are harmless.
fn modifiers(input: &str) -> IResult<&str, Mod> {
    fold_many0(map_opt(anychar, Mod::from_letter), Mod::empty, |acc, m| acc | m)(input)
}

fn insertion(input: &str) -> IResult<&str, WordClass> {
    map_opt(anychar, WordClass::from_letter)(input)
}

/// `%<mods><class>`. The error tells where the escape went wrong: right
/// after the `%`, after the modifiers, or on an unknown letter.
fn escape(input: &str) -> Result<(&str, TokenKind)> {
    let body = input.strip_prefix(ESCAPE).ok_or(Error::UnknownCommand)?;
    if body.is_empty() {
        return Err(Error::EscapedStrTerm);
    }

    let (rest, mods) = modifiers(body).map_err(|_| Error::UnknownCommand)?;
    if rest.is_empty() {
        return Err(Error::SpecStrTerm);
    }

    let (rest, class) = insertion(rest).map_err(|_| Error::UnknownCommand)?;
    Ok((rest, TokenKind::Insert { class, mods }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Lazy tokenizer over a pattern.
///
/// Tokens come out left to right, so a caller rendering as it goes stops at
/// the first bad escape. After an error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    rest: &'a str,
    state: State,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Start => {
                self.state = State::Running;
                if self.source.is_empty() {
                    self.state = State::Done;
                    return Some(Err(Error::EmptyPattern));
                }
            }
            State::Running => {}
        }

        let input = self.rest;
        if input.is_empty() {
            self.state = State::Done;
            return None;
        }

        let parsed = match alt((literal, percent))(input) {
            Ok(res) => Ok(res),
            Err(_) => escape(input),
        };

        match parsed {
            Ok((next_input, kind)) => {
                let start = self.source.len() - input.len();
                let end = self.source.len() - next_input.len();
                self.rest = next_input;

                Some(Ok(Token {
                    span: Span::new(start, end),
                    text: &self.source[start..end],
                    kind,
                }))
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Starts tokenizing `pattern`. An empty pattern yields a single
/// `EmptyPattern` error.
pub fn tokenize(pattern: &str) -> Tokens<'_> {
    Tokens {
        source: pattern,
        rest: pattern,
        state: State::Start,
    }
}

/// Tokenizes the whole pattern up front.
pub fn parse(pattern: &str) -> Result<Vec<Token<'_>>> {
    tokenize(pattern).collect()
}
