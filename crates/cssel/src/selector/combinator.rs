use std::fmt;

use nom::{
    IResult,
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, map},
};

/// The relationship between the two halves of a combined selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
    /// A token outside the known set, rendered verbatim.
    Other(String),
}

impl Combinator {
    /// Interprets a combinator token.
    ///
    /// Only the exact single-character tokens `' '`, `'>'`, `'+'` and `'~'`
    /// are recognised. Anything else, padded variants included, is kept
    /// verbatim as [`Combinator::Other`].
    pub fn parse(token: &str) -> Combinator {
        match all_consuming(parse_combinator)(token) {
            Ok((_, combinator)) => combinator,
            Err(_) => Combinator::Other(token.to_string()),
        }
    }

    /// The literal placed between the padding spaces when rendering.
    pub fn token(&self) -> &str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
            Combinator::Other(token) => token,
        }
    }

    /// False only for [`Combinator::Other`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Combinator::Other(_))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses one of ` `, `>`, `+`, `~`.
pub fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(char(' '), |_| Combinator::Descendant),
        map(char('>'), |_| Combinator::Child),
        map(char('+'), |_| Combinator::AdjacentSibling),
        map(char('~'), |_| Combinator::GeneralSibling),
    ))(input)
}
