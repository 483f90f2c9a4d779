use super::ast::PatternNode;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternParseError {
    #[error("Unexpected character '{found}' at position {pos}")]
    UnexpectedChar { pos: usize, found: char },

    #[error("Unexpected end of pattern")]
    UnexpectedEnd,

    #[error("Empty bracket expression at position {pos}")]
    EmptyBrackets { pos: usize },

    #[error("Degree constraint 'X' at position {pos} must be followed by digits")]
    InvalidDegree { pos: usize },

    #[error("Conflicting element constraints in one bracket expression at position {pos}")]
    ConflictingElement { pos: usize },

    #[error("Conflicting degree constraints in one bracket expression at position {pos}")]
    ConflictingDegree { pos: usize },

    #[error("Trailing input at position {pos}")]
    TrailingInput { pos: usize },
}

/// Parses a pattern string into a [`PatternNode`] tree.
///
/// Grammar (whitespace is not permitted):
///
/// ```text
/// pattern := atom
/// atom    := core branch* chain?
/// core    := '*' | SYMBOL | '[' term ((';'|'&') term)* ']'
/// term    := '*' | SYMBOL | 'X' DIGITS
/// branch  := '(' atom ')'
/// chain   := atom
/// SYMBOL  := uppercase letter, optional lowercase letters
/// ```
///
/// Branches and the optional trailing chain atom all become children of the
/// preceding atom, so `C(H)(H)(H)H` is a carbon with four required hydrogen
/// neighbors and `[C;X4]` is a carbon with exactly four bonded neighbors of
/// any element.
pub fn parse_pattern(input: &str) -> Result<PatternNode, PatternParseError> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
    };
    let node = parser.parse_atom()?;
    if parser.pos < parser.chars.len() {
        return Err(PatternParseError::TrailingInput { pos: parser.pos });
    }
    Ok(node)
}

impl FromStr for PatternNode {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn expect(&mut self, expected: char) -> Result<(), PatternParseError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(PatternParseError::UnexpectedChar {
                pos: self.pos - 1,
                found: c,
            }),
            None => Err(PatternParseError::UnexpectedEnd),
        }
    }

    fn parse_atom(&mut self) -> Result<PatternNode, PatternParseError> {
        let mut node = self.parse_core()?;
        while self.peek() == Some('(') {
            self.bump();
            let child = self.parse_atom()?;
            self.expect(')')?;
            node.children.push(child);
        }
        if let Some(c) = self.peek()
            && (c == '*' || c == '[' || c.is_ascii_uppercase())
        {
            let chain = self.parse_atom()?;
            node.children.push(chain);
        }
        Ok(node)
    }

    fn parse_core(&mut self) -> Result<PatternNode, PatternParseError> {
        match self.peek() {
            Some('*') => {
                self.bump();
                Ok(PatternNode::any())
            }
            Some('[') => {
                self.bump();
                self.parse_bracket()
            }
            Some(c) if c.is_ascii_uppercase() => {
                let symbol = self.parse_symbol();
                Ok(PatternNode::element(&symbol))
            }
            Some(c) => Err(PatternParseError::UnexpectedChar {
                pos: self.pos,
                found: c,
            }),
            None => Err(PatternParseError::UnexpectedEnd),
        }
    }

    fn parse_bracket(&mut self) -> Result<PatternNode, PatternParseError> {
        let open_pos = self.pos - 1;
        if self.peek() == Some(']') {
            return Err(PatternParseError::EmptyBrackets { pos: open_pos });
        }
        let mut node = PatternNode::any();
        loop {
            self.parse_term(&mut node)?;
            match self.bump() {
                Some(';') | Some('&') => continue,
                Some(']') => break,
                Some(c) => {
                    return Err(PatternParseError::UnexpectedChar {
                        pos: self.pos - 1,
                        found: c,
                    });
                }
                None => return Err(PatternParseError::UnexpectedEnd),
            }
        }
        Ok(node)
    }

    fn parse_term(&mut self, node: &mut PatternNode) -> Result<(), PatternParseError> {
        let term_pos = self.pos;
        match self.peek() {
            Some('*') => {
                self.bump();
                Ok(())
            }
            // 'X' starts a degree constraint unless it begins a two-letter
            // symbol such as Xe.
            Some('X') if !matches!(self.chars.get(self.pos + 1), Some(c) if c.is_ascii_lowercase()) => {
                self.bump();
                match self.parse_digits() {
                    Some(degree) => {
                        if node.degree.is_some() {
                            return Err(PatternParseError::ConflictingDegree { pos: term_pos });
                        }
                        node.degree = Some(degree);
                        Ok(())
                    }
                    None => Err(PatternParseError::InvalidDegree { pos: term_pos }),
                }
            }
            Some(c) if c.is_ascii_uppercase() => {
                let symbol = self.parse_symbol();
                if node.element.is_some() {
                    return Err(PatternParseError::ConflictingElement { pos: term_pos });
                }
                node.element = Some(symbol);
                Ok(())
            }
            Some(c) => Err(PatternParseError::UnexpectedChar {
                pos: term_pos,
                found: c,
            }),
            None => Err(PatternParseError::UnexpectedEnd),
        }
    }

    fn parse_symbol(&mut self) -> String {
        let mut symbol = String::new();
        if let Some(c) = self.peek()
            && c.is_ascii_uppercase()
        {
            symbol.push(c);
            self.bump();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_lowercase() {
                symbol.push(c);
                self.bump();
            } else {
                break;
            }
        }
        symbol
    }

    fn parse_digits(&mut self) -> Option<usize> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return None;
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .parse()
            .ok()
    }
}
