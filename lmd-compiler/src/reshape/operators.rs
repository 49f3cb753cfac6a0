use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// How a chain of the same operator groups.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Associativity {
    #[default]
    Left,
    Right,
    None,
}

impl FromStr for Associativity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "none" => Ok(Self::None),
            _ => Err(format!("unknown associativity `{s}`, expected left, right or none")),
        }
    }
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Operators with a higher priority bind tighter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Precedence {
    pub priority: i32,
    pub associativity: Associativity,
}

/// The operators a program may use. There is no built in default; every
/// operator must be declared by the caller.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    operators: HashMap<SmolStr, Precedence>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an operator, replacing any earlier declaration of the same text.
    pub fn add(&mut self, text: &str, priority: i32, associativity: Associativity) {
        self.operators.insert(SmolStr::new(text), Precedence { priority, associativity });
    }

    pub fn with(mut self, text: &str, priority: i32, associativity: Associativity) -> Self {
        self.add(text, priority, associativity);
        self
    }

    pub fn get(&self, text: &str) -> Option<Precedence> {
        self.operators.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
