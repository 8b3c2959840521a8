/// The reserved selector value meaning "every value"
pub const ALL: &str = "All";

/// A selector value, with the `All` sentinel lifted out of the string space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    All,
    One(&'a str),
}

impl<'a> Selection<'a> {
    /// `None` for an empty selector, meaning nothing has been picked yet
    pub fn parse(value: &'a str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self::from(value))
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::One(selected) => *selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<'a> From<&'a str> for Selection<'a> {
    fn from(value: &'a str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::One(value)
        }
    }
}
