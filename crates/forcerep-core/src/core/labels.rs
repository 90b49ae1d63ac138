use serde::Deserialize;
use std::fmt;

/// Identifies one tracked force group in report output.
///
/// A label is only ever used for display. The group queried for the label at
/// position `i` of a label sequence is always group `i`, regardless of what the
/// label itself says.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ForceLabel {
    Index(usize),
    Name(String),
}

impl fmt::Display for ForceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceLabel::Index(index) => write!(f, "{index}"),
            ForceLabel::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for ForceLabel {
    fn from(name: &str) -> Self {
        ForceLabel::Name(name.to_string())
    }
}

impl From<String> for ForceLabel {
    fn from(name: String) -> Self {
        ForceLabel::Name(name)
    }
}

impl From<usize> for ForceLabel {
    fn from(index: usize) -> Self {
        ForceLabel::Index(index)
    }
}

/// Builds a label sequence from anything convertible into [`ForceLabel`].
pub fn labels<I, L>(items: I) -> Vec<ForceLabel>
where
    I: IntoIterator<Item = L>,
    L: Into<ForceLabel>,
{
    items.into_iter().map(Into::into).collect()
}
