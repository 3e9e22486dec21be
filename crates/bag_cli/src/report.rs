use std::fmt::Display;

use linked_bag::Bag;
use serde::Serialize;

/// Outcome of a `remove` or `contains` on one item
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct Check {
    pub item: String,
    pub result: bool,
}

impl Check {
    pub fn new(item: impl Into<String>, result: bool) -> Self {
        Self {
            item: item.into(),
            result,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Report {
    /// number of items the bag was built from
    pub added: usize,
    pub removed: Vec<Check>,
    pub contains: Vec<Check>,
    /// the destination array, or why the copy was refused
    pub copy: Option<Result<Vec<String>, String>>,
    pub cleared: bool,
    /// the bag once every operation ran
    pub bag: Bag<String>,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "built from {} items", self.added)?;
        self.removed
            .iter()
            .try_for_each(|Check { item, result }| {
                write!(f, "\n\t- remove {item}: {result}")
            })?;
        self.contains
            .iter()
            .try_for_each(|Check { item, result }| {
                write!(f, "\n\t- contains {item}: {result}")
            })?;
        match &self.copy {
            Some(Ok(array)) => write!(f, "\n\t- copy: [{}]", array.join(", "))?,
            Some(Err(e)) => write!(f, "\n\t- copy refused: {e}")?,
            None => (),
        }
        if self.cleared {
            write!(f, "\n\t- cleared")?;
        }
        write!(f, "\nbag ({} elements): {}", self.bag.len(), self.bag)
    }
}
