use serde::{Deserialize, Serialize};

/// One data row of a [`Table`](super::table::Table).
///
/// `index` is the zero-based position of the row among the data rows of the
/// file it was read from. It is carried through sampling unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub values: Vec<String>,
}

impl Row {
    pub fn new(index: usize, values: Vec<String>) -> Self {
        Row { index, values }
    }

    pub fn get(&self, ordinal: usize) -> Option<&str> {
        self.values.get(ordinal).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
