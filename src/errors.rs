use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    NoPathFound, // Frontier exhausted before the goal was reached
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid, // No rows, or rows without cells
    RaggedRows { row: usize, expected: usize, found: usize }, // Row length differs from the first row
}


impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for SearchError {}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid has no cells"),
            GridError::RaggedRows { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}
