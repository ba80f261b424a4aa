use std::collections::BTreeSet;

/// A cell addressed by its data row index and column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Request to run a row's primary-cell handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub row: usize,
}

/// Forwards activations from sibling cells to the row's primary cell.
///
/// Only sibling cells are routed. The primary cell runs its own handler, so a
/// forwarded activation can never come back around to itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowExpansionBridge {
    primary_column: usize,
}

impl RowExpansionBridge {
    pub fn new(primary_column: usize) -> Self {
        Self { primary_column }
    }

    pub fn primary_column(&self) -> usize {
        self.primary_column
    }

    pub fn is_primary(&self, cell: CellRef) -> bool {
        cell.column == self.primary_column
    }

    pub fn route(&self, cell: CellRef) -> Option<Activation> {
        (!self.is_primary(cell)).then_some(Activation { row: cell.row })
    }
}

/// Which rows currently show their child row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<usize>,
}

impl ExpansionState {
    pub fn is_expanded(&self, row: usize) -> bool {
        self.expanded.contains(&row)
    }

    /// Primary-cell handler: flips the row and returns its new state.
    pub fn activate(&mut self, activation: Activation) -> bool {
        if self.expanded.remove(&activation.row) {
            false
        } else {
            self.expanded.insert(activation.row);
            true
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}
