/// Structural features of a SELECT that decide whether a locking clause can be added to it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectShape {
    pub aggregate: bool,
    pub distinct: bool,
    /// Number of table aliases in the FROM clause.
    pub tables: usize,
    pub order_by: bool,
    pub inner_join: bool,
    pub outer_join: bool,
    /// Whether the SELECT carries an offset or a limit.
    pub range: bool,
}

impl SelectShape {
    pub fn single_table() -> Self {
        Self {
            tables: 1,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSpec {
    Leading,
    Trailing,
    Both,
}
