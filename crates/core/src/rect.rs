//! The transient rectangular view of a hex grid: rows of optional values.
//! [Rect] is what [HexMap](crate::HexMap) construction consumes and
//! materialization produces; nothing here persists beyond those boundaries.

/// A rectangular grid of optional values: an ordered list of rows, each an
/// ordered list of cells. `None` marks a cell with nothing in it. Rows may
/// have unequal lengths; consumers treat missing tail cells the same as
/// `None`.
pub type Rect<T> = Vec<Vec<Option<T>>>;

/// Chunk a flat sequence of items into a [Rect] with `cols` columns. Rows
/// fill left to right, top to bottom; the last row is ragged when the item
/// count isn't a multiple of `cols`.
///
/// Panics if `cols` is zero.
pub fn chunked<T>(items: impl IntoIterator<Item = T>, cols: usize) -> Rect<T> {
    assert!(cols > 0, "cannot chunk items into zero columns");
    let mut rows: Rect<T> = Vec::new();
    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < cols => row.push(Some(item)),
            _ => rows.push(vec![Some(item)]),
        }
    }
    rows
}
