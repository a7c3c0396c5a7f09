/// Single grid axis used for board width and height.
pub type Dim = u8;

/// Count type used for pair counts and total-card counts.
pub type CardCount = u16;

/// Linear card position, row-major over the `(height, width)` grid.
pub type Position = usize;

pub const fn mult(a: Dim, b: Dim) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}
