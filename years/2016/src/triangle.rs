//! Checking triangle side lengths.

#[cfg(test)]
mod tests;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0} rows left over, expected groups of three")]
pub struct PartialGroup(pub usize);

/// Test if three sides can form a triangle.
///
/// # Examples
///
/// ```
/// use y2016::triangle::is_triangle;
///
/// assert!(is_triangle([3, 4, 5]));
/// assert!(!is_triangle([5, 10, 25]));
/// assert!(!is_triangle([u32::MAX, u32::MAX, 0]));
/// ```
#[inline]
pub fn is_triangle(sides: [u32; 3]) -> bool {
    let [a, b, c] = sides.map(u64::from);
    a + b > c && a + c > b && b + c > a
}

/// Count the rows which are triangles.
pub fn count<'a, I>(rows: I) -> usize
where
    I: IntoIterator<Item = &'a [u32; 3]>,
{
    rows.into_iter().filter(|&&row| is_triangle(row)).count()
}

/// Regroup rows so that each column of every three rows forms one triangle.
pub fn by_columns(rows: &[[u32; 3]]) -> Result<Vec<[u32; 3]>, PartialGroup> {
    let chunks = rows.chunks_exact(3);

    if !chunks.remainder().is_empty() {
        return Err(PartialGroup(chunks.remainder().len()));
    }

    let mut output = Vec::with_capacity(rows.len());

    for chunk in chunks {
        let [a, b, c] = [chunk[0], chunk[1], chunk[2]];

        for column in 0..3 {
            output.push([a[column], b[column], c[column]]);
        }
    }

    Ok(output)
}
