//! Two-dimensional views over flat slices.

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;

pub trait GridExt<T>: Sealed {
    /// Convert into an immutable grid where each row is `columns` wide.
    ///
    /// Trailing elements which do not fill a complete row are not part of
    /// the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert_eq!(grid.rows_len(), 3);
    /// assert_eq!(grid.columns_len(), 4);
    /// assert!(grid.rows().flatten().copied().eq(1..=12));
    /// ```
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        SliceGrid::new(self, columns)
    }
}

pub trait Grid<T> {
    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(1, 1), Some(&6));
    /// assert_eq!(grid.try_get(2, 0), Some(&9));
    /// assert_eq!(grid.try_get(1, 4), None);
    /// assert_eq!(grid.try_get(3, 0), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Iterate over rows in the grid.
    #[inline]
    fn rows(&self) -> Rows<'_, T, Self>
    where
        Self: Sized,
    {
        Rows {
            grid: self,
            row: 0,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<G, T> Grid<T> for &G
where
    G: Grid<T>,
{
    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }
}

/// A grid backed by a slice, see [GridExt::as_grid].
#[derive(Debug, Clone, Copy)]
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    columns: usize,
}

impl<'a, T> SliceGrid<'a, T> {
    #[inline]
    fn new(data: &'a [T], columns: usize) -> Self {
        Self { data, columns }
    }
}

impl<T> Grid<T> for SliceGrid<'_, T> {
    #[inline]
    fn rows_len(&self) -> usize {
        self.data
            .len()
            .checked_div(self.columns)
            .unwrap_or_default()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows_len() {
            return None;
        }

        let start = row * self.columns;
        self.data.get(start..start + self.columns)
    }
}

/// Iterator over the rows of a grid, see [Grid::rows].
pub struct Rows<'a, T, G> {
    grid: &'a G,
    row: usize,
    _marker: core::marker::PhantomData<&'a [T]>,
}

impl<'a, T, G> Iterator for Rows<'a, T, G>
where
    G: Grid<T>,
    T: 'a,
{
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.row(self.row)?;
        self.row += 1;
        Some(row)
    }
}
