//! A fixed-capacity set of board cells packed into one unsigned integer.
//!
//! Cells are laid out row-major with a stride of `N`, so a `BitBoard<T, N>`
//! can hold any board whose side is at most `N` as long as `N*N` bits fit in
//! `T`. Iteration always runs row-major, which keeps random picks made from
//! a seeded generator reproducible.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::MAX_BOARD_SIZE;
use crate::geometry::Coord;

/// Cell set used for every board in the engine.
pub type CellSet = BitBoard<u128, MAX_BOARD_SIZE>;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of cells on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Every cell of a `size`×`size` board (clamped to `N`).
    pub fn square(size: u8) -> Self {
        let size = (size as usize).min(N);
        let mut board = Self::new();
        for row in 0..size {
            for col in 0..size {
                board.bits = board.bits | (T::one() << (row * N + col));
            }
        }
        board
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Cells outside the N×N capacity are never members.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index_of(coord) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds a cell to the set.
    pub fn insert(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        let idx = Self::index_of(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Removes a cell from the set; absent cells are ignored.
    pub fn remove(&mut self, coord: Coord) {
        if let Ok(idx) = Self::index_of(coord) {
            self.bits = self.bits & !(T::one() << idx);
        }
    }

    #[inline]
    fn index_of(coord: Coord) -> Result<usize, BitBoardError> {
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// Builds a set from an iterator of cells.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord)?;
        }
        Ok(board)
    }

    /// Row-major iterator over the cells in the set.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }

    /// The `k`-th cell in row-major order.
    pub fn nth(&self, k: usize) -> Option<Coord> {
        self.iter().nth(k)
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coord)?;
        }
        f.write_str("}")
    }
}

/// Row-major iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new((idx / N) as u8, (idx % N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> FromIterator<Coord> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Collects cells, silently dropping any outside the N×N capacity.
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            let _ = board.insert(coord);
        }
        board
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the N×N capacity.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}

impl<T, const N: usize> BitAndAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
