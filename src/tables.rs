//! Precomputed byte-wide lookup tables.
//!
//! [`LookupTables`] holds the results of [`bits::pext`] and [`bits::pdep`] for every `(value, mask)` pair, as well as [`bits::popcount`] for every byte.
//! The two-dimensional tables are indexed as `table[value][mask]`.

use crate::bits;

//-----------------------------------------------------------------------------

/// A two-dimensional byte table indexed by `[value][mask]`.
pub type ByteGrid = [[u8; bits::BYTE_VALUES]; bits::BYTE_VALUES];

/// A one-dimensional byte table indexed by `[value]`.
pub type ByteTable = [u8; bits::BYTE_VALUES];

/// PEXT, PDEP, and popcount tables for all bytes.
///
/// The grids are 64 KiB each and live on the heap.
///
/// # Examples
///
/// ```
/// use pextgen::tables::LookupTables;
///
/// let tables = LookupTables::new();
/// assert_eq!(tables.pext()[0b1011_0100][0b1100_1010], 0b1000);
/// assert_eq!(tables.pdep()[0b1000][0b1100_1010], 0b1000_0000);
/// assert_eq!(tables.popcount()[0xFF], 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTables {
    pext: Box<ByteGrid>,
    pdep: Box<ByteGrid>,
    popcount: ByteTable,
}

impl LookupTables {
    /// Computes all tables in ascending `(value, mask)` order.
    pub fn new() -> Self {
        let mut pext: Box<ByteGrid> = Box::new([[0; bits::BYTE_VALUES]; bits::BYTE_VALUES]);
        let mut pdep: Box<ByteGrid> = Box::new([[0; bits::BYTE_VALUES]; bits::BYTE_VALUES]);
        let mut popcount: ByteTable = [0; bits::BYTE_VALUES];

        for value in 0..bits::BYTE_VALUES {
            popcount[value] = bits::popcount(value as u8);
            for mask in 0..bits::BYTE_VALUES {
                pext[value][mask] = bits::pext(value as u8, mask as u8);
                pdep[value][mask] = bits::pdep(value as u8, mask as u8);
            }
        }

        LookupTables { pext, pdep, popcount, }
    }

    /// Returns the extraction table: `pext()[value][mask] == bits::pext(value, mask)`.
    #[inline]
    pub fn pext(&self) -> &ByteGrid {
        &self.pext
    }

    /// Returns the deposit table: `pdep()[value][mask] == bits::pdep(value, mask)`.
    #[inline]
    pub fn pdep(&self) -> &ByteGrid {
        &self.pdep
    }

    /// Returns the population count table.
    #[inline]
    pub fn popcount(&self) -> &ByteTable {
        &self.popcount
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::new()
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------
