use super::*;

use crate::internal;

//-----------------------------------------------------------------------------

#[test]
fn matches_bit_operations() {
    let tables = LookupTables::new();
    for (value, mask) in internal::all_pairs() {
        let (v, m) = (value as usize, mask as usize);
        assert_eq!(tables.pext()[v][m], bits::pext(value, mask), "Invalid pext[{}][{}]", v, m);
        assert_eq!(tables.pdep()[v][m], bits::pdep(value, mask), "Invalid pdep[{}][{}]", v, m);
    }
}

#[test]
fn empty_and_full_mask() {
    let tables = LookupTables::new();
    for v in 0..bits::BYTE_VALUES {
        assert_eq!(tables.pext()[v][0], 0, "Invalid pext[{}][0]", v);
        assert_eq!(tables.pdep()[v][0], 0, "Invalid pdep[{}][0]", v);
        assert_eq!(tables.pext()[v][0xFF] as usize, v, "Invalid pext[{}][0xFF]", v);
        assert_eq!(tables.pdep()[v][0xFF] as usize, v, "Invalid pdep[{}][0xFF]", v);
    }
}

#[test]
fn tables_are_inverses() {
    let tables = LookupTables::new();
    for (value, mask) in internal::all_pairs() {
        let (v, m) = (value as usize, mask as usize);
        let weight = tables.popcount()[m] as usize;
        let extracted = tables.pext()[v][m] & bits::low_set(weight);
        assert_eq!(tables.pdep()[extracted as usize][m], value & mask, "pdep[pext[{}][{}]][{}] failed", v, m, m);
    }
}

#[test]
fn popcount_table() {
    let tables = LookupTables::new();
    let popcount = tables.popcount();
    assert_eq!(popcount[0], 0, "Invalid popcount[0]");
    assert_eq!(popcount[255], 8, "Invalid popcount[255]");
    for v in 0..bits::BYTE_VALUES {
        assert_eq!(popcount[v], (v as u8).count_ones() as u8, "Invalid popcount[{}]", v);
        assert_eq!(popcount[v] + popcount[255 - v], 8, "popcount[{}] + popcount[{}] != 8", v, 255 - v);
    }
}

#[test]
fn deterministic() {
    let first = LookupTables::new();
    let second = LookupTables::default();
    assert_eq!(first, second, "Two computations produced different tables");
}

//-----------------------------------------------------------------------------
