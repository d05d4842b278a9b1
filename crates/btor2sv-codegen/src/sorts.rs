//! Sort resolution.
//!
//! The table maps both sort-declaration ids and value ids to a resolved
//! `Sort`; a value line inheriting its `sort_ref` is recorded with a copy
//! of the referenced sort, so later argument lookups never chase a
//! reference chain.

use crate::error::{Result, TranslateError};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    BitVec { width: u32 },
    Array { index_width: u32, element_width: u32 },
}

impl Sort {
    pub fn is_array(&self) -> bool {
        matches!(self, Sort::Array { .. })
    }
}

#[derive(Debug, Default)]
pub struct SortTable {
    sorts: IndexMap<u64, Sort>,
}

impl SortTable {
    pub fn declare_bitvec(&mut self, id: u64, width: u32) {
        self.sorts.insert(id, Sort::BitVec { width });
    }

    /// Declare an array sort over two previously declared bit-vector sorts.
    /// Nested arrays (either side itself an array) are unsupported, and
    /// the index width is capped: the assembler renders an array as a
    /// memory of `2^index_width` words, and that depth must fit a `u128`.
    pub fn declare_array(&mut self, id: u64, index: u64, element: u64) -> Result<()> {
        let index_sort = self.sort_of(index)?;
        let element_sort = self.sort_of(element)?;
        match (index_sort, element_sort) {
            (Sort::BitVec { width: iw }, Sort::BitVec { width: ew }) => {
                if iw >= 128 {
                    return Err(TranslateError::IndexWidthTooLarge { id, width: iw });
                }
                self.sorts.insert(
                    id,
                    Sort::Array {
                        index_width: iw,
                        element_width: ew,
                    },
                );
                Ok(())
            }
            _ => Err(TranslateError::UnsupportedSortKind(id)),
        }
    }

    pub fn sort_of(&self, id: u64) -> Result<Sort> {
        self.sorts
            .get(&id)
            .copied()
            .ok_or(TranslateError::UnboundReference(id))
    }

    /// Copy an already resolved sort onto a new id, e.g. an output takes
    /// the sort of the node driving it.
    pub fn propagate(&mut self, id: u64, from: u64) -> Result<()> {
        let sort = self.sort_of(from)?;
        self.sorts.insert(id, sort);
        Ok(())
    }
}
