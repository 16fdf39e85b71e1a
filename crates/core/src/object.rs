//! Object model contract — the capability set every domain type provides.
//!
//! The engine never looks inside an object. It only asks four questions:
//! is it basic, is it below another object, how does it come apart, and
//! what is its identity hash.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::Result;

/// An ordered `(left, right)` pair whose join reconstructs the original object.
pub type ComponentPair<T> = (T, T);

/// The core object trait.
///
/// Every operation is a pure function of its arguments. Values outside the
/// adapter's legal space must produce [`crate::Error::InvalidDomainValue`]
/// rather than a panic.
pub trait AssemblyObject: Hash + Eq + Sized {
    /// Iterable of candidate decompositions. Can be an eager `Vec` or a
    /// lazy iterator that builds pairs on demand.
    type Disassembly: IntoIterator<Item = ComponentPair<Self>>;

    /// True iff the object cannot be decomposed any further.
    fn is_basic(&self) -> Result<bool>;

    /// True iff `self` is a substructure of `other`. Must be reflexive.
    fn is_below(&self, other: &Self) -> Result<bool>;

    /// Every candidate split of the object into two parts.
    ///
    /// Must be non-empty for a valid non-basic object and deterministic in
    /// order across calls.
    fn disassemble(&self) -> Result<Self::Disassembly>;

    /// Stable identity hash used as the cache key.
    ///
    /// Equal objects hash equally. The engine trusts this hash completely and
    /// never re-checks equality on a cache hit.
    fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
