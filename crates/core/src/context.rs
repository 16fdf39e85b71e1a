//! The assembly context — a memoized, mutually recursive evaluator.
//!
//! `assembly_index` minimises over every decomposition of an object;
//! `coassembly_index` estimates the joint cost of a pair with a greedy
//! substructure heuristic. Both consult and fill the context's cache when
//! `use_cache` is set.
//!
//! A context is single-threaded. To work in parallel, give every thread its
//! own context (caches are never shared) or wrap one in a mutex.

use std::marker::PhantomData;

use crate::cache::{Cache, CacheKey};
use crate::error::{Error, Result};
use crate::object::AssemblyObject;
use crate::{Index, UNSOLVED};

/// A caching scope within which assembly indices are computed.
///
/// ```
/// use pathways_core::{AssemblyObject, ComponentPair, Context, Result};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Sum(u32);
///
/// impl AssemblyObject for Sum {
///     type Disassembly = Vec<ComponentPair<Sum>>;
///     fn is_basic(&self) -> Result<bool> { Ok(self.0 == 1) }
///     fn is_below(&self, other: &Self) -> Result<bool> { Ok(self.0 <= other.0) }
///     fn disassemble(&self) -> Result<Self::Disassembly> {
///         Ok((1..=self.0 / 2).map(|k| (Sum(k), Sum(self.0 - k))).collect())
///     }
/// }
///
/// let mut ctx = Context::new();
/// assert_eq!(ctx.assembly_index(&Sum(8), true).unwrap(), 3);
/// assert!(ctx.cache_size() > 0);
/// ```
#[derive(Debug)]
pub struct Context<T> {
    cache: Cache,
    _object: PhantomData<fn(&T)>,
}

impl<T: AssemblyObject> Context<T> {
    /// Create a context with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Cache::new(),
            _object: PhantomData,
        }
    }

    /// Number of distinct entries in the cache.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Estimate the assembly index of `x`.
    ///
    /// Basic objects are 0 and never cached. Otherwise the result is the
    /// smallest `coassembly_index(left, right) + 1` over every pair in the
    /// disassembly, or [`UNSOLVED`] if the disassembly is empty.
    pub fn assembly_index(&mut self, x: &T, use_cache: bool) -> Result<Index> {
        if x.is_basic()? {
            return Ok(0);
        }

        let key = CacheKey::single(x.identity_hash());
        if use_cache {
            if let Some(c) = self.cache.get(key) {
                tracing::trace!(?key, index = c, "assembly cache hit");
                return Ok(c);
            }
        }

        let mut c = UNSOLVED;
        let mut candidates = 0usize;
        for (left, right) in x.disassemble()? {
            candidates += 1;
            let cc = self.coassembly_index(&left, &right, use_cache)?;
            c = c.min(cc.saturating_add(1));
        }

        if candidates == 0 {
            tracing::warn!(?key, "non-basic object yielded no decompositions; returning unsolved sentinel");
        }

        if use_cache {
            tracing::trace!(?key, index = c, "assembly cache store");
            return Ok(self.cache.insert(key, c));
        }
        Ok(c)
    }

    /// Estimate the coassembly index of the pair `(x, y)`.
    ///
    /// A basic operand contributes nothing. Otherwise, if one operand is below
    /// the other, only the larger one is paid for; incomparable operands are
    /// assumed to share nothing and their indices are summed.
    pub fn coassembly_index(&mut self, x: &T, y: &T, use_cache: bool) -> Result<Index> {
        if x.is_basic()? {
            return self.assembly_index(y, use_cache);
        }
        if y.is_basic()? {
            return self.assembly_index(x, use_cache);
        }

        let key = CacheKey::pair(x.identity_hash(), y.identity_hash());
        if use_cache {
            if let Some(cc) = self.cache.get(key) {
                tracing::trace!(?key, index = cc, "coassembly cache hit");
                return Ok(cc);
            }
        }

        let cc = if x.is_below(y)? {
            self.assembly_index(y, use_cache)?
        } else if y.is_below(x)? {
            self.assembly_index(x, use_cache)?
        } else {
            let a = self.assembly_index(x, use_cache)?;
            let b = self.assembly_index(y, use_cache)?;
            a.saturating_add(b)
        };

        if use_cache {
            tracing::trace!(?key, index = cc, "coassembly cache store");
            return Ok(self.cache.insert(key, cc));
        }
        Ok(cc)
    }
}

impl<T: AssemblyObject> Default for Context<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Promote the unsolved sentinel to [`Error::UnsolvedDegenerate`].
///
/// The engine itself never does this; callers that would rather fail than
/// report a huge index opt in here.
pub fn ensure_solved(index: Index) -> Result<Index> {
    if index == UNSOLVED {
        return Err(Error::UnsolvedDegenerate);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ComponentPair;
    use std::hash::{Hash, Hasher};

    /// Positive counts of identical blocks; mirrors the addition domain.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Blocks(u32);

    impl AssemblyObject for Blocks {
        type Disassembly = Vec<ComponentPair<Blocks>>;

        fn is_basic(&self) -> Result<bool> {
            match self.0 {
                0 => Err(Error::invalid("blocks", "zero blocks")),
                n => Ok(n == 1),
            }
        }

        fn is_below(&self, other: &Self) -> Result<bool> {
            if self.0 == 0 || other.0 == 0 {
                return Err(Error::invalid("blocks", "zero blocks"));
            }
            Ok(self.0 <= other.0)
        }

        fn disassemble(&self) -> Result<Self::Disassembly> {
            Ok((1..=self.0 / 2).map(|k| (Blocks(k), Blocks(self.0 - k))).collect())
        }
    }

    /// Non-basic beyond 1 but never decomposes.
    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Stuck(u32);

    impl AssemblyObject for Stuck {
        type Disassembly = Vec<ComponentPair<Stuck>>;

        fn is_basic(&self) -> Result<bool> {
            Ok(self.0 == 1)
        }

        fn is_below(&self, other: &Self) -> Result<bool> {
            Ok(self.0 <= other.0)
        }

        fn disassemble(&self) -> Result<Self::Disassembly> {
            Ok(match self.0 {
                4 => vec![(Stuck(1), Stuck(3))],
                _ => vec![],
            })
        }
    }

    /// Blocks whose identity hash ignores the count entirely.
    #[derive(Debug, PartialEq, Eq)]
    struct Colliding(u32);

    impl Hash for Colliding {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0u8.hash(state);
        }
    }

    impl AssemblyObject for Colliding {
        type Disassembly = Vec<ComponentPair<Colliding>>;

        fn is_basic(&self) -> Result<bool> {
            Ok(self.0 == 1)
        }

        fn is_below(&self, other: &Self) -> Result<bool> {
            Ok(self.0 <= other.0)
        }

        fn disassemble(&self) -> Result<Self::Disassembly> {
            Ok((1..=self.0 / 2)
                .map(|k| (Colliding(k), Colliding(self.0 - k)))
                .collect())
        }
    }

    #[test]
    fn basic_object_is_zero_and_uncached() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&Blocks(1), true).unwrap(), 0);
        assert_eq!(ctx.cache_size(), 0);
    }

    #[test]
    fn cache_grows_once_per_new_key() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&Blocks(2), true).unwrap(), 1);
        assert_eq!(ctx.cache_size(), 1);

        // 4 caches 2 (hit), 3 and 4; the (2, 2) pair shares its key with 2.
        assert_eq!(ctx.assembly_index(&Blocks(4), true).unwrap(), 2);
        assert_eq!(ctx.cache_size(), 3);

        assert_eq!(ctx.assembly_index(&Blocks(4), true).unwrap(), 2);
        assert_eq!(ctx.cache_size(), 3);
    }

    #[test]
    fn uncached_queries_leave_cache_untouched() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&Blocks(12), false).unwrap(), 4);
        assert_eq!(ctx.cache_size(), 0);
    }

    #[test]
    fn cached_and_uncached_agree() {
        for n in 1..=16 {
            let cached = Context::new().assembly_index(&Blocks(n), true).unwrap();
            let uncached = Context::new().assembly_index(&Blocks(n), false).unwrap();
            assert_eq!(cached, uncached, "n = {n}");
        }
    }

    #[test]
    fn coassembly_collapses_on_basic_operand() {
        let mut ctx = Context::new();
        let a5 = ctx.assembly_index(&Blocks(5), true).unwrap();
        assert_eq!(ctx.coassembly_index(&Blocks(1), &Blocks(5), true).unwrap(), a5);
        assert_eq!(ctx.coassembly_index(&Blocks(5), &Blocks(1), true).unwrap(), a5);
    }

    #[test]
    fn coassembly_is_symmetric() {
        let mut ctx = Context::new();
        let forward = ctx.coassembly_index(&Blocks(3), &Blocks(7), true).unwrap();
        let mut fresh = Context::new();
        let backward = fresh.coassembly_index(&Blocks(7), &Blocks(3), true).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(ctx.coassembly_index(&Blocks(7), &Blocks(3), true).unwrap(), forward);
    }

    #[test]
    fn coassembly_of_comparable_pair_pays_for_the_larger() {
        let mut ctx = Context::new();
        let a6 = ctx.assembly_index(&Blocks(6), false).unwrap();
        assert_eq!(ctx.coassembly_index(&Blocks(2), &Blocks(6), false).unwrap(), a6);
    }

    #[test]
    fn invalid_value_propagates() {
        let mut ctx = Context::new();
        let err = ctx.assembly_index(&Blocks(0), true).unwrap_err();
        assert!(matches!(err, Error::InvalidDomainValue { .. }));

        let err = ctx.coassembly_index(&Blocks(3), &Blocks(0), true).unwrap_err();
        assert!(matches!(err, Error::InvalidDomainValue { .. }));
        assert_eq!(ctx.cache_size(), 0);
    }

    #[test]
    fn empty_disassembly_yields_sentinel() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&Stuck(3), true).unwrap(), UNSOLVED);
        // The sentinel saturates rather than wrapping on the join step.
        assert_eq!(ctx.assembly_index(&Stuck(4), true).unwrap(), UNSOLVED);
        assert!(matches!(ensure_solved(UNSOLVED), Err(Error::UnsolvedDegenerate)));
        assert_eq!(ensure_solved(3).unwrap(), 3);
    }

    #[test]
    fn hash_collision_returns_stale_value() {
        let mut ctx = Context::new();
        assert_eq!(ctx.assembly_index(&Colliding(2), true).unwrap(), 1);
        // 8 shares its identity hash with 2, so the cached 1 comes back.
        assert_eq!(ctx.assembly_index(&Colliding(8), true).unwrap(), 1);
        assert_eq!(ctx.assembly_index(&Colliding(8), false).unwrap(), 3);
    }
}
