use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type SymbolRepr = u32;
/// The first usable symbol ID.
pub const FIRST_ID: SymbolRepr = 0;
/// Reserved ID that no symbol may take.
pub const NULL_ID: SymbolRepr = !0;

static NEXT_ORIGIN: AtomicU32 = AtomicU32::new(0);

/// A common grammar symbol type.
///
/// Symbols are dense IDs handed out in declaration order by a
/// [`SymbolSource`](super::SymbolSource). Each symbol also remembers the
/// source that made it, so symbols of two sources never compare equal.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    origin: SymbolRepr,
    n: NonZeroU32,
}

impl Symbol {
    #[inline]
    pub(crate) fn new(origin: SymbolRepr, id: SymbolRepr) -> Self {
        debug_assert_ne!(
            id, NULL_ID,
            "invalid conversion from a null id to non-null Symbol"
        );
        match NonZeroU32::new(id.wrapping_add(1)) {
            Some(n) => Symbol { origin, n },
            None => unreachable!("symbol id overflow"),
        }
    }

    /// The source this symbol was generated by.
    #[inline]
    pub(crate) fn origin(self) -> SymbolRepr {
        self.origin
    }
}

/// Hands out a tag that no other symbol source in this process has.
pub(crate) fn fresh_origin() -> SymbolRepr {
    NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed)
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.n.get() - 1
    }
}
