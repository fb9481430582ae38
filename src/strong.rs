//! # Layer 2: The Strong Wrapper
//!
//! `Strong<T, G, K, D>` stores exactly one `T`. The other parameters are
//! type-level only:
//!
//! - `G`: tag, the nominal identity.
//! - `K`: tier, the operator set (see [`crate::tier`]).
//! - `D`: default policy (see [`crate::primitives::policy`]).
//!
//! The phantom parameters sit behind `fn() -> _`, so auto traits
//! (`Send`, `Sync`, `Unpin`) and variance follow `T` alone.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::primitives::{DefaultValue, Natural, SubTag, Tag};
use crate::tier::{self, Tier};

/// A value of type `T` that only mixes with values of the same tag, tier
/// and policy.
///
/// Construction is always explicit and there is no implicit way back to
/// `T`:
///
/// ```compile_fail
/// use tola_strong::Ordered;
///
/// enum DayTag {}
/// type Day = Ordered<i32, DayTag>;
///
/// let day: Day = 21;
/// ```
///
/// ```compile_fail
/// use tola_strong::Ordered;
///
/// enum DayTag {}
/// enum YearTag {}
/// type Day = Ordered<i32, DayTag>;
/// type Year = Ordered<i32, YearTag>;
///
/// let same = Day::new(2019) == Year::new(2019);
/// ```
#[repr(transparent)]
pub struct Strong<T, G, K = tier::Plain, D = Natural> {
    value: T,
    marker: PhantomData<fn() -> (G, K, D)>,
}

impl<T, G, K, D> Strong<T, G, K, D> {
    /// Wrap a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value, marker: PhantomData }
    }

    /// Borrow the underlying value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the underlying value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwrap the underlying value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Apply a function on the underlying value, keeping the strong type.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }

    /// Raise a `Plain` value of the same tag into this tier.
    #[inline]
    pub fn from_plain(plain: Strong<T, G, tier::Plain, D>) -> Self {
        Self::new(plain.value)
    }
}

// =============================================================================
// StrongType: generic access to the parameters
// =============================================================================

/// Implemented by every strong type; the way generic code names the
/// pieces of `Strong<T, G, K, D>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a strong type",
    note = "strong types are instances of `Strong<T, Tag, Tier, Policy>`"
)]
pub trait StrongType: Sized {
    type Value;
    type Tag;
    type Tier: Tier;
    type Policy;

    fn from_value(value: Self::Value) -> Self;
    fn value(&self) -> &Self::Value;
    fn into_value(self) -> Self::Value;
}

impl<T, G, K: Tier, D> StrongType for Strong<T, G, K, D> {
    type Value = T;
    type Tag = G;
    type Tier = K;
    type Policy = D;

    #[inline]
    fn from_value(value: T) -> Self {
        Self::new(value)
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn into_value(self) -> T {
        self.value
    }
}

/// Copy the underlying value out of a strong type.
#[inline]
pub fn to_value<S>(strong: &S) -> S::Value
where
    S: StrongType,
    S::Value: Clone,
{
    strong.value().clone()
}

// =============================================================================
// Subtypes
// =============================================================================

impl<T, P, G, K, D> Strong<T, SubTag<P, G>, K, D>
where
    P: StrongType<Value = T, Tier = K>,
{
    /// Convert into the parent type.
    #[inline]
    pub fn upcast(self) -> P {
        P::from_value(self.value)
    }

    /// Refine a parent value into this subtype.
    #[inline]
    pub fn from_parent(parent: P) -> Self {
        Self::new(parent.into_value())
    }
}

// =============================================================================
// Value semantics
// =============================================================================

impl<T: Clone, G, K, D> Clone for Strong<T, G, K, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, G, K, D> Copy for Strong<T, G, K, D> {}

impl<T, G, K, D: DefaultValue<T>> Default for Strong<T, G, K, D> {
    #[inline]
    fn default() -> Self {
        Self::new(D::default_value())
    }
}

// The tag contributes nothing: equal to hashing `T` directly.
impl<T: Hash, G, K, D> Hash for Strong<T, G, K, D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, G: Tag, K, D> fmt::Debug for Strong<T, G, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(G::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, G: Tag, K, D> fmt::Display for Strong<T, G, K, D> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        G::fmt_value(&self.value, f)
    }
}
