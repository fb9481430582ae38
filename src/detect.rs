//! # Capability Probing
//!
//! Compile-time check of whether a concrete type implements a trait,
//! evaluating to a `bool` constant instead of a compile error. Used to
//! state "this operator does not exist" as an ordinary assertion.
//!
//! ```
//! use core::ops::{Add, Mul};
//! use tola_strong::{define_type, implements};
//!
//! define_type! {
//!     Metres: Quantity<i32>;
//!     Cursor: Address<usize, usize>;
//! }
//!
//! assert!(implements!(Metres: Mul<i32>));
//! assert!(!implements!(Metres: Mul<Metres>));
//! assert!(!implements!(Cursor: Add<Cursor>));
//! assert!(!implements!(Cursor: Default));
//!
//! // Several bounds at once, associated types included
//! assert!(implements!(Metres: Copy + Mul<i32, Output = Metres>));
//! assert!(!implements!(Metres: Copy + Default));
//! ```

/// Check if a concrete type implements a set of trait bounds at compile
/// time.
///
/// The bounds take the same form as after `T:` in a `where` clause:
/// `implements!(Type: Clone + PartialEq<Other> + Add<Output = Type>)`.
///
/// An inherent const on the subject wrapper is only visible when the
/// bounds hold; otherwise the lookup falls through to the `false` default
/// of a local trait. The wrapper's parameter is named so that it cannot
/// capture a user type called `T` inside the bounds.
///
/// Only concrete sized types are supported; inside a generic function the
/// bounds are checked against the parameter, not the eventual type.
#[macro_export]
macro_rules! implements {
    ($subject:ty : $($bounds:tt)+) => {{
        #[allow(dead_code)]
        struct __ImplementsSubject<__ImplementsTy>(core::marker::PhantomData<__ImplementsTy>);

        trait __ImplementsMissing {
            const IMPLEMENTED: bool = false;
        }
        impl<__ImplementsTy> __ImplementsMissing for __ImplementsSubject<__ImplementsTy> {}

        impl<__ImplementsTy: $($bounds)+> __ImplementsSubject<__ImplementsTy> {
            #[allow(dead_code)]
            const IMPLEMENTED: bool = true;
        }

        <__ImplementsSubject<$subject>>::IMPLEMENTED
    }};
}

#[cfg(test)]
mod tests {
    use core::fmt::Debug;
    use core::ops::{Add, Shl};

    #[test]
    fn test_std_traits() {
        assert!(implements!(String: Clone));
        assert!(implements!(i32: Copy));
        assert!(!implements!(String: Copy));
        assert!(implements!(i32: Debug));
    }

    #[test]
    fn test_generic_trait_arguments() {
        assert!(implements!(i32: PartialEq<i32>));
        assert!(!implements!(i32: PartialEq<i64>));
        assert!(implements!(u64: Shl<u32>));
    }

    #[test]
    fn test_bound_lists() {
        assert!(implements!(i32: Copy + Send + Sync));
        assert!(!implements!(String: Clone + Copy));
        assert!(implements!(u8: Add<Output = u8> + Debug));
        assert!(!implements!(u8: Add<Output = u16>));
    }

    #[test]
    fn test_user_type_named_t() {
        #[derive(PartialEq)]
        struct T;

        // `T` in the bounds is the local struct, not the wrapper's parameter.
        assert!(!implements!(i32: PartialEq<T>));
        assert!(implements!(T: PartialEq<T>));
    }
}
