//! Default-construction policies.
//!
//! The policy is the last type parameter of a strong type and decides,
//! at the type level, whether `Default` exists and what it yields.
//!
//! | Policy            | `Default`                      |
//! |-------------------|--------------------------------|
//! | [`NoDefault`]     | not implemented                |
//! | [`Natural`]       | `T::default()`                 |
//! | `default_policy!` | the declared constant          |

/// Supplies the value a default-constructed strong type starts with.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not provide a default value for `{T}`",
    label = "default construction is disabled by this policy",
    note = "construct the value explicitly with `new`, or declare the type with a defaulting policy"
)]
pub trait DefaultValue<T> {
    fn default_value() -> T;
}

/// Policy that forbids default construction.
///
/// ```compile_fail
/// use tola_strong::{NoDefault, Ordered};
///
/// enum DayTag {}
/// type Day = Ordered<i32, DayTag, NoDefault>;
///
/// let _ = Day::default();
/// ```
#[derive(Debug)]
pub enum NoDefault {}

/// Policy that defaults to the underlying type's own default (zero, empty).
#[derive(Debug)]
pub enum Natural {}

impl<T: Default> DefaultValue<T> for Natural {
    #[inline]
    fn default_value() -> T {
        T::default()
    }
}

/// Declare a policy that defaults to a fixed value.
///
/// ```
/// use tola_strong::{default_policy, Equality, Tag};
///
/// default_policy!(pub Unset: usize = usize::MAX);
///
/// #[derive(Tag)]
/// enum IndexTag {}
/// type Index = Equality<usize, IndexTag, Unset>;
///
/// assert_eq!(*Index::default().get(), usize::MAX);
/// ```
#[macro_export]
macro_rules! default_policy {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $ty:ty = $value:expr );+ $(;)?) => {
        $(
            $(#[$meta])*
            $vis enum $name {}

            impl $crate::DefaultValue<$ty> for $name {
                #[inline]
                fn default_value() -> $ty {
                    $value
                }
            }
        )+
    };
}
