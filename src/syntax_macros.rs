//! Declaration Macros
//!
//! Short forms that declare a tag and a strong type in one line.
//!
//! | Macro                     | Default construction           |
//! |---------------------------|--------------------------------|
//! | `define_type!`            | disabled (`NoDefault`)         |
//! | `define_type_default!`    | `Natural`, or a given policy   |
//! | `define_subtype!`         | disabled (`NoDefault`)         |
//! | `define_subtype_default!` | `Natural`                      |
//!
//! Each declaration `Name` also declares the uninhabited tag `NameTag`
//! with the same visibility.

// =============================================================================
// define_type! - non-default-constructible strong types
// =============================================================================

/// Declare strong types whose values must be constructed explicitly.
///
/// The tier is written as its alias without the tag and policy
/// parameters: `Ordered<i32>`, `Address<usize, usize>`, `Boolean`.
///
/// ```
/// use tola_strong::define_type;
///
/// define_type! {
///     /// Day of the month.
///     pub Day: Ordered<i32>;
///     pub Year: Ordered<i32>;
/// }
///
/// assert!(Day::new(21) < Day::new(28));
/// assert_eq!(Year::new(2019).into_value(), 2019);
/// ```
///
/// ```compile_fail
/// use tola_strong::define_type;
///
/// define_type!(pub Day: Ordered<i32>);
///
/// let _ = Day::default();
/// ```
#[macro_export]
macro_rules! define_type {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $tier:ident $(< $($arg:ty),+ >)? );+ $(;)?) => {
        $(
            $crate::__define_strong!(
                [$(#[$meta])*] $vis $name = $tier [$($($arg),+)?] $crate::NoDefault
            );
        )+
    };
}

// =============================================================================
// define_type_default! - default-constructible strong types
// =============================================================================

/// Declare default-constructible strong types.
///
/// Without a policy the default is the underlying type's own default.
/// `= Policy` selects a policy declared with `default_policy!`.
///
/// ```
/// use tola_strong::{default_policy, define_type_default};
///
/// default_policy!(pub Unset: usize = usize::MAX);
///
/// define_type_default! {
///     pub Count: Numeric<u32>;
///     pub Index: Equality<usize> = Unset;
/// }
///
/// assert_eq!(Count::default(), Count::new(0));
/// assert_eq!(Index::default(), Index::new(usize::MAX));
/// ```
#[macro_export]
macro_rules! define_type_default {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $tier:ident $(< $($arg:ty),+ >)? $(= $policy:ty)? );+ $(;)?) => {
        $(
            $crate::__define_strong!(
                [$(#[$meta])*] $vis $name = $tier [$($($arg),+)?] $crate::__policy_or_natural!($($policy)?)
            );
        )+
    };
}

// =============================================================================
// define_subtype! / define_subtype_default!
// =============================================================================

/// Declare subtypes: same underlying type and tier as the parent strong
/// type, but a distinct type that is neither comparable nor implicitly
/// convertible to the parent or its other subtypes.
///
/// ```
/// use tola_strong::{define_subtype, define_type};
///
/// define_type!(pub Integer: Numeric<i32>);
/// define_subtype! {
///     pub Day: Integer;
///     pub Year: Integer;
/// }
///
/// let day = Day::new(21) + Day::new(1);
/// assert_eq!(day.upcast(), Integer::new(22));
/// ```
///
/// ```compile_fail
/// use tola_strong::{define_subtype, define_type};
///
/// define_type!(pub Integer: Numeric<i32>);
/// define_subtype! {
///     pub Day: Integer;
///     pub Year: Integer;
/// }
///
/// let mixed = Day::new(21) < Year::new(2019);
/// ```
#[macro_export]
macro_rules! define_subtype {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $parent:ty );+ $(;)?) => {
        $(
            $crate::__define_subtype!([$(#[$meta])*] $vis $name = $parent, $crate::NoDefault);
        )+
    };
}

/// Declare default-constructible subtypes.
///
/// ```
/// use tola_strong::{define_subtype_default, define_type};
///
/// define_type!(pub Integer: Numeric<i32>);
/// define_subtype_default!(pub Offset: Integer);
///
/// assert_eq!(Offset::default().into_value(), 0);
/// ```
#[macro_export]
macro_rules! define_subtype_default {
    ($( $(#[$meta:meta])* $vis:vis $name:ident : $parent:ty );+ $(;)?) => {
        $(
            $crate::__define_subtype!([$(#[$meta])*] $vis $name = $parent, $crate::Natural);
        )+
    };
}

// =============================================================================
// Internal expansion
// =============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __define_strong {
    ([$($attr:tt)*] $vis:vis $name:ident = $tier:ident [$($arg:ty),*] $policy:ty) => {
        $crate::paste::paste! {
            #[doc = concat!("Tag of [`", stringify!($name), "`].")]
            #[derive($crate::Tag)]
            $vis enum [<$name Tag>] {}

            $($attr)*
            $vis type $name = $crate::$tier<$($arg,)* [<$name Tag>], $policy>;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __define_subtype {
    ([$($attr:tt)*] $vis:vis $name:ident = $parent:ty, $policy:ty) => {
        $crate::paste::paste! {
            #[doc = concat!("Tag of [`", stringify!($name), "`].")]
            #[derive($crate::Tag)]
            $vis enum [<$name Tag>] {}

            $($attr)*
            $vis type $name = $crate::Subtype<$parent, [<$name Tag>], $policy>;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __policy_or_natural {
    () => { $crate::Natural };
    ($policy:ty) => { $policy };
}
