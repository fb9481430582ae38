//! Bitwise family.
//!
//! Shifts take the shift amount as a raw `u32`, like the primitive
//! integer shifts.

binary_from_compound!(Bitwise, Self, BitAnd::bitand, BitAndAssign::bitand_assign);
binary_from_compound!(Bitwise, Self, BitOr::bitor, BitOrAssign::bitor_assign);
binary_from_compound!(Bitwise, Self, BitXor::bitxor, BitXorAssign::bitxor_assign);
binary_from_compound!(Bitwise, u32, Shl::shl, ShlAssign::shl_assign);
binary_from_compound!(Bitwise, u32, Shr::shr, ShrAssign::shr_assign);
