//! Private macros specific to this crate.

/// Give an eight field date-time struct its flat, largest-unit-first `[i64; 8]` form.
///
/// The field list is the order of the sequence, so it must run from years down to microseconds.
/// Text adapters and FFIs exchange values in this form, positional and untyped.
macro_rules! flat_fields {
    (
        ident: $ident:ident,
        fields: [$($field:ident),+ $(,)?],
    ) => {
        impl $ident {
            /// Names of the fields in the order of [`Self::to_array`].
            pub const FIELD_NAMES: [&'static str; 8] = [$(stringify!($field)),+];

            /// The fields as a flat sequence, years first and microseconds last.
            pub const fn to_array(&self) -> [i64; 8] {
                [$(self.$field as i64),+]
            }
        }

        impl From<$ident> for [i64; 8] {
            fn from(value: $ident) -> Self {
                value.to_array()
            }
        }
    };
}
