//! Operator boilerplate for single-field newtypes.

/// Implements an operator trait for a newtype by delegating to its wrapped value. The trait must
/// be in scope at the call site.
#[macro_export]
macro_rules! op {
    (binary $type:ty, $trait:ident, $func:ident) => {
        impl $trait for $type {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                Self($trait::$func(self.0, rhs.0))
            }
        }
    };
    (inplace $type:ty, $trait:ident, $func:ident) => {
        impl $trait for $type {
            fn $func(&mut self, rhs: Self) {
                $trait::$func(&mut self.0, rhs.0)
            }
        }
    };
    (unary $type:ty, $trait:ident, $func:ident) => {
        impl $trait for $type {
            type Output = Self;

            fn $func(self) -> Self::Output {
                Self($trait::$func(self.0))
            }
        }
    };
}
