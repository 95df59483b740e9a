// Forwards the owned/borrowed operator combinations and the assign operators of a
// complex type to a single `&self, &Self` kernel method.
macro_rules! impl_complex_op(
    ($ty:ident, $trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident, $kernel:ident) => (
        impl $trt<&$ty> for &$ty {
            type Output = $ty;

            fn $mth(self, other: &$ty) -> $ty {
                self.$kernel(other)
            }
        }

        impl $trt<$ty> for &$ty {
            type Output = $ty;

            fn $mth(self, other: $ty) -> $ty {
                self.$kernel(&other)
            }
        }

        impl $trt<&$ty> for $ty {
            type Output = $ty;

            fn $mth(self, other: &$ty) -> $ty {
                self.$kernel(other)
            }
        }

        impl $trt for $ty {
            type Output = $ty;

            fn $mth(self, other: $ty) -> $ty {
                self.$kernel(&other)
            }
        }

        impl $assign_trt<&$ty> for $ty {
            fn $assign_mth(&mut self, other: &$ty) {
                *self = self.$kernel(other);
            }
        }

        impl $assign_trt for $ty {
            fn $assign_mth(&mut self, other: $ty) {
                *self = self.$kernel(&other);
            }
        }
    );
);
