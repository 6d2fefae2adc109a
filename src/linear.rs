use std::ops::Add;

/// Pixel coordinate, origin in the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub(crate) struct Point {
    pub x: i32,
    pub y: i32,
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $op:ident, $target:ident { $($field:ident),* }) => {
        impl $trait<$target> for $target {
            type Output = Self;

            fn $op(self, other: Self) -> Self {
                Self {
                    $(
                        $field: $trait::$op(self.$field, other.$field),
                    )*
                }
            }
        }
    }
}

macro_rules! impl_point {
    ($point:ident { $($field:ident),* }) => {
        impl $point {
            #[inline(always)]
            pub const fn new($($field: i32),*) -> $point {
                $point { $( $field ),* }
            }
        }

        impl_elementwise_op!(Add, add, $point { $($field),* });
    };
}

impl_point!(Point { x, y });

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> (i32, i32) {
        (point.x, point.y)
    }
}
