pub use kurbo::{CubicBez, Point, QuadBez, Vec2};

/// Linear blending between two values of the same type.
pub trait Lerp: Sized {
    /// Returns `a + (b - a) * t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

/// Display adapter for path numbers: shortest round-trip form, `-0` as `0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub(crate) f64);

impl std::fmt::Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        assert_eq!(<f64 as Lerp>::lerp(&10.0, &20.0, 0.0), 10.0);
        assert_eq!(<f64 as Lerp>::lerp(&10.0, &20.0, 0.5), 15.0);
        assert_eq!(
            <Point as Lerp>::lerp(&Point::new(0.0, 0.0), &Point::new(10.0, -4.0), 0.25),
            Point::new(2.5, -1.0)
        );
    }

    #[test]
    fn num_formats_like_path_data() {
        assert_eq!(Num(5.0).to_string(), "5");
        assert_eq!(Num(2.5).to_string(), "2.5");
        assert_eq!(Num(-10.0).to_string(), "-10");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
    }
}
