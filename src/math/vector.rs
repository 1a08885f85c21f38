// Copyright @yucwang 2026

use super::constants::{EPSILON, Float, Vector3f};

use std::ops;

/// Compares two Floats with an explicit absolute tolerance.
pub fn approx_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() < tolerance
}

fn tuple_approx_eq(a: &Vector3f, b: &Vector3f, tolerance: Float) -> bool {
    approx_eq(a.x, b.x, tolerance)
        && approx_eq(a.y, b.y, tolerance)
        && approx_eq(a.z, b.z, tolerance)
}

/// A free direction with magnitude. Positions live in `Point`.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    tuple: Vector3f,
}

impl Default for Vector {
    fn default() -> Self {
        Self { tuple: Vector3f::zeros() }
    }
}

impl Vector {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { tuple: Vector3f::new(x, y, z) }
    }

    pub(crate) fn from_tuple(tuple: Vector3f) -> Self {
        Self { tuple }
    }

    pub fn x(&self) -> Float {
        self.tuple.x
    }

    pub fn y(&self) -> Float {
        self.tuple.y
    }

    pub fn z(&self) -> Float {
        self.tuple.z
    }

    pub fn dot(&self, other: &Vector) -> Float {
        self.tuple.dot(&other.tuple)
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Self::from_tuple(self.tuple.cross(&other.tuple))
    }

    /// Component-wise product.
    pub fn schur(&self, other: &Vector) -> Vector {
        Self::from_tuple(self.tuple.component_mul(&other.tuple))
    }

    pub fn length(&self) -> Float {
        self.dot(self).sqrt()
    }

    /// Scales to unit length. A vector whose length is within EPSILON of
    /// zero normalizes to the zero vector.
    pub fn normalize(&self) -> Vector {
        let len = self.length();
        if approx_eq(len, 0.0, EPSILON) {
            return Vector::default();
        }
        *self * (1.0 / len)
    }

    pub fn approx_eq(&self, other: &Vector, tolerance: Float) -> bool {
        tuple_approx_eq(&self.tuple, &other.tuple, tolerance)
    }
}

impl ops::Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from_tuple(self.tuple + rhs.tuple)
    }
}

impl ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::from_tuple(self.tuple - rhs.tuple)
    }
}

impl ops::Mul<Float> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Float) -> Vector {
        Vector::from_tuple(self.tuple * rhs)
    }
}

/// An affine position. Only point + vector and point - point are defined,
/// there is no point + point.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    tuple: Vector3f,
}

impl Default for Point {
    fn default() -> Self {
        Self { tuple: Vector3f::zeros() }
    }
}

impl Point {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { tuple: Vector3f::new(x, y, z) }
    }

    pub fn x(&self) -> Float {
        self.tuple.x
    }

    pub fn y(&self) -> Float {
        self.tuple.y
    }

    pub fn z(&self) -> Float {
        self.tuple.z
    }

    pub fn approx_eq(&self, other: &Point, tolerance: Float) -> bool {
        tuple_approx_eq(&self.tuple, &other.tuple, tolerance)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point { tuple: self.tuple + rhs.tuple }
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from_tuple(self.tuple - rhs.tuple)
    }
}

impl ops::Mul<Float> for Point {
    type Output = Point;

    // Scaling relative to the origin.
    fn mul(self, rhs: Float) -> Point {
        Point { tuple: self.tuple * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract_roundtrip() {
        let u = Vector::new(1.0, 2.0, 3.0);
        let v = Vector::new(4.0, 5.0, 6.0);

        assert!((u + v).approx_eq(&Vector::new(5.0, 7.0, 9.0), EPSILON));
        assert!((u - v).approx_eq(&Vector::new(-3.0, -3.0, -3.0), EPSILON));
        assert!(((u + v) - v).approx_eq(&u, EPSILON));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let v = Vector::new(1.0, 1.0, 1.0);
        assert!(v.approx_eq(&Vector::new(1.0, 1.0, 1.0 + EPSILON / 2.0), EPSILON));
        assert!(!v.approx_eq(&Vector::new(1.0, 1.0, 1.0 + EPSILON * 2.0), EPSILON));
    }

    #[test]
    fn test_multiply_scalar() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert!((v * 3.0).approx_eq(&Vector::new(3.0, 6.0, 9.0), EPSILON));
    }

    #[test]
    fn test_dot() {
        let u = Vector::new(1.0, 2.0, 3.0);
        let v = Vector::new(4.0, 5.0, 6.0);
        assert!(approx_eq(u.dot(&v), 32.0, EPSILON));

        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert!(approx_eq(x.dot(&y), 0.0, EPSILON));
    }

    #[test]
    fn test_cross_right_hand_rule() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        let z = Vector::new(0.0, 0.0, 1.0);

        assert!(x.cross(&y).approx_eq(&z, EPSILON));
        assert!(y.cross(&x).approx_eq(&(z * -1.0), EPSILON));
    }

    #[test]
    fn test_cross_anti_commutative() {
        let u = Vector::new(1.0, 2.0, 3.0);
        let v = Vector::new(4.0, 5.0, 6.0);
        assert!(u.cross(&v).approx_eq(&(v.cross(&u) * -1.0), EPSILON));
    }

    #[test]
    fn test_schur() {
        let u = Vector::new(1.0, 2.0, 3.0);
        let v = Vector::new(4.0, 5.0, 6.0);
        assert!(u.schur(&v).approx_eq(&Vector::new(4.0, 10.0, 18.0), EPSILON));
    }

    #[test]
    fn test_length() {
        assert!(approx_eq(Vector::new(3.0, 4.0, 0.0).length(), 5.0, EPSILON));
        assert!(approx_eq(Vector::new(1.0, 0.0, 0.0).length(), 1.0, EPSILON));
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(5.0, 0.0, 0.0);
        assert!(v.normalize().approx_eq(&Vector::new(1.0, 0.0, 0.0), EPSILON));

        let w = Vector::new(1.0, 2.0, 3.0);
        assert!(approx_eq(w.normalize().length(), 1.0, EPSILON));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector::default();
        assert!(zero.normalize().approx_eq(&zero, EPSILON));
    }

    #[test]
    fn test_point_plus_vector() {
        let p = Point::new(1.0, 2.0, 3.0);
        let v = Vector::new(0.5, -1.0, 2.0);
        assert!((p + v).approx_eq(&Point::new(1.5, 1.0, 5.0), EPSILON));
    }

    #[test]
    fn test_point_minus_point() {
        let p = Point::new(4.0, 5.0, 6.0);
        let q = Point::new(1.0, 2.0, 3.0);
        assert!((p - q).approx_eq(&Vector::new(3.0, 3.0, 3.0), EPSILON));
    }

    #[test]
    fn test_point_multiply_scalar() {
        let p = Point::new(1.0, -2.0, 3.0);
        assert!((p * 2.0).approx_eq(&Point::new(2.0, -4.0, 6.0), EPSILON));
    }
}
