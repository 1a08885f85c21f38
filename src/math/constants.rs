/* Copyright 2020 @Yuchen Wong */

pub type Float = f64;
pub type Int = i32;

pub type Vector3f = crate::na::Vector3<Float>;

// Absolute per-component tolerance for comparing Floats.
pub const EPSILON: Float = 1e-9;
