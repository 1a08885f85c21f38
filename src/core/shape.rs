// Copyright @yucwang 2023

use crate::math::color::Color;
use crate::math::constants::Float;
use crate::math::vector::{Point, Vector};

/// Scene geometry. A closed set of variants so downstream intersection and
/// shading code can match exhaustively; every variant carries the material
/// colors that were current when it was declared.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere {
        center: Point,
        radius: Float,
        diffuse: Color,
        specular: Color,
    },
    Plane {
        point: Point,
        normal: Vector,
        diffuse: Color,
        specular: Color,
    },
    Triangle {
        p1: Point,
        p2: Point,
        p3: Point,
        diffuse: Color,
        specular: Color,
    },
}

impl Shape {
    pub fn diffuse(&self) -> &Color {
        match self {
            Shape::Sphere { diffuse, .. } => diffuse,
            Shape::Plane { diffuse, .. } => diffuse,
            Shape::Triangle { diffuse, .. } => diffuse,
        }
    }

    pub fn specular(&self) -> &Color {
        match self {
            Shape::Sphere { specular, .. } => specular,
            Shape::Plane { specular, .. } => specular,
            Shape::Triangle { specular, .. } => specular,
        }
    }
}
