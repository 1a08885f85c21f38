// Copyright @yucwang 2026

use crate::math::color::Color;
use crate::math::vector::{Point, Vector};

/// Light sources. Directional lights illuminate along a fixed direction,
/// point lights emit from a position.
#[derive(Debug, Clone)]
pub enum Light {
    Directional { direction: Vector, color: Color },
    Point { position: Point, color: Color },
}

impl Light {
    /// Emission color of either variant.
    pub fn color(&self) -> &Color {
        match self {
            Light::Directional { color, .. } => color,
            Light::Point { color, .. } => color,
        }
    }
}
