// Copyright @yucwang 2026

use crate::core::camera::Camera;
use crate::core::light::Light;
use crate::core::shape::Shape;
use crate::math::color::Color;
use crate::math::constants::Int;

/// The fully assembled scene. Built up by the scene loader, read-only for
/// everything downstream; lights and shapes keep their declaration order.
#[derive(Debug)]
pub struct Scene {
    width: Int,
    height: Int,
    output: String,
    ambient: Color,
    lights: Vec<Light>,
    shapes: Vec<Shape>,
    camera: Option<Camera>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            output: String::from("output.png"),
            ambient: Color::default(),
            lights: Vec::new(),
            shapes: Vec::new(),
            camera: None,
        }
    }

    pub fn width(&self) -> Int {
        self.width
    }

    pub fn set_width(&mut self, width: Int) {
        self.width = width;
    }

    pub fn height(&self) -> Int {
        self.height
    }

    pub fn set_height(&mut self, height: Int) {
        self.height = height;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_output(&mut self, output: String) {
        self.output = output;
    }

    pub fn ambient(&self) -> &Color {
        &self.ambient
    }

    pub fn set_ambient(&mut self, ambient: Color) {
        self.ambient = ambient;
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &Vec<Light> {
        &self.lights
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &Vec<Shape> {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::EPSILON;
    use crate::math::vector::{Point, Vector};

    #[test]
    fn test_scene_defaults() {
        let scene = Scene::new();
        assert_eq!(scene.output(), "output.png");
        assert!(scene.ambient().is_black());
        assert!(scene.camera().is_none());
        assert!(scene.lights().is_empty());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_scene_keeps_declaration_order() {
        let mut scene = Scene::new();
        scene.add_light(Light::Point {
            position: Point::new(0.0, 1.0, 0.0),
            color: Color::new(0.25, 0.25, 0.25),
        });
        scene.add_light(Light::Directional {
            direction: Vector::new(0.0, -1.0, 0.0),
            color: Color::new(0.5, 0.5, 0.5),
        });

        assert_eq!(scene.lights().len(), 2);
        assert!(matches!(scene.lights()[0], Light::Point { .. }));
        assert!(matches!(scene.lights()[1], Light::Directional { .. }));
    }

    #[test]
    fn test_scene_camera_access() {
        let mut scene = Scene::new();
        assert!(scene.camera().is_none());

        scene.set_camera(Camera::new(
            Point::new(0.0, 0.0, 5.0),
            Point::new(0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            45.0,
        ));

        let camera = scene.camera().expect("camera was set");
        assert!(crate::math::vector::approx_eq(camera.fov(), 45.0, EPSILON));
    }
}
