// Copyright @yucwang 2026

use std::fs;
use std::path::Path;

use crate::core::camera::Camera;
use crate::core::light::Light;
use crate::core::scene::Scene;
use crate::core::shape::Shape;
use crate::math::color::Color;
use crate::math::constants::{Float, Int};
use crate::math::vector::{Point, Vector};

const COMMENT_MARKER: char = '#';

#[derive(Debug)]
pub enum SceneLoadError {
    Io(std::io::Error),
    MissingDirective(&'static str),
    Validation(String),
}

impl From<std::io::Error> for SceneLoadError {
    fn from(err: std::io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

// One bad line either gets skipped with a warning or ends the whole parse.
enum LineError {
    Skip(String),
    Abort(SceneLoadError),
}

// State carried across directives in file order. Scoped to one parse call,
// never part of the finished Scene.
#[derive(Default)]
struct ParserState {
    current_diffuse: Color,
    current_specular: Color,
    max_verts: usize,
    vertices: Vec<Point>,
    size_seen: bool,
    camera_seen: bool,
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneLoadError> {
    let text = fs::read_to_string(path)?;
    parse_scene(&text)
}

pub fn parse_scene(text: &str) -> Result<Scene, SceneLoadError> {
    let mut scene = Scene::new();
    let mut state = ParserState::default();

    for line in text.lines() {
        if let Err(err) = process_line(line, &mut scene, &mut state) {
            match err {
                LineError::Skip(reason) => {
                    log::warn!("skipping scene line '{}': {}", line.trim(), reason);
                }
                LineError::Abort(err) => return Err(err),
            }
        }
    }

    if !state.size_seen {
        return Err(SceneLoadError::MissingDirective("size"));
    }
    if !state.camera_seen {
        return Err(SceneLoadError::MissingDirective("camera"));
    }
    validate_light_budget(&scene)?;

    Ok(scene)
}

fn process_line(line: &str, scene: &mut Scene, state: &mut ParserState) -> Result<(), LineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Ok(());
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let directive = tokens[0];
    let args = &tokens[1..];

    match directive {
        "size" => {
            let args = expect_args(args, 2)?;
            scene.set_width(parse_int(args[0])?);
            scene.set_height(parse_int(args[1])?);
            state.size_seen = true;
        }
        "output" => {
            let args = expect_args(args, 1)?;
            scene.set_output(args[0].to_string());
        }
        "camera" => {
            let args = expect_args(args, 10)?;
            let look_from = parse_point(&args[0..3])?;
            let look_at = parse_point(&args[3..6])?;
            let up = parse_vector(&args[6..9])?;
            let fov = parse_float(args[9])?;
            scene.set_camera(Camera::new(look_from, look_at, up, fov));
            state.camera_seen = true;
        }
        "ambient" => {
            let args = expect_args(args, 3)?;
            scene.set_ambient(parse_color(args)?);
        }
        "diffuse" => {
            let args = expect_args(args, 3)?;
            state.current_diffuse = parse_color(args)?;
        }
        "specular" => {
            let args = expect_args(args, 3)?;
            state.current_specular = parse_color(args)?;
        }
        "directional" => {
            let args = expect_args(args, 6)?;
            let direction = parse_vector(&args[0..3])?;
            let color = parse_color(&args[3..6])?;
            scene.add_light(Light::Directional { direction, color });
        }
        "point" => {
            let args = expect_args(args, 6)?;
            let position = parse_point(&args[0..3])?;
            let color = parse_color(&args[3..6])?;
            scene.add_light(Light::Point { position, color });
        }
        "maxverts" => {
            let args = expect_args(args, 1)?;
            let count = parse_index(args[0])?;
            state.max_verts = count;
            // Discards every vertex declared so far.
            state.vertices = Vec::with_capacity(count);
        }
        "vertex" => {
            let args = expect_args(args, 3)?;
            let vertex = parse_point(args)?;
            state.vertices.push(vertex);
        }
        "sphere" => {
            check_surface_budget(scene.ambient(), &state.current_diffuse)?;
            let args = expect_args(args, 4)?;
            let center = parse_point(&args[0..3])?;
            let radius = parse_float(args[3])?;
            scene.add_shape(Shape::Sphere {
                center,
                radius,
                diffuse: state.current_diffuse,
                specular: state.current_specular,
            });
        }
        "plane" => {
            check_surface_budget(scene.ambient(), &state.current_diffuse)?;
            let args = expect_args(args, 6)?;
            let point = parse_point(&args[0..3])?;
            let normal = parse_vector(&args[3..6])?;
            scene.add_shape(Shape::Plane {
                point,
                normal,
                diffuse: state.current_diffuse,
                specular: state.current_specular,
            });
        }
        "tri" => {
            check_surface_budget(scene.ambient(), &state.current_diffuse)?;
            let args = expect_args(args, 3)?;
            let i1 = parse_index(args[0])?;
            let i2 = parse_index(args[1])?;
            let i3 = parse_index(args[2])?;
            let p1 = lookup_vertex(state, i1)?;
            let p2 = lookup_vertex(state, i2)?;
            let p3 = lookup_vertex(state, i3)?;
            scene.add_shape(Shape::Triangle {
                p1,
                p2,
                p3,
                diffuse: state.current_diffuse,
                specular: state.current_specular,
            });
        }
        other => {
            return Err(LineError::Skip(format!("unknown directive '{}'", other)));
        }
    }

    Ok(())
}

// A directive needs at least `count` arguments; trailing extras are ignored.
fn expect_args<'a>(args: &'a [&'a str], count: usize) -> Result<&'a [&'a str], LineError> {
    if args.len() < count {
        return Err(LineError::Skip(format!(
            "expected {} arguments, found {}",
            count,
            args.len()
        )));
    }
    Ok(&args[..count])
}

fn parse_float(token: &str) -> Result<Float, LineError> {
    token
        .parse::<Float>()
        .map_err(|_| LineError::Skip(format!("invalid float '{}'", token)))
}

fn parse_int(token: &str) -> Result<Int, LineError> {
    token
        .parse::<Int>()
        .map_err(|_| LineError::Skip(format!("invalid integer '{}'", token)))
}

fn parse_index(token: &str) -> Result<usize, LineError> {
    token
        .parse::<usize>()
        .map_err(|_| LineError::Skip(format!("invalid index '{}'", token)))
}

fn parse_point(args: &[&str]) -> Result<Point, LineError> {
    Ok(Point::new(
        parse_float(args[0])?,
        parse_float(args[1])?,
        parse_float(args[2])?,
    ))
}

fn parse_vector(args: &[&str]) -> Result<Vector, LineError> {
    Ok(Vector::new(
        parse_float(args[0])?,
        parse_float(args[1])?,
        parse_float(args[2])?,
    ))
}

fn parse_color(args: &[&str]) -> Result<Color, LineError> {
    // Color::new clamps each channel into [0, 1].
    Ok(Color::new(
        parse_float(args[0])?,
        parse_float(args[1])?,
        parse_float(args[2])?,
    ))
}

// Ambient and diffuse add at the surface, so their per-channel sum must stay
// renderable. Checked with the values current at the shape's line; a
// violation aborts the parse instead of skipping the line.
fn check_surface_budget(ambient: &Color, diffuse: &Color) -> Result<(), LineError> {
    if ambient.r() + diffuse.r() > 1.0
        || ambient.g() + diffuse.g() > 1.0
        || ambient.b() + diffuse.b() > 1.0
    {
        return Err(LineError::Abort(SceneLoadError::Validation(String::from(
            "ambient + diffuse exceeds 1.0 on at least one channel",
        ))));
    }
    Ok(())
}

fn lookup_vertex(state: &ParserState, index: usize) -> Result<Point, LineError> {
    if index >= state.max_verts {
        return Err(LineError::Skip(format!(
            "vertex index {} out of range, maxverts is {}",
            index, state.max_verts
        )));
    }
    state
        .vertices
        .get(index)
        .copied()
        .ok_or_else(|| LineError::Skip(format!("vertex {} has not been declared", index)))
}

// Summed as raw Floats: accumulating through Color would clamp each channel
// at 1.0 and the overshoot could never be detected.
fn validate_light_budget(scene: &Scene) -> Result<(), SceneLoadError> {
    let mut total_r: Float = 0.0;
    let mut total_g: Float = 0.0;
    let mut total_b: Float = 0.0;
    for light in scene.lights() {
        let color = light.color();
        total_r += color.r();
        total_g += color.g();
        total_b += color.b();
    }

    if total_r > 1.0 || total_g > 1.0 || total_b > 1.0 {
        return Err(SceneLoadError::Validation(String::from(
            "total light emission exceeds 1.0 on at least one channel",
        )));
    }
    Ok(())
}
