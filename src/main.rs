// Copyright 2020 TwoCookingMice

use genoise::core::scene_loader::load_scene;

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scene.txt>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let scene = load_scene(input_path).expect("failed to load scene");

    log::info!(
        "Scene loaded: {}x{}, output = {}.",
        scene.width(),
        scene.height(),
        scene.output()
    );
    log::info!(
        "{} shapes, {} lights, ambient = ({}, {}, {}).",
        scene.shapes().len(),
        scene.lights().len(),
        scene.ambient().r(),
        scene.ambient().g(),
        scene.ambient().b()
    );
    if let Some(camera) = scene.camera() {
        log::info!(
            "Camera at ({}, {}, {}), fov = {} degrees.",
            camera.look_from().x(),
            camera.look_from().y(),
            camera.look_from().z(),
            camera.fov()
        );
    }
}
