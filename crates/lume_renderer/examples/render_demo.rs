//! Render one of the demo scenes and save it as a PNG.
//!
//! Usage: `render_demo [simple|reference|mesh|area]`

use lume_renderer::{demo, render, RenderConfig};

fn main() {
    env_logger::init();

    let scene_name = std::env::args().nth(1).unwrap_or_else(|| "reference".into());
    let (scene, camera) = match scene_name.as_str() {
        "simple" => demo::simple_scene(),
        "reference" => demo::reference_scene(),
        "mesh" => demo::mesh_scene(),
        "area" => demo::area_light_scene(),
        other => {
            eprintln!("Unknown scene '{other}', expected simple|reference|mesh|area");
            std::process::exit(1);
        }
    };

    let config = RenderConfig {
        width: 800,
        height: 450,
        ..Default::default()
    };

    println!("Rendering '{scene_name}' at {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render(&scene, &camera, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save_png(filename).expect("Failed to save image");
    println!("Saved to {filename}");
}
