//! Example: Load and inspect an OBJ file.
//!
//! Run with: cargo run --example load_obj -- path/to/mesh.obj

use std::env;

use lume_core::load_obj;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_obj <path-to-obj-file>");
        return;
    }

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    match load_obj(path) {
        Ok(mesh) => {
            println!("Vertices: {}", mesh.vertex_count());
            println!("Triangles: {}", mesh.triangle_count());
            println!(
                "Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                mesh.bounds.x.min,
                mesh.bounds.y.min,
                mesh.bounds.z.min,
                mesh.bounds.x.max,
                mesh.bounds.y.max,
                mesh.bounds.z.max
            );
            println!("Center: {:.2?}", mesh.center());
        }
        Err(e) => {
            eprintln!("Error loading OBJ file: {}", e);
        }
    }
}
