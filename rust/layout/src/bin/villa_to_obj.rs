// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Generate the built-in villa and export it to OBJ
//!
//! Emits one OBJ object per primitive with a material per primitive
//! kind (walls, floors, ceilings, pool), plus a matching MTL file.
//!
//! Usage:
//!   villa-to-obj [options]

use boxplan_layout::{
    box_mesh, generate_building, villa_config, villa_placements, villa_plan, GeneratedBuilding,
    PrimitiveKind,
};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut output_path = String::from("villa.obj");
    let mut json_path: Option<String> = None;
    let mut config = villa_config();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--output" => {
                i += 1;
                output_path = args[i].clone();
            }
            "--json" => {
                i += 1;
                json_path = Some(args[i].clone());
            }
            "--wall-thickness" => {
                i += 1;
                config.wall_thickness = args[i].parse().expect("Invalid wall thickness value");
            }
            "--pool-depth" => {
                i += 1;
                config.pool_depth = args[i].parse().expect("Invalid pool depth value");
            }
            "--room-volumes" => {
                config.emit_room_volumes = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== Villa Layout Generator ===");
    println!();

    println!("[1/2] Generating villa layout...");
    let plan = villa_plan();
    let placements = villa_placements();
    let building = match generate_building(&plan, &placements, &config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error generating building: {}", e);
            std::process::exit(1);
        }
    };

    for floor in &building.floors {
        println!(
            "  {}: {} primitives, {} rooms skipped (elevation {:.1} ft)",
            floor.name,
            floor.primitives.len(),
            floor.skipped.len(),
            floor.elevation
        );
        for skip in &floor.skipped {
            println!("    skipped {}: {:?}", skip.room, skip.reason);
        }
    }

    if let Some(path) = &json_path {
        let json = serde_json::to_string_pretty(&building).expect("Serialization failed");
        fs::write(path, json).unwrap_or_else(|e| {
            eprintln!("Error: Cannot write JSON file '{}': {}", path, e);
            std::process::exit(1);
        });
        println!("  Primitive dump written to {}", path);
    }

    println!("[2/2] Writing OBJ file: {}", output_path);
    write_obj(&output_path, &building);

    println!();
    println!("=== Building Summary ===");
    println!("  Total height: {:.1} ft", building.total_height);
    if !building.bounds.is_empty() {
        println!(
            "  Footprint: {:.1} ft x {:.1} ft",
            building.bounds.max_x - building.bounds.min_x,
            building.bounds.max_z - building.bounds.min_z
        );
    }
    println!("  Floors: {}", building.floors.len());

    let mut total_verts = 0;
    let mut total_tris = 0;
    for floor in &building.floors {
        let verts: usize = floor
            .primitives
            .iter()
            .map(|p| box_mesh(p).vertex_count())
            .sum();
        let tris: usize = floor
            .primitives
            .iter()
            .map(|p| box_mesh(p).triangle_count())
            .sum();
        total_verts += verts;
        total_tris += tris;
        println!(
            "  {}: {} primitives, {} verts, {} tris",
            floor.name,
            floor.primitives.len(),
            verts,
            tris
        );
    }
    println!("  Total: {} vertices, {} triangles", total_verts, total_tris);
    println!();
    println!("Done! Open {} in a 3D viewer.", output_path);
}

/// Write the generated building to an OBJ file with a sibling MTL
fn write_obj(path: &str, building: &GeneratedBuilding) {
    let mtl_path = Path::new(path).with_extension("mtl");
    write_mtl(&mtl_path);

    let mut file = fs::File::create(path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot create output file '{}': {}", path, e);
        std::process::exit(1);
    });

    writeln!(file, "# Generated by villa-to-obj (boxplan)").unwrap();
    writeln!(
        file,
        "# Building: {:.1} ft tall, {} floors, {} primitives",
        building.total_height,
        building.floors.len(),
        building.primitive_count()
    )
    .unwrap();
    writeln!(file, "# Coordinate system: Y-up (native)").unwrap();
    writeln!(
        file,
        "mtllib {}",
        mtl_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("villa.mtl")
    )
    .unwrap();
    writeln!(file).unwrap();

    let mut vertex_offset: u32 = 0;

    for floor in &building.floors {
        writeln!(file, "# Floor: {}", floor.name).unwrap();
        for primitive in &floor.primitives {
            let mesh = box_mesh(primitive);

            writeln!(file, "o {}.{}", floor.name, primitive.name).unwrap();
            writeln!(file, "usemtl {}", primitive.kind.label()).unwrap();

            for v in mesh.positions.chunks_exact(3) {
                writeln!(file, "v {:.6} {:.6} {:.6}", v[0], v[1], v[2]).unwrap();
            }
            for n in mesh.normals.chunks_exact(3) {
                writeln!(file, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2]).unwrap();
            }
            for t in mesh.indices.chunks_exact(3) {
                let (i0, i1, i2) = (
                    t[0] + vertex_offset + 1,
                    t[1] + vertex_offset + 1,
                    t[2] + vertex_offset + 1,
                );
                writeln!(file, "f {}//{} {}//{} {}//{}", i0, i0, i1, i1, i2, i2).unwrap();
            }

            vertex_offset += mesh.vertex_count() as u32;
        }
        writeln!(file).unwrap();
    }
}

/// Write the material library: one material per primitive kind
fn write_mtl(path: &Path) {
    let mut file = fs::File::create(path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot create MTL file '{}': {}", path.display(), e);
        std::process::exit(1);
    });

    // Kd per kind; the pool is semi-transparent water
    let materials: [(PrimitiveKind, [f32; 3], f32); 5] = [
        (PrimitiveKind::WallSegment, [0.9, 0.9, 0.9], 1.0),
        (PrimitiveKind::FloorSlab, [0.8, 0.8, 0.8], 1.0),
        (PrimitiveKind::CeilingSlab, [0.95, 0.95, 0.95], 1.0),
        (PrimitiveKind::PoolBasin, [0.2, 0.6, 0.9], 0.7),
        (PrimitiveKind::RoomVolume, [0.85, 0.85, 0.85], 1.0),
    ];

    writeln!(file, "# Generated by villa-to-obj (boxplan)").unwrap();
    for (kind, kd, alpha) in &materials {
        writeln!(file).unwrap();
        writeln!(file, "newmtl {}", kind.label()).unwrap();
        writeln!(file, "Kd {:.3} {:.3} {:.3}", kd[0], kd[1], kd[2]).unwrap();
        writeln!(file, "Ks 0.200 0.200 0.200").unwrap();
        writeln!(file, "d {:.3}", alpha).unwrap();
    }
}

fn print_usage() {
    println!("villa-to-obj - generate the built-in villa layout and export OBJ");
    println!();
    println!("Usage:");
    println!("  villa-to-obj [options]");
    println!();
    println!("Options:");
    println!("  --output <path>          Output OBJ file path (default: villa.obj)");
    println!("  --json <path>            Also dump the primitive sequence as JSON");
    println!("  --wall-thickness <ft>    Wall thickness (default: 0.5)");
    println!("  --pool-depth <ft>        Pool basin depth (default: 5)");
    println!("  --room-volumes           Also emit one RoomVolume box per room");
    println!("  --help, -h               Show this help");
    println!();
    println!("Examples:");
    println!("  villa-to-obj --output villa.obj");
    println!("  villa-to-obj --json primitives.json --wall-thickness 0.33");
}
