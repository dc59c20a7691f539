use std::env;
use std::process;

use xfem_crack::{
    Crack, CrackInputFile, DofPoolSizing, DomainId, GnuplotExportModule, TimeStep, XfemManagerId,
    intersect_all,
};

const DEFAULT_INPUT: &str = r#"
[[crack]]
points = [[0.0, 0.0], [1.0, 0.1], [2.0, 0.0]]
element_size = 0.1
enriched_tips = ["end"]

[[crack]]
points = [[1.0, -1.0], [1.0, 1.0]]
element_size = 0.1
"#;

fn main() {
    println!("=== Crack Branching Demo ===\n");

    let args: Vec<String> = env::args().collect();
    let input = match args.get(1) {
        Some(path) => {
            println!("Reading cracks from {}", path);
            CrackInputFile::from_file(path)
        }
        None => {
            println!("No input file given, using built-in example");
            CrackInputFile::from_toml_str(DEFAULT_INPUT)
        }
    };
    let input = input.unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    });

    let mut cracks = Vec::with_capacity(input.cracks.len());
    for (i, record) in input.cracks.iter().enumerate() {
        match Crack::from_record(i + 1, XfemManagerId(0), DomainId(0), record) {
            Ok(crack) => cracks.push(crack),
            Err(e) => {
                eprintln!("ERROR: crack {}: {}", i + 1, e);
                process::exit(1);
            }
        }
    }

    println!("\nCracks:");
    for crack in &cracks {
        println!(
            "  #{}: length = {:.4}, enriched DOFs = {}",
            crack.index(),
            crack.compute_length(),
            crack.dof_pool_size()
        );
    }

    println!("\nIntersections:");
    let hits = intersect_all(&cracks);
    if hits.is_empty() {
        println!("  none");
    }
    for pair in &hits {
        for x in &pair.result.intersections {
            println!(
                "  #{} x #{} at ({:.4}, {:.4}, {:.4}): s = {:.4} / {:.4}",
                cracks[pair.first].index(),
                cracks[pair.second].index(),
                x.point.x,
                x.point.y,
                x.point.z,
                x.arc_position,
                x.other_arc_position
            );
        }
    }

    let output_dir = args.get(2).map(String::as_str).unwrap_or("crack_output");
    let mut exporter = GnuplotExportModule::new();
    let step = TimeStep::new(0, 0.0);
    for crack in &cracks {
        crack.call_gnuplot_export_module(&mut exporter, &step);
    }
    match exporter.write_files(output_dir) {
        Ok(files) => println!("\nWrote {} gnuplot files to {}/", files.len(), output_dir),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
