use clap::Parser;
use henkan::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// A flow-graph conversion CLI: translates nested workflow definitions into
/// scheduler-ready task-graph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the .flow definition file
    flow_path: PathBuf,

    /// Project name stamped on every produced definition
    project_name: String,

    /// Directory to write one JSON file per definition (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let tree = load_flow_file(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load flow file '{}': {}",
            cli.flow_path.display(),
            e
        ))
    });
    let load_duration = load_start.elapsed();
    let node_count = tree.nodes.len();

    // --- 2. Conversion ---
    println!("\nStarting flow conversion for project '{}'...", cli.project_name);
    let convert_start = Instant::now();
    let definitions = Converter::builder(tree, &cli.project_name)
        .build()
        .convert()
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    let convert_duration = convert_start.elapsed();

    println!(
        "Conversion successful! {} definition(s) produced from {} top-level node(s)",
        definitions.len(),
        node_count
    );

    // --- 3. Output ---
    if let Some(dir) = &cli.output {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to create output directory '{}': {}",
                dir.display(),
                e
            ))
        });
        for definition in &definitions {
            let path = dir.join(format!("{}.json", definition.process_definition_name));
            let json = definition
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode definition: {}", e)));
            fs::write(&path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            println!("  -> {}", path.display());
        }
    } else {
        for definition in &definitions {
            let json = definition
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode definition: {}", e)));
            println!("{}", json);
        }
    }

    // --- 4. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Conversion:      {:?}", convert_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
