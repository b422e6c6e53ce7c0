//! Draw command handler
//!
//! Loads each family tree and writes its Graphviz document.

use nissaga::config::Config;
use nissaga::core::loader::load_tree;
use nissaga::core::render::{render_with, RenderOptions};
use nissaga::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of generated documents
const DOT_EXTENSION: &str = "dot";

/// Where generated documents go
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Print every document to stdout
    Stdout,
    /// Write to these paths (1:1 with inputs), or to `out_dir` when empty
    Files(&'a [PathBuf]),
}

/// Run the draw command for one or more input files.
///
/// Returns `true` when every input was drawn.
///
/// # Arguments
/// * `input_files` - Paths to family tree YAML files
/// * `target` - Output destination
/// * `config` - Configuration holding render settings and the default output directory
pub fn run(input_files: &[PathBuf], target: Target, config: &Config) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    if let Target::Files(outputs) = target {
        if !outputs.is_empty() && outputs.len() != input_files.len() {
            eprintln!(
                "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
                input_files.len(),
                outputs.len()
            );
            return false;
        }
    }

    let options = match config.render.to_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ Invalid render configuration: {e}");
            return false;
        }
    };

    let mut all_ok = true;
    for (idx, input_file) in input_files.iter().enumerate() {
        let result = match target {
            Target::Stdout => draw_to_string(input_file, &options).map(|text| {
                println!("{text}");
            }),
            Target::Files(outputs) => {
                let output_file = match outputs.get(idx) {
                    Some(path) => path.clone(),
                    None => default_output_path(input_file, Path::new(&config.paths.out_dir)),
                };
                draw_to_file(input_file, &output_file, &options).map(|()| {
                    println!("✓ Drawn: {}", output_file.display());
                })
            }
        };

        if let Err(err) = result {
            error!("Draw failed for {}: {err}", input_file.display());
            eprintln!("✗ {err}");
            all_ok = false;
        }
    }
    all_ok
}

/// Output path for an input when no explicit one is given: `<out_dir>/<stem>.dot`
pub fn default_output_path(input_file: &Path, out_dir: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("family");
    out_dir.join(format!("{stem}.{DOT_EXTENSION}"))
}

/// Load and render one tree
fn draw_to_string(input_file: &Path, options: &RenderOptions) -> Result<String, String> {
    verbose!("Loading {}", input_file.display());
    let tree = load_tree(input_file).map_err(|e| e.to_string())?;
    Ok(render_with(&tree, options).to_text())
}

/// Load, render and write one tree, creating the parent directory if needed
fn draw_to_file(
    input_file: &Path,
    output_file: &Path,
    options: &RenderOptions,
) -> Result<(), String> {
    let text = draw_to_string(input_file, options)?;

    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create output directory {}: {e}",
                parent.display()
            )
        })?;
    }

    fs::write(output_file, format!("{text}\n"))
        .map_err(|e| format!("Failed to write {}: {e}", output_file.display()))?;
    info!("Wrote {}", output_file.display());
    Ok(())
}
