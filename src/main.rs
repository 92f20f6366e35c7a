use layoutimg::render_list::{DisplayList, FixedAdvanceMeasurer};
use layoutimg::{LayoutImage, PipelineError};
use std::env;
use std::fs;

/// Lays out a markup file and writes the recorded draw commands as JSON.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Lays out an image markup file and records the drawing as JSON.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/image.xml> <path/to/output.json>",
            program_name(&args)
        );
        std::process::exit(1);
    }

    let markup_path = &args[1];
    let output_path = &args[2];

    log::info!("Loading markup from {}", markup_path);
    let markup = fs::read_to_string(markup_path)?;
    let mut image = LayoutImage::new(&markup)?;

    let measurer = FixedAdvanceMeasurer::default();
    let mut renderer = DisplayList::new(measurer);
    image.generate(&measurer, &mut renderer)?;
    image.save(&renderer, output_path)?;

    log::info!(
        "Wrote {}x{} image to {}",
        renderer.width(),
        renderer.height(),
        output_path
    );
    Ok(())
}

/// The invoked program name, falling back when the platform passes no argv.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("layoutimg", String::as_str)
}
