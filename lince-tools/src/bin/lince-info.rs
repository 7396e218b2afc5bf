use std::io::Read;

use lince::{detect, DetectOptions, ImageMetadata, StreamSource};
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let compact = args.iter().any(|x| x == "-c");
    let paths: Vec<&String> = args.iter().filter(|x| *x != "-c").collect();

    let options = DetectOptions::new()
        .collect_comments(!compact)
        .count_images(true);

    if paths.is_empty() {
        inspect("-", std::io::stdin().lock(), options, compact);
        return;
    }

    for path in paths {
        match std::fs::File::open(path) {
            Ok(file) => inspect(path, file, options, compact),
            Err(err) => eprintln!("{path}: {err}"),
        }
    }
}

fn inspect(name: &str, reader: impl Read, options: DetectOptions, compact: bool) {
    let mut source = StreamSource::new(reader);
    match detect(&mut source, options) {
        Ok(metadata) if compact => print_compact(name, &metadata),
        Ok(metadata) => print_verbose(name, &metadata),
        Err(err) => eprintln!("{name}: {err}"),
    }
}

/// One tab-separated line per file
fn print_compact(name: &str, metadata: &ImageMetadata) {
    println!(
        "{name}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        metadata.format().name(),
        metadata.mime_type(),
        metadata.width(),
        metadata.height(),
        metadata.bits_per_pixel(),
        metadata.number_of_images(),
        or_dash(metadata.physical_width_dpi()),
        or_dash(metadata.physical_height_dpi()),
        or_dash(metadata.physical_width_inch()),
        or_dash(metadata.physical_height_inch()),
        metadata.progressive(),
    );
}

fn print_verbose(name: &str, metadata: &ImageMetadata) {
    println!("{name}");
    println!("\tFile format: {}", metadata.format().name());
    println!("\tMIME type: {}", metadata.mime_type());
    println!("\tWidth (pixels): {}", metadata.width());
    println!("\tHeight (pixels): {}", metadata.height());
    println!("\tBits per pixel: {}", metadata.bits_per_pixel());
    println!(
        "\tProgressive: {}",
        if metadata.progressive() { "yes" } else { "no" }
    );
    println!("\tNumber of images: {}", metadata.number_of_images());
    if let Some(dpi) = metadata.physical_width_dpi() {
        println!("\tPhysical width (dpi): {dpi}");
    }
    if let Some(dpi) = metadata.physical_height_dpi() {
        println!("\tPhysical height (dpi): {dpi}");
    }
    if let Some(inch) = metadata.physical_width_inch() {
        println!("\tPhysical width (inches): {inch}");
    }
    if let Some(inch) = metadata.physical_height_inch() {
        println!("\tPhysical height (inches): {inch}");
    }
    if !metadata.comments().is_empty() {
        println!("\tNumber of textual comments: {}", metadata.comments().len());
        for comment in metadata.comments() {
            println!("\t\t{comment}");
        }
    }
}

fn or_dash(value: Option<impl ToString>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("-"),
    }
}
