//! Command-line demo: select and export a region of an image.
//!
//! Loads an image, fits it into a fixed viewport and drives the engine
//! through two corner-resize gestures so the selection lands on the middle
//! half of the picture. Prints the resulting geometry as JSON and writes
//! the cropped region to disk.

use std::path::PathBuf;

use serde::Serialize;

use cropkit::{
    CropConfig, CropEngine, Point, PointerButton, PointerEvent, Ratio, Rect, Size, SourceImage,
};

const USAGE: &str = "\
Usage: cropkit <input> [output] [--ratio RATIO] [--quality Q]

Arguments:
  input           source image (png, jpg, jpeg, bmp)
  output          destination file (default: cropped.png)
  --ratio RATIO   aspect constraint: 'free', a number, or W:H
  --quality Q     0.0..=1.0; 1.0 writes PNG, lower values write JPEG";

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 600.0;

struct Args {
    input: PathBuf,
    output: PathBuf,
    ratio: Ratio,
    quality: f32,
}

#[derive(Serialize)]
struct CropReport {
    display: Rect,
    source: Rect,
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = SourceImage::from_path(&args.input)?;

    let mut config = CropConfig::new();
    config.ratio = args.ratio;

    let mut engine = CropEngine::new(config);
    engine.set_image(
        source.intrinsic_size(),
        Size::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
    );
    let bounds = engine.image_bounds().ok_or("image bounds missing")?;

    // Pull the bottom-right corner up to the three-quarter point, then the
    // top-left corner down to the quarter point.
    let crop = engine.crop_rect().ok_or("selection missing")?;
    drag(
        &mut engine,
        Point::new(crop.right(), crop.bottom()),
        Point::new(
            bounds.x + bounds.width * 0.75,
            bounds.y + bounds.height * 0.75,
        ),
    );
    let crop = engine.crop_rect().ok_or("selection missing")?;
    drag(
        &mut engine,
        Point::new(crop.x, crop.y),
        Point::new(
            bounds.x + bounds.width * 0.25,
            bounds.y + bounds.height * 0.25,
        ),
    );

    let display = engine.crop_rect().ok_or("selection missing")?;
    let source_region = engine.source_rect().ok_or("selection missing")?;

    let report = CropReport {
        display,
        source: source_region,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    cropkit::export::export_to_path(&source.image, source_region, args.quality, &args.output)?;
    Ok(())
}

/// Press, move and release the primary button in one stroke.
fn drag(engine: &mut CropEngine, from: Point, to: Point) {
    engine.handle_event(PointerEvent::Pressed {
        button: PointerButton::Primary,
        position: from,
    });
    engine.handle_event(PointerEvent::Moved { position: to });
    engine.handle_event(PointerEvent::Released { position: to });
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut output = None;
    let mut ratio = Ratio::Free;
    let mut quality = 1.0_f32;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ratio" => {
                let value = args.next().ok_or("--ratio needs a value")?;
                ratio = parse_ratio(&value)?;
            }
            "--quality" => {
                let value = args.next().ok_or("--quality needs a value")?;
                quality = value
                    .parse::<f32>()
                    .map_err(|_| format!("invalid quality: {}", value))?;
                if !(0.0..=1.0).contains(&quality) {
                    return Err(format!("quality must be between 0 and 1, got {}", quality));
                }
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if output.is_none() => output = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument: {}", arg)),
        }
    }

    let input = input.ok_or("missing input image")?;
    let output = output.unwrap_or_else(|| PathBuf::from("cropped.png"));
    Ok(Args {
        input,
        output,
        ratio,
        quality,
    })
}

/// Parse 'free', a bare number, or a W:H pair into a ratio constraint.
fn parse_ratio(value: &str) -> Result<Ratio, String> {
    if value.eq_ignore_ascii_case("free") {
        return Ok(Ratio::Free);
    }
    if let Some((w, h)) = value.split_once(':') {
        let w: f32 = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid ratio: {}", value))?;
        let h: f32 = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid ratio: {}", value))?;
        if h == 0.0 {
            return Err(format!("invalid ratio: {}", value));
        }
        return Ratio::fixed(w / h).map_err(|e| e.to_string());
    }
    let r: f32 = value
        .parse()
        .map_err(|_| format!("invalid ratio: {}", value))?;
    Ratio::fixed(r).map_err(|e| e.to_string())
}
