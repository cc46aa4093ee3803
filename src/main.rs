//! Renders one vehicle icon to a PNG file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use vehicle_icon::{Airframe, IconDescriptor, IconRenderer, parse_hex};

#[derive(Debug, Parser)]
#[command(version, about = "Render a heading-aware vehicle map icon to PNG")]
struct Args {
    /// JSON descriptor to start from; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Airframe class code (0 = generic, 5 = multi-rotor, 7 = long-range).
    #[arg(long, allow_negative_numbers = true)]
    airframe: Option<i32>,

    /// Icon size in pixels; the image is one pixel larger.
    #[arg(long)]
    radius: Option<u32>,

    /// Fill color as #rrggbb or #rrggbbaa.
    #[arg(long)]
    color: Option<String>,

    /// Heading in radians, 0 = north, positive clockwise.
    #[arg(long, allow_negative_numbers = true)]
    heading: Option<f32>,

    /// Draw the selection ring.
    #[arg(long)]
    selected: bool,

    /// Output PNG path.
    #[arg(short, long, default_value = "icon.png")]
    output: PathBuf,
}

fn descriptor(args: &Args) -> Result<IconDescriptor, Box<dyn std::error::Error>> {
    let mut descriptor = match &args.config {
        Some(path) => IconDescriptor::from_json(&std::fs::read_to_string(path)?)?,
        None => IconDescriptor::default(),
    };
    if let Some(code) = args.airframe {
        descriptor.airframe = Airframe::from_code(code);
    }
    if let Some(radius) = args.radius {
        descriptor.pixel_radius = radius;
    }
    if let Some(color) = &args.color {
        descriptor.fill_color = parse_hex(color)?;
    }
    if let Some(heading) = args.heading {
        descriptor.heading = heading;
    }
    descriptor.selected |= args.selected;
    Ok(descriptor)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = descriptor(args)?;
    let icon = IconRenderer::from_descriptor(&descriptor)?;
    icon.current_raster().as_image().save(&args.output)?;
    info!(
        "wrote {:?} icon ({}x{}) to {}",
        descriptor.airframe,
        icon.current_raster().width(),
        icon.current_raster().height(),
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vehicle-icon: {err}");
            ExitCode::FAILURE
        }
    }
}
