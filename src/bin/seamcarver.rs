use seamcarver::seamcarve;

extern crate clap;
extern crate image;

use clap::{App, Arg};
use image::GenericImageView;
use log::info;

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let matches = App::new("seamcarver")
        .version("0.1.0")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width in pixels")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height in pixels")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Where to write the resized image")
                .takes_value(true)
                .default_value("resized_image.png"),
        )
        .get_matches();

    let path = matches.value_of("image").unwrap();
    let new_width: u32 = matches.value_of("width").unwrap().parse()?;
    let new_height: u32 = matches.value_of("height").unwrap().parse()?;
    let output = matches.value_of("output").unwrap();

    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    info!("loaded {} at {}x{}", path, width, height);

    let resized = seamcarve(&image, new_width, new_height)?;
    info!("carved down to {}x{}", resized.width(), resized.height());

    resized.save(output)?;
    info!("wrote {}", output);
    Ok(())
}
