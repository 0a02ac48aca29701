#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Argument normalization and parsing.
pub mod args;

/// Error type of the command line tool.
pub mod error;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tileseam::image::ImageSize;
use tileseam::imgproc::{seam::pad_tiles, tile::TileSize};
use tileseam::io::{
    format::{decoder_for, encoder_for, file_extension},
    functional::{read_image_any, write_image_any},
    GenericImage, ImageFormat,
};

pub use crate::error::{CliError, Direction};

const COMMAND: &str = "tileseam";

/// What the tool was asked to do.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Print the usage text.
    Help(String),
    /// Fix a spritesheet.
    Fix(Options),
}

/// Validated options of a fix run.
#[derive(Debug, PartialEq)]
pub struct Options {
    /// The spritesheet to read.
    pub input: PathBuf,
    /// The path to write the fixed spritesheet to.
    pub output: PathBuf,
    /// The format used to encode the output.
    pub output_format: ImageFormat,
    /// The nominal tile size.
    pub tile: TileSize,
}

/// Turn the raw arguments, without the program name, into a [`Command`].
///
/// The checks run in a fixed order and the first failing one is reported.
pub fn parse_command<S: AsRef<str>>(raw: &[S]) -> Result<Command, CliError> {
    if raw.is_empty() {
        return Err(CliError::Usage(
            "Please specify an input file and tile width, see -h or --help for details".into(),
        ));
    }

    if args::is_help(raw) {
        return Ok(Command::Help(args::help(COMMAND)));
    }

    let parsed = args::parse_args(COMMAND, &args::normalize_args(raw)).map_err(CliError::Usage)?;

    let input = parsed
        .input
        .ok_or_else(|| CliError::Usage("Please specify an input file".into()))?;

    let input_extension = file_extension(&input).unwrap_or_default();
    if decoder_for(input_extension).is_none() {
        return Err(CliError::Format {
            extension: input_extension.to_string(),
            direction: Direction::Input,
        });
    }

    let tile_width = parsed
        .tile_width
        .ok_or_else(|| CliError::Usage("Please specify a tile width".into()))?;
    let tile_width = positive("tile width", tile_width)?;

    let output = match parsed.output {
        Some(output) => output,
        None => fixed_path(&input),
    };

    let output_extension = file_extension(&output).unwrap_or_default();
    let output_format = encoder_for(output_extension).ok_or_else(|| CliError::Format {
        extension: output_extension.to_string(),
        direction: Direction::Output,
    })?;

    let tile_height = match parsed.tile_height {
        Some(tile_height) => positive("tile height", tile_height)?,
        None => tile_width,
    };

    Ok(Command::Fix(Options {
        input,
        output,
        output_format,
        tile: TileSize::new(tile_width, tile_height)?,
    }))
}

fn positive(option: &'static str, value: i64) -> Result<usize, CliError> {
    if value < 0 {
        return Err(CliError::Value {
            option,
            problem: "cannot be negative",
        });
    }
    if value == 0 {
        return Err(CliError::Value {
            option,
            problem: "must be greater than zero",
        });
    }
    usize::try_from(value).map_err(|_| CliError::Value {
        option,
        problem: "is too large",
    })
}

/// Default output path: `Fixed` is inserted before the first `.` of the file name.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use tileseam_cli::fixed_path;
///
/// assert_eq!(fixed_path(Path::new("art/tiles.png")), PathBuf::from("art/tilesFixed.png"));
/// assert_eq!(fixed_path(Path::new("a.b.png")), PathBuf::from("aFixed.b.png"));
/// ```
pub fn fixed_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let fixed = match name.split_once('.') {
        Some((stem, extension)) => format!("{stem}Fixed.{extension}"),
        None => format!("{name}Fixed"),
    };

    input.with_file_name(fixed)
}

/// Pad every tile of an image, whatever its pixel layout.
pub fn fix_image(image: &GenericImage, tile: TileSize) -> Result<GenericImage, CliError> {
    macro_rules! pad_each {
        ($($variant:ident),*) => {
            match image {
                $(GenericImage::$variant(img) => GenericImage::$variant(pad_tiles(img, tile)?),)*
            }
        };
    }

    Ok(pad_each!(L8, La8, Rgb8, Rgba8, L16, La16, Rgb16, Rgba16, Rgb32F, Rgba32F))
}

/// Read, fix and write a spritesheet.
pub fn fix(options: &Options) -> Result<ImageSize, CliError> {
    let image = read_image_any(&options.input).map_err(|source| {
        log::debug!("reading {} failed: {source}", options.input.display());
        CliError::Load {
            path: options.input.clone(),
            source,
        }
    })?;

    let fixed = fix_image(&image, options.tile)?;

    write_image_any(&options.output, &fixed, options.output_format).map_err(|source| {
        log::debug!("writing {} failed: {source}", options.output.display());
        CliError::Write {
            path: options.output.clone(),
            source,
        }
    })?;

    log::info!(
        "fixed {} ({}) into {} ({})",
        options.input.display(),
        image.size(),
        options.output.display(),
        fixed.size()
    );

    Ok(fixed.size())
}

/// Convert process arguments to strings, rejecting invalid UTF-8.
pub fn utf8_args<I>(raw: I) -> Result<Vec<String>, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                CliError::Usage(format!("Error: argument {arg:?} is not valid UTF-8"))
            })
        })
        .collect()
}

/// Run the tool on the raw arguments, without the program name.
pub fn run<S: AsRef<str>>(raw: &[S]) -> Result<(), CliError> {
    match parse_command(raw)? {
        Command::Help(text) => print!("{text}"),
        Command::Fix(options) => {
            fix(&options)?;
        }
    }
    Ok(())
}
