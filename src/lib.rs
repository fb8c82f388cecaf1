use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::ValueEnum;

pub use cli::CLIParser;
pub use error::Error;
use pixel::blender::{ArithmeticMode, BlendOptions, ImageBlender};
use pixel::PixelImage;

pub mod array;
mod cli;
mod error;
mod logger;
pub mod matrix;
pub mod pixel;
pub mod text;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    second_input_file: Option<PathBuf>,
    output_file: PathBuf,
    operation: ImageOperation,
    arithmetic_mode: ArithmeticMode,
    clamp: bool,
    scale_factor: f64,
    target_width: u32,
    target_height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageOperation {
    Add,
    Subtract,
    Multiply,
    MultiplyAccumulate,
    Scale,
    Resize,
}

impl ValueEnum for ImageOperation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Add,
            Self::Subtract,
            Self::Multiply,
            Self::MultiplyAccumulate,
            Self::Scale,
            Self::Resize,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Add => Some(PossibleValue::new("Add")),
            Self::Subtract => Some(PossibleValue::new("Subtract")),
            Self::Multiply => Some(PossibleValue::new("Multiply")),
            Self::MultiplyAccumulate => Some(PossibleValue::new("MultiplyAccumulate")),
            Self::Scale => Some(PossibleValue::new("Scale")),
            Self::Resize => Some(PossibleValue::new("Resize")),
        }
    }
}

fn open_second_input(arguments: &Arguments, operation: &'static str) -> Result<PixelImage> {
    let path = arguments
        .second_input_file
        .as_ref()
        .ok_or(Error::MissingSecondInputFile(operation))?;
    PixelImage::open(path)
}

pub fn run_operation(arguments: &Arguments) -> Result<()> {
    let input = PixelImage::open(&arguments.input_file)?;
    logger::log_image("input", &input);
    let options = BlendOptions::from(arguments);
    let blender = ImageBlender::new(&options);
    let result = match arguments.operation {
        ImageOperation::Add => blender.add(&input, &open_second_input(arguments, "Add")?)?,
        ImageOperation::Subtract => {
            blender.subtract(&input, &open_second_input(arguments, "Subtract")?)?
        }
        ImageOperation::Multiply => {
            blender.multiply(&input, &open_second_input(arguments, "Multiply")?)?
        }
        ImageOperation::MultiplyAccumulate => {
            blender.multiply_accumulate(&input, &open_second_input(arguments, "MultiplyAccumulate")?)?
        }
        ImageOperation::Scale => blender.scale(&input, arguments.scale_factor)?,
        ImageOperation::Resize => {
            let mut image = input;
            image.resize(arguments.target_width, arguments.target_height)?;
            image
        }
    };
    logger::log_image("result", &result);
    result.save(&arguments.output_file)?;
    Ok(())
}
