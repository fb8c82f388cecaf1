use clap::builder::PossibleValue;
use clap::ValueEnum;

use super::PixelImage;
use crate::error::Error;
use crate::Arguments;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArithmeticMode {
    Legacy,
    Corrected,
}

impl ValueEnum for ArithmeticMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Legacy, Self::Corrected]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Legacy => Some(PossibleValue::new("Legacy")),
            Self::Corrected => Some(PossibleValue::new("Corrected")),
        }
    }
}

pub struct BlendOptions {
    pub mode: ArithmeticMode,
    pub clamp_enabled: bool,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            mode: ArithmeticMode::Legacy,
            clamp_enabled: false,
        }
    }
}

impl From<&Arguments> for BlendOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            mode: value.arithmetic_mode,
            clamp_enabled: value.clamp,
        }
    }
}

pub struct ImageBlender<'a> {
    options: &'a BlendOptions,
}

impl<'a> ImageBlender<'a> {
    pub fn new(options: &'a BlendOptions) -> Self {
        ImageBlender { options }
    }

    pub fn scale(&self, image: &PixelImage, factor: f64) -> crate::Result<PixelImage> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(Error::ScaleFactorOutOfRange(factor));
        }
        let mut result = image.clone();
        for index in 0..image.height() as usize {
            for value in result.matrix[index].as_mut_slice() {
                let mut scaled = *value as f64 * factor;
                if self.options.clamp_enabled {
                    scaled = scaled.clamp(0.0, 255.0);
                }
                *value = scaled as u8;
            }
        }
        Ok(result)
    }

    pub fn add(&self, lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
        ensure_same_shape(lhs, rhs)?;
        match self.options.mode {
            ArithmeticMode::Legacy => self.add_legacy(lhs, rhs),
            ArithmeticMode::Corrected => add_averaged(lhs, rhs),
        }
    }

    fn add_legacy(&self, lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
        // the half-scaled copies are computed and dropped
        self.scale(lhs, 0.5)?;
        self.scale(rhs, 0.5)?;
        let matrix = lhs.matrix.add(&rhs.matrix)?;
        Ok(lhs.with_matrix(matrix))
    }

    pub fn subtract(&self, lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
        ensure_same_shape(lhs, rhs)?;
        match self.options.mode {
            ArithmeticMode::Legacy => self.subtract_legacy(lhs, rhs),
            ArithmeticMode::Corrected => subtract_clamped(lhs, rhs),
        }
    }

    fn subtract_legacy(&self, lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
        // the tenth-scaled copy is dropped, the result takes the right operand's values
        self.scale(rhs, 0.1)?;
        Ok(lhs.with_matrix(rhs.matrix.clone()))
    }

    /// each output cell keeps only the last shared-dimension product
    pub fn multiply(&self, lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
        ensure_multipliable(lhs, rhs)?;
        if rhs.width() > lhs.width() {
            return Err(Error::ImageDimensionMismatch(shape_of(lhs), shape_of(rhs)));
        }
        let channels = lhs.channels() as usize;
        let mut result = lhs.clone();
        for i in 0..lhs.height() as usize {
            for j in 0..rhs.width() as usize {
                for k in 0..lhs.width() as usize {
                    for l in 0..channels {
                        let a = lhs.matrix[i][k * channels + l];
                        let b = rhs.matrix[k][j * channels + l];
                        result.matrix[i][j * channels + l] = a.wrapping_mul(b);
                    }
                }
            }
        }
        Ok(result)
    }

    /// true per-channel matrix product with a wrapping running sum
    pub fn multiply_accumulate(
        &self,
        lhs: &PixelImage,
        rhs: &PixelImage,
    ) -> crate::Result<PixelImage> {
        ensure_multipliable(lhs, rhs)?;
        let channels = lhs.channels() as usize;
        let mut result = PixelImage::blank(
            lhs.path(),
            lhs.channels(),
            rhs.width(),
            lhs.height(),
        );
        for i in 0..lhs.height() as usize {
            for j in 0..rhs.width() as usize {
                for l in 0..channels {
                    let mut accumulator = 0_u8;
                    for k in 0..lhs.width() as usize {
                        let a = lhs.matrix[i][k * channels + l];
                        let b = rhs.matrix[k][j * channels + l];
                        accumulator = accumulator.wrapping_add(a.wrapping_mul(b));
                    }
                    result.matrix[i][j * channels + l] = accumulator;
                }
            }
        }
        Ok(result)
    }
}

fn add_averaged(lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
    let mut result = lhs.clone();
    for index in 0..lhs.height() as usize {
        let rhs_row = rhs.matrix[index].as_slice();
        for (value, &other) in result.matrix[index]
            .as_mut_slice()
            .iter_mut()
            .zip(rhs_row)
        {
            *value = ((*value as u16 + other as u16) / 2) as u8;
        }
    }
    Ok(result)
}

fn subtract_clamped(lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<PixelImage> {
    let mut result = lhs.clone();
    for index in 0..lhs.height() as usize {
        let rhs_row = rhs.matrix[index].as_slice();
        for (value, &other) in result.matrix[index]
            .as_mut_slice()
            .iter_mut()
            .zip(rhs_row)
        {
            *value = value.saturating_sub(other);
        }
    }
    Ok(result)
}

fn ensure_same_shape(lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<()> {
    if lhs.width() != rhs.width()
        || lhs.height() != rhs.height()
        || lhs.channels() != rhs.channels()
    {
        return Err(Error::ImageDimensionMismatch(shape_of(lhs), shape_of(rhs)));
    }
    Ok(())
}

fn ensure_multipliable(lhs: &PixelImage, rhs: &PixelImage) -> crate::Result<()> {
    if lhs.width() != rhs.height() {
        return Err(Error::IncompatibleShapes(
            lhs.width() as usize,
            rhs.height() as usize,
        ));
    }
    if lhs.channels() != rhs.channels() {
        return Err(Error::ImageDimensionMismatch(shape_of(lhs), shape_of(rhs)));
    }
    Ok(())
}

fn shape_of(image: &PixelImage) -> String {
    format!(
        "{}x{}x{}",
        image.width(),
        image.height(),
        image.channels()
    )
}
