use std::path::{Path, PathBuf};

use crate::array::DynamicArray;
use crate::error::Error;
use crate::matrix::ByteMatrix;

pub mod blender;
pub mod codec;
pub mod resample;

/// Raster image over a byte matrix of `width * channels` columns, with the
/// channel values of each pixel interleaved within the row.
pub struct PixelImage {
    matrix: ByteMatrix,
    file_path: PathBuf,
    num_channels: u8,
    width: u32,
    height: u32,
}

impl PixelImage {
    pub fn open(path: &Path) -> crate::Result<Self> {
        let decoded = codec::decode(path)?;
        let matrix = matrix_from_interleaved(
            &decoded.bytes,
            decoded.width,
            decoded.height,
            decoded.channels,
        );
        Ok(Self {
            matrix,
            file_path: path.to_path_buf(),
            num_channels: decoded.channels,
            width: decoded.width,
            height: decoded.height,
        })
    }

    /// the path is metadata only and is not read
    pub fn blank(path: &Path, channels: u8, width: u32, height: u32) -> Self {
        Self {
            matrix: ByteMatrix::new(height as usize, width as usize * channels as usize),
            file_path: path.to_path_buf(),
            num_channels: channels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.num_channels
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn matrix(&self) -> &ByteMatrix {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut ByteMatrix {
        &mut self.matrix
    }

    pub fn row(&self, index: usize) -> crate::Result<&DynamicArray<u8>> {
        self.matrix.row(index)
    }

    pub fn row_mut(&mut self, index: usize) -> crate::Result<&mut DynamicArray<u8>> {
        self.matrix.row_mut(index)
    }

    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let bytes = self.to_interleaved_bytes();
        codec::encode_png(
            path,
            self.width,
            self.height,
            self.num_channels,
            &bytes,
        )
    }

    /// the stored source path is not re-read
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> crate::Result<()> {
        if new_width == 0 || new_height == 0 {
            return Err(Error::InvalidResizeTarget(new_width, new_height));
        }
        let source = self.to_interleaved_bytes();
        let resized = resample::resample(
            &source,
            self.width,
            self.height,
            self.num_channels,
            new_width,
            new_height,
        )?;
        self.matrix = matrix_from_interleaved(&resized, new_width, new_height, self.num_channels);
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    fn to_interleaved_bytes(&self) -> Vec<u8> {
        let stride = self.width as usize * self.num_channels as usize;
        let mut bytes = Vec::with_capacity(self.height as usize * stride);
        for index in 0..self.height as usize {
            bytes.extend_from_slice(self.matrix[index].as_slice());
        }
        bytes
    }

    fn with_matrix(&self, matrix: ByteMatrix) -> Self {
        Self {
            matrix,
            file_path: self.file_path.clone(),
            num_channels: self.num_channels,
            width: self.width,
            height: self.height,
        }
    }
}

impl Clone for PixelImage {
    fn clone(&self) -> Self {
        self.with_matrix(self.matrix.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.matrix.clone_from(&source.matrix);
        self.file_path.clone_from(&source.file_path);
        self.num_channels = source.num_channels;
        self.width = source.width;
        self.height = source.height;
    }
}

fn matrix_from_interleaved(bytes: &[u8], width: u32, height: u32, channels: u8) -> ByteMatrix {
    let stride = width as usize * channels as usize;
    let mut matrix = ByteMatrix::new(height as usize, stride);
    for (index, row) in bytes.chunks_exact(stride).enumerate() {
        matrix[index].as_mut_slice().copy_from_slice(row);
    }
    matrix
}
