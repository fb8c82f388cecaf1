use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use crate::array::DynamicArray;
use crate::error::Error;

/// Row-major byte grid; every row owns exactly `cols()` cells.
pub struct ByteMatrix {
    num_rows: usize,
    num_cols: usize,
    data: DynamicArray<DynamicArray<u8>>,
}

impl ByteMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut data: DynamicArray<DynamicArray<u8>> = DynamicArray::new(rows);
        for index in 0..rows {
            data[index] = DynamicArray::new(cols);
        }
        Self {
            num_rows: rows,
            num_cols: cols,
            data,
        }
    }

    fn from_rows(num_cols: usize, rows: Vec<DynamicArray<u8>>) -> Self {
        Self {
            num_rows: rows.len(),
            num_cols,
            data: DynamicArray::from(rows),
        }
    }

    pub fn rows(&self) -> usize {
        self.num_rows
    }

    pub fn cols(&self) -> usize {
        self.num_cols
    }

    pub fn row(&self, index: usize) -> crate::Result<&DynamicArray<u8>> {
        if index >= self.num_rows {
            return Err(Error::IndexOutOfBounds(index, self.num_rows));
        }
        Ok(&self.data[index])
    }

    pub fn row_mut(&mut self, index: usize) -> crate::Result<&mut DynamicArray<u8>> {
        if index >= self.num_rows {
            return Err(Error::IndexOutOfBounds(index, self.num_rows));
        }
        Ok(&mut self.data[index])
    }

    pub fn add(&self, other: &Self) -> crate::Result<Self> {
        self.zip_rows(other, DynamicArray::elementwise_add)
    }

    pub fn sub(&self, other: &Self) -> crate::Result<Self> {
        self.zip_rows(other, DynamicArray::elementwise_sub)
    }

    fn zip_rows(
        &self,
        other: &Self,
        op: fn(&DynamicArray<u8>, &DynamicArray<u8>) -> crate::Result<DynamicArray<u8>>,
    ) -> crate::Result<Self> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(Error::MatrixDimensionMismatch(
                (self.num_rows, self.num_cols),
                (other.num_rows, other.num_cols),
            ));
        }
        let mut rows = Vec::with_capacity(self.num_rows);
        for index in 0..self.num_rows {
            rows.push(op(&self.data[index], &other.data[index])?);
        }
        Ok(Self::from_rows(self.num_cols, rows))
    }

    pub fn matmul(&self, other: &Self) -> crate::Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(Error::IncompatibleShapes(self.num_cols, other.num_rows));
        }
        let mut result = Self::new(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut accumulator = 0_u8;
                for k in 0..self.num_cols {
                    accumulator = accumulator.wrapping_add(self[i][k].wrapping_mul(other[k][j]));
                }
                result[i][j] = accumulator;
            }
        }
        Ok(result)
    }

    pub fn transpose(&mut self) {
        let mut result = Self::new(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[j][i] = self[i][j];
            }
        }
        *self = result;
    }

    pub fn read_tokens<I: Iterator<Item = String>>(&mut self, tokens: &mut I) -> crate::Result<()> {
        let mut staged = Self::new(self.num_rows, self.num_cols);
        for index in 0..self.num_rows {
            staged.data[index].read_tokens(tokens)?;
        }
        *self = staged;
        Ok(())
    }

    pub fn write_into<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for index in 0..self.num_rows {
            self.data[index].write_into(writer)?;
        }
        Ok(())
    }
}

impl Clone for ByteMatrix {
    fn clone(&self) -> Self {
        Self {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.num_rows = source.num_rows;
        self.num_cols = source.num_cols;
        self.data.clone_from(&source.data);
    }
}

impl Index<usize> for ByteMatrix {
    type Output = DynamicArray<u8>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for ByteMatrix {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod test {
    use super::ByteMatrix;
    use crate::error::Error;
    use crate::text::Tokenizer;

    fn filled_matrix(rows: usize, cols: usize, value: u8) -> ByteMatrix {
        let mut matrix = ByteMatrix::new(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                matrix[i][j] = value;
            }
        }
        matrix
    }

    #[test]
    fn new_matrix_is_all_zeros() {
        let matrix = ByteMatrix::new(3, 5);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 5);
        for i in 0..3 {
            for j in 0..5 {
                assert_eq!(matrix[i][j], 0);
            }
        }
    }

    #[test]
    fn add_without_overflow() {
        let matrix = filled_matrix(2, 3, 10);
        let sum = matrix.add(&matrix).unwrap();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(sum[i][j], 20);
            }
        }
    }

    #[test]
    fn add_wraps_on_overflow() {
        let matrix = filled_matrix(2, 3, 200);
        let sum = matrix.add(&matrix).unwrap();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(sum[i][j], 144);
            }
        }
    }

    #[test]
    fn sub_wraps_below_zero() {
        let lhs = filled_matrix(1, 2, 5);
        let rhs = filled_matrix(1, 2, 10);
        let difference = lhs.sub(&rhs).unwrap();
        assert_eq!(difference[0][0], 251);
        assert_eq!(difference[0][1], 251);
    }

    #[test]
    fn add_rejects_different_dimensions() {
        let lhs = ByteMatrix::new(2, 3);
        let rhs = ByteMatrix::new(3, 2);
        match lhs.add(&rhs) {
            Err(Error::MatrixDimensionMismatch((2, 3), (3, 2))) => {}
            _ => panic!("Dimension mismatch was not detected"),
        }
    }

    #[test]
    fn matmul_accumulates_products() {
        let mut lhs = ByteMatrix::new(1, 2);
        lhs[0][0] = 2;
        lhs[0][1] = 3;
        let mut rhs = ByteMatrix::new(2, 1);
        rhs[0][0] = 4;
        rhs[1][0] = 5;
        let product = lhs.matmul(&rhs).unwrap();
        assert_eq!(product.rows(), 1);
        assert_eq!(product.cols(), 1);
        // 2*4 + 3*5, not just the last pairwise product
        assert_eq!(product[0][0], 23);
    }

    #[test]
    fn matmul_wraps_the_running_sum() {
        let lhs = filled_matrix(1, 4, 8);
        let rhs = filled_matrix(4, 1, 8);
        let product = lhs.matmul(&rhs).unwrap();
        // four products of 64 sum to 256, which wraps back to zero
        assert_eq!(product[0][0], 0);
    }

    #[test]
    fn matmul_rejects_incompatible_shapes() {
        let lhs = ByteMatrix::new(2, 3);
        let rhs = ByteMatrix::new(2, 3);
        match lhs.matmul(&rhs) {
            Err(Error::IncompatibleShapes(3, 2)) => {}
            _ => panic!("Incompatible shapes were not detected"),
        }
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let mut matrix = ByteMatrix::new(2, 3);
        matrix[0][2] = 7;
        matrix.transpose();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix[2][0], 7);
    }

    #[test]
    fn transpose_twice_restores_the_matrix() {
        let mut matrix = ByteMatrix::new(2, 3);
        let mut value = 1;
        for i in 0..2 {
            for j in 0..3 {
                matrix[i][j] = value;
                value += 1;
            }
        }
        let original = matrix.clone();
        matrix.transpose();
        matrix.transpose();
        assert_eq!(matrix.rows(), original.rows());
        assert_eq!(matrix.cols(), original.cols());
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(matrix[i][j], original[i][j]);
            }
        }
    }

    #[test]
    fn row_access_past_the_end_fails() {
        let matrix = ByteMatrix::new(2, 2);
        match matrix.row(2) {
            Err(Error::IndexOutOfBounds(2, 2)) => {}
            _ => panic!("Out of bounds row access was not detected"),
        }
    }

    #[test]
    fn clone_from_same_dimensions_overwrites_values() {
        let mut destination = filled_matrix(2, 2, 1);
        let source = filled_matrix(2, 2, 9);
        destination.clone_from(&source);
        assert_eq!(destination[1][1], 9);
    }

    #[test]
    fn clone_from_different_dimensions_replaces_the_grid() {
        let mut destination = filled_matrix(2, 2, 1);
        let source = filled_matrix(3, 1, 9);
        destination.clone_from(&source);
        assert_eq!(destination.rows(), 3);
        assert_eq!(destination.cols(), 1);
        assert_eq!(destination[2][0], 9);
    }

    #[test]
    fn read_tokens_fills_row_major() {
        let mut matrix = ByteMatrix::new(2, 3);
        let mut tokens = Tokenizer::new("1 2 3\n4 5 6\n".as_bytes());
        matrix.read_tokens(&mut tokens).unwrap();
        assert_eq!(matrix[0][0], 1);
        assert_eq!(matrix[0][2], 3);
        assert_eq!(matrix[1][0], 4);
        assert_eq!(matrix[1][2], 6);
    }

    #[test]
    fn read_tokens_from_short_stream_leaves_matrix_untouched() {
        let mut matrix = filled_matrix(2, 2, 9);
        let mut tokens = Tokenizer::new("1 2 3".as_bytes());
        assert!(matrix.read_tokens(&mut tokens).is_err());
        assert_eq!(matrix[0][0], 9);
        assert_eq!(matrix[1][1], 9);
    }

    #[test]
    fn write_into_emits_one_line_per_row() {
        let mut matrix = ByteMatrix::new(2, 2);
        matrix[0][0] = 1;
        matrix[0][1] = 2;
        matrix[1][0] = 3;
        matrix[1][1] = 4;
        let mut output: Vec<u8> = Vec::new();
        matrix.write_into(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "1 2 \n3 4 \n");
    }
}
