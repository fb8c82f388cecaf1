use std::io::Read;
use std::str;

/// Splits a byte stream into whitespace-separated tokens.
pub struct Tokenizer<R: Read> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut byte = [0; 1];

        while self.reader.read(&mut byte).unwrap_or(0) > 0 {
            if byte[0].is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte[0]);
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        let token = str::from_utf8(&self.buffer)
            .expect("Invalid UTF-8 sequence")
            .to_string();
        Some(token)
    }
}
