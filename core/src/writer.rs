use crate::error::Result;
use crate::hex::encode_complex;
use num_complex::Complex32;
use std::io::Write;

/// Writes complex vectors as `"<hex re> <hex im>\n"`, one sample per line
pub struct VectorWriter<W: Write> {
    inner: W,
    lines_written: usize,
}

impl<W: Write> VectorWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }

    /// Append every sample of `vector` in index order
    pub fn write_vector(&mut self, vector: &[Complex32]) -> Result<()> {
        for &sample in vector {
            writeln!(self.inner, "{}", encode_complex(sample))?;
            self.lines_written += 1;
        }
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and hand back the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
