use crate::error::Result;
use crate::config::validate_range;
use num_complex::Complex32;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws complex input vectors with i.i.d. uniform real and imaginary parts
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    len: usize,
    dist: Uniform<f32>,
}

impl SampleGenerator {
    /// Create a generator for vectors of `len` samples over `[min, max]`
    pub fn new(len: usize, min: f32, max: f32) -> Result<Self> {
        validate_range(min, max)?;

        Ok(Self {
            len,
            dist: Uniform::new_inclusive(min, max),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Draw one vector. Real part first, then imaginary, per index.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Complex32> {
        (0..self.len)
            .map(|_| {
                let re = self.dist.sample(rng);
                let im = self.dist.sample(rng);
                Complex32::new(re, im)
            })
            .collect()
    }
}
