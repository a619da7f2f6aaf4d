//! Reference test-vector generator for an 8-point DFT
//!
//! Draws random complex input vectors, transforms them with a direct O(N^2)
//! DFT evaluated in double precision, and writes both as IEEE-754 binary32
//! hex so a hardware or fixed-function FFT can be checked bit-for-bit.

pub mod error;
pub mod config;
pub mod sample;
pub mod dft;
pub mod hex;
pub mod writer;
pub mod generator;

pub use config::GeneratorConfig;
pub use dft::ReferenceDft;
pub use error::{DftVecError, Result};
pub use generator::{GenerationSummary, TestVectorGenerator};
pub use hex::{encode_complex, encode_f32};
pub use sample::SampleGenerator;
pub use writer::VectorWriter;

pub use num_complex::{Complex32, Complex64};

// Run configuration
pub const N_VEC: usize = 50;
pub const VEC_LEN: usize = 8;

// Input value range (closed interval)
pub const DEFAULT_MIN_VALUE: f32 = -5.0;
pub const DEFAULT_MAX_VALUE: f32 = 5.0;

// Output files
pub const DEFAULT_INPUT_FILENAME: &str = "fft_input.hex";
pub const DEFAULT_EXPECTED_FILENAME: &str = "fft_expected.hex";
