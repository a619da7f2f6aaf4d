use crate::error::{DftVecError, Result};
use num_complex::{Complex32, Complex64};
use std::f64::consts::PI;

/// Direct evaluation of the DFT definition
///
/// `X[k] = sum_n x[n] * exp(-2*pi*i*k*n / L)`, with every twiddle factor
/// computed from its angle and all sums carried in f64. This is deliberately
/// O(L^2) and shares no structure with a butterfly FFT, so it can serve as the
/// golden model for one.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceDft {
    len: usize,
}

impl ReferenceDft {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Transform a binary32 vector. Sums are accumulated in f64 and each
    /// output component is rounded to f32 exactly once.
    pub fn transform(&self, input: &[Complex32]) -> Result<Vec<Complex32>> {
        let widened: Vec<Complex64> = input
            .iter()
            .map(|s| Complex64::new(s.re as f64, s.im as f64))
            .collect();

        let output = self
            .transform_f64(&widened)?
            .into_iter()
            .map(|s| Complex32::new(s.re as f32, s.im as f32))
            .collect();

        Ok(output)
    }

    /// Full-precision transform
    pub fn transform_f64(&self, input: &[Complex64]) -> Result<Vec<Complex64>> {
        if input.len() != self.len {
            return Err(DftVecError::InvalidVectorLength {
                expected: self.len,
                actual: input.len(),
            });
        }

        let len = self.len as f64;
        let mut output = Vec::with_capacity(self.len);

        for k in 0..self.len {
            let mut sum_re = 0.0f64;
            let mut sum_im = 0.0f64;

            for (n, x) in input.iter().enumerate() {
                let theta = -2.0 * PI * k as f64 * n as f64 / len;
                let (s, c) = theta.sin_cos();

                // (a + ib)(c + is) = (ac - bs) + i(as + bc)
                sum_re += x.re * c - x.im * s;
                sum_im += x.re * s + x.im * c;
            }

            output.push(Complex64::new(sum_re, sum_im));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleGenerator;
    use crate::VEC_LEN;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOL: f32 = 1e-4;

    fn c(re: f32, im: f32) -> Complex32 {
        Complex32::new(re, im)
    }

    fn assert_close(actual: &[Complex32], expected: &[Complex32], tol: f32) {
        assert_eq!(actual.len(), expected.len());
        for (k, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a.re - e.re).abs() <= tol && (a.im - e.im).abs() <= tol,
                "bin {}: got {:?}, expected {:?}",
                k,
                a,
                e
            );
        }
    }

    #[test]
    fn test_impulse_gives_flat_spectrum() {
        let dft = ReferenceDft::new(VEC_LEN);
        let mut input = vec![c(0.0, 0.0); VEC_LEN];
        input[0] = c(1.0, 0.0);

        let output = dft.transform(&input).unwrap();
        assert_close(&output, &vec![c(1.0, 0.0); VEC_LEN], 0.0);
    }

    #[test]
    fn test_dc_concentrates_in_bin_zero() {
        let dft = ReferenceDft::new(VEC_LEN);
        let input = vec![c(1.0, 0.0); VEC_LEN];

        let output = dft.transform(&input).unwrap();
        let mut expected = vec![c(0.0, 0.0); VEC_LEN];
        expected[0] = c(8.0, 0.0);
        assert_close(&output, &expected, 1e-6);
        assert_eq!(output[0].re, 8.0);
    }

    #[test]
    fn test_single_tone_lands_in_its_bin() {
        // x[n] = exp(2*pi*i*3n/8) -> 8 in bin 3
        let dft = ReferenceDft::new(VEC_LEN);
        let input: Vec<Complex32> = (0..VEC_LEN)
            .map(|n| {
                let phase = 2.0 * PI * 3.0 * n as f64 / VEC_LEN as f64;
                c(phase.cos() as f32, phase.sin() as f32)
            })
            .collect();

        let output = dft.transform(&input).unwrap();
        for (k, bin) in output.iter().enumerate() {
            let expected = if k == 3 { 8.0 } else { 0.0 };
            assert!((bin.re - expected).abs() < TOL, "bin {} re {}", k, bin.re);
            assert!(bin.im.abs() < TOL, "bin {} im {}", k, bin.im);
        }
    }

    #[test]
    fn test_linearity() {
        let dft = ReferenceDft::new(VEC_LEN);
        let generator = SampleGenerator::new(VEC_LEN, -5.0, 5.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let x = generator.generate(&mut rng);
            let y = generator.generate(&mut rng);
            let a = c(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = c(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

            let combined: Vec<Complex32> =
                x.iter().zip(&y).map(|(xn, yn)| a * xn + b * yn).collect();

            let lhs = dft.transform(&combined).unwrap();
            let fx = dft.transform(&x).unwrap();
            let fy = dft.transform(&y).unwrap();
            let rhs: Vec<Complex32> = fx.iter().zip(&fy).map(|(p, q)| a * p + b * q).collect();

            assert_close(&lhs, &rhs, 1e-3);
        }
    }

    #[test]
    fn test_parseval_energy() {
        let dft = ReferenceDft::new(VEC_LEN);
        let generator = SampleGenerator::new(VEC_LEN, -5.0, 5.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let input = generator.generate(&mut rng);
            let widened: Vec<Complex64> = input
                .iter()
                .map(|s| Complex64::new(s.re as f64, s.im as f64))
                .collect();
            let output = dft.transform_f64(&widened).unwrap();

            let energy_in: f64 = widened.iter().map(|s| s.norm_sqr()).sum();
            let energy_out: f64 = output.iter().map(|s| s.norm_sqr()).sum();

            let expected = VEC_LEN as f64 * energy_in;
            assert!(
                (energy_out - expected).abs() <= 1e-9 * expected.max(1.0),
                "energy out {} vs L * energy in {}",
                energy_out,
                expected
            );
        }
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let dft = ReferenceDft::new(VEC_LEN);
        let short = vec![c(1.0, 0.0); VEC_LEN - 1];
        let long = vec![c(1.0, 0.0); VEC_LEN + 1];

        match dft.transform(&short) {
            Err(DftVecError::InvalidVectorLength { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("expected length error, got {:?}", other),
        }
        assert!(dft.transform(&long).is_err());
        assert!(dft.transform(&[]).is_err());
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let dft = ReferenceDft::new(VEC_LEN);
        let mut input = vec![c(0.0, 0.0); VEC_LEN];
        input[2] = c(f32::NAN, 0.0);

        let output = dft.transform(&input).unwrap();
        assert!(output.iter().all(|s| s.re.is_nan() || s.im.is_nan()));
    }

    #[test]
    fn test_overflow_surfaces_as_infinity() {
        let dft = ReferenceDft::new(VEC_LEN);
        let input = vec![c(f32::MAX, 0.0); VEC_LEN];

        let output = dft.transform(&input).unwrap();
        assert_eq!(output[0].re, f32::INFINITY);
    }
}
