use crate::config::GeneratorConfig;
use crate::dft::ReferenceDft;
use crate::error::{DftVecError, Result};
use crate::sample::SampleGenerator;
use crate::writer::VectorWriter;
use crate::VEC_LEN;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub vectors: usize,
    /// Lines in each of the two files
    pub lines: usize,
}

/// Produces aligned (input, expected) test-vector streams
pub struct TestVectorGenerator {
    config: GeneratorConfig,
    samples: SampleGenerator,
    dft: ReferenceDft,
}

impl TestVectorGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let samples = SampleGenerator::new(VEC_LEN, config.min_value, config.max_value)?;

        Ok(Self {
            config,
            samples,
            dft: ReferenceDft::new(VEC_LEN),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate into two arbitrary streams
    ///
    /// Block `v` of the input stream and block `v` of the expected stream
    /// always describe the same test case. Write failures are reported as
    /// `DftVecError::Stream`; the streams may hold a partial run.
    pub fn generate_to<R, A, B>(
        &self,
        rng: &mut R,
        input: A,
        expected: B,
    ) -> Result<GenerationSummary>
    where
        R: Rng + ?Sized,
        A: Write,
        B: Write,
    {
        let (input_writer, expected_writer) = self.run(rng, input, expected, None)?;
        let lines = input_writer.lines_written();
        debug_assert_eq!(lines, expected_writer.lines_written());

        input_writer.finish()?;
        expected_writer.finish()?;

        Ok(GenerationSummary {
            vectors: self.config.num_vectors,
            lines,
        })
    }

    /// Create (truncating) both files and generate into them
    ///
    /// Errors carry the path of the file that failed. Both handles are closed
    /// before returning on every path.
    pub fn generate_files<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        input_path: &Path,
        expected_path: &Path,
    ) -> Result<GenerationSummary> {
        let input_file = File::create(input_path).map_err(|source| DftVecError::Io {
            path: input_path.to_path_buf(),
            source,
        })?;
        let expected_file = File::create(expected_path).map_err(|source| DftVecError::Io {
            path: expected_path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Generating {} vectors of {} points into {} and {}",
            self.config.num_vectors,
            VEC_LEN,
            input_path.display(),
            expected_path.display()
        );

        let (input_writer, expected_writer) = self.run(
            rng,
            BufWriter::new(input_file),
            BufWriter::new(expected_file),
            Some((input_path, expected_path)),
        )?;
        let lines = input_writer.lines_written();

        let input_file = input_writer
            .finish()
            .map_err(|e| e.with_path(input_path))?
            .into_inner()
            .map_err(|e| DftVecError::Io {
                path: input_path.to_path_buf(),
                source: e.into_error(),
            })?;
        input_file.sync_all().map_err(|source| DftVecError::Io {
            path: input_path.to_path_buf(),
            source,
        })?;

        let expected_file = expected_writer
            .finish()
            .map_err(|e| e.with_path(expected_path))?
            .into_inner()
            .map_err(|e| DftVecError::Io {
                path: expected_path.to_path_buf(),
                source: e.into_error(),
            })?;
        expected_file.sync_all().map_err(|source| DftVecError::Io {
            path: expected_path.to_path_buf(),
            source,
        })?;

        log::info!("Wrote {} lines to each file", lines);

        Ok(GenerationSummary {
            vectors: self.config.num_vectors,
            lines,
        })
    }

    fn run<R, A, B>(
        &self,
        rng: &mut R,
        input: A,
        expected: B,
        paths: Option<(&Path, &Path)>,
    ) -> Result<(VectorWriter<A>, VectorWriter<B>)>
    where
        R: Rng + ?Sized,
        A: Write,
        B: Write,
    {
        let tag = |err: DftVecError, path: Option<&Path>| match path {
            Some(path) => err.with_path(path),
            None => err,
        };

        let mut input_writer = VectorWriter::new(input);
        let mut expected_writer = VectorWriter::new(expected);

        for v in 0..self.config.num_vectors {
            let vector = self.samples.generate(rng);
            input_writer
                .write_vector(&vector)
                .map_err(|e| tag(e, paths.map(|p| p.0)))?;

            let spectrum = self.dft.transform(&vector)?;
            if spectrum.iter().any(|s| !s.re.is_finite() || !s.im.is_finite()) {
                log::warn!("Vector {} produced a non-finite expected value", v);
            }
            expected_writer
                .write_vector(&spectrum)
                .map_err(|e| tag(e, paths.map(|p| p.1)))?;

            log::debug!(
                "Vector {}: wrote {} input and {} expected samples",
                v,
                vector.len(),
                spectrum.len()
            );
        }

        Ok((input_writer, expected_writer))
    }
}
