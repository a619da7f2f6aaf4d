use clap::Parser;
use dftvec_core::{
    GeneratorConfig, TestVectorGenerator, DEFAULT_EXPECTED_FILENAME, DEFAULT_INPUT_FILENAME,
    DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, N_VEC, VEC_LEN,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dftvec")]
#[command(about = "Generate IEEE-754 hex test vectors for an 8-point FFT")]
struct Cli {
    /// Number of test vectors to generate
    #[arg(short = 'n', long, default_value_t = N_VEC)]
    vectors: usize,

    /// Lower bound of the uniform input range
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_negative_numbers = true)]
    min: f32,

    /// Upper bound of the uniform input range
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, allow_negative_numbers = true)]
    max: f32,

    /// Seed for reproducible output (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Input vectors file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT_FILENAME)]
    input: PathBuf,

    /// Expected DFT output file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EXPECTED_FILENAME)]
    expected: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = generate_command(&cli) {
        log::error!("Generation failed: {}", e);
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn generate_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = GeneratorConfig {
        num_vectors: cli.vectors,
        min_value: cli.min,
        max_value: cli.max,
    };
    let generator = TestVectorGenerator::new(config)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    println!(
        "Generating {} vectors for {}-point FFT...",
        generator.config().num_vectors,
        VEC_LEN
    );

    let summary = generator.generate_files(&mut rng, &cli.input, &cli.expected)?;

    println!(
        "SUCCESS: Files generated ({}, {}), {} lines each",
        cli.input.display(),
        cli.expected.display(),
        summary.lines
    );
    Ok(())
}
