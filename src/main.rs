//! rowvec
//!
//! Reads every pixel of an image, divides R by G by B, scales the ratio and
//! gives it a random sign, one value per line in `vector.txt`.
//!
//! Run with:
//!   cargo run --release -- picture.png
//!
//! Any failure prints a message and exits with status 1; nothing is retried.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use log::debug;
use structopt::StructOpt;

use rowvec::report::write_json_file;
use rowvec::{convert_file, RowVecError, VectorConfig, VectorSummary};

#[derive(Debug, StructOpt)]
#[structopt(name = "rowvec", about = "Turn an image into a signed R/G/B row vector")]
struct Opt {
    /// Input image (PNG, JPEG, BMP or GIF)
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Vector file to write [default: vector.txt]
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Multiplier applied to R/G/B [default: 10]
    #[structopt(short = "s", long = "scale")]
    scale: Option<f64>,

    /// Seed for the sign flips
    #[structopt(long = "seed")]
    seed: Option<u64>,

    /// JSON config file; flags override its values
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,

    /// Print the RGB table once the vector is written
    #[structopt(short = "p", long = "print")]
    print: bool,

    /// Also write a JSON summary here
    #[structopt(long = "summary", parse(from_os_str))]
    summary: Option<PathBuf>,
}

impl Opt {
    fn vector_config(&self) -> Result<VectorConfig, RowVecError> {
        let mut config = match &self.config {
            Some(path) => VectorConfig::load_json(path)?,
            None => VectorConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn run(opt: &Opt) -> Result<(), RowVecError> {
    let config = opt.vector_config()?;
    debug!("config: {:?}", config);

    let (pixels, values) = convert_file(&opt.input, &config)?;

    if opt.print {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        pixels.write_table(&mut lock)?;
        lock.flush()?;
    }

    if let Some(path) = &opt.summary {
        write_json_file(path, &VectorSummary::from_values(&pixels, &values))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    if let Err(e) = run(&opt) {
        println!("An error occurred: {}", e);
        println!("Exiting...");
        process::exit(1);
    }
}
