use clap::Parser;
use linecoder_rs::phy::{Emitter, EmitterConfig};
use linecoder_rs::transmission::{
    FixedSource, JsonSink, ProbeSink, RandomSource, Source, TextSink, WavSink,
};
use linecoder_rs::utils::consts::{DEFAULT_MESSAGE_LENGTH, DEFAULT_SAMPLE_RATE};
use linecoder_rs::utils::logging::init_logging;
use linecoder_rs::Information;
use std::path::PathBuf;
use tracing::{error, info};

/// Encode a bit stream into an NRZ, NRZT or RZ waveform
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with code_type / samples_per_bit / amplitude_max / amplitude_min
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Line code: NRZ, NRZT or RZ
    #[arg(long)]
    code: Option<String>,

    /// Samples per bit period
    #[arg(short = 'n', long)]
    samples_per_bit: Option<usize>,

    /// Level of a 1 bit
    #[arg(long, allow_negative_numbers = true)]
    amplitude_max: Option<f32>,

    /// Level of a 0 bit
    #[arg(long, allow_negative_numbers = true)]
    amplitude_min: Option<f32>,

    /// Message as a string of 0 and 1
    #[arg(short, long, conflicts_with = "random")]
    bits: Option<String>,

    /// Length of a random message
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for the random message
    #[arg(long)]
    seed: Option<u64>,

    /// Write the waveform as WAV
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Sample rate of the WAV file (Hz)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Write the waveform as text, one sample per line
    #[arg(long)]
    txt: Option<PathBuf>,

    /// Write the waveform and its parameters as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn emitter_config(&self) -> linecoder_rs::Result<EmitterConfig> {
        let mut config = match &self.config {
            Some(path) => EmitterConfig::from_json_file(path)?,
            None => EmitterConfig::default(),
        };
        if let Some(code) = &self.code {
            config.code_type = code.clone();
        }
        if let Some(samples_per_bit) = self.samples_per_bit {
            config.samples_per_bit = samples_per_bit;
        }
        if let Some(amplitude_max) = self.amplitude_max {
            config.amplitude_max = amplitude_max;
        }
        if let Some(amplitude_min) = self.amplitude_min {
            config.amplitude_min = amplitude_min;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> linecoder_rs::Result<()> {
    let config = cli.emitter_config()?;
    let mut emitter = Emitter::from_config(&config)?;
    let code_type = emitter.code_type();
    let levels = *emitter.levels();

    let probe = ProbeSink::<f32>::new();
    let handle = probe.handle();
    emitter.connect(Box::new(probe));
    if let Some(path) = &cli.wav {
        emitter.connect(Box::new(WavSink::new(path, cli.sample_rate)));
    }
    if let Some(path) = &cli.txt {
        emitter.connect(Box::new(TextSink::new(path)));
    }
    if let Some(path) = &cli.json {
        emitter.connect(Box::new(JsonSink::new(path, code_type, levels)));
    }

    let bit_count = match &cli.bits {
        Some(text) => {
            let mut source = FixedSource::new(Information::parse_bits(text)?);
            source.connect(Box::new(emitter));
            source.emit()?;
            source.message().len()
        }
        None => {
            let length = cli.random.unwrap_or(DEFAULT_MESSAGE_LENGTH);
            let mut source = RandomSource::new(length, cli.seed);
            source.connect(Box::new(emitter));
            source.emit()?;
            source.message().len()
        }
    };

    let samples = handle.last().unwrap_or_default();
    println!("code:    {}", code_type);
    println!("bits:    {}", bit_count);
    println!("samples: {}", samples.len());
    if let Some((lo, hi)) = samples.bounds() {
        println!("range:   [{}, {}]", lo, hi);
    }
    info!("Done");
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}
