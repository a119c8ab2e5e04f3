use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_to_txt(samples: &[f32], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = BufWriter::new(File::create(path)?);
    for &sample in samples {
        writeln!(file, "{:.4}", sample)?;
    }
    file.flush()
}

/// Write a mono 16-bit WAV, scaled so the loudest sample hits full range.
/// An all-zero signal is written as silence.
pub fn write_to_wav(
    signal: &[f32],
    sample_rate: u32,
    filename: &Path,
) -> Result<(), hound::Error> {
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec)?;

    let peak = signal
        .iter()
        .fold(0.0f32, |peak, &s| peak.max(s.abs()));
    let scale = if peak > 0.0 {
        i16::MAX as f32 / peak
    } else {
        0.0
    };
    for &sample in signal {
        writer.write_sample((sample * scale) as i16)?;
    }
    writer.finalize()
}

pub fn read_wav(filename: &Path) -> Result<Vec<f32>, hound::Error> {
    let reader = hound::WavReader::open(filename)?;
    let spec = reader.spec();

    match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect(),
        hound::SampleFormat::Int => {
            let amplitude = (1i64
                << (spec
                    .bits_per_sample
                    .saturating_sub(1))) as f32;
            reader
                .into_samples::<i32>()
                .map(|sample| sample.map(|value| value as f32 / amplitude))
                .collect()
        }
    }
}
