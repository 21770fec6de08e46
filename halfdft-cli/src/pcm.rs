//! 16-bit mono PCM WAV input and output.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::error::Error;
use std::io;
use std::path::Path;

/// Decoded samples plus the rate needed to write them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// Read a mono 16-bit integer WAV file.
///
/// Anything else (other bit depths, float samples, more than one channel)
/// is rejected with `InvalidData`.
pub fn read_pcm16(path: &Path) -> Result<Pcm, Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "expected 16-bit integer samples, found {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            ),
        )));
    }
    if spec.channels != 1 {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected a mono file, found {} channels", spec.channels),
        )));
    }
    let samples: Vec<i16> = reader.samples::<i16>().collect::<Result<_, _>>()?;
    log::info!(
        "read {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );
    Ok(Pcm {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Write samples as a mono 16-bit integer WAV file.
pub fn write_pcm16(path: &Path, pcm: &Pcm) -> Result<(), Box<dyn Error>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: pcm.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &s in &pcm.samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    log::info!("wrote {} samples to {}", pcm.samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_with(path: &Path, spec: WavSpec, frames: usize) {
        let mut writer = WavWriter::create(path, spec).unwrap();
        for i in 0..frames * spec.channels as usize {
            match spec.bits_per_sample {
                8 => writer.write_sample((i % 100) as i8).unwrap(),
                _ => writer.write_sample((i % 1000) as i16).unwrap(),
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mono.wav");
        let pcm = Pcm {
            samples: vec![0, 1, -1, i16::MAX, i16::MIN],
            sample_rate: 16000,
        };
        write_pcm16(&path, &pcm).unwrap();
        assert_eq!(read_pcm16(&path).unwrap(), pcm);
    }

    #[test]
    fn rejects_stereo() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        write_with(&path, spec, 10);
        let err = read_pcm16(&path).unwrap_err();
        assert!(err.to_string().contains("2 channels"));
    }

    #[test]
    fn rejects_8_bit() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("eight.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        write_with(&path, spec, 10);
        let err = read_pcm16(&path).unwrap_err();
        assert!(err.to_string().contains("8-bit"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_pcm16(&tmp.path().join("absent.wav")).is_err());
    }
}
