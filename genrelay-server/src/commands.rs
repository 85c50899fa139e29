use anyhow::{Context, Result};
use std::path::Path;

use genrelay_core::audio::{decode_pcm16, encode_wav};

/// `encode-wav`: read raw s16le PCM, wrap it in a WAVE container and write it.
///
/// Returns the number of bytes written.
pub fn handle_encode_wav(
    input: &Path,
    output: &Path,
    sample_rate: u32,
    channels: u16,
    frames: Option<usize>,
) -> Result<usize> {
    let raw = std::fs::read(input)
        .with_context(|| format!("Failed to read PCM input {}", input.display()))?;
    let buffer = decode_pcm16(&raw, sample_rate, channels)?;
    let frame_limit = frames.unwrap_or_else(|| buffer.frame_count());
    let wave = encode_wav(&buffer, frame_limit)?;

    std::fs::write(output, wave.as_bytes())
        .with_context(|| format!("Failed to write WAVE output {}", output.display()))?;

    tracing::info!(
        "Encoded {} of {} frames ({} Hz, {} ch) to {}",
        frame_limit,
        buffer.frame_count(),
        sample_rate,
        channels,
        output.display()
    );
    Ok(wave.len())
}
