//! Raw 16-bit PCM decoding.
//!
//! Speech generation returns base64 little-endian signed 16-bit PCM with the
//! format carried in the mime type (`audio/L16;codec=pcm;rate=24000`).

use base64::{engine::general_purpose, Engine as _};
use genrelay_types::{AudioError, PcmBuffer};

pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
pub const DEFAULT_CHANNELS: u16 = 1;

/// Sample format parsed from an inline-data mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self { sample_rate: DEFAULT_SAMPLE_RATE, channels: DEFAULT_CHANNELS }
    }
}

/// Parse `audio/L16` / `audio/pcm` mime types, returning `None` for anything else.
pub fn parse_pcm_mime(mime: &str) -> Option<PcmFormat> {
    let mut parts = mime.split(';').map(str::trim);
    let essence = parts.next()?.to_ascii_lowercase();
    if essence != "audio/l16" && essence != "audio/pcm" {
        return None;
    }

    let mut format = PcmFormat::default();
    for param in parts {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "rate" => {
                if let Ok(rate) = value.trim().parse::<u32>() {
                    format.sample_rate = rate;
                }
            },
            "channels" => {
                if let Ok(channels) = value.trim().parse::<u16>() {
                    format.channels = channels;
                }
            },
            _ => {},
        }
    }
    Some(format)
}

/// Deinterleave little-endian i16 samples into a float buffer (`i / 32768`).
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<PcmBuffer, AudioError> {
    if channels == 0 {
        return Err(AudioError::InvalidPcm { message: "channel count must be positive".to_string() });
    }
    let channels = usize::from(channels);
    let frame_width = channels * 2;
    if bytes.len() % frame_width != 0 {
        return Err(AudioError::InvalidPcm {
            message: format!(
                "{} bytes is not a whole number of {}-byte frames",
                bytes.len(),
                frame_width
            ),
        });
    }

    let frames = bytes.len() / frame_width;
    let mut channel_data = vec![Vec::with_capacity(frames); channels];
    for (index, pair) in bytes.chunks_exact(2).enumerate() {
        let sample = i16::from_le_bytes([pair[0], pair[1]]);
        channel_data[index % channels].push(f32::from(sample) / 32768.0);
    }

    PcmBuffer::new(sample_rate, channel_data)
}

/// Decode standard base64 and then [`decode_pcm16`].
pub fn decode_base64_pcm16(
    data: &str,
    sample_rate: u32,
    channels: u16,
) -> Result<PcmBuffer, AudioError> {
    let bytes = general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| AudioError::InvalidPcm { message: format!("invalid base64: {}", e) })?;
    decode_pcm16(&bytes, sample_rate, channels)
}
