//! RIFF/WAVE 16-bit PCM encoder.
//!
//! Layout (little-endian):
//!
//! ```text
//! 0  "RIFF"   4  u32 file len - 8   8  "WAVE"
//! 12 "fmt "  16  u32 16            20  u16 1 (PCM)   22 u16 channels
//! 24 u32 sample rate   28 u32 byte rate   32 u16 block align   34 u16 16
//! 36 "data"  40  u32 data len      44  interleaved i16 samples
//! ```

use bytes::BufMut;
use genrelay_types::{AudioError, PcmBuffer, WaveContainer};

pub const HEADER_LEN: usize = 44;
const BYTES_PER_SAMPLE: usize = 2;
const BITS_PER_SAMPLE: u16 = 16;
const FORMAT_TAG_PCM: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;

/// Encode the first `frame_limit` frames of `buffer` as a WAVE file.
///
/// Fails with [`AudioError::OutOfRange`] when `frame_limit` exceeds the
/// buffer; no partial container is ever returned.
pub fn encode_wav(buffer: &PcmBuffer, frame_limit: usize) -> Result<WaveContainer, AudioError> {
    if frame_limit > buffer.frame_count() {
        return Err(AudioError::OutOfRange {
            requested: frame_limit,
            available: buffer.frame_count(),
        });
    }

    let channels = buffer.channel_count();
    let data_len = frame_limit
        .checked_mul(channels)
        .and_then(|n| n.checked_mul(BYTES_PER_SAMPLE))
        .ok_or_else(|| overflow("data length"))?;
    let total_len = data_len.checked_add(HEADER_LEN).ok_or_else(|| overflow("file length"))?;

    let riff_len = u32::try_from(total_len - 8).map_err(|_| overflow("riff length"))?;
    let data_chunk_len = u32::try_from(data_len).map_err(|_| overflow("data length"))?;
    let channel_count = u16::try_from(channels).map_err(|_| overflow("channel count"))?;
    let block_align = channel_count
        .checked_mul(BYTES_PER_SAMPLE as u16)
        .ok_or_else(|| overflow("block align"))?;
    let byte_rate = buffer
        .sample_rate()
        .checked_mul(u32::from(block_align))
        .ok_or_else(|| overflow("byte rate"))?;

    let mut out = Vec::with_capacity(total_len);
    out.put_slice(b"RIFF");
    out.put_u32_le(riff_len);
    out.put_slice(b"WAVE");
    out.put_slice(b"fmt ");
    out.put_u32_le(FMT_CHUNK_LEN);
    out.put_u16_le(FORMAT_TAG_PCM);
    out.put_u16_le(channel_count);
    out.put_u32_le(buffer.sample_rate());
    out.put_u32_le(byte_rate);
    out.put_u16_le(block_align);
    out.put_u16_le(BITS_PER_SAMPLE);
    out.put_slice(b"data");
    out.put_u32_le(data_chunk_len);

    let channel_data = buffer.channels();
    for frame in 0..frame_limit {
        for channel in channel_data {
            out.put_i16_le(quantize_sample(channel[frame]));
        }
    }

    debug_assert_eq!(out.len(), total_len);
    Ok(WaveContainer::from_encoded(out))
}

/// Encode every frame of `buffer`.
pub fn encode_wav_all(buffer: &PcmBuffer) -> Result<WaveContainer, AudioError> {
    encode_wav(buffer, buffer.frame_count())
}

/// Convert a float sample to signed 16-bit PCM.
///
/// Clamped to `[-1, 1]`, scaled by 32768 below -0.5 and by 32767 otherwise,
/// then truncated toward zero. NaN maps to silence.
pub fn quantize_sample(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    let s = f64::from(sample).clamp(-1.0, 1.0);
    let scaled = if 0.5 + s < 0.0 { s * 32768.0 } else { s * 32767.0 };
    scaled.trunc() as i16
}

fn overflow(field: &str) -> AudioError {
    AudioError::HeaderOverflow { field: field.to_string() }
}
