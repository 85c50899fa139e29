//! Speech helpers: pull inline PCM audio out of a generation result and wrap
//! it in a WAVE container.

use crate::error::ClientError;
use genrelay_core::audio::{decode_base64_pcm16, encode_wav_all, parse_pcm_mime, PcmFormat};
use genrelay_types::{GenerationResult, WaveContainer};
use serde_json::Value;

/// Base64 PCM payload found in a candidate part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAudio<'a> {
    pub data: &'a str,
    pub format: PcmFormat,
}

/// First `inlineData` part across all candidates whose mime type is raw PCM.
pub fn find_inline_audio(result: &GenerationResult) -> Option<InlineAudio<'_>> {
    let candidates = result.candidates.as_ref()?.as_array()?;
    candidates
        .iter()
        .filter_map(|candidate| candidate.pointer("/content/parts")?.as_array())
        .flatten()
        .find_map(inline_audio_part)
}

fn inline_audio_part(part: &Value) -> Option<InlineAudio<'_>> {
    let inline = part.get("inlineData").or_else(|| part.get("inline_data"))?;
    let mime = inline
        .get("mimeType")
        .or_else(|| inline.get("mime_type"))
        .and_then(Value::as_str)?;
    let format = parse_pcm_mime(mime)?;
    let data = inline.get("data").and_then(Value::as_str)?;
    Some(InlineAudio { data, format })
}

/// Encode the speech audio of `result` as a WAVE file covering every frame.
pub fn synthesize_speech(result: &GenerationResult) -> Result<WaveContainer, ClientError> {
    let audio = find_inline_audio(result).ok_or(ClientError::NoAudio)?;
    let buffer =
        decode_base64_pcm16(audio.data, audio.format.sample_rate, audio.format.channels)?;
    tracing::debug!(
        "Decoded {} frames of speech at {} Hz",
        buffer.frame_count(),
        buffer.sample_rate()
    );
    Ok(encode_wav_all(&buffer)?)
}
