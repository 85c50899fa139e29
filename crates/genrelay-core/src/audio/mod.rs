//! Audio codec: raw PCM decoding and WAVE container encoding.

pub mod pcm;
pub mod wav;

pub use pcm::{decode_base64_pcm16, decode_pcm16, parse_pcm_mime, PcmFormat};
pub use wav::{encode_wav, encode_wav_all, quantize_sample};
