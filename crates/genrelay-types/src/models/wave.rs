/// An encoded RIFF/WAVE 16-bit PCM file.
///
/// Built once by the encoder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveContainer {
    bytes: Vec<u8>,
}

impl WaveContainer {
    pub const MIME_TYPE: &'static str = "audio/wav";

    /// Wrap bytes produced by the encoder.
    pub fn from_encoded(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }
}

impl AsRef<[u8]> for WaveContainer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
