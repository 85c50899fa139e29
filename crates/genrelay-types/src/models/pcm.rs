//! Decoded linear PCM audio.

use crate::error::AudioError;

/// Per-channel floating point samples in `[-1, 1]` at a fixed sample rate.
///
/// Every channel holds exactly `frame_count` samples; the constructor
/// rejects ragged input, a zero sample rate, or an empty channel list.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    sample_rate: u32,
    channel_data: Vec<Vec<f32>>,
    frame_count: usize,
}

impl PcmBuffer {
    pub fn new(sample_rate: u32, channel_data: Vec<Vec<f32>>) -> Result<Self, AudioError> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidBuffer {
                message: "sample rate must be positive".to_string(),
            });
        }

        let frame_count = match channel_data.first() {
            Some(first) => first.len(),
            None => {
                return Err(AudioError::InvalidBuffer {
                    message: "at least one channel is required".to_string(),
                })
            },
        };

        if let Some((index, channel)) =
            channel_data.iter().enumerate().find(|(_, c)| c.len() != frame_count)
        {
            return Err(AudioError::InvalidBuffer {
                message: format!(
                    "channel {} has {} samples, expected {}",
                    index,
                    channel.len(),
                    frame_count
                ),
            });
        }

        Ok(Self { sample_rate, channel_data, frame_count })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channel_data.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channel_data.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channel_data
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / f64::from(self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = PcmBuffer::new(0, vec![vec![0.0]]).unwrap_err();
        assert!(matches!(err, AudioError::InvalidBuffer { .. }));
    }

    #[test]
    fn test_rejects_no_channels() {
        assert!(PcmBuffer::new(24_000, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_ragged_channels() {
        let err = PcmBuffer::new(8_000, vec![vec![0.0, 0.1], vec![0.0]]).unwrap_err();
        assert_eq!(
            err,
            AudioError::InvalidBuffer { message: "channel 1 has 1 samples, expected 2".to_string() }
        );
    }

    #[test]
    fn test_accessors() {
        let buffer = PcmBuffer::new(4, vec![vec![0.0; 8], vec![0.5; 8]]).unwrap();
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frame_count(), 8);
        assert_eq!(buffer.channel(1), Some(&[0.5f32; 8][..]));
        assert!(buffer.channel(2).is_none());
        assert!((buffer.duration_secs() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_channels_are_allowed() {
        let buffer = PcmBuffer::new(44_100, vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(buffer.frame_count(), 0);
    }
}
