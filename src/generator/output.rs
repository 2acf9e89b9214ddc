use crate::dsp::{to_pcm16, Frame};
use crate::generator::VolumeControl;

/// Something that renders one stereo frame at a time.
///
/// `frame` is the absolute index of the frame being rendered, counted from
/// zero when the generator was built.
pub(crate) trait FrameSource {
    fn next_frame(&mut self, frame: u64) -> Frame;
}

/// Shared PCM16 output stage: volume, interleaving and the odd-length carry.
pub(crate) struct StereoOutput {
    volume: VolumeControl,
    sample_rate: f32,
    frames: u64,
    pending_right: Option<i16>,
}

impl StereoOutput {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            volume: VolumeControl::default(),
            sample_rate,
            frames: 0,
            pending_right: None,
        }
    }

    pub fn volume(&self) -> &VolumeControl {
        &self.volume
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Fill `buffer` from `source`. Volume is read once for the whole call.
    pub fn render<S: FrameSource>(&mut self, source: &mut S, buffer: &mut [i16]) -> usize {
        let gain = self.volume.get();
        let mut slots = buffer.iter_mut();

        if let Some(right) = self.pending_right.take() {
            match slots.next() {
                Some(slot) => *slot = right,
                None => {
                    self.pending_right = Some(right);
                    return 0;
                }
            }
        }

        while let Some(left_slot) = slots.next() {
            let frame = source.next_frame(self.frames);
            self.frames += 1;

            *left_slot = to_pcm16(frame.left * gain);
            let right = to_pcm16(frame.right * gain);
            match slots.next() {
                Some(right_slot) => *right_slot = right,
                None => {
                    self.pending_right = Some(right);
                    break;
                }
            }
        }

        buffer.len()
    }
}
