use rand::Rng;

use crate::dsp::{BiquadFilter, Frame, Lfo};
use crate::layers::CONTROL_INTERVAL;
use crate::noise::{PinkNoise, Seeder};

/*
Wind Through Trees
==================

Pink noise through a bandpass whose centre drifts between 1 kHz and 3 kHz
on a 12 second sine. The sweep is what turns static noise into gusts:

    centre = 2000 + 1000 · sin(2π t / 12)

    Hz
    3000 ┐    ╭──╮                ╭──╮
    2000 ┤───╯    ╲              ╱    ╲───
    1000 ┘          ╰────────────╯
         0s        6s         12s        18s

Each channel sits slightly off the shared centre (left 5-10% below, right
5-10% above, fixed per instance) so the gusts seem to move between the
trees instead of sitting in the middle of your head.
*/

const SWEEP_HZ: f32 = 1.0 / 12.0;
const CENTER_HZ: f32 = 2_000.0;
const SWEEP_DEPTH_HZ: f32 = 1_000.0;
const Q: f32 = 0.9;
const GAIN: f32 = 2.0;

pub struct Wind {
    noise_left: PinkNoise,
    noise_right: PinkNoise,
    left: BiquadFilter,
    right: BiquadFilter,
    sweep: Lfo,
    left_ratio: f32,
    right_ratio: f32,
}

impl Wind {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        let mut rng = seeder.rng();
        let left_ratio = 1.0 - rng.random_range(0.05..0.10);
        let right_ratio = 1.0 + rng.random_range(0.05..0.10);

        Self {
            noise_left: seeder.pink(),
            noise_right: seeder.pink(),
            left: BiquadFilter::bandpass(sample_rate, CENTER_HZ * left_ratio, Q),
            right: BiquadFilter::bandpass(sample_rate, CENTER_HZ * right_ratio, Q),
            sweep: Lfo::sine(SWEEP_HZ, sample_rate),
            left_ratio,
            right_ratio,
        }
    }

    /// Shared centre frequency right now.
    pub fn center(&self) -> f32 {
        CENTER_HZ + SWEEP_DEPTH_HZ * self.sweep.value()
    }

    pub fn channel_centers(&self) -> (f32, f32) {
        (self.left.cutoff(), self.right.cutoff())
    }

    #[inline]
    pub fn next(&mut self, frame: u64) -> Frame {
        if frame % CONTROL_INTERVAL == 0 {
            let center = self.center();
            self.left.set_cutoff(center * self.left_ratio, Q);
            self.right.set_cutoff(center * self.right_ratio, Q);
        }
        self.sweep.advance();

        let left = self.left.process(self.noise_left.next());
        let right = self.right.process(self.noise_right.next());
        Frame::new(left, right) * GAIN
    }
}
