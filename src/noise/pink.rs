use rand::{rngs::SmallRng, Rng};

/*
Pink Noise (Voss-McCartney)
===========================

Pink noise has equal energy per octave, so its power spectral density falls
by 3 dB every time the frequency doubles. That is the "natural" balance of
rain on a roof or wind in trees; white noise by comparison sounds thin and
hissy.

The Voss-McCartney trick sums N random "rows", each holding its last random
value. Row k is redrawn half as often as row k-1:

    counter:  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16
    row 0:    x     x     x     x     x     x     x     x       every 2
    row 1:       x           x           x           x          every 4
    row 2:             x                       x                every 8
    row 3:                         x                            every 16

The row to redraw is the number of trailing zero bits in an incrementing
counter, capped at N-1. Slowly changing rows contribute low frequencies,
fast rows contribute high ones, and the doubling periods give the -3 dB/oct
slope. The exact index rule matters: picking rows any other way breaks the
spectrum.

We keep a running sum instead of re-adding all rows every sample, and
rebuild it from the rows whenever the slowest row is touched so float error
cannot creep in over a long session.
*/

/// Number of Voss-McCartney rows.
pub const PINK_ROWS: usize = 16;

#[derive(Debug, Clone)]
pub struct PinkNoise {
    rng: SmallRng,
    rows: [f32; PINK_ROWS],
    running_sum: f32,
    counter: u32,
}

impl PinkNoise {
    pub fn new(mut rng: SmallRng) -> Self {
        let mut rows = [0.0; PINK_ROWS];
        for row in rows.iter_mut() {
            *row = rng.random_range(-1.0..1.0);
        }
        let running_sum = rows.iter().sum();

        Self {
            rng,
            rows,
            running_sum,
            counter: 0,
        }
    }

    /// Next sample, in [-1, 1].
    #[inline]
    pub fn next(&mut self) -> f32 {
        self.counter = self.counter.wrapping_add(1);
        let row = (self.counter.trailing_zeros() as usize).min(PINK_ROWS - 1);

        let value = self.rng.random_range(-1.0..1.0);
        self.running_sum -= self.rows[row];
        self.rows[row] = value;
        self.running_sum += value;

        if row == PINK_ROWS - 1 {
            self.running_sum = self.rows.iter().sum();
        }

        self.running_sum / PINK_ROWS as f32
    }

    pub fn rows(&self) -> &[f32; PINK_ROWS] {
        &self.rows
    }

    pub fn running_sum(&self) -> f32 {
        self.running_sum
    }
}
