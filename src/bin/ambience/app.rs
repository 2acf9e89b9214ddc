//! Ambience - player builder and audio device setup

use ambience_dsp::{runtime::RingSink, GeneratorType, DEFAULT_SAMPLE_RATE};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use super::player::Player;
use super::ui::UiApp;

/// Buffers of headroom between the generation thread and the device.
const RING_BUFFERS: usize = 4;
/// Every Nth frame is copied to the scope.
const SCOPE_DECIMATION: usize = 8;
const SCOPE_CAPACITY: usize = 8_192;

/// Main application builder
pub struct Ambience {
    generator: GeneratorType,
    volume: f32,
    buffer: usize,
    sample_rate: Option<u32>,
}

impl Ambience {
    pub fn new() -> Self {
        Self {
            generator: GeneratorType::Rain,
            volume: 0.5,
            buffer: 2_048,
            sample_rate: None,
        }
    }

    pub fn generator(mut self, generator: GeneratorType) -> Self {
        self.generator = generator;
        self
    }

    /// Starting volume, clamped to 0..=1 by the generator.
    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Samples per generated buffer. Rounded up to whole stereo frames.
    pub fn buffer(mut self, samples: usize) -> Self {
        self.buffer = samples;
        self
    }

    pub fn sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate = Some(hz);
        self
    }

    /// Open the default device, start generating, and hand over to the TUI.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let default_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let mut config: cpal::StreamConfig = default_config.into();
        if let Some(hz) = self.sample_rate {
            config.sample_rate = cpal::SampleRate(hz);
        }
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;
        if sample_rate != DEFAULT_SAMPLE_RATE {
            log::info!("device runs at {sample_rate} Hz");
        }

        let buffer = self.buffer.max(2).next_multiple_of(2);
        let (sink, pcm_rx) = RingSink::with_capacity(buffer * RING_BUFFERS);
        let (scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_CAPACITY);

        let player = Player::start(self.generator, sample_rate, self.volume, buffer, sink)
            .wrap_err("failed to start generator")?;

        let stream = device
            .build_output_stream(
                &config,
                output_callback(pcm_rx, scope_tx, channels),
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to open output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(player, scope_rx).run(&mut terminal);
        ratatui::restore();
        drop(stream);
        result
    }
}

impl Default for Ambience {
    fn default() -> Self {
        Self::new()
    }
}

/// Device callback: pops interleaved stereo PCM16 and spreads it over the
/// device's channels. Runs dry into silence rather than blocking.
fn output_callback(
    mut pcm_rx: Consumer<i16>,
    mut scope_tx: Producer<f32>,
    channels: usize,
) -> impl FnMut(&mut [f32], &cpal::OutputCallbackInfo) + Send + 'static {
    let scale = 1.0 / -(i16::MIN as f32);
    let mut frame_index = 0usize;

    move |data: &mut [f32], _| {
        for out in data.chunks_mut(channels) {
            // Only take whole frames so the channels never swap.
            let (left, right) = if pcm_rx.slots() >= 2 {
                let left = pcm_rx.pop().unwrap_or(0);
                let right = pcm_rx.pop().unwrap_or(0);
                (left as f32 * scale, right as f32 * scale)
            } else {
                (0.0, 0.0)
            };

            match out {
                [mono] => *mono = 0.5 * (left + right),
                [l, r, rest @ ..] => {
                    *l = left;
                    *r = right;
                    rest.fill(0.5 * (left + right));
                }
                [] => {}
            }

            if frame_index % SCOPE_DECIMATION == 0 {
                let _ = scope_tx.push(0.5 * (left + right));
            }
            frame_index = frame_index.wrapping_add(1);
        }
    }
}
