//! Player - owns the running session and swaps generators on request

use ambience_dsp::{
    runtime::{RingSink, Session},
    GeneratorType, VolumeControl,
};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};

pub struct Player {
    session: Option<Session<RingSink>>,
    kind: GeneratorType,
    volume: VolumeControl,
    sample_rate: f32,
    buffer: usize,
}

impl Player {
    pub fn start(
        kind: GeneratorType,
        sample_rate: f32,
        volume: f32,
        buffer: usize,
        sink: RingSink,
    ) -> EyreResult<Self> {
        let generator = kind.create(sample_rate)?;
        generator.set_volume(volume);
        let session = Session::start(generator, sink, buffer)?;
        Ok(Self {
            volume: session.volume(),
            session: Some(session),
            kind,
            sample_rate,
            buffer,
        })
    }

    pub fn kind(&self) -> GeneratorType {
        self.kind
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn volume(&self) -> f32 {
        self.volume.get()
    }

    /// Change the volume by `delta`, returning the new level.
    pub fn nudge_volume(&self, delta: f32) -> f32 {
        self.volume.nudge(delta)
    }

    /// False once the generation loop has ended on its own.
    pub fn is_running(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| !session.is_finished())
    }

    /// Stop the current generator and start a fresh one of `kind`, keeping
    /// the volume and the ring.
    pub fn switch(&mut self, kind: GeneratorType) -> EyreResult<()> {
        if kind == self.kind && self.is_running() {
            return Ok(());
        }
        let session = self
            .session
            .take()
            .ok_or_else(|| eyre!("no session to switch from"))?;
        let volume = self.volume.get();
        let (report, sink) = session.stop().wrap_err("failed to stop generator")?;
        log::info!(
            "switching {} -> {} after {} frames",
            self.kind,
            kind,
            report.frames_rendered
        );

        let generator = kind.create(self.sample_rate)?;
        generator.set_volume(volume);
        let session = Session::start(generator, sink, self.buffer)?;
        self.volume = session.volume();
        self.session = Some(session);
        self.kind = kind;
        Ok(())
    }
}
