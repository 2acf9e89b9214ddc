use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use thiserror::Error;

use crate::generator::{AudioGenerator, VolumeControl};
use crate::runtime::{PcmSink, SinkError};
use crate::GeneratorError;

/// Name given to the generation thread.
pub const THREAD_NAME: &str = "ambience-gen";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("failed to spawn the generation thread")]
    Spawn(#[source] std::io::Error),

    #[error("the generation thread panicked")]
    Panicked,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub frames_rendered: u64,
    pub buffers_written: u64,
    /// Set when the loop ended because the sink failed.
    pub sink_error: Option<SinkError>,
}

/// One playback session: a generator running on its own thread.
///
/// The generator is moved onto the thread and dropped there when the loop
/// ends, so it can never be reused by another session.
pub struct Session<S: PcmSink + 'static> {
    stop: Arc<AtomicBool>,
    volume: VolumeControl,
    handle: Option<JoinHandle<(SessionReport, S)>>,
}

impl<S: PcmSink + 'static> Session<S> {
    /// Start rendering `buffer_len`-sample buffers into `sink`.
    pub fn start(
        mut generator: Box<dyn AudioGenerator>,
        mut sink: S,
        buffer_len: usize,
    ) -> Result<Self, SessionError> {
        if buffer_len == 0 {
            return Err(GeneratorError::InvalidBufferLength.into());
        }

        let stop = Arc::new(AtomicBool::new(false));
        let volume = generator.volume_control();
        sink.bind_stop(stop.clone());

        info!(
            "starting session: {} Hz, {} samples per buffer, volume {:.2}",
            generator.sample_rate(),
            buffer_len,
            volume.get()
        );

        let flag = stop.clone();
        let handle = thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || {
                let mut buffer = vec![0i16; buffer_len];
                let mut buffers_written = 0u64;
                let mut sink_error = None;

                while !flag.load(Ordering::Relaxed) {
                    generator.generate(&mut buffer);
                    if let Err(err) = sink.write(&buffer) {
                        warn!("sink rejected audio, ending session: {err}");
                        sink_error = Some(err);
                        break;
                    }
                    buffers_written += 1;
                }

                let report = SessionReport {
                    frames_rendered: generator.frames_rendered(),
                    buffers_written,
                    sink_error,
                };
                debug!("generation loop finished: {report:?}");
                (report, sink)
            })
            .map_err(SessionError::Spawn)?;

        Ok(Self {
            stop,
            volume,
            handle: Some(handle),
        })
    }

    /// Volume handle for control threads.
    pub fn volume(&self) -> VolumeControl {
        self.volume.clone()
    }

    /// True once the loop has exited (stopped or sink failure).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Stop the loop, wait for it, and hand back the sink.
    pub fn stop(mut self) -> Result<(SessionReport, S), SessionError> {
        self.shutdown().ok_or(SessionError::Panicked)
    }

    fn shutdown(&mut self) -> Option<(SessionReport, S)> {
        self.stop.store(true, Ordering::Relaxed);
        let handle = self.handle.take()?;
        match handle.join() {
            Ok((report, sink)) => {
                info!(
                    "session stopped after {} frames ({} buffers)",
                    report.frames_rendered, report.buffers_written
                );
                Some((report, sink))
            }
            Err(_) => {
                warn!("generation thread panicked");
                None
            }
        }
    }
}

impl<S: PcmSink + 'static> Drop for Session<S> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.shutdown();
        }
    }
}
