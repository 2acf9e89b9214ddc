use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use thiserror::Error;

/// Why a sink could not take more audio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The consuming side has gone away.
    #[error("audio sink disconnected")]
    Disconnected,

    #[error("audio device error: {0}")]
    Device(String),
}

/// Destination for rendered PCM.
///
/// `write` may block until the device has room; it is the only blocking call
/// the generation loop makes.
pub trait PcmSink: Send {
    fn write(&mut self, samples: &[i16]) -> Result<(), SinkError>;

    /// Give the sink the session's stop flag so a blocking `write` can bail
    /// out early.
    fn bind_stop(&mut self, _stop: Arc<AtomicBool>) {}
}

impl<F> PcmSink for F
where
    F: FnMut(&[i16]) -> Result<(), SinkError> + Send,
{
    fn write(&mut self, samples: &[i16]) -> Result<(), SinkError> {
        self(samples)
    }
}

#[cfg(feature = "rtrb")]
pub use ring::RingSink;

#[cfg(feature = "rtrb")]
mod ring {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use rtrb::{Consumer, Producer, RingBuffer};

    use super::{PcmSink, SinkError};

    const POLL_INTERVAL: Duration = Duration::from_millis(2);

    /// Lock-free single-producer ring feeding an audio callback.
    ///
    /// `write` copies as much as fits, then sleeps in short steps until the
    /// callback drains more. It returns early when the session is stopping
    /// and fails once the consumer has been dropped.
    pub struct RingSink {
        producer: Producer<i16>,
        stop: Option<Arc<AtomicBool>>,
    }

    impl RingSink {
        pub fn new(producer: Producer<i16>) -> Self {
            Self {
                producer,
                stop: None,
            }
        }

        /// A fresh ring of `capacity` samples and its consumer.
        pub fn with_capacity(capacity: usize) -> (Self, Consumer<i16>) {
            let (producer, consumer) = RingBuffer::new(capacity);
            (Self::new(producer), consumer)
        }

        /// Free space in samples.
        pub fn slots(&self) -> usize {
            self.producer.slots()
        }

        fn stopping(&self) -> bool {
            self.stop
                .as_ref()
                .is_some_and(|stop| stop.load(Ordering::Relaxed))
        }
    }

    impl PcmSink for RingSink {
        fn write(&mut self, samples: &[i16]) -> Result<(), SinkError> {
            let mut remaining = samples;
            while !remaining.is_empty() {
                if self.stopping() {
                    return Ok(());
                }
                if self.producer.is_abandoned() {
                    return Err(SinkError::Disconnected);
                }

                let n = self.producer.slots().min(remaining.len());
                if n == 0 {
                    thread::sleep(POLL_INTERVAL);
                    continue;
                }

                let chunk = self
                    .producer
                    .write_chunk_uninit(n)
                    .map_err(|err| SinkError::Device(err.to_string()))?;
                let written = chunk.fill_from_iter(remaining[..n].iter().copied());
                remaining = &remaining[written..];
            }
            Ok(())
        }

        fn bind_stop(&mut self, stop: Arc<AtomicBool>) {
            self.stop = Some(stop);
        }
    }

}
