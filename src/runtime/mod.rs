//! Generation loop and PCM sinks.
//!
//! A [`Session`] owns one generator on a dedicated thread and feeds fixed
//! size buffers into a [`PcmSink`]. The sink's `write` is the only place
//! the loop may block. Control threads keep the session's
//! [`VolumeControl`](crate::VolumeControl) and change the level while it
//! runs.
//!
//! # Example
//!
//! ```no_run
//! use ambience_dsp::{create_generator, runtime::{RingSink, Session}, GeneratorType};
//!
//! let generator = create_generator(GeneratorType::Rain, 44_100.0)?;
//! let (sink, _consumer) = RingSink::with_capacity(8_192);
//! let session = Session::start(generator, sink, 1_024)?;
//! session.volume().set(0.3);
//! // hand `_consumer` to the audio callback ...
//! let (report, _sink) = session.stop()?;
//! println!("rendered {} frames", report.frames_rendered);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod session;
mod sink;

pub use session::{Session, SessionError, SessionReport, THREAD_NAME};
#[cfg(feature = "rtrb")]
pub use sink::RingSink;
pub use sink::{PcmSink, SinkError};
