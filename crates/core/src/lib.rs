//! Transcript resolution and text-to-speech for online videos.
//!
//! Two independent pipelines share one pattern: probe what a provider can
//! offer, pick the best capability, fall back in a fixed order.
//!
//! - `transcript` + `translation` resolve a timed-text track for a video into
//!   a single transcript string, translating when the track language differs
//!   from the requested one.
//! - `synthesis` turns text into an audio byte stream through one of three
//!   interchangeable backends with incompatible parameter surfaces.
//! - `pipeline` holds the use cases gluing the domain seams together.

pub mod pipeline;
pub mod shared;
pub mod synthesis;
pub mod transcript;
pub mod translation;
