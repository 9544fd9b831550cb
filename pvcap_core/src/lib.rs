#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core logic for configuring and running PV capacitance sweep tests
//! (transport-agnostic).
//!
//! All I/O goes through `pvcap_traits::Transport` and
//! `pvcap_traits::PortDirectory`; the surrounding UI forwards raw user input
//! here and renders whatever comes back.
//!
//! ## Architecture
//!
//! - **Range validation**: `"lower:upper"` expression parsing (`range` module)
//! - **Quantization**: snap/clamp of user-entered parameters (`quantize` module)
//! - **Defaults**: per-device-type sweep parameters (`device` module)
//! - **Statistics**: step/sample/duration derivation (`stats` module)
//! - **Engine**: configuration state machine over one `SweepConfig` (`engine` module)
//! - **Session**: streaming measurement session lifecycle (`session` module)
//!
//! Everything runs on one control thread; the only channel is the one-way
//! notification sink to the UI, which never blocks the engine.

pub mod config;
pub mod curve;
pub mod device;
pub mod engine;
pub mod error;
pub mod mocks;
pub mod notify;
pub mod ports;
pub mod quantize;
pub mod range;
pub mod session;
pub mod stats;

pub use config::SweepConfig;
pub use device::{DeviceDefaults, DeviceType};
pub use engine::{ConfigEngine, ConfigEvent, SweepField};
pub use notify::{Notifier, notification_channel};
pub use range::SamplingRange;
pub use session::{START_TOKEN, SessionState, StreamEvent, StreamSession};
pub use stats::SweepStats;

pub use pvcap_traits::MeasurementSample;
