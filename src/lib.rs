#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod decoder;
pub mod dimmer;
pub mod driver;
pub mod fade;
pub mod math8;
pub mod operation;
pub mod sleep;
pub mod state;
pub mod storage;

pub use color::{PRESETS, WhiteColor, get_brightness, set_brightness};
pub use command::Command;
pub use config::{DimmerConfig, DimmerTimings};
pub use decoder::{FrameFilter, FrameMailbox, FrameSource, IrFrame, Protocol};
pub use dimmer::Dimmer;
pub use driver::{IntensityDriver, PwmDriver};
pub use fade::{FADE_STEPS, FadeSchedule, fade};
pub use operation::Operation;
pub use sleep::{BlockingDelay, Sleep};
pub use state::OperatingPoint;
pub use storage::{ColorStore, NvStorage, RamStorage, StorageLayout};

pub use embassy_time::Duration;
