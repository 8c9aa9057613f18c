#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::WhiteColor;
use crate::command::Command;
use crate::config::DimmerConfig;
use crate::decoder::{FrameSource, IrFrame};
use crate::driver::IntensityDriver;
use crate::fade::fade;
use crate::operation::Operation;
use crate::sleep::Sleep;
use crate::state::OperatingPoint;
use crate::storage::{ColorStore, NvStorage};

/// Dimmer - the command processor
///
/// Owns the operating point together with everything it drives. Every call
/// runs to completion: fades and the store flash block the caller.
pub struct Dimmer<D: IntensityDriver, S: NvStorage, Z: Sleep> {
    // External dependencies and configuration
    driver: D,
    store: ColorStore<S>,
    sleeper: Z,
    config: DimmerConfig,

    // Internal state
    state: OperatingPoint,
}

impl<D: IntensityDriver, S: NvStorage, Z: Sleep> Dimmer<D, S, Z> {
    /// Power-on sequence
    ///
    /// Restores the persisted color and fades the output in from off.
    pub fn start(driver: D, storage: S, sleeper: Z, config: DimmerConfig) -> Self {
        let mut store = ColorStore::new(storage, config.storage);
        let state = OperatingPoint::restored(store.load());
        let white = state.white;
        #[cfg(feature = "esp32-log")]
        println!("[Dimmer.start] restored {:?}", state);
        let mut dimmer = Self {
            driver,
            store,
            sleeper,
            config,
            state,
        };
        dimmer.fade(WhiteColor::OFF, white);
        dimmer
    }

    /// Run one control loop iteration
    ///
    /// Polls the source once. Frames that arrived while a fade or the store
    /// flash was blocking the loop are dropped.
    pub fn poll<F: FrameSource + ?Sized>(&mut self, source: &mut F) -> Option<Command> {
        let frame = source.poll()?;
        let (command, operation) = self.dispatch(&frame)?;
        if operation.is_blocking() {
            source.discard_pending();
        }
        Some(command)
    }

    /// Run the control loop forever
    pub fn run<F: FrameSource>(mut self, mut source: F) -> ! {
        loop {
            self.poll(&mut source);
        }
    }

    /// Filter a decoded frame and execute the resulting command
    pub fn process(&mut self, frame: &IrFrame) -> Option<Command> {
        self.dispatch(frame).map(|(command, _)| command)
    }

    fn dispatch(&mut self, frame: &IrFrame) -> Option<(Command, Operation)> {
        match self.config.filter.check(frame) {
            Ok(command) => Some((command, self.handle(command))),
            Err(_reason) => {
                #[cfg(feature = "esp32-log")]
                println!("[Dimmer.process] dropped {:?}: {:?}", frame, _reason);
                None
            }
        }
    }

    /// Execute a raw command code, ignoring unknown codes
    pub fn handle_code(&mut self, code: u16) -> Option<Command> {
        let command = Command::from_code(code)?;
        self.handle(command);
        Some(command)
    }

    /// Execute a command
    pub fn handle(&mut self, command: Command) -> Operation {
        let store = &mut self.store;
        let operation = self.state.transition(
            command,
            self.config.step,
            self.config.night_level,
            || store.load(),
        );
        #[cfg(feature = "esp32-log")]
        println!(
            "[Dimmer.handle] {} -> {:?}",
            command.as_str(),
            operation.final_color()
        );
        self.execute(operation);
        operation
    }

    fn execute(&mut self, operation: Operation) {
        match operation {
            Operation::Fade { from, to } => self.fade(from, to),
            Operation::Apply(color) => self.driver.apply(color),
            Operation::StoreAndFlash(color) => {
                self.store.save(color);
                self.driver.apply(WhiteColor::OFF);
                self.sleeper.sleep(self.config.timings.flash);
                self.driver.apply(color);
            }
        }
    }

    fn fade(&mut self, from: WhiteColor, to: WhiteColor) {
        let duration = self.config.timings.fade;
        fade(&mut self.driver, &mut self.sleeper, from, to, duration);
    }

    /// Get the current operating point
    pub const fn state(&self) -> &OperatingPoint {
        &self.state
    }

    pub const fn config(&self) -> &DimmerConfig {
        &self.config
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    /// Get a reference to the persistence store
    pub const fn store(&self) -> &ColorStore<S> {
        &self.store
    }

    /// Tear down the dimmer, returning its hardware
    pub fn into_parts(self) -> (D, S, Z) {
        (self.driver, self.store.into_inner(), self.sleeper)
    }
}
