//! Persisted color record
//!
//! The last stored color survives power loss as two raw bytes in
//! non-volatile storage. Bytes are written cold first, then warm; losing
//! power in between leaves a mismatched pair, which is loaded as-is.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::WhiteColor;

/// Value read back from storage that was never written
pub const ERASED_BYTE: u8 = 0xFF;

/// Byte-addressed non-volatile storage
pub trait NvStorage {
    /// Read the byte at `addr`
    fn read(&mut self, addr: u16) -> u8;

    /// Write the byte at `addr`
    fn write(&mut self, addr: u16, value: u8);
}

impl<S: NvStorage + ?Sized> NvStorage for &mut S {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Addresses of the persisted channel bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageLayout {
    pub cold_addr: u16,
    pub warm_addr: u16,
}

impl StorageLayout {
    pub const DEFAULT: Self = Self {
        cold_addr: 0,
        warm_addr: 1,
    };
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Persistence store for the operating color
#[derive(Debug)]
pub struct ColorStore<S: NvStorage> {
    storage: S,
    layout: StorageLayout,
}

impl<S: NvStorage> ColorStore<S> {
    pub const fn new(storage: S, layout: StorageLayout) -> Self {
        Self { storage, layout }
    }

    /// Read the persisted color
    ///
    /// Bytes are not validated; erased storage yields `(255, 255)`.
    pub fn load(&mut self) -> WhiteColor {
        let color = WhiteColor::new(
            self.storage.read(self.layout.cold_addr),
            self.storage.read(self.layout.warm_addr),
        );
        #[cfg(feature = "esp32-log")]
        println!("[ColorStore.load] {:?}", color);
        color
    }

    /// Persist a color
    ///
    /// Each byte is only written when it differs from the stored value.
    pub fn save(&mut self, color: WhiteColor) {
        #[cfg(feature = "esp32-log")]
        println!("[ColorStore.save] {:?}", color);
        self.update(self.layout.cold_addr, color.cold);
        self.update(self.layout.warm_addr, color.warm);
    }

    fn update(&mut self, addr: u16, value: u8) {
        if self.storage.read(addr) != value {
            self.storage.write(addr, value);
        }
    }

    pub const fn layout(&self) -> StorageLayout {
        self.layout
    }

    /// Get a reference to the underlying storage
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a mutable reference to the underlying storage
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// In-memory storage behaving like erased EEPROM
///
/// Unwritten and out-of-range bytes read as [`ERASED_BYTE`]; writes outside
/// the buffer are dropped.
#[derive(Debug, Clone)]
pub struct RamStorage<const N: usize> {
    bytes: [u8; N],
    writes: usize,
}

impl<const N: usize> RamStorage<N> {
    pub const fn new() -> Self {
        Self {
            bytes: [ERASED_BYTE; N],
            writes: 0,
        }
    }

    /// Create storage with preset contents
    pub const fn with_contents(bytes: [u8; N]) -> Self {
        Self { bytes, writes: 0 }
    }

    /// Number of byte writes performed so far
    pub const fn writes(&self) -> usize {
        self.writes
    }

    pub const fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> Default for RamStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NvStorage for RamStorage<N> {
    fn read(&mut self, addr: u16) -> u8 {
        self.bytes
            .get(usize::from(addr))
            .copied()
            .unwrap_or(ERASED_BYTE)
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(byte) = self.bytes.get_mut(usize::from(addr)) {
            *byte = value;
            self.writes += 1;
        }
    }
}
