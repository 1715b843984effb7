//! Wire-order pixel framebuffer with an optional second buffer.
//!
//! Pixel bytes are stored in the order the LED string expects on the wire.
//! Callers address pixels in canonical RGB; the [`ChannelOrder`] translates
//! at write time, so the transmitter can serialize the buffer verbatim.

use alloc::boxed::Box;
use alloc::vec::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

/// Error returned when buffer or store memory cannot be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

/// Byte offsets of the red, green and blue channels within a 3-byte pixel
/// slot.
///
/// This is a wiring property of the physical LED string, fixed at
/// construction time. The offsets are always a permutation of {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    r: u8,
    g: u8,
    b: u8,
}

impl ChannelOrder {
    pub const RGB: Self = Self { r: 0, g: 1, b: 2 };
    pub const RBG: Self = Self { r: 0, g: 2, b: 1 };
    pub const GRB: Self = Self { r: 1, g: 0, b: 2 };
    pub const GBR: Self = Self { r: 2, g: 0, b: 1 };
    pub const BRG: Self = Self { r: 1, g: 2, b: 0 };
    pub const BGR: Self = Self { r: 2, g: 1, b: 0 };

    /// Build an order from explicit channel offsets.
    ///
    /// Returns `None` unless the offsets are a permutation of {0, 1, 2}.
    pub const fn new(r: u8, g: u8, b: u8) -> Option<Self> {
        if r > 2 || g > 2 || b > 2 {
            return None;
        }
        if r == g || g == b || r == b {
            return None;
        }
        Some(Self { r, g, b })
    }

    /// The 3-byte wire image of a color under this order.
    pub const fn wire_bytes(self, color: Rgb) -> [u8; 3] {
        let mut slot = [0; 3];
        slot[self.r as usize] = color.r;
        slot[self.g as usize] = color.g;
        slot[self.b as usize] = color.b;
        slot
    }

    /// Store a color into one 3-byte pixel slot.
    pub(crate) fn store(self, slot: &mut [u8], color: Rgb) {
        slot[self.r as usize] = color.r;
        slot[self.g as usize] = color.g;
        slot[self.b as usize] = color.b;
    }

    /// Load a color back from one 3-byte pixel slot.
    pub(crate) fn load(self, slot: &[u8]) -> Rgb {
        Rgb {
            r: slot[self.r as usize],
            g: slot[self.g as usize],
            b: slot[self.b as usize],
        }
    }
}

/// Which pixel array a whole-buffer operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The live pixel array.
    Primary,
    /// The second buffer, when allocated.
    Store,
}

/// Owned pixel framebuffer.
///
/// Holds `3 * pixel_count` bytes of wire-order color data, all pixels off
/// after creation or resize. Out-of-range pixel writes are dropped and
/// out-of-range reads return black; a buffer that failed to allocate is an
/// ordinary empty buffer.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Box<[u8]>,
    store: Option<Box<[u8]>>,
    order: ChannelOrder,
}

impl PixelBuffer {
    /// Create a zero-filled buffer for `pixel_count` pixels.
    ///
    /// Falls back to a zero-length buffer when memory cannot be obtained.
    pub fn new(pixel_count: usize, order: ChannelOrder) -> Self {
        let mut buffer = Self {
            data: Box::default(),
            store: None,
            order,
        };
        let _ = buffer.resize(pixel_count);
        buffer
    }

    /// Resize to `pixel_count` pixels, dropping all previous contents.
    ///
    /// The old allocation is released first and the new one is fully
    /// zeroed. The store is released as well; its length could no longer
    /// match. On allocation failure the buffer is left empty and the error
    /// is returned.
    pub fn resize(&mut self, pixel_count: usize) -> Result<(), AllocError> {
        self.data = Box::default();
        self.store = None;
        let byte_len = pixel_count.saturating_mul(3);
        match try_zeroed(byte_len) {
            Ok(data) => {
                self.data = data;
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[PixelBuffer.resize] cannot allocate {} bytes", byte_len);
                Err(err)
            }
        }
    }

    /// Number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 3
    }

    /// Number of color bytes in the buffer.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The wiring order this buffer was built for.
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Raw pixel bytes in wire order, ready for transmission.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Set one pixel's color.
    ///
    /// Out-of-range indices are silently dropped.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index < self.pixel_count() {
            self.order.store(&mut self.data[index * 3..index * 3 + 3], color);
        }
    }

    /// Set one pixel from a packed `R<<16 | G<<8 | B` value.
    ///
    /// The packed form is wiring-independent; the channel order is applied
    /// when the bytes are stored, so callers can reason in canonical RGB
    /// no matter how the string is wired.
    pub fn set_pixel_packed(&mut self, index: usize, color: u32) {
        self.set_pixel(index, rgb_from_u32(color));
    }

    /// Read one pixel back. Out-of-range indices read as black.
    pub fn pixel(&self, index: usize) -> Rgb {
        if index < self.pixel_count() {
            self.order.load(&self.data[index * 3..index * 3 + 3])
        } else {
            Rgb { r: 0, g: 0, b: 0 }
        }
    }

    /// Read one pixel as a packed `R<<16 | G<<8 | B` value, 0 if out of
    /// range.
    pub fn pixel_packed(&self, index: usize) -> u32 {
        rgb_to_u32(self.pixel(index))
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Allocate the store, releasing any prior one first.
    ///
    /// On failure the store stays absent and store operations no-op until
    /// the allocation is retried.
    pub fn allocate_store(&mut self) -> Result<(), AllocError> {
        self.store = None;
        match try_zeroed(self.data.len()) {
            Ok(store) => {
                self.store = Some(store);
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[PixelBuffer.allocate_store] cannot allocate {} bytes",
                    self.data.len()
                );
                Err(err)
            }
        }
    }

    /// Release the store.
    pub fn free_store(&mut self) {
        self.store = None;
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Copy the live pixels into the store. No-op without a store.
    pub fn copy_to_store(&mut self) {
        if let Some(store) = &mut self.store {
            store.copy_from_slice(&self.data);
        }
    }

    /// Copy the store back over the live pixels. No-op without a store.
    pub fn copy_from_store(&mut self) {
        if let Some(store) = &self.store {
            self.data.copy_from_slice(store);
        }
    }

    /// Exchange the live pixels and the store, byte by byte.
    ///
    /// Runs in place with one byte of scratch; no third buffer is
    /// allocated. No-op without a store.
    pub fn swap_store(&mut self) {
        if let Some(store) = &mut self.store {
            for (a, b) in self.data.iter_mut().zip(store.iter_mut()) {
                core::mem::swap(a, b);
            }
        }
    }

    /// Set every pixel to the same color.
    pub fn set_base_color(&mut self, target: Target, color: Rgb) {
        let order = self.order;
        let Some(bytes) = self.target_bytes(target) else {
            return;
        };
        for slot in bytes.chunks_exact_mut(3) {
            order.store(slot, color);
        }
    }

    /// Shift every pixel by a per-channel delta.
    ///
    /// Additions wrap modulo 256 per channel; there is no saturation.
    pub fn delta_color(&mut self, target: Target, dr: i16, dg: i16, db: i16) {
        let order = self.order;
        let Some(bytes) = self.target_bytes(target) else {
            return;
        };
        for slot in bytes.chunks_exact_mut(3) {
            delta_slot(order, slot, dr, dg, db);
        }
    }

    /// Shift one pixel by a per-channel delta, wrapping like
    /// [`delta_color`](Self::delta_color). Out-of-range indices are
    /// dropped.
    pub fn delta_pixel(&mut self, index: usize, dr: i16, dg: i16, db: i16) {
        if index < self.pixel_count() {
            delta_slot(self.order, &mut self.data[index * 3..index * 3 + 3], dr, dg, db);
        }
    }

    /// Scale every pixel by per-channel factors, saturating at 255.
    pub fn multiply_color(&mut self, target: Target, fr: f32, fg: f32, fb: f32) {
        let order = self.order;
        let Some(bytes) = self.target_bytes(target) else {
            return;
        };
        for slot in bytes.chunks_exact_mut(3) {
            multiply_slot(order, slot, fr, fg, fb);
        }
    }

    /// Scale one pixel, saturating like
    /// [`multiply_color`](Self::multiply_color). Out-of-range indices are
    /// dropped.
    pub fn multiply_pixel(&mut self, index: usize, fr: f32, fg: f32, fb: f32) {
        if index < self.pixel_count() {
            multiply_slot(self.order, &mut self.data[index * 3..index * 3 + 3], fr, fg, fb);
        }
    }

    fn target_bytes(&mut self, target: Target) -> Option<&mut [u8]> {
        match target {
            Target::Primary => Some(&mut self.data),
            Target::Store => self.store.as_deref_mut(),
        }
    }
}

/// Allocate a zeroed byte buffer without aborting on exhaustion.
fn try_zeroed(len: usize) -> Result<Box<[u8]>, AllocError> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(len).map_err(|_| AllocError)?;
    bytes.resize(len, 0);
    Ok(bytes.into_boxed_slice())
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn delta_slot(order: ChannelOrder, slot: &mut [u8], dr: i16, dg: i16, db: i16) {
    let pixel = order.load(slot);
    order.store(
        slot,
        Rgb {
            r: pixel.r.wrapping_add(dr as u8),
            g: pixel.g.wrapping_add(dg as u8),
            b: pixel.b.wrapping_add(db as u8),
        },
    );
}

fn multiply_slot(order: ChannelOrder, slot: &mut [u8], fr: f32, fg: f32, fb: f32) {
    let pixel = order.load(slot);
    order.store(
        slot,
        Rgb {
            r: scale_channel(pixel.r, fr),
            g: scale_channel(pixel.g, fg),
            b: scale_channel(pixel.b, fb),
        },
    );
}

/// Scale one channel by a float factor, clamped to 0..=255.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn scale_channel(value: u8, factor: f32) -> u8 {
    let scaled = f32::from(value) * factor;
    if scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        255
    } else {
        scaled as u8
    }
}
