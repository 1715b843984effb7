//! Cycle-counted single-wire transmitter for WS281x LED strings.
//!
//! Serializes a pixel buffer onto one GPIO pin using the self-clocked
//! WS2811/WS2812 protocol: every bit is a fixed-period pulse whose high
//! time selects 0 or 1, most significant bit first, bytes already in wire
//! order. The whole frame runs inside one critical section; an interrupt
//! landing mid-frame corrupts the remainder of the bitstream, and the
//! string cannot resynchronize until the next latch.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::color::Rgb;
use crate::framebuffer::PixelBuffer;

/// Per-bit pulse windows and the post-frame latch interval.
///
/// The high time selects the bit value; the period is the same for ones
/// and zeros so the datastream keeps a constant bit rate. Values come from
/// the driver chip datasheets, which allow a little wiggle room each way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    /// High time encoding a 0 bit, nanoseconds.
    pub t0h_ns: u32,
    /// High time encoding a 1 bit, nanoseconds.
    pub t1h_ns: u32,
    /// Total bit period, nanoseconds. Must exceed both high times.
    pub period_ns: u32,
    /// Minimum low time after a frame before the string latches.
    pub latch: Duration,
}

impl BitTiming {
    /// WS2812-class strings, 800 KHz datastream.
    pub const WS2812: Self = Self {
        t0h_ns: 400,
        t1h_ns: 800,
        period_ns: 1250,
        latch: Duration::from_micros(50),
    };

    /// WS2811-class strings, 400 KHz datastream.
    pub const WS2811: Self = Self {
        t0h_ns: 500,
        t1h_ns: 1200,
        period_ns: 2500,
        latch: Duration::from_micros(50),
    };
}

/// Single-pin WS281x protocol transmitter.
///
/// Owns one GPIO pin and the latch timing state for the string attached to
/// it. Transmitters on different pins are independent instances;
/// constructing two on the same physical pin is a caller error and is not
/// detected here.
///
/// `D` is the platform's cycle-counted delay. The bit windows leave no
/// margin for stalls mid-byte, so the delay implementation must be
/// verified against the protocol windows on the target hardware, under
/// every optimization setting that ships.
pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
    timing: BitTiming,
    frame_end: Instant,
}

impl<P: OutputPin, D: DelayNs> Transmitter<P, D> {
    /// Take ownership of the pin and drive it low.
    ///
    /// The latch reference starts at the epoch, so the first frame never
    /// waits.
    pub fn new(mut pin: P, delay: D, timing: BitTiming) -> Self {
        let _ = pin.set_low();
        Self {
            pin,
            delay,
            timing,
            frame_end: Instant::from_millis(0),
        }
    }

    /// The timing set this transmitter was built with.
    pub const fn timing(&self) -> BitTiming {
        self.timing
    }

    /// True once the latch interval since the previous frame has elapsed.
    ///
    /// Never blocks. Poll this while preparing the next frame's contents
    /// so the mandatory idle period overlaps with computation.
    pub fn can_send_next_frame(&self) -> bool {
        self.frame_end.elapsed() >= self.timing.latch
    }

    /// Serialize the whole buffer onto the pin.
    ///
    /// No-op when the buffer is empty. Busy-waits until the latch interval
    /// from the previous frame has elapsed, then transmits every byte with
    /// interrupts masked for the full frame. There is no partial-failure
    /// mode: once transmission starts it always completes.
    pub fn show(&mut self, frame: &PixelBuffer) {
        if frame.is_empty() {
            return;
        }
        self.wait_for_latch();
        critical_section::with(|_| {
            for &byte in frame.bytes() {
                self.write_byte(byte);
            }
        });
        self.frame_end = Instant::now();
    }

    /// Transmit one color for every pixel without touching the buffer.
    ///
    /// Useful for instant full-strip color changes that leave a saved
    /// pattern intact. The buffer only supplies the pixel count and the
    /// wiring order; same latch and critical-section contract as
    /// [`show`](Self::show).
    pub fn show_uniform(&mut self, frame: &PixelBuffer, color: Rgb) {
        if frame.is_empty() {
            return;
        }
        let slot = frame.order().wire_bytes(color);
        self.wait_for_latch();
        critical_section::with(|_| {
            for _ in 0..frame.pixel_count() {
                for &byte in &slot {
                    self.write_byte(byte);
                }
            }
        });
        self.frame_end = Instant::now();
    }

    fn wait_for_latch(&self) {
        while !self.can_send_next_frame() {
            core::hint::spin_loop();
        }
    }

    /// Issue one byte, most significant bit first.
    ///
    /// Both branches burn the identical total period; only the high
    /// window differs between a 0 and a 1.
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..8 {
            let high_ns = if bits & 0x80 != 0 {
                self.timing.t1h_ns
            } else {
                self.timing.t0h_ns
            };
            let _ = self.pin.set_high();
            self.delay.delay_ns(high_ns);
            let _ = self.pin.set_low();
            self.delay.delay_ns(self.timing.period_ns.saturating_sub(high_ns));
            bits <<= 1;
        }
    }
}
