#![no_std]

extern crate alloc;

pub mod color;
pub mod framebuffer;
pub mod layout;
pub mod transmitter;

pub use framebuffer::{AllocError, ChannelOrder, PixelBuffer, Target};
pub use layout::{GridLayout, LayoutVariant};
pub use transmitter::{BitTiming, Transmitter};

pub use color::{Rgb, rgb_from_u32, rgb_to_u32, temperature_to_rgb, wheel};
pub use embassy_time::{Duration, Instant};
