// Copyright 2026 the Vitrail contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the packed [`Rgba`] color type.

use std::fmt;

/// A color packed into 32 bits as `0xRRGGBBAA`.
///
/// This is the representation handed to backend drawing APIs and stored in
/// [`Image`](crate::render::Image) pixel buffers. Channels are individually
/// addressable through the accessor methods.
///
/// `#[repr(transparent)]` plus the `bytemuck` derives make pixel buffers of
/// this type safe to reinterpret as raw bytes when a backend needs them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque red.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0x00, 0x00, 0x00, 0x00);

    /// Creates a color from explicit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Creates an opaque color (alpha = `0xFF`).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// The red channel.
    #[inline]
    pub const fn r(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The green channel.
    #[inline]
    pub const fn g(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The blue channel.
    #[inline]
    pub const fn b(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The alpha channel (`0xFF` is opaque).
    #[inline]
    pub const fn a(&self) -> u8 {
        self.0 as u8
    }

    /// Returns this color with a different red channel.
    #[inline]
    pub const fn with_r(self, r: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (r as u32) << 24)
    }

    /// Returns this color with a different green channel.
    #[inline]
    pub const fn with_g(self, g: u8) -> Self {
        Self((self.0 & 0xFF00_FFFF) | (g as u32) << 16)
    }

    /// Returns this color with a different blue channel.
    #[inline]
    pub const fn with_b(self, b: u8) -> Self {
        Self((self.0 & 0xFFFF_00FF) | (b as u32) << 8)
    }

    /// Returns this color with a different alpha channel.
    #[inline]
    pub const fn with_a(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Rgba {
    #[inline]
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Rgba> for u32 {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_packing_round_trip() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.a(), 0x78);
    }

    #[test]
    fn test_channel_replacement() {
        let c = Rgba::BLACK.with_r(0xAA).with_a(0x80);
        assert_eq!(c.r(), 0xAA);
        assert_eq!(c.g(), 0x00);
        assert_eq!(c.b(), 0x00);
        assert_eq!(c.a(), 0x80);
    }

    #[test]
    fn test_constants_are_opaque() {
        assert_eq!(Rgba::WHITE.a(), 0xFF);
        assert_eq!(Rgba::RED, Rgba::new(0xFF, 0x00, 0x00, 0xFF));
        assert_eq!(Rgba::TRANSPARENT.a(), 0x00);
    }

    #[test]
    fn test_display_is_packed_hex() {
        assert_eq!(format!("{}", Rgba::new(0xFF, 0x00, 0x00, 0xFF)), "#FF0000FF");
    }
}
