//! Colors for glyph fills and text, plus the palette used for categories
//! that were not assigned one.

/// 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const BLACK: Color = Color::rgb8(0, 0, 0);
pub const WHITE: Color = Color::rgb8(255, 255, 255);
pub const SKYBLUE: Color = Color::rgb8(135, 206, 235);
pub const LIMEGREEN: Color = Color::rgb8(50, 205, 50);
pub const ORANGE: Color = Color::rgb8(255, 165, 0);
pub const PURPLE: Color = Color::rgb8(128, 0, 128);
pub const ORANGERED: Color = Color::rgb8(255, 69, 0);
pub const LIGHTGRAY: Color = Color::rgb8(211, 211, 211);

impl Color {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.).round() as u8,
            g: (g.clamp(0.0, 1.0) * 255.).round() as u8,
            b: (b.clamp(0.0, 1.0) * 255.).round() as u8,
            a: (a.clamp(0.0, 1.0) * 255.).round() as u8,
        }
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.)
    }

    pub(crate) fn to_piet_color(self) -> piet::Color {
        piet::Color::rgba8(self.r, self.g, self.b, self.a)
    }

    /// Raise lightness by `amount` (0..=1) in HSL space, saturating at white.
    pub fn lighten(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0), self.a)
    }

    /// Lower lightness by `amount` (0..=1) in HSL space, saturating at black.
    pub fn darken(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0), self.a)
    }

    /// Hue in degrees, saturation and lightness in 0..=1. Achromatic colors
    /// report hue 0.
    fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.;
        let g = self.g as f64 / 255.;
        let b = self.b as f64 / 255.;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        if max == min {
            return (0., 0., l);
        }
        let d = max - min;
        let s = d / (1. - (2. * l - 1.).abs());
        let h = if max == r {
            60. * (((g - b) / d).rem_euclid(6.))
        } else if max == g {
            60. * ((b - r) / d + 2.)
        } else {
            60. * ((r - g) / d + 4.)
        };
        (h, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64, a: u8) -> Self {
        let c = (1. - (2. * l - 1.).abs()) * s;
        let hp = h.rem_euclid(360.) / 60.;
        let x = c * (1. - (hp.rem_euclid(2.) - 1.).abs());
        let (r1, g1, b1) = match hp {
            hp if hp < 1. => (c, x, 0.),
            hp if hp < 2. => (x, c, 0.),
            hp if hp < 3. => (0., c, x),
            hp if hp < 4. => (0., x, c),
            hp if hp < 5. => (x, 0., c),
            _ => (c, 0., x),
        };
        let m = l - c / 2.;
        let mut color = Self::rgb(r1 + m, g1 + m, b1 + m);
        color.a = a;
        color
    }
}

/// Assigns colors to category indices.
pub trait ColorPalette: dyn_clone::DynClone {
    /// This function is expected to give the same answer for the same input (i.e. be a pure fn).
    fn color(&self, index: usize) -> Color;
}

dyn_clone::clone_trait_object!(ColorPalette);

/// Default palette: steps around the hue wheel in large increments so
/// neighbouring categories stay distinguishable.
#[derive(Copy, Clone)]
pub struct CyclePalette;

impl ColorPalette for CyclePalette {
    fn color(&self, index: usize) -> Color {
        let hue = (index as f64 * 140.).rem_euclid(360.);
        Color::from_hsl(hue, 0.55, 0.45, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(LIMEGREEN, Color::rgba8(50, 205, 50, 255));
        assert_eq!(SKYBLUE.a, 255);
    }

    #[test]
    fn lighten_zero_is_identity() {
        for color in [SKYBLUE, LIMEGREEN, ORANGE, PURPLE, ORANGERED, LIGHTGRAY] {
            assert_eq!(color.lighten(0.), color);
        }
    }

    #[test]
    fn lighten_saturates_at_white() {
        assert_eq!(PURPLE.lighten(1.), WHITE);
        assert_eq!(WHITE.lighten(0.3), WHITE);
    }

    #[test]
    fn darken_saturates_at_black() {
        assert_eq!(ORANGE.darken(1.), BLACK);
        assert_eq!(BLACK.darken(0.1), BLACK);
    }

    #[test]
    fn achromatic_round_trip() {
        let gray = Color::rgb8(128, 128, 128);
        assert_eq!(gray.lighten(0.), gray);
        let (h, s, _) = gray.to_hsl();
        assert_eq!(h, 0.);
        assert_eq!(s, 0.);
    }

    #[test]
    fn lighten_increases_lightness() {
        let base = LIMEGREEN;
        let lighter = base.lighten(0.05);
        let (_, _, l0) = base.to_hsl();
        let (_, _, l1) = lighter.to_hsl();
        assert!(l1 > l0);
    }

    #[test]
    fn palette_is_pure() {
        let palette = CyclePalette;
        for i in 0..8 {
            assert_eq!(palette.color(i), palette.color(i));
        }
        assert_ne!(palette.color(0), palette.color(1));
    }
}
