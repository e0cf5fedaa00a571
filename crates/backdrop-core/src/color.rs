/// RGBA color with sRGB-encoded channels in [0, 1], the way CSS `rgba()` reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Multiply the existing alpha, used when a whole layer is faded.
    pub fn fade(mut self, factor: f32) -> Self {
        self.a = (self.a * factor).clamp(0.0, 1.0);
        self
    }

    /// Convert to linear space for an sRGB render target.
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b), self.a]
    }
}

/// Site accent, `#0d9488`.
pub const ACCENT: Color = Color::rgb(13.0 / 255.0, 148.0 / 255.0, 136.0 / 255.0);

/// Lighter accent used on the second helix strand, `#14b8a6`.
pub const ACCENT_LIGHT: Color = Color::rgb(20.0 / 255.0, 184.0 / 255.0, 166.0 / 255.0);

/// Muted track behind the scroll indicator.
pub const MUTED: Color = Color::rgb(39.0 / 255.0, 39.0 / 255.0, 42.0 / 255.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_multiplies_alpha() {
        let c = ACCENT.with_alpha(0.5).fade(0.6);
        assert!((c.a - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::rgb(1.0, 1.0, 1.0).to_linear();
        assert!((white[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_srgb8_matches_accent() {
        assert_eq!(Color::from_srgb8(13, 148, 136), ACCENT);
    }
}
