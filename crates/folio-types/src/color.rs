//! RGBA color type and blending helpers.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite this color over an opaque background.
    ///
    /// Character cells cannot be translucent, so themed colors with alpha
    /// are flattened against the panel background before drawing.
    pub fn over(self, background: Color) -> Color {
        let alpha = self.a as f32 / 255.0;
        let mixed = lerp_color(background, self.with_alpha(255), alpha);
        mixed.with_alpha(255)
    }
}

/// Linearly interpolate between two colors.
///
/// `t` is clamped to `[0.0, 1.0]`. Returns `a` when `t == 0.0` and `b` when
/// `t == 1.0`.
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::rgba(
        (a.r as f32 + (b.r as f32 - a.r as f32) * t) as u8,
        (a.g as f32 + (b.g as f32 - a.g as f32) * t) as u8,
        (a.b as f32 + (b.b as f32 - a.b as f32) * t) as u8,
        (a.a as f32 + (b.a as f32 - a.a as f32) * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 255, 255);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 200, 200);
        assert_eq!(lerp_color(a, b, -1.0), a);
        assert_eq!(lerp_color(a, b, 2.0), b);
    }

    #[test]
    fn over_opaque_is_identity() {
        let fg = Color::rgb(80, 160, 255);
        assert_eq!(fg.over(Color::BLACK), fg);
    }

    #[test]
    fn over_transparent_is_background() {
        let bg = Color::rgb(12, 12, 20);
        assert_eq!(Color::rgba(255, 0, 0, 0).over(bg), bg);
    }

    #[test]
    fn over_half_alpha_mixes() {
        let c = Color::rgba(200, 100, 0, 128).over(Color::BLACK);
        assert!((99..=101).contains(&c.r));
        assert!((49..=51).contains(&c.g));
        assert_eq!(c.a, 255);
    }
}
