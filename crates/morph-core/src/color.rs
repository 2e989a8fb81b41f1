use std::fmt;

/// Linear RGB triple in the \[0, 1\] range.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Move `alpha` of the remaining distance toward `target`.
    #[inline]
    pub fn lerp_toward(&mut self, target: Rgb, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        self.r += (target.r - self.r) * a;
        self.g += (target.g - self.g) * a;
        self.b += (target.b - self.b) * a;
    }

    /// CSS hex notation, e.g. `#f4afab`.
    pub fn to_css_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_css() {
        let c = Rgb::from_hex(0xf4afab);
        assert_eq!(c.to_css_hex(), "#f4afab");
        assert_eq!(Rgb::from_hex(0x00f0ff).to_string(), "#00f0ff");
    }

    #[test]
    fn lerp_toward_never_overshoots() {
        let mut c = Rgb::new(0.0, 1.0, 0.5);
        let target = Rgb::new(1.0, 0.0, 0.5);
        for _ in 0..200 {
            c.lerp_toward(target, 0.05);
            assert!(c.r <= 1.0 && c.g >= 0.0);
        }
        assert!((c.r - 1.0).abs() < 1e-3);
        assert!(c.g.abs() < 1e-3);
        assert_eq!(c.b, 0.5);
    }
}
