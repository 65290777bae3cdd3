//! Golden-ratio hue rotation for component colors.

pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

const SATURATION: f64 = 1.0;
const VALUE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Converts HSV in `[0, 1]` to 8-bit RGB. Channels round half-to-even.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let scaled = h * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8
}

/// Infinite color source. Each draw rotates the hue by the golden-ratio conjugate.
///
/// The hue only moves forward; a fresh sequence is needed to replay colors.
#[derive(Debug, Clone, Default)]
pub struct ColorSequence {
    hue: f64,
}

impl ColorSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_hue(&self) -> f64 {
        self.hue
    }

    pub fn next_rgb(&mut self) -> Rgb {
        self.hue = (self.hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
        hsv_to_rgb(self.hue, SATURATION, VALUE)
    }

    pub fn next_color(&mut self) -> String {
        self.next_rgb().to_hex()
    }
}

impl Iterator for ColorSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_color())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
