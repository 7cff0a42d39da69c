use image::Rgba;

/// One RGBA pixel. Alpha rides along with the pixel when it is moved but is
/// never looked at by the optimizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.b
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.a
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Self {
        Rgba([p.r, p.g, p.b, p.a])
    }
}

/// Orderable key for a color: the RGB triple read as a base-256 number,
/// `R * 65536 + G * 256 + B`, so the result lies in `0..=0xFF_FFFF`.
#[inline]
pub fn color_key(p: Pixel) -> u64 {
    let r = p.r() as u64;
    let g = p.g() as u64;
    let b = p.b() as u64;
    r * 256 * 256 + g * 256 + b
}
