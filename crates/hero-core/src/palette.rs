use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("malformed hex color `{0}`")]
    MalformedHex(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) color into normalized components.
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::MalformedHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| PaletteError::MalformedHex(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)? as f32 / 255.0,
            g: channel(2..4)? as f32 / 255.0,
            b: channel(4..6)? as f32 / 255.0,
        })
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Padded form for uniform blocks; the w component is unused.
    pub fn to_vec4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Five named colors supplied by the caller, mapped to shader uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub accent: Rgb,
    pub dark: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(0.063, 0.725, 0.506),   // #10b981
            secondary: Rgb::new(0.055, 0.647, 0.643), // #0ea5a4
            tertiary: Rgb::new(0.133, 0.773, 0.369),  // #22c55e
            accent: Rgb::new(0.204, 0.827, 0.600),    // #34d399
            dark: Rgb::new(0.039, 0.039, 0.039),      // #0a0a0a
        }
    }
}

impl Palette {
    pub fn from_hex(
        primary: &str,
        secondary: &str,
        tertiary: &str,
        accent: &str,
        dark: &str,
    ) -> Result<Self, PaletteError> {
        Ok(Self {
            primary: Rgb::from_hex(primary)?,
            secondary: Rgb::from_hex(secondary)?,
            tertiary: Rgb::from_hex(tertiary)?,
            accent: Rgb::from_hex(accent)?,
            dark: Rgb::from_hex(dark)?,
        })
    }
}
