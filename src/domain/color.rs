//! Colours and the random colour generator used by rainbow mode

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

/// Opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected #rgb or #rrggbb, got {0:?}")]
    InvalidFormat(String),
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb`; the leading `#` is optional
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidFormat(text.to_string());
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let short: Vec<u8> = digits
                    .chars()
                    .map(|c| channel(&c.to_string()).map(|v| v * 17))
                    .collect::<Result<_, _>>()?;
                Ok(Self::new(short[0], short[1], short[2]))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// CSS functional notation, e.g. `rgb(12,0,255)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Draws one channel uniformly from 0..=255
///
/// floor(u * 256) for u in [0, 1) reaches every value including 255 with
/// equal weight.
fn random_channel<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let unit: f64 = rng.random();
    (unit * 256.0).floor() as u8
}

/// Samples a colour with three independent uniform channels
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let r = random_channel(rng);
    let g = random_channel(rng);
    let b = random_channel(rng);
    Rgb::new(r, g, b)
}

/// Colour chosen for a paint stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    /// The fixed pen colour
    Pen(Rgb),
    /// A freshly sampled rainbow colour
    Random(Rgb),
}

impl ColorChoice {
    pub fn rgb(&self) -> Rgb {
        match self {
            ColorChoice::Pen(rgb) | ColorChoice::Random(rgb) => *rgb,
        }
    }

    pub fn tag(&self) -> PaintTag {
        match self {
            ColorChoice::Pen(_) => PaintTag::Default,
            ColorChoice::Random(_) => PaintTag::Random,
        }
    }
}

/// Rendering tag carried by each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaintTag {
    #[default]
    Unpainted,
    Default,
    Random,
}

impl PaintTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaintTag::Unpainted => "unpainted",
            PaintTag::Default => "default",
            PaintTag::Random => "random",
        }
    }
}
