//! Physical source descriptors.
//!
//! The right-hand side of every `control:source` token in an SDL mapping line
//! names one physical channel on the device. [`PhysicalSource::parse`] turns
//! that text into a typed descriptor.
//!
//! ## Grammars (tested in this order)
//! | token      | descriptor                                   |
//! |------------|----------------------------------------------|
//! | `b<N>`     | [`PhysicalSource::Button`]                   |
//! | `a<N>`     | [`PhysicalSource::Axis`], full range         |
//! | `a<N>~`    | [`PhysicalSource::Axis`], full range, inverted |
//! | `-a<N>`    | [`PhysicalSource::Axis`], negative half      |
//! | `+a<N>`    | [`PhysicalSource::Axis`], positive half      |
//! | `h<H>.<B>` | [`PhysicalSource::Hat`]                      |
//! | other      | [`PhysicalSource::Unknown`]                  |
//!
//! Hat direction bits follow SDL: `1` up, `2` right, `4` down, `8` left. The bit
//! is kept raw here; it is validated when the hat is converted to an axis.

/// Which part of an axis a source refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisHalf {
    /// The whole axis. `inverted` is set for the `a<N>~` form.
    Full { inverted: bool },
    Negative,
    Positive,
}

/// Direction of a signed half-axis in the compact output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn as_char(self) -> char {
        match self {
            Sign::Negative => '-',
            Sign::Positive => '+',
        }
    }
}

impl AxisHalf {
    /// The signed direction, if this is a half-axis.
    pub fn sign(self) -> Option<Sign> {
        match self {
            AxisHalf::Negative => Some(Sign::Negative),
            AxisHalf::Positive => Some(Sign::Positive),
            AxisHalf::Full { .. } => None,
        }
    }
}

impl From<Sign> for AxisHalf {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => AxisHalf::Negative,
            Sign::Positive => AxisHalf::Positive,
        }
    }
}

/// A classified physical source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalSource {
    Button { index: u32 },
    Axis { index: u32, half: AxisHalf },
    /// Hat switch `hat`, direction bit `bit` (not yet checked).
    Hat { hat: u32, bit: u32 },
    /// Token matched none of the grammars.
    Unknown,
}

impl PhysicalSource {
    /// Classifies a raw source token. Never fails; unrecognized text is [`Unknown`](Self::Unknown).
    pub fn parse(token: &str) -> Self {
        if let Some(index) = token.strip_prefix('b').and_then(digits) {
            return PhysicalSource::Button { index };
        }
        if let Some(rest) = token.strip_prefix('a') {
            if let Some(index) = digits(rest) {
                return Self::axis(index, AxisHalf::Full { inverted: false });
            }
            if let Some(index) = rest.strip_suffix('~').and_then(digits) {
                return Self::axis(index, AxisHalf::Full { inverted: true });
            }
        }
        if let Some(index) = token.strip_prefix("-a").and_then(digits) {
            return Self::axis(index, AxisHalf::Negative);
        }
        if let Some(index) = token.strip_prefix("+a").and_then(digits) {
            return Self::axis(index, AxisHalf::Positive);
        }
        if let Some((hat, bit)) = token.strip_prefix('h').and_then(|r| r.split_once('.')) {
            if let (Some(hat), Some(bit)) = (digits(hat), digits(bit)) {
                return PhysicalSource::Hat { hat, bit };
            }
        }
        PhysicalSource::Unknown
    }

    fn axis(index: u32, half: AxisHalf) -> Self {
        PhysicalSource::Axis { index, half }
    }

    /// Axis index, for any axis descriptor.
    pub fn axis_index(&self) -> Option<u32> {
        match *self {
            PhysicalSource::Axis { index, .. } => Some(index),
            _ => None,
        }
    }
}

/// Parses a non-empty run of ASCII digits. Anything else, or overflow, is `None`.
pub(crate) fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
