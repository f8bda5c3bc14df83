//! The standard gamepad layout and its compact encoding.
//!
//! Output lines list one [`CompactSymbol`] per [`StandardControl`], in the order
//! of [`StandardControl::ALL`]: the 17 digital controls of the W3C "standard"
//! gamepad, then the four sticks split into signed halves.

use crate::source::{digits, Sign};
use std::fmt;
use std::str::FromStr;

/// Number of symbols in every compact line.
pub const CONTROL_COUNT: usize = 25;

/// One entry of the fixed output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardControl {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    Back,
    Start,
    LeftStick,
    RightStick,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Guide,
    LeftXNegative,
    LeftXPositive,
    LeftYNegative,
    LeftYPositive,
    RightXNegative,
    RightXPositive,
    RightYNegative,
    RightYPositive,
}

impl StandardControl {
    /// Every standard control, in output order.
    pub const ALL: [StandardControl; CONTROL_COUNT] = [
        StandardControl::A,
        StandardControl::B,
        StandardControl::X,
        StandardControl::Y,
        StandardControl::LeftShoulder,
        StandardControl::RightShoulder,
        StandardControl::LeftTrigger,
        StandardControl::RightTrigger,
        StandardControl::Back,
        StandardControl::Start,
        StandardControl::LeftStick,
        StandardControl::RightStick,
        StandardControl::DpadUp,
        StandardControl::DpadDown,
        StandardControl::DpadLeft,
        StandardControl::DpadRight,
        StandardControl::Guide,
        StandardControl::LeftXNegative,
        StandardControl::LeftXPositive,
        StandardControl::LeftYNegative,
        StandardControl::LeftYPositive,
        StandardControl::RightXNegative,
        StandardControl::RightXPositive,
        StandardControl::RightYNegative,
        StandardControl::RightYPositive,
    ];

    /// Control name as it appears in the mapping database (after stick splitting).
    pub fn name(self) -> &'static str {
        match self {
            StandardControl::A => "a",
            StandardControl::B => "b",
            StandardControl::X => "x",
            StandardControl::Y => "y",
            StandardControl::LeftShoulder => "leftshoulder",
            StandardControl::RightShoulder => "rightshoulder",
            StandardControl::LeftTrigger => "lefttrigger",
            StandardControl::RightTrigger => "righttrigger",
            StandardControl::Back => "back",
            StandardControl::Start => "start",
            StandardControl::LeftStick => "leftstick",
            StandardControl::RightStick => "rightstick",
            StandardControl::DpadUp => "dpup",
            StandardControl::DpadDown => "dpdown",
            StandardControl::DpadLeft => "dpleft",
            StandardControl::DpadRight => "dpright",
            StandardControl::Guide => "guide",
            StandardControl::LeftXNegative => "-leftx",
            StandardControl::LeftXPositive => "+leftx",
            StandardControl::LeftYNegative => "-lefty",
            StandardControl::LeftYPositive => "+lefty",
            StandardControl::RightXNegative => "-rightx",
            StandardControl::RightXPositive => "+rightx",
            StandardControl::RightYNegative => "-righty",
            StandardControl::RightYPositive => "+righty",
        }
    }

    /// Position of this control in a compact line.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for StandardControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output encoding of one standard control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompactSymbol {
    /// `x`
    Absent,
    /// `b<N>`
    Button(u32),
    /// `a<N>+` / `a<N>-`
    Axis(u32, Sign),
}

impl fmt::Display for CompactSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CompactSymbol::Absent => f.write_str("x"),
            CompactSymbol::Button(index) => write!(f, "b{index}"),
            CompactSymbol::Axis(index, sign) => write!(f, "a{index}{}", sign.as_char()),
        }
    }
}

/// A compact symbol string was not `x`, `b<N>` or `a<N>±`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid compact symbol `{0}`")]
pub struct ParseSymbolError(pub String);

impl FromStr for CompactSymbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSymbolError(s.to_string());
        if s == "x" {
            return Ok(CompactSymbol::Absent);
        }
        if let Some(rest) = s.strip_prefix('b') {
            return digits(rest).map(CompactSymbol::Button).ok_or_else(err);
        }
        let rest = s.strip_prefix('a').ok_or_else(err)?;
        let (rest, sign) = if let Some(r) = rest.strip_suffix('+') {
            (r, Sign::Positive)
        } else if let Some(r) = rest.strip_suffix('-') {
            (r, Sign::Negative)
        } else {
            return Err(err());
        };
        digits(rest).map(|i| CompactSymbol::Axis(i, sign)).ok_or_else(err)
    }
}

/// One device's symbols, one per standard control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactLine(pub [CompactSymbol; CONTROL_COUNT]);

impl CompactLine {
    pub fn get(&self, control: StandardControl) -> CompactSymbol {
        self.0[control.position()]
    }

    pub fn symbols(&self) -> &[CompactSymbol] {
        &self.0
    }
}

impl fmt::Display for CompactLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for CompactLine {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = [CompactSymbol::Absent; CONTROL_COUNT];
        let mut parts = s.split(' ');
        for slot in symbols.iter_mut() {
            let part = parts.next().ok_or_else(|| ParseSymbolError(s.to_string()))?;
            *slot = part.parse()?;
        }
        if parts.next().is_some() {
            return Err(ParseSymbolError(s.to_string()));
        }
        Ok(CompactLine(symbols))
    }
}
