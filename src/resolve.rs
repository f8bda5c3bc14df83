//! Per-line control resolution.
//!
//! Takes the `control:source` fields of one database line and produces the
//! [`CompactLine`] for that device. Resolution runs in two passes:
//!
//! 1. Every field is classified ([`PhysicalSource::parse`]) and stored in a
//!    [`MappingSet`]. Stick axes (`leftx`, `lefty`, `rightx`, `righty`) are split
//!    into `-name`/`+name` half-axes here. The highest axis index on the line is
//!    recorded.
//! 2. Hats are turned into synthetic axes numbered after that highest axis, two
//!    per hat (x then y).
//!
//! The set is then read back in [`StandardControl::ALL`] order.
//!
//! ## Stick splitting
//! `leftx:a3` yields `-leftx = a3-` and `+leftx = a3+`. The `~` form inverts
//! this: `leftx:a3~` yields `-leftx = a3+` and `+leftx = a3-`.
//!
//! ## Hat numbering
//! With `m` the highest axis index on the line (or none), hat `h` occupies axes
//! `base = m + 1 + 2h` (x) and `base + 1` (y):
//! - up (1) → `a{base+1}-`
//! - down (4) → `a{base+1}+`
//! - left (8) → `a{base}-`
//! - right (2) → `a{base}+`
//!
//! # Example
//! ```
//! use padtable::resolve_fields;
//!
//! let line = resolve_fields(["a:b0", "leftx:a0", "lefty:a1", "dpup:h0.1"]).unwrap();
//! let text = line.to_string();
//! assert!(text.starts_with("b0 x x x"));
//! assert!(text.ends_with("a0- a0+ a1- a1+ x x x x"));
//! ```

use crate::error::ResolveError;
use crate::source::{AxisHalf, PhysicalSource, Sign};
use crate::standard::{CompactLine, CompactSymbol, StandardControl, CONTROL_COUNT};
use std::collections::BTreeMap;
use tracing::debug;

/// Controls whose full-range axis is split into two signed halves.
pub const STICK_AXES: [&str; 4] = ["leftx", "lefty", "rightx", "righty"];

/// Field names that carry no control mapping.
const IGNORED_FIELDS: [&str; 2] = ["", "platform"];

/// Control name → physical source, for one database line.
///
/// Later fields for the same control replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSet {
    sources: BTreeMap<String, PhysicalSource>,
    max_axis: Option<u32>,
}

impl MappingSet {
    /// Classifies `fields` and splits stick axes. Hats are left unconverted.
    pub fn from_fields<'a>(
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ResolveError> {
        let mut set = MappingSet::default();

        for field in fields {
            let (control, token) = field.split_once(':').unwrap_or((field, ""));
            if IGNORED_FIELDS.contains(&control) {
                continue;
            }

            let source = PhysicalSource::parse(token);
            if let Some(index) = source.axis_index() {
                set.max_axis = set.max_axis.max(Some(index));
            }

            if STICK_AXES.contains(&control) {
                set.split_stick(control, token, source)?;
                continue;
            }

            if source == PhysicalSource::Unknown && StandardControl::from_name(control).is_none() {
                debug!(control, token, "ignoring unrecognized source");
            }
            set.sources.insert(control.to_string(), source);
        }

        Ok(set)
    }

    fn split_stick(
        &mut self,
        control: &str,
        token: &str,
        source: PhysicalSource,
    ) -> Result<(), ResolveError> {
        let (index, inverted) = match source {
            PhysicalSource::Axis {
                index,
                half: AxisHalf::Full { inverted },
            } => (index, inverted),
            _ => {
                return Err(ResolveError::NamedAxisNotFullRange {
                    control: control.to_string(),
                    source_token: token.to_string(),
                })
            }
        };

        let (negative, positive) = if inverted {
            (Sign::Positive, Sign::Negative)
        } else {
            (Sign::Negative, Sign::Positive)
        };
        self.sources.insert(
            format!("-{control}"),
            PhysicalSource::Axis { index, half: negative.into() },
        );
        self.sources.insert(
            format!("+{control}"),
            PhysicalSource::Axis { index, half: positive.into() },
        );
        Ok(())
    }

    /// Highest axis index seen on the line, including overwritten fields.
    pub fn max_axis(&self) -> Option<u32> {
        self.max_axis
    }

    pub fn get(&self, control: &str) -> Option<&PhysicalSource> {
        self.sources.get(control)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PhysicalSource)> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Replaces every hat with the synthetic half-axis it stands for.
    pub fn convert_hats(&mut self) -> Result<(), ResolveError> {
        let first_free = self.max_axis.map_or(Some(0), |m| m.checked_add(1));

        for (control, source) in self.sources.iter_mut() {
            let PhysicalSource::Hat { hat, bit } = *source else {
                continue;
            };
            let base = first_free
                .zip(hat.checked_mul(2))
                .and_then(|(free, offset)| free.checked_add(offset))
                .ok_or_else(|| ResolveError::HatOutOfRange {
                    control: control.clone(),
                    hat,
                })?;

            let (index, sign) = match bit {
                1 => (base.checked_add(1), Sign::Negative),
                4 => (base.checked_add(1), Sign::Positive),
                8 => (Some(base), Sign::Negative),
                2 => (Some(base), Sign::Positive),
                _ => {
                    return Err(ResolveError::UnknownHatDirection {
                        control: control.clone(),
                        hat,
                        bit,
                    })
                }
            };
            let index = index.ok_or_else(|| ResolveError::HatOutOfRange {
                control: control.clone(),
                hat,
            })?;
            *source = PhysicalSource::Axis { index, half: sign.into() };
        }

        Ok(())
    }

    /// Reads the set back in standard order.
    ///
    /// Call after [`convert_hats`](Self::convert_hats).
    pub fn encode(&self) -> Result<CompactLine, ResolveError> {
        let mut symbols = [CompactSymbol::Absent; CONTROL_COUNT];

        for (slot, control) in symbols.iter_mut().zip(StandardControl::ALL) {
            let Some(source) = self.sources.get(control.name()) else {
                continue;
            };
            *slot = match *source {
                PhysicalSource::Button { index } => CompactSymbol::Button(index),
                PhysicalSource::Axis { index, half } => match half.sign() {
                    Some(sign) => CompactSymbol::Axis(index, sign),
                    None => {
                        return Err(ResolveError::FullRangeAxis {
                            control: control.name().to_string(),
                            axis: index,
                        })
                    }
                },
                // a hat here means convert_hats was skipped; neither has a compact form
                PhysicalSource::Hat { .. } | PhysicalSource::Unknown => {
                    return Err(ResolveError::UnrecognizedSource {
                        control: control.name().to_string(),
                    })
                }
            };
        }

        Ok(CompactLine(symbols))
    }
}

/// Resolves the mapping fields of one line into its compact form.
pub fn resolve_fields<'a>(
    fields: impl IntoIterator<Item = &'a str>,
) -> Result<CompactLine, ResolveError> {
    let mut set = MappingSet::from_fields(fields)?;
    set.convert_hats()?;
    set.encode()
}
