//! The finished lookup table.
//!
//! [`LookupTable`] maps canonical device keys (`"045e:028e"`) to compact lines.
//! It is produced by [`TableBuilder::finish`](crate::database::TableBuilder::finish)
//! and is read-only from then on.
//!
//! # Semantics
//! - Keys iterate in lexicographic order, so serialization is stable.
//! - Values are the space-joined symbols of a [`CompactLine`], one per
//!   [`StandardControl`] in [`StandardControl::ALL`] order.
//! - Serialized JSON uses 4-space indentation.
//!
//! # Examples
//! ```
//! use padtable::{convert_str, StandardControl, CompactSymbol};
//!
//! let table = convert_str(
//!     "030000005e0400008e02000014010000,X360 Controller,a:b0,b:b1,",
//! ).unwrap();
//! let line = table.lookup("045e:028e").unwrap().unwrap();
//! assert_eq!(line.get(StandardControl::B), CompactSymbol::Button(1));
//! ```

use crate::error::Result;
use crate::standard::{CompactLine, ParseSymbolError};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owned, ordered table (`device key → compact line`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable(BTreeMap<String, String>);

impl LookupTable {
    /// Compact line text for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Parsed compact line for `key`.
    pub fn lookup(&self, key: &str) -> Option<Result<CompactLine, ParseSymbolError>> {
        self.get(key).map(str::parse)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate `(key, line)` pairs in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pretty JSON object, 4-space indented, keys sorted.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| serde_json::Error::custom(e).into())
    }

    /// Adds `line` under `key` unless the key is already present.
    ///
    /// Returns `false` (and keeps the existing entry) for duplicates.
    pub(crate) fn insert_first(&mut self, key: String, line: &CompactLine) -> bool {
        use std::collections::btree_map::Entry;
        match self.0.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(line.to_string());
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Sign;
    use crate::standard::{CompactSymbol, CONTROL_COUNT};

    fn line(first: CompactSymbol) -> CompactLine {
        let mut symbols = [CompactSymbol::Absent; CONTROL_COUNT];
        symbols[0] = first;
        CompactLine(symbols)
    }

    #[test]
    fn first_insert_wins() {
        let mut table = LookupTable::default();
        assert!(table.insert_first("045e:028e".into(), &line(CompactSymbol::Button(0))));
        assert!(!table.insert_first("045e:028e".into(), &line(CompactSymbol::Button(9))));
        assert_eq!(table.len(), 1);
        assert!(table.get("045e:028e").unwrap().starts_with("b0 "));
    }

    #[test]
    fn lookup_parses_line() {
        let mut table = LookupTable::default();
        table.insert_first("054c:0268".into(), &line(CompactSymbol::Axis(2, Sign::Negative)));
        let parsed = table.lookup("054c:0268").unwrap().unwrap();
        assert_eq!(parsed.symbols()[0], CompactSymbol::Axis(2, Sign::Negative));
        assert!(table.lookup("0000:0000").is_none());
    }

    #[test]
    fn json_is_sorted_and_four_space_indented() {
        let mut table = LookupTable::default();
        table.insert_first("b000:0001".into(), &line(CompactSymbol::Button(1)));
        table.insert_first("a000:0001".into(), &line(CompactSymbol::Button(2)));
        let json = table.to_json().unwrap();

        assert!(json.starts_with("{\n    \"a000:0001\": \"b2 x"));
        assert!(json.find("a000:0001").unwrap() < json.find("b000:0001").unwrap());
        assert!(json.ends_with('}'));

        let back: LookupTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn empty_table_json() {
        assert_eq!(LookupTable::default().to_json().unwrap(), "{}");
    }
}
