//! Wire framing of a single element.

/// How an element is laid out on the wire.
///
/// Tagged formats start with a one-byte tag (IEI). Length-prefixed formats
/// use the [`LengthCoding`](crate::codec::LengthCoding) of the table the
/// element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementFormat {
    /// Tag only, no value
    T,

    /// Tag followed by a fixed-size value
    Tv(usize),

    /// Tag, length, value
    Tlv,

    /// Fixed-size value at a fixed position, no tag
    V(usize),

    /// Length and value, no tag
    Lv,

    /// One-byte record count followed by that many fixed-size records
    Counted(usize),

    /// Everything left in the enclosing buffer
    Rest,
}

impl ElementFormat {
    /// Whether the element starts with a tag byte.
    pub const fn is_tagged(&self) -> bool {
        matches!(self, ElementFormat::T | ElementFormat::Tv(_) | ElementFormat::Tlv)
    }

    /// Short name for display (mirrors the usual 3GPP notation).
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementFormat::T => "T",
            ElementFormat::Tv(_) => "TV",
            ElementFormat::Tlv => "TLV",
            ElementFormat::V(_) => "V",
            ElementFormat::Lv => "LV",
            ElementFormat::Counted(_) => "N*V",
            ElementFormat::Rest => "V*",
        }
    }
}

impl std::fmt::Display for ElementFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(ElementFormat::T.type_name(), "T");
        assert_eq!(ElementFormat::Tv(2).type_name(), "TV");
        assert_eq!(ElementFormat::Tlv.to_string(), "TLV");
        assert_eq!(ElementFormat::Counted(8).type_name(), "N*V");
        assert_eq!(format!("{:<4}|", ElementFormat::Lv), "LV  |");
    }

    #[test]
    fn test_tagged_formats() {
        assert!(ElementFormat::Tlv.is_tagged());
        assert!(ElementFormat::T.is_tagged());
        assert!(!ElementFormat::Lv.is_tagged());
        assert!(!ElementFormat::V(1).is_tagged());
    }
}
