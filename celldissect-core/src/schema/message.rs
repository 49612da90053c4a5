//! Message descriptors and the lookup tables built from them.
//!
//! Both tables are plain arrays indexed by the type/tag byte and are built by
//! `const fn`s, so a protocol's tables live in statics and duplicate entries
//! fail the build instead of shadowing each other at runtime.

use super::{ElementSpec, FieldDescriptor};
use crate::codec::LengthCoding;

const EMPTY: u16 = u16::MAX;

/// Ordered field list of one message type.
#[derive(Debug, Clone, Copy)]
pub struct MessageDescriptor {
    pub message_type: u8,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Number of mandatory fields.
    pub fn mandatory_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_mandatory()).count()
    }

    /// Position of the first field at or after `from` carrying `tag`.
    pub fn position_of(&self, tag: u8, from: usize) -> Option<usize> {
        self.fields
            .iter()
            .skip(from)
            .position(|f| f.tag == Some(tag))
            .map(|pos| pos + from)
    }
}

/// Message-type dispatch table of one protocol.
///
/// Carries the protocol's element catalog, which supplies the length coding
/// and the framing of elements found outside their expected position.
#[derive(Debug)]
pub struct MessageTable {
    protocol: &'static str,
    catalog: &'static ElementTable,
    messages: &'static [MessageDescriptor],
    index: [u16; 256],
}

impl MessageTable {
    /// Build the table. Panics (at compile time when used in a static) on a
    /// duplicate message type.
    pub const fn new(
        protocol: &'static str,
        catalog: &'static ElementTable,
        messages: &'static [MessageDescriptor],
    ) -> Self {
        let mut index = [EMPTY; 256];
        let mut i = 0;
        while i < messages.len() {
            let slot = messages[i].message_type as usize;
            if index[slot] != EMPTY {
                panic!("duplicate message type in message table");
            }
            index[slot] = i as u16;
            i += 1;
        }
        Self {
            protocol,
            catalog,
            messages,
            index,
        }
    }

    /// Protocol name used in diagnostics.
    pub fn protocol(&self) -> &'static str {
        self.protocol
    }

    /// Element catalog of the protocol.
    pub fn catalog(&self) -> &'static ElementTable {
        self.catalog
    }

    /// Length coding of the protocol's TLV elements.
    pub fn length_coding(&self) -> LengthCoding {
        self.catalog.length_coding()
    }

    /// Look up a message by type.
    #[inline]
    pub fn get(&self, message_type: u8) -> Option<&'static MessageDescriptor> {
        let messages = self.messages;
        match self.index[message_type as usize] {
            EMPTY => None,
            slot => messages.get(slot as usize),
        }
    }

    /// All messages in declaration order.
    pub fn messages(&self) -> &'static [MessageDescriptor] {
        self.messages
    }

    /// Get the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Tag-indexed element catalog (a protocol's IEs, or a nested field element set).
#[derive(Debug)]
pub struct ElementTable {
    name: &'static str,
    length_coding: LengthCoding,
    specs: &'static [ElementSpec],
    index: [u16; 256],
}

impl ElementTable {
    /// Build the table. Panics on a duplicate tag.
    pub const fn new(
        name: &'static str,
        length_coding: LengthCoding,
        specs: &'static [ElementSpec],
    ) -> Self {
        let mut index = [EMPTY; 256];
        let mut i = 0;
        while i < specs.len() {
            let slot = specs[i].tag as usize;
            if index[slot] != EMPTY {
                panic!("duplicate tag in element table");
            }
            index[slot] = i as u16;
            i += 1;
        }
        Self {
            name,
            length_coding,
            specs,
            index,
        }
    }

    /// Table name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Length coding of TLV elements in this table.
    pub fn length_coding(&self) -> LengthCoding {
        self.length_coding
    }

    /// Look up an element by tag.
    #[inline]
    pub fn get(&self, tag: u8) -> Option<&'static ElementSpec> {
        let specs = self.specs;
        match self.index[tag as usize] {
            EMPTY => None,
            slot => specs.get(slot as usize),
        }
    }

    /// All entries in declaration order.
    pub fn specs(&self) -> &'static [ElementSpec] {
        self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{opaque, ElementFormat};

    const CAUSE: ElementSpec = ElementSpec::new(0x04, "Cause", ElementFormat::Tlv, opaque);
    const CIC: ElementSpec =
        ElementSpec::new(0x01, "Circuit Identity Code", ElementFormat::Tv(2), opaque);

    const RESET: &[FieldDescriptor] = &[FieldDescriptor::mandatory(CAUSE)];
    const ASSIGNMENT_COMPLETE: &[FieldDescriptor] = &[
        FieldDescriptor::optional(CIC),
        FieldDescriptor::optional(CAUSE),
        FieldDescriptor::mandatory(CAUSE).named("Cause (Second)"),
    ];

    const MESSAGE_LIST: &[MessageDescriptor] = &[
        MessageDescriptor {
            message_type: 0x30,
            name: "Reset",
            fields: RESET,
        },
        MessageDescriptor {
            message_type: 0x02,
            name: "Assignment Complete",
            fields: ASSIGNMENT_COMPLETE,
        },
    ];
    const ELEMENT_LIST: &[ElementSpec] = &[CAUSE, CIC];

    static ELEMENTS: ElementTable = ElementTable::new("test", LengthCoding::Double, ELEMENT_LIST);
    static MESSAGES: MessageTable = MessageTable::new("test", &ELEMENTS, MESSAGE_LIST);

    #[test]
    fn test_message_lookup() {
        assert_eq!(MESSAGES.len(), 2);
        assert_eq!(MESSAGES.get(0x30).map(|m| m.name), Some("Reset"));
        assert_eq!(MESSAGES.get(0x02).map(|m| m.name), Some("Assignment Complete"));
        assert!(MESSAGES.get(0x31).is_none());
        assert!(MESSAGES.get(0xff).is_none());
        assert_eq!(MESSAGES.length_coding(), LengthCoding::Double);
    }

    #[test]
    fn test_element_lookup() {
        assert_eq!(ELEMENTS.get(0x04).map(|s| s.name), Some("Cause"));
        assert_eq!(ELEMENTS.get(0x01).map(|s| s.format), Some(ElementFormat::Tv(2)));
        assert!(ELEMENTS.get(0x00).is_none());
    }

    #[test]
    fn test_position_of_searches_forward() {
        let msg = MESSAGES.get(0x02).unwrap();
        assert_eq!(msg.position_of(0x04, 0), Some(1));
        assert_eq!(msg.position_of(0x04, 2), Some(2));
        assert_eq!(msg.position_of(0x01, 1), None);
        assert_eq!(msg.mandatory_count(), 1);
    }
}
