//! BSSMAP message definitions.

use super::elements::*;
use super::message_type;
use crate::schema::{FieldDescriptor, MessageDescriptor, MessageTable};

const fn m(spec: crate::schema::ElementSpec) -> FieldDescriptor {
    FieldDescriptor::mandatory(spec)
}

const fn o(spec: crate::schema::ElementSpec) -> FieldDescriptor {
    FieldDescriptor::optional(spec)
}

const ASSIGNMENT_REQUEST: &[FieldDescriptor] = &[
    m(CHANNEL_TYPE),
    o(LAYER3_HEADER_INFORMATION),
    o(PRIORITY),
    o(CIRCUIT_IDENTITY_CODE),
    o(DOWNLINK_DTX_FLAG),
    o(CLASSMARK_INFORMATION_TYPE2),
];

const ASSIGNMENT_COMPLETE: &[FieldDescriptor] = &[
    o(RR_CAUSE),
    o(CIRCUIT_IDENTITY_CODE),
    o(CELL_IDENTIFIER),
    o(CHOSEN_CHANNEL),
    o(CHOSEN_ENCRYPTION_ALGORITHM),
    o(SPEECH_VERSION),
];

const ASSIGNMENT_FAILURE: &[FieldDescriptor] =
    &[m(CAUSE), o(RR_CAUSE), o(CIRCUIT_IDENTITY_CODE_LIST)];

const HANDOVER_REQUEST: &[FieldDescriptor] = &[
    m(CHANNEL_TYPE),
    m(ENCRYPTION_INFORMATION),
    m(CLASSMARK_INFORMATION_TYPE2),
    m(CELL_IDENTIFIER).named("Cell Identifier (Serving)"),
    o(PRIORITY),
    o(CIRCUIT_IDENTITY_CODE),
    o(DOWNLINK_DTX_FLAG),
    m(CELL_IDENTIFIER).named("Cell Identifier (Target)"),
    o(CAUSE),
    o(CLASSMARK_INFORMATION_TYPE3),
    o(CHOSEN_ENCRYPTION_ALGORITHM).named("Chosen Encryption Algorithm (Serving)"),
    o(OLD_BSS_TO_NEW_BSS_INFORMATION),
];

const HANDOVER_REQUIRED: &[FieldDescriptor] = &[
    m(CAUSE),
    o(RESPONSE_REQUEST),
    m(CELL_IDENTIFIER_LIST).named("Cell Identifier List (Preferred)"),
    o(OLD_BSS_TO_NEW_BSS_INFORMATION),
];

const HANDOVER_REQUEST_ACKNOWLEDGE: &[FieldDescriptor] = &[
    m(LAYER3_INFORMATION),
    o(CHOSEN_CHANNEL),
    o(CHOSEN_ENCRYPTION_ALGORITHM),
    o(SPEECH_VERSION),
];

const HANDOVER_COMMAND: &[FieldDescriptor] = &[m(LAYER3_INFORMATION), o(CELL_IDENTIFIER)];

const HANDOVER_COMPLETE: &[FieldDescriptor] = &[o(RR_CAUSE)];

const HANDOVER_FAILURE: &[FieldDescriptor] =
    &[m(CAUSE), o(RR_CAUSE), o(CIRCUIT_IDENTITY_CODE_LIST)];

const CLEAR_COMMAND: &[FieldDescriptor] = &[o(LAYER3_HEADER_INFORMATION), m(CAUSE)];

const CLEAR_REQUEST: &[FieldDescriptor] = &[m(CAUSE)];

const RESET: &[FieldDescriptor] = &[m(CAUSE)];

const RESOURCE_INDICATION: &[FieldDescriptor] = &[
    m(RESOURCE_INDICATION_METHOD),
    o(RESOURCE_AVAILABLE),
    m(CELL_IDENTIFIER),
    o(TOTAL_RESOURCE_ACCESSIBLE),
];

const PAGING: &[FieldDescriptor] = &[
    m(IMSI),
    o(TMSI),
    m(CELL_IDENTIFIER_LIST),
    o(CHANNEL_NEEDED),
];

const CIPHER_MODE_COMMAND: &[FieldDescriptor] = &[
    o(LAYER3_HEADER_INFORMATION),
    m(ENCRYPTION_INFORMATION),
    o(CIPHER_RESPONSE_MODE),
];

const CLASSMARK_UPDATE: &[FieldDescriptor] =
    &[m(CLASSMARK_INFORMATION_TYPE2), o(CLASSMARK_INFORMATION_TYPE3)];

const CIPHER_MODE_COMPLETE: &[FieldDescriptor] =
    &[o(LAYER3_MESSAGE_CONTENTS), o(CHOSEN_ENCRYPTION_ALGORITHM)];

const COMPLETE_LAYER3_INFORMATION: &[FieldDescriptor] = &[
    m(CELL_IDENTIFIER),
    m(LAYER3_INFORMATION),
    o(CHOSEN_CHANNEL),
];

const CIPHER_MODE_REJECT: &[FieldDescriptor] = &[m(CAUSE)];

const fn message(
    message_type: u8,
    name: &'static str,
    fields: &'static [FieldDescriptor],
) -> MessageDescriptor {
    MessageDescriptor {
        message_type,
        name,
        fields,
    }
}

const MESSAGE_LIST: &[MessageDescriptor] = &[
    message(message_type::ASSIGNMENT_REQUEST, "Assignment Request", ASSIGNMENT_REQUEST),
    message(message_type::ASSIGNMENT_COMPLETE, "Assignment Complete", ASSIGNMENT_COMPLETE),
    message(message_type::ASSIGNMENT_FAILURE, "Assignment Failure", ASSIGNMENT_FAILURE),
    message(message_type::HANDOVER_REQUEST, "Handover Request", HANDOVER_REQUEST),
    message(message_type::HANDOVER_REQUIRED, "Handover Required", HANDOVER_REQUIRED),
    message(
        message_type::HANDOVER_REQUEST_ACKNOWLEDGE,
        "Handover Request Acknowledge",
        HANDOVER_REQUEST_ACKNOWLEDGE,
    ),
    message(message_type::HANDOVER_COMMAND, "Handover Command", HANDOVER_COMMAND),
    message(message_type::HANDOVER_COMPLETE, "Handover Complete", HANDOVER_COMPLETE),
    message(message_type::HANDOVER_FAILURE, "Handover Failure", HANDOVER_FAILURE),
    message(message_type::CLEAR_COMMAND, "Clear Command", CLEAR_COMMAND),
    message(message_type::CLEAR_COMPLETE, "Clear Complete", &[]),
    message(message_type::CLEAR_REQUEST, "Clear Request", CLEAR_REQUEST),
    message(message_type::RESET, "Reset", RESET),
    message(message_type::RESET_ACKNOWLEDGE, "Reset Acknowledge", &[]),
    message(message_type::RESOURCE_INDICATION, "Resource Indication", RESOURCE_INDICATION),
    message(message_type::PAGING, "Paging", PAGING),
    message(message_type::CIPHER_MODE_COMMAND, "Cipher Mode Command", CIPHER_MODE_COMMAND),
    message(message_type::CLASSMARK_UPDATE, "Classmark Update", CLASSMARK_UPDATE),
    message(message_type::CIPHER_MODE_COMPLETE, "Cipher Mode Complete", CIPHER_MODE_COMPLETE),
    message(
        message_type::COMPLETE_LAYER3_INFORMATION,
        "Complete Layer 3 Information",
        COMPLETE_LAYER3_INFORMATION,
    ),
    message(message_type::CLASSMARK_REQUEST, "Classmark Request", &[]),
    message(message_type::CIPHER_MODE_REJECT, "Cipher Mode Reject", CIPHER_MODE_REJECT),
];

/// BSSMAP message-type dispatch table.
pub static BSSMAP_MESSAGES: MessageTable =
    MessageTable::new("BSSMAP", &BSSMAP_ELEMENTS, MESSAGE_LIST);
