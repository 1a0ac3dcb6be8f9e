use crate::common::DecodeError;
use crate::core::control::{self, ControlSignals};
use crate::isa::InstructionFields;

/// A fetched word together with its fields and control signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub word: u32,
    pub fields: InstructionFields,
    pub ctrl: ControlSignals,
}

/// Runs the field extractor and the control unit on one word.
pub fn decode_stage(word: u32) -> Result<Decoded, DecodeError> {
    let fields = InstructionFields::extract(word);
    let ctrl = control::decode(&fields)?;
    Ok(Decoded { word, fields, ctrl })
}
