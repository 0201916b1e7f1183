//! Host-side encoding of instruction data for clients and tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganizer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub name: String,
    pub venue: String,
    pub total_tickets: u32,
    pub base_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoodlifeInstruction {
    Initialize,
    CreateOrganizer(CreateOrganizer),
    CreateEvent(EventAttribute),
}

impl GoodlifeInstruction {
    pub fn tag(&self) -> super::GoodlifeInstruction {
        match self {
            GoodlifeInstruction::Initialize => super::GoodlifeInstruction::Initialize,
            GoodlifeInstruction::CreateOrganizer(_) => super::GoodlifeInstruction::CreateOrganizer,
            GoodlifeInstruction::CreateEvent(_) => super::GoodlifeInstruction::CreateEvent,
        }
    }

    /// Tag byte followed by the bincode-encoded arguments.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        let mut data = vec![self.tag() as u8];
        match self {
            GoodlifeInstruction::Initialize => {}
            GoodlifeInstruction::CreateOrganizer(args) => {
                data.extend_from_slice(&bincode::serialize(args)?)
            }
            GoodlifeInstruction::CreateEvent(args) => {
                data.extend_from_slice(&bincode::serialize(args)?)
            }
        }
        Ok(data)
    }
}
