use goodlife::instruction::wire::{self, GoodlifeInstruction};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

fn data(ix: GoodlifeInstruction) -> Vec<u8> {
    ix.to_bytes().unwrap()
}

pub fn initialize() -> Instruction {
    Instruction {
        program_id: super::program_id(),
        accounts: vec![],
        data: data(GoodlifeInstruction::Initialize),
    }
}

pub fn create_organizer(organizer: &Pubkey, payer: &Pubkey, name: &str) -> Instruction {
    Instruction {
        program_id: super::program_id(),
        accounts: vec![
            AccountMeta::new(*organizer, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: data(GoodlifeInstruction::CreateOrganizer(wire::CreateOrganizer {
            name: name.to_string(),
        })),
    }
}

pub fn create_event(
    event: &Pubkey,
    organizer: &Pubkey,
    payer: &Pubkey,
    props: wire::EventAttribute,
) -> Instruction {
    Instruction {
        program_id: super::program_id(),
        accounts: vec![
            AccountMeta::new(*event, true),
            AccountMeta::new(*organizer, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: data(GoodlifeInstruction::CreateEvent(props)),
    }
}

pub fn event_props(name: &str, venue: &str, total_tickets: u32, base_price: u64) -> wire::EventAttribute {
    wire::EventAttribute {
        name: name.to_string(),
        venue: venue.to_string(),
        total_tickets,
        base_price,
    }
}
