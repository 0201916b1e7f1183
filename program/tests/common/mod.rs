#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::{Transaction, TransactionError},
};

// Instruction builders mirroring the on-chain account order
pub mod ix;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(goodlife::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = env::var("BPF_OUT_DIR")
        .unwrap_or_else(|_| format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR")));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("goodlife.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(200_000);
    pt.add_upgradeable_program_to_genesis("goodlife", &program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Signs with the payer plus `signers` and processes a single-instruction transaction.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

/// Creates an active organizer funded by the context payer.
pub async fn create_organizer(ctx: &mut ProgramTestContext, name: &str) -> Keypair {
    let organizer = Keypair::new();
    let ix = ix::create_organizer(&organizer.pubkey(), &ctx.payer.pubkey(), name);
    send(ctx, ix, &[&organizer]).await.unwrap();
    organizer
}

/// Asserts that the first instruction of a failed transaction returned `expected`.
pub fn assert_instruction_error(
    result: Result<Signature, BanksClientError>,
    expected: InstructionError,
) {
    let err = result.expect_err("transaction should fail").unwrap();
    assert_eq!(err, TransactionError::InstructionError(0, expected));
}

pub fn custom(err: goodlife::error::GoodlifeError) -> InstructionError {
    InstructionError::Custom(err.code())
}
