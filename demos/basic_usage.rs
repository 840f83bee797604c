// ============================================================================
// Basic Usage Example
// ============================================================================

use ledger_asset::prelude::*;

fn main() -> Result<(), AssetError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Ledger Asset Example ===\n");

    let eos = Symbol::parse("EOS", 4)?;
    let token: IssuerId = "eosio.token".parse()?;
    let ext_sym = ExtendedSymbol::new(eos, token);
    println!("Symbol: {} (raw = {:#x})", eos, eos.raw());
    println!("Extended symbol: {}\n", ext_sym);

    // Balances
    let mut alice = ExtendedAmount::from_extended_symbol(1_000_000, ext_sym)?;
    let mut bob = ExtendedAmount::from_extended_symbol(0, ext_sym)?;
    let payment = ExtendedAmount::from_extended_symbol(125_000, ext_sym)?;

    println!("Transferring {} from alice to bob...", payment);
    alice.checked_sub_assign(payment)?;
    bob.checked_add_assign(payment)?;

    let mut stdout = StdoutPrinter;
    stdout.print("  alice: ");
    alice.print(&mut stdout);
    stdout.print("\n  bob:   ");
    bob.print(&mut stdout);
    stdout.print("\n\n");

    // Scalar arithmetic
    let fee = (payment.quantity() / 100_i64)?;
    println!("1% fee on payment: {}", fee);
    println!("Payment x 3: {}", (payment.quantity() * 3)?);
    println!("Payments in alice's balance: {}\n", (alice.quantity() / payment.quantity())?);

    // Rejected operations
    println!("=== Rejected Operations ===");
    let max = Amount::new(Amount::MAX_AMOUNT, eos)?;
    let one = Amount::new(1, eos)?;
    report("MAX + 1", max + one);
    report("1 / 0", one / 0_i64);
    report("lowercase ticker", Symbol::parse("eos", 4));

    let fake = ExtendedAmount::new(alice.quantity(), "fake.token".parse()?);
    report("cross-issuer add", alice + fake);
    report("cross-symbol compare", one.try_lt(&Amount::new(1, Symbol::parse("USD", 2)?)?));

    Ok(())
}

fn report<T: std::fmt::Debug>(label: &str, result: AssetResult<T>) {
    match result {
        Ok(value) => println!("  {:<22} ok: {:?}", label, value),
        Err(err) => println!("  {:<22} error: {}", label, err),
    }
}
