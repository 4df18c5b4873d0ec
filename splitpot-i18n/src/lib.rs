#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const TOTAL_CONTRIBUTED: &str = "Total aportado (real)";
    pub const TOTAL_SPENT: &str = "Total gastado";
    pub const EQUAL_SHARE: &str = "A cada uno le toca (reparto equitativo)";
    pub const INITIAL_SURPLUS: &str = "Sobrante (inicial)";
    pub const SURPLUS_POOL: &str = "Sobrante";
    pub const FROM: &str = "De";
    pub const TO: &str = "A";
    pub const AMOUNT: &str = "Monto";
    pub const PAYER: &str = "Quién paga";
    pub const PAYEE: &str = "A quién";
    pub const SURPLUS_HEADING: &str = "1) Quién coge cuánto del sobrante";
    pub const SETTLEMENT_HEADING: &str = "2) Después de eso, quién debe cuánto a quién";
    pub const SURPLUS_UNCLAIMED: &str = "Nota: Sobró dinero, pero nadie tenía que recibir.";
    pub const NO_SURPLUS_DISTRIBUTION: &str = "No hubo reparto de sobrante.";
    pub const NO_PENDING_PAYMENTS: &str =
        "No hay pagos pendientes entre personas (nadie debe a nadie).";
    pub const DETAILS_HEADING: &str = "Detalles:";
    pub const DETAILS_SURPLUS_STEP: &str = "1) Primero se reparte el sobrante a quienes tienen balance positivo, de menor a mayor, reduciendo sus balances.";
    pub const DETAILS_SETTLEMENT_STEP: &str = "2) Luego se calculan las transacciones entre quienes aún tengan saldo negativo y saldo positivo.";
    pub const NO_PARTICIPANTS: &str = "Hace falta al menos un participante.";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Falló el cálculo del reparto";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const TOTAL_CONTRIBUTED: &str = "Total contributed";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const EQUAL_SHARE: &str = "Equal share per person";
    pub const INITIAL_SURPLUS: &str = "Surplus (initial)";
    pub const SURPLUS_POOL: &str = "surplus-pool";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PAYER: &str = "Payer";
    pub const PAYEE: &str = "Payee";
    pub const SURPLUS_HEADING: &str = "1) Who takes how much of the surplus";
    pub const SETTLEMENT_HEADING: &str = "2) After that, who owes how much to whom";
    pub const SURPLUS_UNCLAIMED: &str = "Note: Money was left over, but nobody was owed anything.";
    pub const NO_SURPLUS_DISTRIBUTION: &str = "No surplus was distributed.";
    pub const NO_PENDING_PAYMENTS: &str =
        "No pending payments between people (nobody owes anybody).";
    pub const DETAILS_HEADING: &str = "Details:";
    pub const DETAILS_SURPLUS_STEP: &str = "1) The surplus is first handed to those with a positive balance, smallest first, reducing their balances.";
    pub const DETAILS_SETTLEMENT_STEP: &str = "2) Transfers are then computed between those still holding a negative and a positive balance.";
    pub const NO_PARTICIPANTS: &str = "At least one participant is required.";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
}

#[cfg(not(any(feature = "es", feature = "en")))]
pub mod strings {
    pub const TOTAL_CONTRIBUTED: &str = "Total contributed";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const EQUAL_SHARE: &str = "Equal share per person";
    pub const INITIAL_SURPLUS: &str = "Surplus (initial)";
    pub const SURPLUS_POOL: &str = "surplus-pool";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PAYER: &str = "Payer";
    pub const PAYEE: &str = "Payee";
    pub const SURPLUS_HEADING: &str = "1) Who takes how much of the surplus";
    pub const SETTLEMENT_HEADING: &str = "2) After that, who owes how much to whom";
    pub const SURPLUS_UNCLAIMED: &str = "Note: Money was left over, but nobody was owed anything.";
    pub const NO_SURPLUS_DISTRIBUTION: &str = "No surplus was distributed.";
    pub const NO_PENDING_PAYMENTS: &str =
        "No pending payments between people (nobody owes anybody).";
    pub const DETAILS_HEADING: &str = "Details:";
    pub const DETAILS_SURPLUS_STEP: &str = "1) The surplus is first handed to those with a positive balance, smallest first, reducing their balances.";
    pub const DETAILS_SETTLEMENT_STEP: &str = "2) Transfers are then computed between those still holding a negative and a positive balance.";
    pub const NO_PARTICIPANTS: &str = "At least one participant is required.";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
}

pub use strings::*;

#[cfg(feature = "es")]
pub fn default_participant_name(position: usize) -> String {
    format!("Persona{position}")
}

#[cfg(feature = "es")]
pub fn unknown_member(id: impl std::fmt::Display) -> String {
    format!("Participante {id}")
}

#[cfg(not(feature = "es"))]
pub fn default_participant_name(position: usize) -> String {
    format!("Person{position}")
}

#[cfg(not(feature = "es"))]
pub fn unknown_member(id: impl std::fmt::Display) -> String {
    format!("Participant {id}")
}

pub fn summary_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label}: {value}")
}

#[cfg(feature = "es")]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Línea {line}: error de sintaxis - {detail}")
}

#[cfg(feature = "es")]
pub fn missing_total_spent() -> &'static str {
    "Falta la línea `GASTO := <importe>` con el total gastado."
}

#[cfg(feature = "es")]
pub fn duplicate_total_spent(line: usize, first_line: usize) -> String {
    format!("Línea {line}: el total gastado ya se declaró en la línea {first_line}.")
}

#[cfg(not(feature = "es"))]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Line {line}: Syntax error - {detail}")
}

#[cfg(not(feature = "es"))]
pub fn missing_total_spent() -> &'static str {
    "Missing `SPENT := <amount>` line with the total spent."
}

#[cfg(not(feature = "es"))]
pub fn duplicate_total_spent(line: usize, first_line: usize) -> String {
    format!("Line {line}: total spent was already declared at line {first_line}.")
}
