//! Ledger module - the donation ledger engine.
//!
//! Keeps a campaign's running total synchronized with the append/revert log
//! of payment records, under concurrent writes and partial failures.

mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;


pub use ledger_errors::LedgerError;
pub use ledger_model::{DonationHistoryEntry, NewPayment, PaymentRecord, Reversal};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
