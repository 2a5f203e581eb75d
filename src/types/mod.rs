//! Request and response types for the Celcoin API.

pub mod balance;
pub mod boletos;
pub mod business;
pub mod common;
pub mod customers;
pub mod income_report;
pub mod payments;
pub mod pix;
pub mod statements;
pub mod transfers;
pub mod webhooks;

pub use common::{
    Acknowledgement, AccountNumber, AccountType, Address, ApiEnvelope, PersonType,
    ResponseStatus, TransactionReceipt,
};
