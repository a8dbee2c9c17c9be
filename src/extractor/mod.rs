//! Lê o extrato CSV do banco em [`TransactionRecord`](crate::TransactionRecord)s normalizados.

mod dto;
mod fitid;
mod parser;
mod text;

pub mod types;

pub use fitid::FitIdRegistry;
pub use parser::{ExtractOptions, RecordExtractor};
pub use types::{Direction, PostedDate};
