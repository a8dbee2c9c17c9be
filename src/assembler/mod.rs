//! Agrupa os registros por conta e grava o documento de extrato OFX.

mod statement;
mod template;
mod writer;

pub use statement::{AccountStatement, group_by_account};
pub use template::render;
pub use writer::{OutputTarget, write_statement};
