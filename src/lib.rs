//! Converte extratos CSV do ING em arquivos de extrato OFX.
//!
//! ```rust,ignore
//! use bank_statement_ofx::ConverterBuilder;
//!
//! let summary = ConverterBuilder::new()
//!     .source("NL01INGB0001234567_01-01-2016_31-01-2016.csv")
//!     .output_dir("ofx")
//!     .convert_decimal_separator(true)
//!     .convert_date_format(true)
//!     .convert()?;
//! println!("{summary}");
//! ```

mod builder;
mod types;

pub mod assembler;
pub mod errors;
pub mod extractor;

pub use builder::{ConvertOptions, ConverterBuilder, convert};
pub use errors::{ConvertError, ConvertResult};
pub use extractor::{ExtractOptions, RecordExtractor};
pub use types::{ConversionSummary, TransactionRecord, TransactionType};
