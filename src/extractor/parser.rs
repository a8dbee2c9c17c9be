use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use super::dto::IngCsvRow;
use super::fitid::{self, FitIdRegistry};
use super::text::{clean_text, time_fragment};
use super::types::{Direction, PostedDate, transaction_type};
use crate::errors::{ConvertError, ConvertResult};
use crate::types::TransactionRecord;

/// Conversões de formato aplicadas durante a leitura das linhas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Troca `,` por `.` nos valores.
    pub convert_decimal_separator: bool,
    /// Lê as datas como `DD-MM-YYYY` em vez de `YYYYMMDD`.
    pub convert_date_format: bool,
}

/// Lê um extrato CSV do banco em [`TransactionRecord`]s, na ordem das linhas.
pub struct RecordExtractor {
    options: ExtractOptions,
}

impl RecordExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn extract_file(&self, path: &Path) -> ConvertResult<Vec<TransactionRecord>> {
        let file = File::open(path).map_err(|source| ConvertError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading source file");
        self.extract_from(file, Some(path))
    }

    /// Para na primeira linha que não pode ser lida ou normalizada.
    pub fn extract<R: Read>(&self, reader: R) -> ConvertResult<Vec<TransactionRecord>> {
        self.extract_from(reader, None)
    }

    fn extract_from<R: Read>(
        &self,
        reader: R,
        source_path: Option<&Path>,
    ) -> ConvertResult<Vec<TransactionRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .quote(b'"')
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| read_error(e, source_path))?
            .clone();
        let mut raw = StringRecord::new();
        let mut registry = FitIdRegistry::new();
        let mut records = Vec::new();

        while reader
            .read_record(&mut raw)
            .map_err(|e| read_error(e, source_path))?
        {
            let line = raw.position().map(|p| p.line()).unwrap_or(0);
            let row: IngCsvRow = raw
                .deserialize(Some(&headers))
                .map_err(|e| ConvertError::malformed(line, format!("CSV deserialize error: {}", e)))?;
            let record = self
                .normalize(row, &mut registry)
                .map_err(|reason| ConvertError::malformed(line, reason))?;
            records.push(record);
        }

        debug!(count = records.len(), "extracted transactions");
        Ok(records)
    }

    fn normalize(
        &self,
        row: IngCsvRow,
        registry: &mut FitIdRegistry,
    ) -> Result<TransactionRecord, String> {
        let account: String = row.account.split_whitespace().collect();
        let direction = Direction::parse(&row.direction)?;
        let transaction_type = transaction_type(&row.code, direction);
        let posted_date = PostedDate::parse(&row.date, self.options.convert_date_format)?;

        let mut amount = if self.options.convert_decimal_separator {
            row.amount.replace(',', ".")
        } else {
            row.amount
        };
        if !direction.is_incoming() {
            amount.insert(0, '-');
        }

        let name = clean_text(&row.description);
        let memo = clean_text(&row.memo);
        let time = time_fragment(&memo);

        let candidate = fitid::candidate(
            &row.counter_account,
            &posted_date.to_string(),
            &time,
            &amount,
        );
        let fit_id = registry.claim(&candidate);

        Ok(TransactionRecord {
            account,
            transaction_type,
            posted_date,
            amount,
            fit_id,
            name,
            counter_account: row.counter_account,
            memo,
        })
    }
}

// Falha de I/O ao ler um arquivo aberto conta como origem ilegível.
fn read_error(e: csv::Error, source_path: Option<&Path>) -> ConvertError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    let message = format!("CSV read error: {}", e);
    match (e.into_kind(), source_path) {
        (csv::ErrorKind::Io(source), Some(path)) => ConvertError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => ConvertError::malformed(line, message),
    }
}
