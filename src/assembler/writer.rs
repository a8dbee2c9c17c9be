use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::statement::group_by_account;
use super::template::render;
use crate::errors::{ConvertError, ConvertResult};
use crate::types::{ConversionSummary, TransactionRecord};

/// Onde e com qual nome o documento OFX é gravado.
#[derive(Debug, Clone)]
pub struct OutputTarget<'a> {
    pub source_path: &'a Path,
    pub output_dir: &'a Path,
    pub file_name: Option<&'a str>,
}

impl OutputTarget<'_> {
    /// O nome explícito, ou o nome base da origem, com `csv`/`CSV`
    /// substituídos por `ofx`/`OFX`.
    pub fn resolved_file_name(&self) -> String {
        let base = match self.file_name {
            Some(name) => name.to_string(),
            None => self
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        base.replace("csv", "ofx").replace("CSV", "OFX")
    }
}

/// Grava um documento OFX para `records` e resume o que foi gravado.
///
/// Um arquivo já existente no destino é sobrescrito.
pub fn write_statement(
    records: &[TransactionRecord],
    target: &OutputTarget<'_>,
    generated_on: NaiveDate,
) -> ConvertResult<ConversionSummary> {
    let output_dir = prepare_dir(target.output_dir)?;
    let output_path = output_dir.join(target.resolved_file_name());

    let statements = group_by_account(records);
    debug!(accounts = statements.len(), "grouped transactions by account");

    let document = render(&statements, generated_on);
    fs::write(&output_path, document).map_err(|source| ConvertError::OutputWrite {
        path: output_path.clone(),
        source,
    })?;

    info!(
        path = %output_path.display(),
        transactions = records.len(),
        "wrote OFX statement"
    );

    Ok(ConversionSummary {
        transaction_count: records.len(),
        source_path: target.source_path.to_path_buf(),
        output_path,
    })
}

fn prepare_dir(dir: &Path) -> ConvertResult<PathBuf> {
    let output_error = |source: std::io::Error| ConvertError::OutputWrite {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(output_error)?;
    fs::canonicalize(dir).map_err(output_error)
}
