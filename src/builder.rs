use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembler::{OutputTarget, write_statement};
use crate::errors::{ConvertError, ConvertResult};
use crate::extractor::{ExtractOptions, RecordExtractor};
use crate::types::ConversionSummary;

fn default_output_dir() -> PathBuf {
    PathBuf::from("ofx")
}

/// Parâmetros de uma execução de conversão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub source_path: PathBuf,
    pub output_file_name: Option<String>,
    pub output_dir: PathBuf,
    pub convert_decimal_separator: bool,
    pub convert_date_format: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            output_file_name: None,
            output_dir: default_output_dir(),
            convert_decimal_separator: false,
            convert_date_format: false,
        }
    }
}

#[derive(Default)]
pub struct ConverterBuilder {
    source_path: Option<PathBuf>,
    output_file_name: Option<String>,
    output_dir: Option<PathBuf>,
    convert_decimal_separator: bool,
    convert_date_format: bool,
    generated_on: Option<NaiveDate>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: ConvertOptions) -> Self {
        let source_path = Some(options.source_path).filter(|p| !p.as_os_str().is_empty());
        Self {
            source_path,
            output_file_name: options.output_file_name,
            output_dir: Some(options.output_dir),
            convert_decimal_separator: options.convert_decimal_separator,
            convert_date_format: options.convert_date_format,
            generated_on: None,
        }
    }

    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn output_file_name(mut self, name: &str) -> Self {
        self.output_file_name = Some(name.to_string());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn convert_decimal_separator(mut self, enabled: bool) -> Self {
        self.convert_decimal_separator = enabled;
        self
    }

    pub fn convert_date_format(mut self, enabled: bool) -> Self {
        self.convert_date_format = enabled;
        self
    }

    /// Data gravada no cabeçalho de sign-on. Padrão: data local de hoje.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Lê toda a origem antes de tocar no diretório de saída; uma extração
    /// com falha não cria nem sobrescreve nada.
    pub fn convert(self) -> ConvertResult<ConversionSummary> {
        let source_path = self.source_path.ok_or(ConvertError::MissingSourcePath)?;
        let output_dir = self.output_dir.unwrap_or_else(default_output_dir);
        let generated_on = self
            .generated_on
            .unwrap_or_else(|| Local::now().date_naive());

        let extractor = RecordExtractor::new(ExtractOptions {
            convert_decimal_separator: self.convert_decimal_separator,
            convert_date_format: self.convert_date_format,
        });
        let records = extractor.extract_file(&source_path)?;
        debug!(count = records.len(), "source extracted, assembling statement");

        let target = OutputTarget {
            source_path: &source_path,
            output_dir: &output_dir,
            file_name: self.output_file_name.as_deref(),
        };
        write_statement(&records, &target, generated_on)
    }
}

/// Executa a conversão descrita em `options`.
pub fn convert(options: ConvertOptions) -> ConvertResult<ConversionSummary> {
    ConverterBuilder::from_options(options).convert()
}
