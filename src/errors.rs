use std::path::PathBuf;

use thiserror::Error;

/// Erros possíveis durante a conversão de um extrato CSV para OFX
#[derive(Error, Debug)]
pub enum ConvertError {
    /// O arquivo de origem não existe ou não pôde ser aberto
    #[error("Source file not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Linha do CSV sem coluna obrigatória ou com valor inválido
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    /// Falha ao criar o diretório de saída ou ao gravar o documento
    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// O builder foi chamado sem caminho de arquivo de origem
    #[error("Source path is required")]
    MissingSourcePath,
}

impl ConvertError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_malformed_input_message() {
        let err = ConvertError::malformed(3, "missing field `Rekening`");
        assert_eq!(
            err.to_string(),
            "Malformed input at line 3: missing field `Rekening`"
        );
    }

    #[test]
    fn test_source_not_found_keeps_io_source() {
        let err = ConvertError::SourceNotFound {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("missing.csv"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("no such file"));
    }
}
