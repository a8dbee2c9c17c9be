use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::extractor::types::PostedDate;

/// Valores de `TRNTYPE` do OFX produzidos pelo conversor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Payment,
    Pos,
    Atm,
    DirectDebit,
    DirectDep,
    Credit,
    Debit,
    Other,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "PAYMENT",
            TransactionType::Pos => "POS",
            TransactionType::Atm => "ATM",
            TransactionType::DirectDebit => "DIRECTDEBIT",
            TransactionType::DirectDep => "DIRECTDEP",
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
            TransactionType::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uma linha da origem já normalizada.
///
/// `name` e `memo` já estão escapados para XML; `counter_account` é copiado
/// literalmente da origem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub account: String,
    pub transaction_type: TransactionType,
    pub posted_date: PostedDate,
    pub amount: String,
    pub fit_id: String,
    pub name: String,
    pub counter_account: String,
    pub memo: String,
}

/// Resultado de uma conversão bem-sucedida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub transaction_count: usize,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TRANSACTIONS: {}", self.transaction_count)?;
        writeln!(f, "IN:           {}", self.source_path.display())?;
        write!(f, "OUT:          {}", self.output_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn create_test_record() -> TransactionRecord {
        TransactionRecord {
            account: "NL01INGB0001234567".to_string(),
            transaction_type: TransactionType::DirectDebit,
            posted_date: NaiveDate::from_ymd_opt(2016, 1, 31).unwrap().into(),
            amount: "-12.34".to_string(),
            fit_id: "NL99BANK0123456789201601311234".to_string(),
            name: "Energy &amp; Water".to_string(),
            counter_account: "NL99BANK0123456789".to_string(),
            memo: "Invoice 42".to_string(),
        }
    }

    #[rstest]
    #[case(TransactionType::Payment, "PAYMENT")]
    #[case(TransactionType::Pos, "POS")]
    #[case(TransactionType::Atm, "ATM")]
    #[case(TransactionType::DirectDebit, "DIRECTDEBIT")]
    #[case(TransactionType::DirectDep, "DIRECTDEP")]
    #[case(TransactionType::Credit, "CREDIT")]
    #[case(TransactionType::Debit, "DEBIT")]
    #[case(TransactionType::Other, "OTHER")]
    fn test_transaction_type_ofx_code(#[case] kind: TransactionType, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", expected));
    }

    #[test]
    fn test_transaction_record_serialization() {
        let record = create_test_record();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"posted_date\":\"20160131\""));
        assert!(json.contains("DIRECTDEBIT"));

        let deserialized: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_summary_display_lines() {
        let summary = ConversionSummary {
            transaction_count: 3,
            source_path: PathBuf::from("in/export.csv"),
            output_path: PathBuf::from("/tmp/ofx/export.ofx"),
        };

        let text = summary.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "TRANSACTIONS: 3");
        assert_eq!(lines[1], "IN:           in/export.csv");
        assert_eq!(lines[2], "OUT:          /tmp/ofx/export.ofx");
    }
}
