use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::TransactionType;

const OFX_DATE_FORMAT: &str = "%Y%m%d";
const DUTCH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Data de lançamento de uma transação, sempre exibida como `YYYYMMDD`.
///
/// A ordenação segue a do calendário, que coincide com a ordem numérica
/// da forma de 8 dígitos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostedDate(NaiveDate);

impl PostedDate {
    /// Interpreta a coluna de data do extrato.
    ///
    /// Com `convert_date_format` o valor vem como `DD-MM-YYYY`; sem ele o
    /// valor já deve estar em `YYYYMMDD`.
    pub fn parse(raw: &str, convert_date_format: bool) -> Result<Self, String> {
        let raw = raw.trim();
        let format = if convert_date_format {
            DUTCH_DATE_FORMAT
        } else {
            if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Invalid date '{}': expected YYYYMMDD", raw));
            }
            OFX_DATE_FORMAT
        };

        NaiveDate::parse_from_str(raw, format)
            .map(PostedDate)
            .map_err(|e| format!("Invalid date '{}': {}", raw, e))
    }
}

impl From<NaiveDate> for PostedDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(OFX_DATE_FORMAT))
    }
}

impl Serialize for PostedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PostedDate::parse(&raw, false).map_err(serde::de::Error::custom)
    }
}

/// Indicador débito/crédito da coluna `Af Bij`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `Bij`: valor creditado na conta
    Incoming,
    /// `Af`: valor debitado da conta
    Outgoing,
}

impl Direction {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("bij") {
            Ok(Direction::Incoming)
        } else if value.eq_ignore_ascii_case("af") {
            Ok(Direction::Outgoing)
        } else {
            Err(format!("Invalid debit/credit indicator '{}'", value))
        }
    }

    pub fn is_incoming(&self) -> bool {
        matches!(self, Direction::Incoming)
    }
}

/// Mapeia o código de duas letras do banco para o `TRNTYPE` do OFX.
pub fn transaction_type(code: &str, direction: Direction) -> TransactionType {
    match code.trim() {
        "GT" => TransactionType::Payment,
        "BA" => TransactionType::Pos,
        "GM" => TransactionType::Atm,
        "IC" => TransactionType::DirectDebit,
        "ST" => TransactionType::DirectDep,
        "DV" | "OV" | "VZ" if direction.is_incoming() => TransactionType::Credit,
        "DV" | "OV" | "VZ" => TransactionType::Debit,
        _ => TransactionType::Other,
    }
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("31-01-2016", true, "20160131")]
    #[case("01-12-2015", true, "20151201")]
    #[case(" 29-02-2016 ", true, "20160229")]
    #[case("20160131", false, "20160131")]
    #[case("20151201", false, "20151201")]
    fn test_posted_date_valid(
        #[case] input: &str,
        #[case] convert: bool,
        #[case] expected: &str,
    ) {
        let date = PostedDate::parse(input, convert).unwrap();
        assert_eq!(date.to_string(), expected);
    }

    #[rstest]
    #[case("20160131", true)]     // layout errado com conversão
    #[case("31-01-2016", false)]  // layout errado sem conversão
    #[case("32-01-2016", true)]   // dia inválido
    #[case("20161301", false)]    // mês inválido
    #[case("2016013", false)]     // curto demais
    #[case("", false)]
    #[case("   ", true)]
    fn test_posted_date_invalid(#[case] input: &str, #[case] convert: bool) {
        let result = PostedDate::parse(input, convert);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid date"));
    }

    #[test]
    fn test_posted_date_orders_like_numbers() {
        let early = PostedDate::parse("20151231", false).unwrap();
        let late = PostedDate::parse("20160101", false).unwrap();
        assert!(early < late);
        assert_eq!(std::cmp::max(early, late), late);
    }

    #[test]
    fn test_posted_date_serialization() {
        let date = PostedDate::parse("31-01-2016", true).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"20160131\"");

        let deserialized: PostedDate = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, date);
    }

    #[rstest]
    #[case("Bij", Direction::Incoming)]
    #[case("Af", Direction::Outgoing)]
    #[case(" bij ", Direction::Incoming)]
    #[case("AF", Direction::Outgoing)]
    fn test_direction_valid(#[case] input: &str, #[case] expected: Direction) {
        assert_eq!(Direction::parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Credit")]
    #[case("+")]
    fn test_direction_invalid(#[case] input: &str) {
        assert!(Direction::parse(input).is_err());
    }

    #[rstest]
    #[case("GT", Direction::Outgoing, TransactionType::Payment)]
    #[case("BA", Direction::Outgoing, TransactionType::Pos)]
    #[case("GM", Direction::Outgoing, TransactionType::Atm)]
    #[case("IC", Direction::Outgoing, TransactionType::DirectDebit)]
    #[case("ST", Direction::Incoming, TransactionType::DirectDep)]
    #[case("DV", Direction::Incoming, TransactionType::Credit)]
    #[case("OV", Direction::Incoming, TransactionType::Credit)]
    #[case("VZ", Direction::Incoming, TransactionType::Credit)]
    #[case("DV", Direction::Outgoing, TransactionType::Debit)]
    #[case("OV", Direction::Outgoing, TransactionType::Debit)]
    #[case("VZ", Direction::Outgoing, TransactionType::Debit)]
    #[case("AC", Direction::Incoming, TransactionType::Other)]
    #[case("", Direction::Outgoing, TransactionType::Other)]
    #[case("gt", Direction::Outgoing, TransactionType::Other)]
    fn test_transaction_type_mapping(
        #[case] code: &str,
        #[case] direction: Direction,
        #[case] expected: TransactionType,
    ) {
        assert_eq!(transaction_type(code, direction), expected);
    }
}
