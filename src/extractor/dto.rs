use serde::Deserialize;

/// Uma linha do extrato do banco, indexada pelos cabeçalhos em holandês.
///
/// Colunas não listadas aqui (`MutatieSoort`, ...) são ignoradas.
#[derive(Debug, Deserialize)]
pub(super) struct IngCsvRow {
    #[serde(rename = "Datum")]
    pub(super) date: String,
    #[serde(rename = "Naam / Omschrijving")]
    pub(super) description: String,
    #[serde(rename = "Rekening")]
    pub(super) account: String,
    #[serde(rename = "Tegenrekening")]
    pub(super) counter_account: String,
    #[serde(rename = "Code")]
    pub(super) code: String,
    #[serde(rename = "Af Bij")]
    pub(super) direction: String,
    #[serde(rename = "Bedrag (EUR)")]
    pub(super) amount: String,
    #[serde(rename = "Mededelingen")]
    pub(super) memo: String,
}
