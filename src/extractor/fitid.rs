use std::collections::HashSet;

/// Registra os `FITID`s emitidos durante uma única extração.
#[derive(Debug, Default)]
pub struct FitIdRegistry {
    issued: HashSet<String>,
}

impl FitIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devolve `candidate` se ainda livre; senão `candidate` seguido do menor
    /// inteiro positivo que o torna livre. O resultado passa a constar como
    /// emitido.
    pub fn claim(&mut self, candidate: &str) -> String {
        let mut id = candidate.to_string();
        let mut suffix = 0u64;
        while self.issued.contains(&id) {
            suffix += 1;
            id = format!("{}{}", candidate, suffix);
        }
        self.issued.insert(id.clone());
        id
    }
}

/// Monta o id sem sufixo: contraconta, data, hora e dígitos do valor.
pub(crate) fn candidate(counter_account: &str, posted_date: &str, time: &str, amount: &str) -> String {
    let digits: String = amount
        .chars()
        .filter(|c| !matches!(c, ',' | '-' | '.'))
        .collect();
    format!("{}{}{}{}", counter_account, posted_date, time, digits)
}
