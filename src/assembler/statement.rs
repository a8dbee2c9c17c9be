use std::collections::HashMap;

use crate::extractor::PostedDate;
use crate::types::TransactionRecord;

/// Os registros de uma conta junto com suas datas limite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStatement<'a> {
    pub account: &'a str,
    pub min_date: PostedDate,
    pub max_date: PostedDate,
    pub transactions: Vec<&'a TransactionRecord>,
}

impl<'a> AccountStatement<'a> {
    fn new(first: &'a TransactionRecord) -> Self {
        Self {
            account: &first.account,
            min_date: first.posted_date,
            max_date: first.posted_date,
            transactions: vec![first],
        }
    }

    fn push(&mut self, record: &'a TransactionRecord) {
        self.min_date = self.min_date.min(record.posted_date);
        self.max_date = self.max_date.max(record.posted_date);
        self.transactions.push(record);
    }
}

/// Agrupa os registros por conta: contas na ordem em que aparecem pela
/// primeira vez, registros na ordem original dentro de cada conta.
pub fn group_by_account(records: &[TransactionRecord]) -> Vec<AccountStatement<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut statements: Vec<AccountStatement<'_>> = Vec::new();

    for record in records {
        match index.get(record.account.as_str()).copied() {
            Some(i) => statements[i].push(record),
            None => {
                index.insert(&record.account, statements.len());
                statements.push(AccountStatement::new(record));
            }
        }
    }

    statements
}
