use chrono::NaiveDate;

use super::statement::AccountStatement;
use crate::types::TransactionRecord;

const CURRENCY: &str = "EUR";
const BANK_ID: &str = "121099999";
const ACCOUNT_TYPE: &str = "CHECKING";
const FI_ORG: &str = "NCH";
const FI_ID: &str = "1001";
const TRNUID: &str = "1001";
// O saldo contábil não é calculado a partir do extrato.
const LEDGER_BALANCE: &str = "0";
const LEDGER_BALANCE_AS_OF: &str = "199910291120";

/// Gera a resposta de extrato OFX completa.
pub fn render(statements: &[AccountStatement<'_>], generated_on: NaiveDate) -> String {
    let mut out = String::new();
    write_header(&mut out, generated_on);
    for statement in statements {
        write_statement(&mut out, statement);
    }
    write_footer(&mut out);
    out
}

fn write_header(out: &mut String, generated_on: NaiveDate) {
    let today = generated_on.format("%Y%m%d");
    out.push_str(&format!(
        r#"
<OFX>
   <SIGNONMSGSRSV1>
      <SONRS>
         <STATUS>
            <CODE>0</CODE>
            <SEVERITY>INFO</SEVERITY>
         </STATUS>
         <DTSERVER>{today}</DTSERVER>
         <LANGUAGE>ENG</LANGUAGE>
         <DTPROFUP>{today}</DTPROFUP>
         <DTACCTUP>{today}</DTACCTUP>
         <FI>
            <ORG>{FI_ORG}</ORG>
            <FID>{FI_ID}</FID>
         </FI>
      </SONRS>
   </SIGNONMSGSRSV1>
   <BANKMSGSRSV1>
      <STMTTRNRS>
         <TRNUID>{TRNUID}</TRNUID>
         <STATUS>
            <CODE>0</CODE>
            <SEVERITY>INFO</SEVERITY>
         </STATUS>"#
    ));
}

fn write_statement(out: &mut String, statement: &AccountStatement<'_>) {
    out.push_str(&format!(
        r#"
         <STMTRS>
            <CURDEF>{CURRENCY}</CURDEF>
            <BANKACCTFROM>
               <BANKID>{BANK_ID}</BANKID>
               <ACCTID>{account}</ACCTID>
               <ACCTTYPE>{ACCOUNT_TYPE}</ACCTTYPE>
            </BANKACCTFROM>
            <BANKTRANLIST>
               <DTSTART>{start}</DTSTART>
               <DTEND>{end}</DTEND>"#,
        account = statement.account,
        start = statement.min_date,
        end = statement.max_date,
    ));

    for record in &statement.transactions {
        write_transaction(out, record);
    }

    out.push_str(&format!(
        r#"
            </BANKTRANLIST>
            <LEDGERBAL>
               <BALAMT>{LEDGER_BALANCE}</BALAMT>
               <DTASOF>{LEDGER_BALANCE_AS_OF}</DTASOF>
            </LEDGERBAL>
         </STMTRS>"#
    ));
}

fn write_transaction(out: &mut String, record: &TransactionRecord) {
    out.push_str(&format!(
        r#"
               <STMTTRN>
                  <TRNTYPE>{trn_type}</TRNTYPE>
                  <DTPOSTED>{posted}</DTPOSTED>
                  <TRNAMT>{amount}</TRNAMT>
                  <FITID>{fit_id}</FITID>
                  <NAME>{name}</NAME>
                  <BANKACCTTO>
                     <BANKID></BANKID>
                     <ACCTID>{counter_account}</ACCTID>
                     <ACCTTYPE>{ACCOUNT_TYPE}</ACCTTYPE>
                  </BANKACCTTO>
                  <MEMO>{memo}</MEMO>
               </STMTTRN>"#,
        trn_type = record.transaction_type,
        posted = record.posted_date,
        amount = record.amount,
        fit_id = record.fit_id,
        name = record.name,
        counter_account = record.counter_account,
        memo = record.memo,
    ));
}

fn write_footer(out: &mut String) {
    out.push_str(
        r#"
      </STMTTRNRS>
   </BANKMSGSRSV1>
</OFX>
"#,
    );
}
