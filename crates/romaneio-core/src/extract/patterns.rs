//! Compiled patterns for order-document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header of the billing-data section; the customer name is searched in
    // the page text after it.
    pub static ref BILLING_SECTION: Regex = Regex::new(
        r"(?i)DADOS PARA FATURAMENTO"
    ).unwrap();

    // "R. Social" line inside the billing section. The capture must carry
    // the SENDAS token and ends at the next field label, a newline, or the
    // end of the window. The terminator is consumed by the match; only
    // group 1 is used.
    pub static ref COMPANY_LINE: Regex = Regex::new(
        r"(?is)R\. Social\s+(.*?SENDAS.*?)(?:\s*R\. Social|\s*Endereço|\s*Bairro|\s*Cidade|\s*Cep|\n|$)"
    ).unwrap();

    // Quantity/unit token as printed on order lines, e.g. `0018,00KG`,
    // `004,00UN`, `1.234,00KG`.
    pub static ref QUANTITY_UNIT: Regex = Regex::new(
        r"(?i)(\d{1,4}(?:\.\d{3})*,\d{2})\s*(KG|UN)\b"
    ).unwrap();
}
