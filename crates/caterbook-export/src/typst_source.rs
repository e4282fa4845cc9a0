//! Typst markup for the printed quote/invoice.
//!
//! The layout mirrors the business's paper documents: accent-colored
//! header, document numbers on the left with issuer contact on the right,
//! BILL TO and EVENT DETAILS side by side, the charges table, the totals
//! column, banking details, and a footer strip.

use caterbook_pricing::{format_date, format_zar};

use crate::layout::ExportJob;

const ACCENT: &str = "rgb(237, 125, 38)";
const DUE_RED: &str = "rgb(179, 0, 0)";

/// Escape text so user input renders literally in Typst markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '#' | '$' | '%' | '&' | '*' | '_' | '~' | '@' | '[' | ']' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Multi-line user text (addresses) as Typst forced line breaks.
fn multiline(text: &str) -> String {
    text.lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join(" \\\n")
}

/// Quantities print without a trailing `.0` for whole numbers.
fn quantity(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl ExportJob {
    /// Build the complete Typst source for this document.
    pub fn typst_source(&self) -> String {
        let doc = &self.document;
        let profile = &self.profile;
        let totals = self.totals();
        let label = doc.kind.display_name();

        let mut source = format!(
            "#set page(width: 595.28pt, height: 841.89pt, margin: (x: 40pt, top: 44pt, bottom: 44pt))\n\
             #set text(size: 10pt)\n\
             #let accent = {ACCENT}\n\n\
             #text(size: 22pt, weight: \"bold\", fill: accent)[{name}]\n",
            name = escape(&profile.name),
        );
        if !profile.tagline.is_empty() {
            source.push_str(&format!(
                "#linebreak()\n#text(style: \"italic\")[{}]\n",
                escape(&profile.tagline)
            ));
        }

        source.push_str(&format!(
            "#v(14pt)\n\
             #grid(columns: (1fr, 1fr), gutter: 12pt,\n\
             [\n\
             *{label} Number:* {id} \\\n\
             *{label} Date:* {date} \\\n\
             *Due Date:* {due}\n\
             ],\n\
             align(right)[\n\
             {issuer}\n\
             ],\n\
             )\n",
            id = escape(&doc.id),
            date = format_date(doc.created_at),
            due = escape(&profile.due_note),
            issuer = multiline(&[
                profile.location.as_str(),
                profile.email.as_str(),
                profile.phone.as_str(),
            ]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")),
        ));

        let mut bill_to = format!("*{}*", escape(&doc.client_name));
        if !doc.company.is_empty() {
            bill_to.push_str(&format!(" \\\n{}", escape(&doc.company)));
        }
        if !doc.address.is_empty() {
            bill_to.push_str(&format!(" \\\n{}", multiline(&doc.address)));
        }
        for contact in [&doc.email, &doc.phone] {
            if !contact.is_empty() {
                bill_to.push_str(&format!(" \\\n{}", escape(contact)));
            }
        }

        source.push_str(&format!(
            "#v(18pt)\n\
             #grid(columns: (1fr, 1fr), gutter: 12pt,\n\
             [\n\
             #text(weight: \"bold\", fill: accent)[BILL TO:]\n\
             #linebreak()\n\
             {bill_to}\n\
             ],\n\
             [\n\
             #text(weight: \"bold\", fill: accent)[EVENT DETAILS]\n\
             #linebreak()\n\
             *Event Name:* {event_name} \\\n\
             *Event Date:* {event_date} \\\n\
             *Type:* {event_type} \\\n\
             *Guests:* {guests}\n\
             ],\n\
             )\n",
            event_name = escape(&doc.event_name),
            event_date = escape(&doc.event_date),
            event_type = escape(&doc.event_type),
            guests = quantity(doc.guest_count),
        ));

        let mut rows = String::new();
        for item in self.line_items() {
            rows.push_str(&format!(
                "[{}], [{}], [{}], [{}],\n",
                escape(&item.description),
                quantity(item.quantity),
                format_zar(item.unit_price),
                format_zar(item.total),
            ));
        }
        source.push_str(&format!(
            "#v(18pt)\n\
             #table(\n\
             columns: (1fr, auto, auto, auto),\n\
             align: (left, right, right, right),\n\
             fill: (_, row) => if row == 0 {{ luma(235) }} else {{ white }},\n\
             [*DESCRIPTION*], [*QUANTITY*], [*UNIT PRICE (ZAR)*], [*TOTAL (ZAR)*],\n\
             {rows})\n",
        ));

        source.push_str(&format!(
            "#v(10pt)\n#align(right)[\n*Subtotal:* {}\n",
            format_zar(totals.grand_total)
        ));
        if self.charges.deposit > 0.0 {
            source.push_str(&format!(
                "#linebreak()\nDeposit Received: -{}\n",
                format_zar(self.charges.deposit)
            ));
        }
        source.push_str(&format!(
            "#linebreak()\n#text(weight: \"bold\", fill: {DUE_RED})[BALANCE DUE: {}]\n]\n",
            format_zar(totals.balance_due)
        ));

        let banking = &profile.banking;
        source.push_str(&format!(
            "#v(18pt)\n\
             #text(weight: \"bold\", fill: accent)[BANKING DETAILS]\n\
             #linebreak()\n\
             *EFT Payment:* \\\n\
             {account_name} \\\n\
             {bank} \\\n\
             Account: {account_number} \\\n\
             Branch Code: {branch_code} \\\n\
             Reference: {reference}\n",
            account_name = escape(&banking.account_name),
            bank = escape(&banking.bank),
            account_number = escape(&banking.account_number),
            branch_code = escape(&banking.branch_code),
            reference = escape(&banking.reference_note),
        ));

        source.push_str(&format!(
            "#v(1fr)\n\
             #block(width: 100%, fill: accent, inset: 12pt)[\n\
             #align(center)[\n\
             #text(fill: white, weight: \"bold\")[Thank you for choosing {name}]\n\
             #linebreak()\n\
             #text(fill: white, size: 8pt)[{contact}]\n\
             ]\n\
             ]\n",
            name = escape(&profile.name),
            contact = escape(&profile.contact_line()),
        ));

        source
    }
}
