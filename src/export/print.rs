//! Print-ready document export
//!
//! Produces a single self-contained HTML page: inline styles, no external
//! resources, and a button that opens the browser's print dialog.

use std::fmt::Write as _;

use chrono::NaiveDate;

use super::file_name;
use crate::catalog::FormattedTable;
use crate::error::ExportError;

const STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 24px; color: #222; }
h1 { font-size: 20px; margin: 0 0 4px 0; }
.generated { font-size: 12px; color: #666; margin-bottom: 16px; }
table { border-collapse: collapse; width: 100%; font-size: 12px; }
th, td { border: 1px solid #ccc; padding: 6px 8px; text-align: left; }
th { background: #f2f2f2; }
tr:nth-child(even) td { background: #fafafa; }
.print-button { margin-bottom: 16px; padding: 6px 14px; cursor: pointer; }
@media print { .print-button { display: none; } }
";

/// Escape text for HTML element and attribute content
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a formatted table as a printable HTML document
///
/// `generated_at` is shown verbatim under the title.
pub fn to_print_document(
    title: &str,
    table: &FormattedTable,
    generated_at: &str,
) -> Result<String, ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyResult);
    }

    let title = html_escape(title);
    let mut html = String::new();

    // Writing to a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n"
    );
    html.push_str("<button class=\"print-button\" onclick=\"window.print()\">Print</button>\n");
    let _ = writeln!(html, "<h1>{}</h1>", title);
    let _ = writeln!(
        html,
        "<div class=\"generated\">Generated: {}</div>",
        html_escape(generated_at)
    );

    html.push_str("<table>\n<thead>\n<tr>");
    for header in table.headers() {
        let _ = write!(html, "<th>{}</th>", html_escape(header));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", html_escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

    Ok(html)
}

/// File name for a saved print document: `{title}_{YYYY-MM-DD}.html`
pub fn print_file_name(title: &str, date: NaiveDate) -> String {
    file_name(title, date, "html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormattedColumn;

    fn table() -> FormattedTable {
        FormattedTable {
            columns: vec![FormattedColumn::for_key("nombre"), FormattedColumn::for_key("notas")],
            rows: vec![
                vec!["Ana".into(), "<b>urgent</b> & fragile".into()],
                vec!["Luis".into(), "—".into()],
            ],
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(html_escape(r#"a & "b""#), "a &amp; &quot;b&quot;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_print_document_contents() {
        let html = to_print_document("Clients Report", &table(), "07/03/2024 10:15").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Clients Report</title>"));
        assert!(html.contains("<h1>Clients Report</h1>"));
        assert!(html.contains("Generated: 07/03/2024 10:15"));
        assert!(html.contains("<th>Name</th><th>Notas</th>"));
        assert!(html.contains("<td>&lt;b&gt;urgent&lt;/b&gt; &amp; fragile</td>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_print_document_has_no_external_resources() {
        let html = to_print_document("Orders Report", &table(), "now").unwrap();
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script src"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_print_document_empty_table() {
        let err = to_print_document("Orders Report", &FormattedTable::default(), "now").unwrap_err();
        assert_eq!(err, ExportError::EmptyResult);
    }

    #[test]
    fn test_print_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(print_file_name("Orders Report", date), "Orders Report_2024-12-31.html");
    }
}
