//! HTML table document, the default export payload.

use std::fmt::Write;

use crate::export::model::{EntryRow, get_headers};

/// Build the full HTML document for a month's rows.
pub(crate) fn build_html(title: &str, rows: &[EntryRow]) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      h1 {{ color: #9333ea; text-align: center; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
      th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
      th {{ background-color: #9333ea; color: white; }}
      tr:nth-child(even) {{ background-color: #f9f9f9; }}
    </style>
  </head>
  <body>
    <h1>{}</h1>
    <table>
      <tr>"#,
        escape(title)
    );

    for header in get_headers() {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr>\n");

    for row in rows {
        let _ = write!(
            html,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.date),
            escape(&row.names),
            escape(&row.location),
            escape(&row.work_hours),
        );
    }

    html.push_str("    </table>\n  </body>\n</html>\n");
    html
}

/// Minimal escaping for user-entered text landing in markup.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
