use super::state::RotationState;
use super::types::{RosterEntry, Table};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 44em; }\
h1 { font-size: 1.4em; } h2 { font-size: 1.1em; margin-top: 1.5em; }\
table { border-collapse: collapse; width: 100%; }\
td, th { border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: left; }\
form { display: inline; margin: 0; }\
.add-form { display: block; margin-bottom: 1em; }\
.reset-form { display: block; margin-top: 0.5em; }";

/// Renders the full board page: both rosters in rotation order with
/// their counts, plus the add, move-to-bottom, delete, and reset forms.
pub fn render_page(state: &RotationState) -> String {
    let mut page = String::with_capacity(4096);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<title>Rotation Board</title>\n");
    page.push_str(&format!("<style>{}</style>\n", PAGE_STYLE));
    page.push_str("</head>\n<body>\n<h1>Rotation Board</h1>\n");

    page.push_str(
        "<form class=\"add-form\" method=\"post\" action=\"/add_name\">\
         <input name=\"name\" placeholder=\"New name\" autofocus>\
         <button type=\"submit\">Add to both</button></form>\n",
    );

    render_table(&mut page, Table::Breakfast, "Breakfast", state.roster(Table::Breakfast));
    render_table(&mut page, Table::Cleanup, "Cleanup", state.roster(Table::Cleanup));

    page.push_str("</body>\n</html>\n");
    page
}

fn render_table(page: &mut String, table: Table, title: &str, roster: &[RosterEntry]) {
    page.push_str(&format!("<h2>{}</h2>\n<table>\n", title));
    page.push_str("<tr><th>#</th><th>Name</th><th>Clicks</th><th></th><th></th></tr>\n");

    for (index, entry) in roster.iter().enumerate() {
        let name = escape_html(&entry.name);
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td>\
             <td><form method=\"post\" action=\"/move_to_bottom\">\
             <input type=\"hidden\" name=\"name\" value=\"{}\">\
             <input type=\"hidden\" name=\"table_type\" value=\"{}\">\
             <button type=\"submit\">Done</button></form></td>\
             <td><form method=\"post\" action=\"/delete_name\">\
             <input type=\"hidden\" name=\"name\" value=\"{}\">\
             <button type=\"submit\">Remove</button></form></td></tr>\n",
            index + 1,
            name,
            entry.clicks,
            name,
            table.as_str(),
            name,
        ));
    }

    page.push_str("</table>\n");
    page.push_str(&format!(
        "<form class=\"reset-form\" method=\"post\" action=\"/reset_counts\">\
         <input type=\"hidden\" name=\"table_type\" value=\"{}\">\
         <button type=\"submit\">Reset counts</button></form>\n",
        table.as_str(),
    ));
}

/// Escapes entry names for embedding in HTML text and attribute values.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
