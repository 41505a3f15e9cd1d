use crate::model::card::{StatusFlag, TextField};
use crate::model::locale::Locale;
use crate::ops::menu::MenuItem;
use crate::ops::view::CardView;
use crate::util::unicode::{display_width, pad_to_width};

/// Widest header column before labels are truncated
const MAX_HEADER_CELLS: usize = 20;

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Append `text` after a fixed-width label, indenting continuation lines
fn push_labeled(out: &mut String, label: &str, width: usize, sep: &str, text: &str) {
    let indent = " ".repeat(width);
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or("");
    out.push_str(format!("{}{}{}", pad_to_width(label, width), sep, first).trim_end());
    out.push('\n');
    for line in lines {
        out.push_str(format!("{}{}{}", indent, sep, line).trim_end());
        out.push('\n');
    }
}

pub fn render_card(view: &CardView, locale: Locale) -> String {
    let status = &view.status;
    let mut out = String::new();

    let flags: Vec<String> = StatusFlag::ALL
        .iter()
        .map(|f| {
            let mark = if status.flag(*f) { 'x' } else { ' ' };
            format!("{} [{}]", locale.status_label(*f), mark)
        })
        .collect();
    out.push_str(&format!("{}  {}\n", status.color, flags.join("  ")));

    let fields = [TextField::Author, TextField::Manager, TextField::MainContent];
    let label_width = fields
        .iter()
        .map(|f| display_width(locale.field_label(*f)))
        .max()
        .unwrap_or(0);
    for field in fields {
        push_labeled(&mut out, locale.field_label(field), label_width, "  ", status.text(field));
    }

    if status.collapsed {
        out.push_str(&format!("({} rows hidden)\n", view.rows.len()));
        return out;
    }
    if view.rows.is_empty() {
        return out;
    }

    let id_width = view
        .rows
        .iter()
        .map(|r| display_width(r.id.as_str()))
        .max()
        .unwrap_or(0);
    let header_width = view
        .rows
        .iter()
        .map(|r| display_width(&r.header))
        .max()
        .unwrap_or(0)
        .min(MAX_HEADER_CELLS);

    out.push_str(&"-".repeat(id_width + header_width + 5));
    out.push('\n');
    for row in &view.rows {
        let label = format!(
            "{}  {}",
            pad_to_width(row.id.as_str(), id_width),
            pad_to_width(&row.header, header_width)
        );
        push_labeled(&mut out, &label, id_width + 2 + header_width, " | ", &row.body);
    }
    out
}

pub fn render_menu(items: &[MenuItem]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            MenuItem::Toggle {
                tooltip,
                property_name,
                ..
            } => {
                out.push_str(&format!("{}  (toggle) {}\n", property_name, tooltip));
            }
            MenuItem::ColorSelector {
                tooltip,
                property_name,
                options,
                selected_option,
            } => {
                out.push_str(&format!("{}  (color) {}\n", property_name, tooltip));
                for opt in options {
                    let mark = if opt.option.eq_ignore_ascii_case(selected_option) {
                        '*'
                    } else {
                        ' '
                    };
                    out.push_str(&format!("  {} {}\n", mark, opt.option));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::{RowId, Slot};
    use crate::ops::{init, menu, row_ops, status_ops, view};
    use crate::store::MemoryStore;

    fn seeded(locale: Locale) -> MemoryStore {
        let mut store = MemoryStore::new();
        init::initialize(&mut store, locale);
        store
    }

    #[test]
    fn renders_flags_fields_and_rows() {
        let mut store = seeded(Locale::Korean);
        status_ops::toggle_done(&mut store);
        status_ops::set_author(&mut store, "kim");
        row_ops::set_content(&mut store, &RowId::from("status"), Slot::Body, "blocked on review");

        let text = render_card(&view::read_card(&store), Locale::Korean);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#BDE3FF  진행 [ ]  이슈 [ ]  완료 [x]");
        assert_eq!(lines[1], "작성자 / 일시  kim");
        assert!(lines.iter().any(|l| l.starts_with("status ") && l.ends_with(" | blocked on review")));
        assert!(lines.iter().any(|l| l.starts_with("date  ") && l.contains("기간")));
    }

    #[test]
    fn header_column_is_aligned() {
        let store = seeded(Locale::English);
        let text = render_card(&view::read_card(&store), Locale::English);
        let bar_columns: Vec<usize> = text
            .lines()
            .filter(|l| l.contains(" | "))
            .map(|l| display_width(&l[..l.find(" | ").unwrap()]))
            .collect();
        assert_eq!(bar_columns.len(), 2);
        assert!(bar_columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn multiline_body_is_indented() {
        let mut store = seeded(Locale::English);
        row_ops::set_content(&mut store, &RowId::from("date"), Slot::Body, "May\nJune");
        let text = render_card(&view::read_card(&store), Locale::English);
        let june = text.lines().find(|l| l.ends_with("| June")).unwrap();
        assert!(june.starts_with("    "));
    }

    #[test]
    fn collapsed_card_hides_rows() {
        let mut store = seeded(Locale::Korean);
        status_ops::toggle_collapsed(&mut store);
        let text = render_card(&view::read_card(&store), Locale::Korean);
        assert!(text.contains("(3 rows hidden)"));
        assert!(!text.contains("기간"));
    }

    #[test]
    fn menu_marks_selected_color() {
        let store = MemoryStore::new();
        let text = render_menu(&menu::menu_items(&store, Locale::English));
        assert!(text.contains("toggle-collapsed  (toggle) Collapse"));
        assert!(text.contains("  * #BDE3FF"));
        assert!(text.contains("    #FFA198"));
    }
}
