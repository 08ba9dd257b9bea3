use colored::Colorize;
use facetz::api::{CmdMessage, DimensionInfo, MessageLevel};
use facetz::filter::{FacetView, ValueView};
use facetz::model::ItemView;
use unicode_width::UnicodeWidthStr;

const NO_ITEMS: &str = "No items match.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", style_message(message));
    }
}

/// Messages go to stderr when stdout carries JSON.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", style_message(message));
    }
}

fn style_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

fn render_value(view: &ValueView<String>) -> String {
    if view.selected {
        format!("[{}]", view.value).green().bold().to_string()
    } else if view.disabled {
        format!("~{}~", view.value).dimmed().to_string()
    } else {
        view.value.clone()
    }
}

/// One line per dimension: the name, padded, then its values.
pub(super) fn render_facets(facets: &[FacetView<String>]) -> String {
    let name_width = facets
        .iter()
        .map(|f| f.dimension.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for facet in facets {
        let padding = name_width - facet.dimension.width();
        let values: Vec<String> = facet.values.iter().map(render_value).collect();
        out.push_str(&format!(
            "{}{}  {}\n",
            facet.dimension.bold(),
            " ".repeat(padding),
            values.join(" ")
        ));
    }
    out
}

pub(super) fn render_items(items: &[ItemView]) -> String {
    if items.is_empty() {
        return format!("{}\n", NO_ITEMS);
    }
    let mut out = String::new();
    for item in items {
        let values: Vec<String> = item
            .values
            .iter()
            .map(|(dim, value)| format!("{}={}", dim, value))
            .collect();
        out.push_str(&format!(
            "{:>4}. {}\n",
            (item.position + 1).to_string().yellow(),
            values.join("  ")
        ));
    }
    out
}

pub(super) fn render_dimensions(dimensions: &[DimensionInfo]) -> String {
    let name_width = dimensions.iter().map(|d| d.name.width()).max().unwrap_or(0);
    dimensions
        .iter()
        .map(|d| {
            format!(
                "{}{}  field: {}, {} value(s)\n",
                d.name.bold(),
                " ".repeat(name_width - d.name.width()),
                d.field,
                d.values
            )
        })
        .collect()
}

pub(super) fn render_config(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn value(v: &str, selected: bool, disabled: bool) -> ValueView<String> {
        ValueView {
            value: v.to_string(),
            selected,
            disabled,
        }
    }

    #[test]
    fn marks_selected_and_disabled_values() {
        plain();
        let facets = vec![
            FacetView {
                dimension: "colors",
                values: vec![value("red", false, false), value("blue", true, false)],
            },
            FacetView {
                dimension: "sizes",
                values: vec![value("9", false, false), value("10", false, true)],
            },
        ];

        let out = render_facets(&facets);
        assert_eq!(out, "colors  red [blue]\nsizes   9 ~10~\n");
    }

    #[test]
    fn renders_items_with_one_based_positions() {
        plain();
        let items = vec![ItemView {
            position: 2,
            values: vec![
                ("colors".to_string(), "blue".to_string()),
                ("sizes".to_string(), "9".to_string()),
            ],
        }];
        assert_eq!(render_items(&items), "   3. colors=blue  sizes=9\n");
        assert_eq!(render_items(&[]), "No items match.\n");
    }

    #[test]
    fn renders_dimensions_aligned() {
        plain();
        let dims = vec![
            DimensionInfo {
                name: "colors",
                field: "color".to_string(),
                values: 2,
            },
            DimensionInfo {
                name: "sizes",
                field: "size".to_string(),
                values: 3,
            },
        ];
        assert_eq!(
            render_dimensions(&dims),
            "colors  field: color, 2 value(s)\nsizes   field: size, 3 value(s)\n"
        );
    }

    #[test]
    fn renders_config_entries() {
        let entries = vec![("catalog".to_string(), "data.json".to_string())];
        assert_eq!(render_config(&entries), "catalog = data.json\n");
    }
}
