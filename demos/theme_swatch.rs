//! Print the form theme as a swatch table, one row per style entry.
//!
//! Run with: cargo run --example theme_swatch [light|dark]

use std::env;

use ratatui::style::Style;

use markpick::palette::{Appearance, Palette};
use markpick::theme::{FieldStyles, FormTheme, StylePair};

fn describe(style: Style) -> String {
    let fg = style
        .fg
        .map(|c| format!("{c:?}"))
        .unwrap_or_else(|| "default".to_string());
    let bg = style
        .bg
        .map(|c| format!(" on {c:?}"))
        .unwrap_or_default();
    let bold = if style.add_modifier.contains(ratatui::style::Modifier::BOLD) {
        " bold"
    } else {
        ""
    };
    format!("{fg}{bg}{bold}")
}

fn row(name: &str, pair: &StylePair, appearance: Appearance) {
    println!("  {:<24} {}", name, describe(pair.resolve(appearance)));
}

fn field_rows(fields: &FieldStyles, appearance: Appearance) {
    row("title", &fields.title, appearance);
    row("note_title", &fields.note_title, appearance);
    row("description", &fields.description, appearance);
    row("select_indicator", &fields.select_indicator, appearance);
    row("selected_option", &fields.selected_option, appearance);
    row("unselected_option", &fields.unselected_option, appearance);
    row("selected_prefix", &fields.selected_prefix, appearance);
    row("unselected_prefix", &fields.unselected_prefix, appearance);
    row("option", &fields.option, appearance);
    row("multi_select_indicator", &fields.multi_select_indicator, appearance);
    row("active_button", &fields.active_button, appearance);
    row("input_prompt", &fields.input_prompt, appearance);
    row("input_cursor", &fields.input_cursor, appearance);
    row("error_message", &fields.error_message, appearance);
    row("error_indicator", &fields.error_indicator, appearance);
}

fn main() {
    let appearance = match env::args().nth(1).as_deref() {
        Some("light") => Appearance::Light,
        Some("dark") => Appearance::Dark,
        Some(other) => {
            eprintln!("Error: unknown appearance {other:?} (expected light or dark)");
            std::process::exit(1);
        }
        None => Appearance::detect(),
    };

    let theme = FormTheme::new(&Palette::brand());

    println!("Form theme ({appearance:?} appearance)\n");

    println!("group:");
    row("title", &theme.group.title, appearance);

    println!("\nfocused:");
    field_rows(&theme.focused, appearance);

    println!("\nblurred:");
    field_rows(&theme.blurred, appearance);

    println!("\nhelp:");
    row("short_key", &theme.help.short_key, appearance);
    row("short_desc", &theme.help.short_desc, appearance);
    row("full_key", &theme.help.full_key, appearance);
    row("full_desc", &theme.help.full_desc, appearance);
}
