use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hotkeyforge::api::EditorSession;
use hotkeyforge::keys::{self, KEY_SECTIONS};
use hotkeyforge::modifier::Modifier;
use strum::IntoEnumIterator;

pub fn print_profiles(session: &EditorSession) {
    let current = session.current_profile().id.clone();
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Condition").fg(Color::Cyan),
        Cell::new("Device"),
        Cell::new("Description"),
        Cell::new("Keys").add_attribute(Attribute::Bold),
    ]);

    for profile in session.catalog().profiles() {
        let bound = session
            .actions()
            .profile(&profile.id)
            .map(|keys| keys.len())
            .unwrap_or(0);
        let marker = if profile.id == current { "*" } else { "" };

        table.add_row(vec![
            Cell::new(marker).fg(Color::Green),
            Cell::new(&profile.id).add_attribute(Attribute::Bold),
            Cell::new(&profile.label),
            Cell::new(&profile.condition).fg(Color::Cyan),
            Cell::new(&profile.device_id),
            Cell::new(&profile.description),
            Cell::new(bound).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

/// Draws each layout section; bound keys are highlighted.
pub fn print_key_sections(session: &EditorSession) {
    println!(
        "\n⌨️  Profile: {}",
        session.current_profile().display_name()
    );

    for section in KEY_SECTIONS {
        println!("\n{}", section.name);
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);

        for row in section.rows {
            let cells: Vec<Cell> = row
                .iter()
                .map(|raw| {
                    let cell = Cell::new(keys::display_label(raw)).set_alignment(CellAlignment::Center);
                    if session.has_binding(&keys::key_id(raw)) {
                        cell.fg(Color::Green).add_attribute(Attribute::Bold)
                    } else {
                        cell
                    }
                })
                .collect();
            table.add_row(cells);
        }
        println!("{}", table);
    }
}

pub fn print_key_bindings(session: &EditorSession, key: &str) {
    let key_id = keys::key_id(key);
    println!(
        "\n🔑 {} ({}) · {}",
        keys::display_label(key),
        key_id,
        session.current_profile().display_name()
    );

    let Some(bindings) = session.bindings(&key_id) else {
        println!("   No assignments.");
        return;
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Modifier").add_attribute(Attribute::Bold),
        Cell::new("State"),
        Cell::new("Action"),
    ]);

    let suggested = session.suggested_modifier(&key_id);
    for modifier in Modifier::iter() {
        let Some(entry) = bindings.get(&modifier) else {
            continue;
        };
        let name = if modifier == suggested {
            format!("{} *", modifier.badge())
        } else {
            modifier.badge().to_string()
        };
        let state = if entry.enabled {
            Cell::new("enabled").fg(Color::Green)
        } else {
            Cell::new("disabled").fg(Color::Red)
        };
        table.add_row(vec![Cell::new(name), state, Cell::new(&entry.action)]);
    }
    println!("{}", table);

    let summary = session.key_summary(&key_id);
    if !summary.is_empty() {
        println!("{}", summary.join("\n"));
    }
}
