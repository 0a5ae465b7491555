//! Keyboard-driven tree explorer in the terminal.
//!
//! Arrow keys move and expand, Space activates, Enter selects, `m` cycles the
//! selection mode and `q` quits. Tree events are written to `explorer.log`.

use std::fs::File;
use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use treeview::prelude::*;

const MODEL: &str = r#"[
  { "id": "src", "label": "src", "treeNodeSpec": { "state": { "expanded": true } }, "children": [
    { "id": "src/lib.rs", "label": "lib.rs", "treeNodeSpec": { "selectable": true } },
    { "id": "src/tree", "label": "tree", "children": [
      { "id": "src/tree/mod.rs", "label": "mod.rs", "treeNodeSpec": { "selectable": true } },
      { "id": "src/tree/events.rs", "label": "events.rs", "treeNodeSpec": { "selectable": true } }
    ] }
  ] },
  { "id": "options", "label": "options", "children": [
    { "id": "verbose", "label": "verbose", "treeNodeSpec": { "input": { "type": "checkbox" } } },
    { "id": "fast", "label": "fast", "treeNodeSpec": { "input": {
      "type": "radio", "name": "speed", "value": "fast", "isInitialRadioGroupValue": true } } },
    { "id": "slow", "label": "slow", "treeNodeSpec": { "input": {
      "type": "radio", "name": "speed", "value": "slow" } } }
  ] },
  { "id": "Cargo.toml", "label": "Cargo.toml", "treeNodeSpec": { "selectable": true } }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("explorer.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut tree = TreeView::from_json_str(
        MODEL,
        TreeConfig::new()
            .tree_id("explorer")
            .selection_mode(SelectionMode::Single),
    )?;
    tree.mount();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run(&mut tree, &mut stdout);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result?;
    Ok(())
}

fn run(tree: &mut TreeView, out: &mut impl Write) -> io::Result<()> {
    loop {
        for event in tree.drain_events() {
            info!("{event:?}");
        }
        draw(tree, out)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('m') => {
                tree.set_selection_mode(next_mode(tree.selection_mode()));
            }
            _ => {
                tree.on_key_event(key);
            }
        }
    }
}

fn next_mode(mode: SelectionMode) -> SelectionMode {
    match mode {
        SelectionMode::None => SelectionMode::Single,
        SelectionMode::Single => SelectionMode::Multiple,
        SelectionMode::Multiple => SelectionMode::SelectionFollowsFocus,
        SelectionMode::SelectionFollowsFocus => SelectionMode::None,
    }
}

fn draw(tree: &TreeView, out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        Print(format!(
            "mode: {:?}  (arrows move, space activates, enter selects, m mode, q quit)",
            tree.selection_mode()
        ))
    )?;

    for (row, entry) in tree.visible_nodes().iter().enumerate() {
        let Some(node) = tree.node_at(&entry.path) else {
            continue;
        };
        let expander = match (entry.has_children, entry.is_expanded) {
            (false, _) => ' ',
            (true, true) => 'v',
            (true, false) => '>',
        };
        let input = match &node.spec.input {
            Some(NodeInput::Checkbox) if node.is_checked() => "[x] ",
            Some(NodeInput::Checkbox) => "[ ] ",
            Some(NodeInput::RadioButton { .. }) if tree.radio_groups().is_chosen(node) => "(*) ",
            Some(NodeInput::RadioButton { .. }) => "( ) ",
            None => "",
        };
        let marker = if node.is_selected() { '*' } else { ' ' };

        queue!(out, MoveTo(0, row as u16 + 2))?;
        if node.is_focusable() {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(format!(
                "{marker}{}{expander} {input}{}",
                "  ".repeat(entry.depth),
                node.label().unwrap_or("?")
            )),
            SetAttribute(Attribute::Reset)
        )?;
    }
    out.flush()
}
