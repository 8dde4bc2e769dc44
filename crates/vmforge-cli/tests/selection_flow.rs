//! Scanning a templates directory and driving the selection menu over it.

use std::fs;
use std::io::Cursor;

use vmforge_catalog::TemplateCatalog;
use vmforge_cli::menu::{MenuOutcome, select};

fn templates_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=14 {
        let kind = if i <= 4 { "server" } else { "desktop" };
        fs::write(
            dir.path().join(format!("image-{i:02}.json")),
            format!(r#"{{"description": "Image {i} {kind} edition"}}"#),
        )
        .unwrap();
    }
    fs::write(dir.path().join("draft.toml"), "description = \"\"").unwrap();
    dir
}

fn run(catalog: &TemplateCatalog, filter: Option<&str>, keys: &str) -> (MenuOutcome, String) {
    let mut input = Cursor::new(keys.to_string());
    let mut output = Vec::new();
    let outcome = select(catalog, filter, &mut input, &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn filtered_all_selects_in_name_order() {
    let dir = templates_dir();
    let catalog = TemplateCatalog::scan(dir.path()).unwrap();
    assert_eq!(catalog.len(), 14);

    let (outcome, printed) = run(&catalog, None, "Server\na\n");
    assert!(printed.contains("Templates matching 'Server' (page 1/1, 4 total):"));

    let MenuOutcome::Selected(selection) = outcome else {
        panic!("expected a selection");
    };
    let names: Vec<_> = selection.templates().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["image-01", "image-02", "image-03", "image-04"]);
}

#[test]
fn second_page_pick() {
    let dir = templates_dir();
    let catalog = TemplateCatalog::scan(dir.path()).unwrap();

    let (outcome, printed) = run(&catalog, Some(""), "n\n13\n");
    assert!(printed.contains("page 2/2"));

    let MenuOutcome::Selected(selection) = outcome else {
        panic!("expected a selection");
    };
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.templates()[0].name, "image-13");
}

#[test]
fn quitting_selects_nothing() {
    let dir = templates_dir();
    let catalog = TemplateCatalog::scan(dir.path()).unwrap();

    let (outcome, _) = run(&catalog, Some("desktop"), "p\nq\n");
    assert_eq!(outcome, MenuOutcome::Quit);
}
