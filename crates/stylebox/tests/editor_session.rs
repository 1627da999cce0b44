//! End-to-end editor sessions driven through the public API.

use std::sync::Arc;

use stylebox::prelude::*;
use stylebox::render::ids;

fn mounted_editor() -> (Arc<GlobalPointerEvents>, StyleEditor) {
    let source = Arc::new(GlobalPointerEvents::new());
    let mut editor = StyleEditor::new(source.clone());
    // Box bottom at 30 puts the panel at (50, 40).
    editor.mount(Rect::new(50.0, 0.0, 200.0, 30.0));
    (source, editor)
}

#[test]
fn full_session() {
    let (source, mut editor) = mounted_editor();

    // Open the panel by clicking the box.
    let mut click = ClickEvent::new(Point::new(60.0, 10.0));
    editor.dispatch_click(&mut click);
    assert!(editor.is_visible());

    // A batch with a duplicate and a trailing comma.
    editor.set_input("background-color: #ff0000,\nfontSize: 18\nbackgroundColor: blue");
    assert_eq!(editor.submit(), 3);
    assert_eq!(
        editor.ledger().to_lines(),
        ["backgroundColor: blue", "fontSize: 18"]
    );
    assert_eq!(
        editor.style().to_inline_css(),
        "cursor: pointer; background-color: blue; font-size: 18px"
    );

    // Drag the panel by its header.
    let mut press = PointerPressEvent::new(Point::new(100.0, 45.0));
    assert!(editor.press(&mut press));
    source.dispatch_move(PointerMoveEvent::new(Point::new(110.0, 50.0)));
    source.dispatch_move(PointerMoveEvent::new(Point::new(130.0, 60.0)));
    source.dispatch_release(PointerReleaseEvent::new(Point::new(130.0, 60.0)));
    assert_eq!(editor.panel_position(), Point::new(80.0, 55.0));
    assert_eq!(source.listener_count(), 0);

    // Close it from the header control.
    let close = editor.panel_position() + Point::new(editor.config().panel_width - 4.0, 4.0);
    let mut click = ClickEvent::new(close);
    assert_eq!(editor.dispatch_click(&mut click), [ClickTarget::CloseButton]);
    assert!(!editor.is_visible());

    // Reopening keeps the dragged position.
    editor.click_box();
    assert_eq!(editor.panel_position(), Point::new(80.0, 55.0));
}

#[test]
fn drag_with_pointer_outside_panel() {
    let (source, mut editor) = mounted_editor();
    editor.click_box();

    editor.press(&mut PointerPressEvent::new(Point::new(100.0, 45.0)));
    // Far outside any element.
    source.dispatch_move(PointerMoveEvent::new(Point::new(1000.0, 900.0)));
    assert_eq!(editor.panel_position(), Point::new(950.0, 895.0));
    source.dispatch_release(PointerReleaseEvent::new(Point::new(1000.0, 900.0)));
    assert_eq!(source.listener_count(), 0);
}

#[test]
fn error_recovery_cycle() {
    let (_, mut editor) = mounted_editor();
    editor.click_box();

    editor.set_input("width: 50px\n\ncolor\nheight: 1px");
    assert_eq!(editor.submit(), 1);
    // "color" has no colon, so its value is missing.
    assert_eq!(
        editor.error_message().as_deref(),
        Some("Error: \"color\" value is required.")
    );

    editor.set_input("width: 50px\n\nborder: 1px solid");
    assert!(editor.error().is_none());
    editor.submit();
    assert_eq!(
        editor.error_message().as_deref(),
        Some("Error: Property \"border\" on line 2 is not valid or not supported.")
    );

    editor.set_input("height: 1px");
    editor.submit();
    assert!(editor.error().is_none());
    assert_eq!(editor.ledger().to_lines(), ["width: 50px", "height: 1px"]);
}

#[test]
fn html_output() {
    let (_, mut editor) = mounted_editor();
    editor.click_box();
    editor.set_input("color: <red>");
    editor.submit();

    let html = editor.render().to_html();
    assert!(html.starts_with("<div id=\"stylebox-root\">"));
    assert!(html.contains("<button id=\"stylebox-close\">X</button>"));
    assert!(html.contains("<textarea id=\"stylebox-input\" placeholder=\"Enter CSS (e.g., width: 50px)\">color: &lt;red&gt;</textarea>"));
    assert!(html.contains("style=\"cursor: pointer; color: &lt;red&gt;\""));
    assert!(html.contains("<h3>Applied CSS:</h3><ul><li>color: &lt;red&gt;</li></ul>"));

    let tree = editor.render();
    assert!(!tree.find_by_id(ids::BOX).unwrap().has_class("sparkle"));
}

#[test]
fn configured_editor() {
    let config = EditorConfig::from_toml_str(
        r#"
        panel_offset = 0.0
        title = "Styled"
        placeholder = "type here"
        "#,
    )
    .unwrap();

    let source = Arc::new(GlobalPointerEvents::new());
    let mut editor = StyleEditor::with_config(source, config);
    editor.mount(Rect::new(5.0, 5.0, 10.0, 10.0));
    editor.click_box();

    assert_eq!(editor.panel_position(), Point::new(5.0, 15.0));
    let tree = editor.render();
    assert_eq!(tree.find_by_id(ids::BOX).unwrap().text_content(), "Styled");
    assert_eq!(
        tree.find_by_id(ids::INPUT).unwrap().attr("placeholder"),
        Some("type here")
    );
}
