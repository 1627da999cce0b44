//! Scripted editor session.
//!
//! Drives a [`StyleEditor`] through a click, a few submissions and a drag,
//! printing the rendered HTML after each step.
//!
//! Run with: `RUST_LOG=stylebox=debug cargo run -p stylebox --example session`

use std::sync::Arc;

use stylebox::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_step(title: &str, editor: &StyleEditor) {
    println!("== {title}");
    if let Some(message) = editor.error_message() {
        println!("status: {message}");
    }
    println!("{}\n", editor.render().to_html());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::default(),
    };

    let source = Arc::new(GlobalPointerEvents::new());
    let mut editor = StyleEditor::with_config(source.clone(), config);
    editor.panel_moved.connect(|pos| println!("panel moved to ({}, {})", pos.x, pos.y));

    editor.mount(Rect::new(50.0, 20.0, 200.0, 80.0));
    print_step("mounted", &editor);

    editor.dispatch_click(&mut ClickEvent::new(Point::new(60.0, 30.0)));
    print_step("box clicked", &editor);

    editor.set_input("background-color: #ff0000,\nfontSize: 18\nwidth: 50px");
    editor.submit();
    print_step("declarations applied", &editor);

    editor.set_input("width: 80px\ninvalid-prop: 1");
    editor.submit();
    print_step("partial batch", &editor);

    let grab = editor.panel_position() + Point::new(10.0, 5.0);
    editor.press(&mut PointerPressEvent::new(grab));
    source.dispatch_move(PointerMoveEvent::new(grab + Point::new(30.0, 15.0)));
    source.dispatch_release(PointerReleaseEvent::new(grab + Point::new(30.0, 15.0)));
    print_step("panel dragged", &editor);

    println!("residual listeners: {}", source.listener_count());
    Ok(())
}
