//! Headless tree demo
//!
//! Run with:
//! `cargo run -p strobe_app --example tree_demo`
//!
//! Rebuilds the same tree every frame while a scripted pointer sweeps
//! across it, then prints each frame's dump with the `>` hit marker and
//! the report line.

use strobe_app::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = AppConfig {
        dump_tree: true,
        root_style: Style::new().bg(Color::BLACK),
    };
    // Real glyph metrics when a system face is around, estimate otherwise.
    let mut app = match App::with_system_fonts(config.clone()) {
        Ok(app) => app,
        Err(AppError::NoSystemFont) => App::new(config),
        Err(err) => return Err(err),
    };

    let mut script = ScriptedInput::new(vec![
        FixedInput::at(10.0, 10.0),
        FixedInput::at(10.0, 75.0),
        FixedInput::at(250.0, 150.0),
        FixedInput::at(250.0, 150.0).pressed(),
    ]);

    let reports = run_frames(&mut app, &mut script, 4, |ui| {
        ui.horizontal(Style::new().bg(Color::GRAY), |ui| {
            ui.vertical(Style::new().bg(Color::from_hex(0xADD8E6)), |ui| {
                ui.label("foo", Style::new().bg(Color::BLUE));
                ui.label("barrr", Style::new().bg(Color::BLUE));
            });
            ui.vertical(Style::new().bg(Color::from_hex(0xFFA500)), |ui| {
                ui.label("BAZ", Style::new().bg(Color::RED));
                ui.label("quuux", Style::new().bg(Color::RED));
            });
        });
        ui.button(Style::new().bg(Color::GRAY).rounded(8.0));
    });

    for report in reports {
        println!(
            "frame {} - {} nodes in {:?}",
            report.frame, report.node_count, report.elapsed
        );
        if let Some(tree) = &report.tree {
            print!("{tree}");
        }
        match &report.hit {
            Some(hit) => println!("pointer over: {hit}"),
            None => println!("pointer over: nothing"),
        }
        println!();
    }

    Ok(())
}
