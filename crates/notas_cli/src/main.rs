//! CLI smoke entry point.
//!
//! # Responsibility
//! - Render the demo home screen to stdout to verify `notas_core` wiring.
//! - Keep output line-oriented for quick local sanity checks.
//!
//! Usage: `notas_cli [notes|tasks] [query...]`

use chrono::Local;
use notas_core::{DisplayLocale, HomeScreen, HomeTab};

fn main() {
    let mut args = std::env::args().skip(1).peekable();
    let tab = match args.peek().map(String::as_str) {
        Some("notes") => {
            args.next();
            HomeTab::Notes
        }
        Some("tasks") => {
            args.next();
            HomeTab::Tasks
        }
        _ => HomeTab::Notes,
    };
    let query = args.collect::<Vec<_>>().join(" ");

    let locale = DisplayLocale::resolve(None);
    let now = Local::now().naive_local();
    let mut screen = HomeScreen::with_demo_data(now, tab);
    screen.set_query(query);

    println!(
        "notas_core version={} locale={}",
        notas_core::core_version(),
        locale.code()
    );
    println!("# {}", screen.header_title(locale));
    for row in screen.visible_rows(now, locale) {
        let (line1, line2) = row.trailing.lines();
        println!(
            "{:>3} [{}] {} | {} | {} {}",
            row.id,
            row.kind.as_str(),
            row.title,
            row.description,
            line1,
            line2
        );
    }
}
