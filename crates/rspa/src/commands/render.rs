use anyhow::Result;
use colored::Colorize;
use rspa::{App, Config};

/// Boots the app, then prints the mount root after the first mount and
/// after every navigation.
pub fn execute(config: &Config, paths: &[String], back: bool) -> Result<()> {
    let app = App::boot(config)?;
    print_snapshot(&app);

    for path in paths {
        app.navigate(path)?;
        print_snapshot(&app);
    }

    if back {
        while app.back() {
            print_snapshot(&app);
        }
    }

    app.shutdown();
    Ok(())
}

fn print_snapshot(app: &App) {
    let router = app.router();
    let marker = if router.current_route().is_not_found() {
        " (not found)".yellow().to_string()
    } else {
        String::new()
    };

    println!(
        "{} {}{}",
        "==>".green().bold(),
        router.current_path().cyan(),
        marker
    );
    println!("Title: {}", app.document().title());
    println!("Mounts: {}", router.mount_count());
    println!("{}", app.root_html());
    println!();
}
