//! Theme Demo
//!
//! Walks the preference lifecycle: follow the system, pin an explicit
//! choice, toggle, and return to following the system.
//!
//! Run with:
//! `cargo run -p kinetic_theme --example theme_demo`

use kinetic_theme::{
    FilePreferenceStore, SystemSchemeSource, SystemSchemeWatcher, ThemeChoice, ThemeManager,
    WatcherConfig,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut path = std::env::temp_dir();
    path.push("kinetic-theme-demo.toml");

    let mut manager = ThemeManager::init(
        Box::new(FilePreferenceStore::new(&path)),
        Box::new(SystemSchemeSource),
    );
    let handle = manager.handle();

    let listener = manager.subscribe(|scheme| {
        tracing::info!(?scheme, "resolved theme changed");
    });

    tracing::info!(choice = ?manager.choice(), resolved = handle.resolved_attr(), "startup");

    manager.set_choice(ThemeChoice::Dark);
    tracing::info!(resolved = handle.resolved_attr(), "pinned dark");

    manager.toggle();
    tracing::info!(resolved = handle.resolved_attr(), "toggled");

    manager.set_choice(ThemeChoice::System);
    tracing::info!(resolved = handle.resolved_attr(), "following system again");

    let mut watcher = SystemSchemeWatcher::new(
        Box::new(SystemSchemeSource),
        WatcherConfig::default(),
    );
    watcher.poll_now(&mut manager);

    drop(listener);
    let _ = std::fs::remove_file(&path);
    manager.shutdown();
}
