use kinetic_theme::{
    ColorScheme, FilePreferenceStore, MemoryStore, SharedSchemeSource, SystemSchemeWatcher,
    ThemeChoice, ThemeManager, WatcherConfig,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "kinetic-theme-it-{}-{}",
        std::process::id(),
        name
    ));
    path
}

#[test]
fn explicit_choice_survives_a_restart() {
    let path = temp_path("restart.toml");
    let source = SharedSchemeSource::new(ColorScheme::Light);

    {
        let mut manager = ThemeManager::init(
            Box::new(FilePreferenceStore::new(&path)),
            Box::new(source.clone()),
        );
        manager.set_choice(ThemeChoice::Dark);
    }

    let manager = ThemeManager::init(
        Box::new(FilePreferenceStore::new(&path)),
        Box::new(source.clone()),
    );
    assert_eq!(manager.choice(), ThemeChoice::Dark);
    assert_eq!(manager.resolved(), ColorScheme::Dark);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn choosing_system_clears_the_stored_override() {
    let path = temp_path("clear.toml");
    let source = SharedSchemeSource::new(ColorScheme::Dark);

    {
        let mut manager = ThemeManager::init(
            Box::new(FilePreferenceStore::new(&path)),
            Box::new(source.clone()),
        );
        manager.set_choice(ThemeChoice::Light);
        manager.set_choice(ThemeChoice::System);
    }

    assert!(!path.exists(), "system choice should remove the stored file");

    let manager = ThemeManager::init(
        Box::new(FilePreferenceStore::new(&path)),
        Box::new(source.clone()),
    );
    assert_eq!(manager.choice(), ThemeChoice::System);
    assert_eq!(manager.resolved(), ColorScheme::Dark);
}

#[test]
fn watcher_drives_handles_and_listeners_while_following_system() {
    let source = SharedSchemeSource::new(ColorScheme::Light);
    let mut manager = ThemeManager::init(
        Box::new(MemoryStore::default()),
        Box::new(source.clone()),
    );
    let mut watcher = SystemSchemeWatcher::new(
        Box::new(source.clone()),
        WatcherConfig::default(),
    );
    let handle = manager.handle();

    let fired = Arc::new(AtomicUsize::new(0));
    let fired_clone = fired.clone();
    let _guard = manager.subscribe(move |_| {
        fired_clone.fetch_add(1, Ordering::SeqCst);
    });

    source.set(ColorScheme::Dark);
    assert!(watcher.poll_now(&mut manager));

    assert_eq!(handle.resolved(), ColorScheme::Dark);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Back to light, one more notification
    source.set(ColorScheme::Light);
    assert!(watcher.poll_now(&mut manager));
    assert_eq!(handle.resolved(), ColorScheme::Light);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn toggling_pins_the_scheme_against_system_changes() {
    let source = SharedSchemeSource::new(ColorScheme::Light);
    let mut manager = ThemeManager::init(
        Box::new(MemoryStore::default()),
        Box::new(source.clone()),
    );
    let mut watcher = SystemSchemeWatcher::new(
        Box::new(source.clone()),
        WatcherConfig::default(),
    );

    manager.toggle();
    assert_eq!(manager.choice(), ThemeChoice::Dark);

    source.set(ColorScheme::Dark);
    watcher.poll_now(&mut manager);
    source.set(ColorScheme::Light);
    watcher.poll_now(&mut manager);

    assert_eq!(
        manager.resolved(),
        ColorScheme::Dark,
        "explicit choice should pin the resolution"
    );
}

#[test]
fn corrupt_preference_file_degrades_to_system() {
    let path = temp_path("corrupt.toml");
    std::fs::write(&path, "theme = {{{").unwrap();

    let source = SharedSchemeSource::new(ColorScheme::Dark);
    let manager = ThemeManager::init(
        Box::new(FilePreferenceStore::new(&path)),
        Box::new(source.clone()),
    );
    assert_eq!(manager.choice(), ThemeChoice::System);
    assert_eq!(manager.resolved(), ColorScheme::Dark);

    let _ = std::fs::remove_file(&path);
}
