use toolio_core::service::theme_service::THEME_KEY;
use toolio_core::{KeyValueRepository, MemoryKeyValueRepository, RepoError, Theme, ThemeService};

#[test]
fn saved_theme_wins_over_environment() {
    let repo = MemoryKeyValueRepository::new();
    repo.set_value(THEME_KEY, "light").unwrap();

    let service = ThemeService::new(&repo);
    assert_eq!(service.resolve(true), Theme::Light);
}

#[test]
fn missing_or_unknown_value_falls_back_to_environment() {
    let repo = MemoryKeyValueRepository::new();
    let service = ThemeService::new(&repo);
    assert_eq!(service.resolve(true), Theme::Dark);
    assert_eq!(service.resolve(false), Theme::Light);

    repo.insert_raw(THEME_KEY, "solarized");
    assert_eq!(service.saved_theme(), None);
    assert_eq!(service.resolve(true), Theme::Dark);
}

#[test]
fn toggle_flips_and_persists() {
    let repo = MemoryKeyValueRepository::new();
    let service = ThemeService::new(&repo);

    let change = service.toggle(Theme::Light);
    assert_eq!(change.theme, Theme::Dark);
    assert!(change.persist_warning.is_none());
    assert_eq!(repo.get_value(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let change = service.toggle(change.theme);
    assert_eq!(change.theme, Theme::Light);
    assert_eq!(service.resolve(true), Theme::Light);
}

#[test]
fn unavailable_storage_still_applies_theme() {
    let service = ThemeService::new(MemoryKeyValueRepository::unavailable());
    assert_eq!(service.resolve(true), Theme::Dark);

    let change = service.apply(Theme::Light);
    assert_eq!(change.theme, Theme::Light);
    assert!(matches!(
        change.persist_warning,
        Some(RepoError::Unavailable(_))
    ));
}
