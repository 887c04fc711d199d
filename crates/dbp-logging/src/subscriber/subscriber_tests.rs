#![allow(non_snake_case)]

use super::*;

#[test]
fn init_logging___second_call___leaves_first_subscriber_installed() {
    init_logging(LogLevel::Warn);

    let installed_again = init_logging_from_config(&PatcherConfig::default());

    assert!(!installed_again);
    assert!(ReloadHandle::global().is_initialized());
    ReloadHandle::global().reload_level(LogLevel::Debug).unwrap();
}
