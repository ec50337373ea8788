use super::{copy_in_background, copy_text};

fn headless() -> bool {
    cfg!(target_os = "linux")
        && std::env::var_os("DISPLAY").is_none()
        && std::env::var_os("WAYLAND_DISPLAY").is_none()
}

#[test]
fn copy_without_display_server_is_an_error() {
    if !headless() {
        return;
    }
    assert!(copy_text("1. Fehu".to_string()).is_err());
}

#[tokio::test]
async fn failed_background_copy_still_finishes() {
    if !headless() {
        return;
    }
    copy_in_background("1. Pasado: El Loco".to_string())
        .await
        .expect("copy task joins");
}
