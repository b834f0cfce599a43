//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;
use vaxdesk::config::GatewayConfig;
use vaxdesk::gateway::{GatewayCommand, RecordGateway};
use vaxdesk::model::{RecordStatus, VaccineRecord};
use vaxdesk::ui::screen::InventoryScreen;

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn gateway_for(base_url: &str) -> RecordGateway {
    RecordGateway::new(&GatewayConfig {
        base_url: base_url.to_string(),
        request_timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .expect("valid gateway config")
}

/// A record that passes every form check.
pub fn valid_record(name: &str) -> VaccineRecord {
    VaccineRecord {
        id: None,
        name: name.to_string(),
        kind: "Viral".to_string(),
        description: "Dosis unica 2".to_string(),
        manufacturing_date: "2024-01-10".to_string(),
        expiration_date: "2026-01-10".to_string(),
        price: "12.5".to_string(),
        stock: "40".to_string(),
        status: Some(RecordStatus::Active),
    }
}

pub fn stored(id: i64, name: &str, status: RecordStatus) -> VaccineRecord {
    VaccineRecord {
        id: Some(id),
        status: Some(status),
        ..valid_record(name)
    }
}

// -- Screen helpers -----------------------------------------------------------

/// Screen wired to a command channel the test drains by hand.
pub fn make_screen() -> (InventoryScreen, mpsc::Receiver<GatewayCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut screen = InventoryScreen::default();
    screen.set_command_sender(tx);
    (screen, rx)
}

/// Every command sent since the last drain.
pub fn drain(rx: &mut mpsc::Receiver<GatewayCommand>) -> Vec<GatewayCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Number of list refetches in `commands`.
pub fn fetch_count(commands: &[GatewayCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, GatewayCommand::FetchAll { .. }))
        .count()
}
