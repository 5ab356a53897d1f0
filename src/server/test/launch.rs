use std::{collections::HashMap, net::TcpListener};

use crate::server::{
    config::tests::base_vars,
    error::{config::ConfigError, AppError},
    launch,
};

/// Reserves a free local port and releases it again.
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn port_is_free(port: u16) -> bool {
    TcpListener::bind(("0.0.0.0", port)).is_ok()
}

/// Expect launch to fail on missing configuration without binding the port
#[tokio::test]
async fn missing_config_fails_before_binding() {
    let port = free_port();
    let mut vars: HashMap<&'static str, String> = base_vars();
    vars.insert("PORT", port.to_string());
    vars.remove("JOB_SIGNING_KEY");

    let result = launch(|name| vars.get(name).cloned()).await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "JOB_SIGNING_KEY"
    ));
    assert!(port_is_free(port));
}

/// Expect launch to fail when the database can't be opened, without binding the port
#[tokio::test]
async fn unreachable_database_fails_before_binding() {
    let port = free_port();
    let mut vars: HashMap<&'static str, String> = base_vars();
    vars.insert("PORT", port.to_string());
    vars.insert(
        "DATABASE_URL",
        "sqlite:///nonexistent-directory/codearena.db?mode=ro".to_string(),
    );
    vars.insert("DATABASE_CONNECT_ATTEMPTS", "1".to_string());

    let result = launch(|name| vars.get(name).cloned()).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(port_is_free(port));
}
