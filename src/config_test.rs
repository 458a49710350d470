use super::*;

/// # Safety
/// `HOST`/`PORT` are shared process state; only the tests below touch them,
/// and they serialize through `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "9123");
    }

    let cfg = ServerConfig::from_env();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9123);
    assert_eq!(cfg.bind_addr(), "127.0.0.1:9123");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    assert_eq!(ServerConfig::from_env().port, DEFAULT_PORT);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_blank_host_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "   ");
    }

    assert_eq!(ServerConfig::from_env().host, DEFAULT_HOST);

    unsafe { clear_server_env() };
}

#[test]
fn env_parse_unset_returns_default() {
    assert_eq!(env_parse("__TEST_WORDCHECK_SURELY_UNSET_77__", 42_u16), 42);
}

#[test]
fn env_parse_trims_whitespace() {
    let key = "__TEST_WORDCHECK_WS_318__";
    unsafe { std::env::set_var(key, "  8080  ") };
    assert_eq!(env_parse(key, 0_u16), 8080);
    unsafe { std::env::remove_var(key) };
}
