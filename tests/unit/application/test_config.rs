use signinghub_client::application::config::Config;
use signinghub_client::application::connection::Connection;
use signinghub_client::model::api_version::ApiVersion;
use std::env;

#[test]
fn test_config_reads_environment() {
    unsafe {
        env::set_var("SIGNINGHUB_URL", "https://sh.example.com/");
        env::set_var("SIGNINGHUB_PORT", "8443");
        env::set_var("SIGNINGHUB_API_VERSION", "3");
        env::set_var("SIGNINGHUB_CLIENT_ID", "client");
        env::set_var("SIGNINGHUB_CLIENT_SECRET", "secret");
        env::set_var("SIGNINGHUB_USERNAME", "alice@example.com");
        env::set_var("SIGNINGHUB_PASSWORD", "pw");
        env::set_var("SIGNINGHUB_SCOPE", "");
        env::set_var("SIGNINGHUB_TIMEOUT", "12");
        env::set_var("SIGNINGHUB_ADMIN_URL", "https://admin.example.com/");
        env::set_var("SIGNINGHUB_ADMIN_PORT", "9443");

        let config = Config::new();
        assert_eq!(config.rest_api.url, "https://sh.example.com/");
        assert_eq!(config.rest_api.port, Some(8443));
        assert_eq!(config.rest_api.timeout, 12);
        assert_eq!(config.api_version, 3);
        assert_eq!(config.credentials.client_id.as_deref(), Some("client"));
        assert_eq!(config.credentials.username.as_deref(), Some("alice@example.com"));
        assert_eq!(config.credentials.scope, None);

        let connection = Connection::from_config(&config).unwrap();
        assert_eq!(connection.url(), "https://sh.example.com");
        assert_eq!(connection.full_url(), "https://sh.example.com:8443");
        assert_eq!(connection.api_version(), ApiVersion::V3);
        assert!(!connection.is_authenticated());
        assert_eq!(connection.admin_url(), Some("https://admin.example.com"));
        assert_eq!(
            connection.admin_full_url().as_deref(),
            Some("https://admin.example.com:9443")
        );

        for name in [
            "SIGNINGHUB_URL",
            "SIGNINGHUB_PORT",
            "SIGNINGHUB_API_VERSION",
            "SIGNINGHUB_CLIENT_ID",
            "SIGNINGHUB_CLIENT_SECRET",
            "SIGNINGHUB_USERNAME",
            "SIGNINGHUB_PASSWORD",
            "SIGNINGHUB_SCOPE",
            "SIGNINGHUB_TIMEOUT",
            "SIGNINGHUB_ADMIN_URL",
            "SIGNINGHUB_ADMIN_PORT",
        ] {
            env::remove_var(name);
        }
    }
}
