use crate::ApiConfig;

#[test]
fn test_default_base_url_validates() {
    ApiConfig::default().validate().unwrap();
}

#[test]
fn test_empty_base_url_rejected() {
    let config = ApiConfig {
        base_url: "   ".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_non_http_base_url_rejected() {
    let config = ApiConfig {
        base_url: "ftp://tasks.example.com".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_https_base_url_accepted() {
    let config = ApiConfig {
        base_url: "https://tasks.example.com/api".to_string(),
    };
    config.validate().unwrap();
}
