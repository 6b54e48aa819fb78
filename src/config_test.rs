use super::*;

#[test]
fn from_values_uses_defaults_when_unset() {
    let config = ApiConfig::from_values(None, None, None);
    assert_eq!(config.cards_base_url, DEFAULT_CARDS_API_URL);
    assert_eq!(config.users_base_url, "");
    assert_eq!(config.auth_token, None);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let config = ApiConfig::from_values(Some("https://api.test/"), Some("http://users.test//"), None);
    assert_eq!(config.cards_base_url, "https://api.test");
    assert_eq!(config.users_base_url, "http://users.test");
}

#[test]
fn from_values_drops_blank_token() {
    assert_eq!(ApiConfig::from_values(None, None, Some("   ")).auth_token, None);
    assert_eq!(
        ApiConfig::from_values(None, None, Some(" tok ")).auth_token,
        Some("tok".to_owned())
    );
}
