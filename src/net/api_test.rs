use super::*;
use crate::net::types::{Address, Image, UserName};

fn config() -> ApiConfig {
    ApiConfig {
        cards_base_url: "https://cards.test".to_owned(),
        users_base_url: String::new(),
        auth_token: Some("tok".to_owned()),
    }
}

#[test]
fn my_cards_endpoint_formats_expected_path() {
    assert_eq!(my_cards_endpoint(&config()), "https://cards.test/bcard2/cards/my-cards");
}

#[test]
fn card_endpoint_formats_expected_path() {
    assert_eq!(card_endpoint(&config(), "c-9"), "https://cards.test/bcard2/cards/c-9");
}

#[test]
fn user_endpoint_is_same_origin_without_base() {
    assert_eq!(user_endpoint(&config(), "u123"), "/users/u123");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpApi::new(config());
    let update = UserUpdate {
        name: UserName::default(),
        phone: String::new(),
        image: Image::default(),
        address: Address::default(),
    };
    futures::executor::block_on(async {
        assert_eq!(api.fetch_my_cards().await, Err(ApiError::Unavailable));
        assert_eq!(api.delete_card("c-9").await, Err(ApiError::Unavailable));
        assert!(matches!(api.fetch_user("u1").await, Err(ApiError::Unavailable)));
        assert_eq!(api.update_user("u1", &update).await, Err(ApiError::Unavailable));
    });
}
