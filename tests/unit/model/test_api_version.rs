use signinghub_client::error::AppError;
use signinghub_client::model::api_version::ApiVersion;

#[test]
fn test_default_version_is_v4() {
    assert_eq!(ApiVersion::default(), ApiVersion::V4);
    assert_eq!(ApiVersion::default().as_u8(), 4);
}

#[test]
fn test_try_from_rejects_unsupported_numbers() {
    assert_eq!(ApiVersion::try_from(3).unwrap(), ApiVersion::V3);
    assert_eq!(ApiVersion::try_from(4).unwrap(), ApiVersion::V4);
    for value in [0u8, 2, 5, 255] {
        assert!(matches!(
            ApiVersion::try_from(value),
            Err(AppError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_product_version_threshold() {
    assert_eq!(ApiVersion::from_product_version("7.7.9.0").unwrap(), ApiVersion::V4);
    assert_eq!(ApiVersion::from_product_version("7.7.9.12").unwrap(), ApiVersion::V4);
    assert_eq!(ApiVersion::from_product_version("8.0.0.1").unwrap(), ApiVersion::V4);
    assert_eq!(ApiVersion::from_product_version("7.7.8.99").unwrap(), ApiVersion::V3);
    assert_eq!(ApiVersion::from_product_version("7.6.10.0").unwrap(), ApiVersion::V3);
}

#[test]
fn test_product_version_compares_numerically() {
    // "7.10.0" sorts before "7.7.9" as text
    assert_eq!(ApiVersion::from_product_version("7.10.0.0").unwrap(), ApiVersion::V4);
}

#[test]
fn test_short_product_versions_map_to_v4() {
    assert_eq!(ApiVersion::from_product_version("8").unwrap(), ApiVersion::V4);
    assert_eq!(ApiVersion::from_product_version("10.1").unwrap(), ApiVersion::V4);
    assert_eq!(ApiVersion::from_product_version("10.1.2").unwrap(), ApiVersion::V4);
}

#[test]
fn test_invalid_product_versions() {
    assert!(ApiVersion::from_product_version("7.7.9.0.1").is_err());
    assert!(ApiVersion::from_product_version("7.x.9.0").is_err());
    assert!(ApiVersion::from_product_version("").is_err());
}

#[test]
fn test_versions_are_ordered_and_displayed() {
    assert!(ApiVersion::V3 < ApiVersion::V4);
    assert_eq!(ApiVersion::V3.to_string(), "3");
    assert_eq!(ApiVersion::SUPPORTED, [ApiVersion::V3, ApiVersion::V4]);
}

#[test]
fn test_serde_uses_the_number() {
    assert_eq!(serde_json::to_string(&ApiVersion::V3).unwrap(), "3");
    let parsed: ApiVersion = serde_json::from_str("4").unwrap();
    assert_eq!(parsed, ApiVersion::V4);
    assert!(serde_json::from_str::<ApiVersion>("5").is_err());
}
