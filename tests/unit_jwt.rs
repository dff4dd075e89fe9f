use registrar::config::jwt::JwtConfig;
use registrar::utils::jwt::{create_access_token, token_digest, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token(1001, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(1001, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "1001");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_tokens_are_unique_per_issue() {
    let jwt_config = get_test_jwt_config();

    // same subject, same instant: still two revocable sessions
    let token1 = create_access_token(1001, &jwt_config).unwrap();
    let token2 = create_access_token(1001, &jwt_config).unwrap();

    assert_ne!(token1, token2);
    assert_ne!(token_digest(&token1), token_digest(&token2));
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(1001, &jwt_config).unwrap();

    let other_config = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &other_config).is_err());
}

#[test]
fn test_verify_expired_token() {
    let jwt_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: -120,
    };

    let token = create_access_token(1001, &jwt_config).unwrap();

    assert!(verify_token(&token, &jwt_config).is_err());
}

#[test]
fn test_token_digest_is_deterministic() {
    let digest1 = token_digest("some-token");
    let digest2 = token_digest("some-token");

    assert_eq!(digest1, digest2);
    assert_eq!(digest1.len(), 64);
}

#[test]
fn test_token_digest_differs_per_token() {
    assert_ne!(token_digest("token-a"), token_digest("token-b"));
}

#[test]
fn test_digest_does_not_contain_the_token() {
    let token = "secret-bearer-token";
    let digest = token_digest(token);

    assert!(!digest.contains(token));
}
