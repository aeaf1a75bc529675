use super::*;

/// Tests both accepted authorization schemes.
///
/// Expected: The key for `Bearer` and `Token`, regardless of case
#[test]
fn accepts_bearer_and_token_schemes() {
    let bearer = auth_headers("Bearer abc123");
    let token = auth_headers("Token abc123");
    let lowercase = auth_headers("bearer abc123");

    assert_eq!(bearer_token(&bearer), Some("abc123"));
    assert_eq!(bearer_token(&token), Some("abc123"));
    assert_eq!(bearer_token(&lowercase), Some("abc123"));
}

/// Tests headers that carry no usable key.
///
/// Expected: None for a missing header, another scheme, or an empty key
#[test]
fn rejects_other_headers() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
    assert_eq!(bearer_token(&auth_headers("Basic dXNlcjpwYXNz")), None);
    assert_eq!(bearer_token(&auth_headers("Bearer ")), None);
    assert_eq!(bearer_token(&auth_headers("abc123")), None);
}
