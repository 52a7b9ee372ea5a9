use contracts::system::auth::TokenClaims;

/// Decode the payload of a JWT for display purposes only (role, id).
/// No signature verification happens client-side.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let json = atob(&base64url_to_base64(payload))?;
    serde_json::from_str(&json).ok()
}

fn atob(data: &str) -> Option<String> {
    web_sys::window()?.atob(data).ok()
}

/// JWT payloads are base64url without padding; `atob` wants standard
/// base64.
fn base64url_to_base64(input: &str) -> String {
    let mut out: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64url_to_base64() {
        assert_eq!(base64url_to_base64("ab-_"), "ab+/");
        assert_eq!(base64url_to_base64("abcde"), "abcde===");
        assert_eq!(base64url_to_base64("abcd"), "abcd");
    }

    #[test]
    fn test_claims_json_shape() {
        let claims: TokenClaims = serde_json::from_str(
            r#"{"id":"42","role":"superadmin","iat":1700000000,"exp":1700003600}"#,
        )
        .unwrap();
        assert_eq!(claims.id, "42");
        assert!(claims.role.is_admin());
    }
}
