mod common;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use common::proptest_prelude::proptest_prelude_config;
use inventory_backend::auth::{issue_token, verify_token, ClaimRequest};
use inventory_backend::state::security_config::SecurityConfig;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._]{0,15}", "[a-z]{1,10}", "(com|org|test)")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn extras_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(
        "[a-z]{1,8}",
        prop_oneof![
            any::<i32>().prop_map(Value::from),
            "[ -~]{0,20}".prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ],
        0..4,
    )
    .prop_map(|m| {
        m.into_iter()
            .map(|(k, v)| (format!("x_{k}"), v))
            .collect()
    })
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn issue_then_verify_round_trips(
        email in email_strategy(),
        extra in extras_strategy(),
        age_secs in 0u64..(23 * 60 * 60),
    ) {
        let sec = SecurityConfig::new("prop-secret");
        let now = SystemTime::now() - Duration::from_secs(age_secs);
        let request = ClaimRequest { email: email.clone(), extra: extra.clone() };

        let token = issue_token(&request, now, &sec).unwrap();
        let claim = verify_token(&token, &sec).unwrap();

        let iat = now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
        prop_assert_eq!(&claim.email, &email);
        prop_assert_eq!(claim.iat, iat);
        prop_assert_eq!(claim.exp - claim.iat, 86_400);
        prop_assert_eq!(&claim.extra, &extra);

        // verification is idempotent
        prop_assert_eq!(verify_token(&token, &sec).unwrap(), claim);
    }

    #[test]
    fn tampered_tokens_never_verify(email in email_strategy(), flip in 0usize..64) {
        let sec = SecurityConfig::new("prop-secret");
        let token = issue_token(&ClaimRequest::new(email), SystemTime::now(), &sec).unwrap();

        let signature_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        // last char holds padding bits, so leave it alone
        let idx = signature_start + flip % (bytes.len() - 1 - signature_start);
        bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(verify_token(&tampered, &sec).is_err());
    }
}
