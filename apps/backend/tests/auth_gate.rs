mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use backend_test_support::unique_helpers::unique_email;
use inventory_backend::state::app_state::AppState;
use inventory_backend::state::security_config::SecurityConfig;
use serde_json::Value;
use support::auth::{bearer_header, expired_token_for, token_for};
use support::factory::seed_item;
use support::{create_test_app, test_state};

#[actix_web::test]
async fn missing_header_is_401() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized access")
        .await;
}

#[actix_web::test]
async fn invalid_tokens_are_403() {
    let state = test_state().await;
    let email = unique_email("gate");
    let wrong_secret = SecurityConfig::new("some-other-secret");

    let cases = vec![
        ("garbage", "Bearer not-a-jwt".to_string()),
        (
            "expired",
            format!("Bearer {}", expired_token_for(&email, &state.security)),
        ),
        ("wrong secret", bearer_header(&email, &wrong_secret)),
        ("no space", token_for(&email, &state.security)),
        ("empty token", "Bearer ".to_string()),
    ];

    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    for (label, header) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/products/{email}"))
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "case: {label}");
        assert_problem_details(
            resp,
            StatusCode::FORBIDDEN,
            "FORBIDDEN_INVALID_TOKEN",
            "forbidden access",
        )
        .await;
    }
}

#[actix_web::test]
async fn owner_mismatch_is_403_even_with_valid_token() {
    let state = test_state().await;
    let header = bearer_header("b@x.com", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .insert_header(("Authorization", header))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::FORBIDDEN,
        "FORBIDDEN_OWNER_MISMATCH",
        "Forbidden access",
    )
    .await;
}

#[actix_web::test]
async fn matching_owner_sees_only_own_records() {
    let state = test_state().await;
    seed_item(&state, "a@x.com", 3, "Lamp").await;
    seed_item(&state, "b@x.com", 1, "Chair").await;
    seed_item(&state, "a@x.com", 7, "Desk").await;

    let header = bearer_header("a@x.com", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .insert_header(("Authorization", header))
        .to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|r| r["email"] == "a@x.com"));
    let names: Vec<&str> = body.iter().filter_map(|r| r["itemName"].as_str()).collect();
    assert_eq!(names, vec!["Lamp", "Desk"]);
}

#[actix_web::test]
async fn scheme_word_is_not_checked() {
    let state = test_state().await;
    let token = token_for("a@x.com", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .insert_header(("Authorization", format!("Token {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn rejections_happen_before_any_database_access() {
    // No database at all: a handler reaching for one would answer 500.
    let state = AppState::new_without_db(SecurityConfig::new(support::app_builder::TEST_SECRET));
    let mismatched = bearer_header("b@x.com", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::get().uri("/products/a@x.com").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .insert_header(("Authorization", "Bearer junk"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::get()
        .uri("/products/a@x.com")
        .insert_header(("Authorization", mismatched))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[actix_web::test]
async fn ungated_routes_ignore_authorization() {
    let state = test_state().await;
    let id = seed_item(&state, "a@x.com", 1, "Lamp").await;
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::get().uri("/products").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/products")
        .insert_header(("Authorization", "Bearer junk"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // DELETE shares the path shape of the gated GET but is open.
    let req = test::TestRequest::delete()
        .uri(&format!("/products/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
