//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::inbound::http::api_scope;

fn ada(id: i64) -> User {
    User::new(UserId::new(id), UserDraft::new("Ada", "Lovelace"))
}

fn test_app(
    query: MockUsersQuery,
    command: MockUsersCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}

async fn body_text(res: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

#[actix_web::test]
async fn list_returns_json_array() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Ok(vec![ada(1), ada(2)]));
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        value,
        json!([
            { "id": 1, "firstName": "Ada", "lastName": "Lovelace" },
            { "id": 2, "firstName": "Ada", "lastName": "Lovelace" }
        ])
    );
}

#[actix_web::test]
async fn get_returns_user_when_present() {
    let mut query = MockUsersQuery::new();
    query
        .expect_fetch_user()
        .with(eq(UserId::new(7)))
        .times(1)
        .return_once(|_| Ok(Some(ada(7))));
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users/7").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        value,
        json!({ "id": 7, "firstName": "Ada", "lastName": "Lovelace" })
    );
}

#[actix_web::test]
async fn get_missing_user_is_bare_404() {
    let mut query = MockUsersQuery::new();
    query.expect_fetch_user().times(1).return_once(|_| Ok(None));
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/users/9999")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.is_empty());
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("99999999999999999999")]
#[actix_web::test]
async fn non_integer_id_is_rejected(#[case] raw: &str) {
    let mut query = MockUsersQuery::new();
    query.expect_fetch_user().never();
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/users/{raw}"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["details"]["field"], "id");
    assert_eq!(value["details"]["value"], raw);
}

#[actix_web::test]
async fn create_ignores_client_id_and_confirms_in_text() {
    let mut command = MockUsersCommand::new();
    command
        .expect_add_user()
        .withf(|draft| draft == &UserDraft::new("Ada", "Lovelace"))
        .times(1)
        .return_once(|draft| Ok(User::new(UserId::new(1), draft)));
    let app = actix_test::init_service(test_app(MockUsersQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "id": 500, "firstName": "Ada", "lastName": "Lovelace" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, USER_ADDED);
}

#[rstest]
#[case(json!({ "firstName": "Ada" }))]
#[case(json!({ "firstName": "Ada", "lastName": null }))]
#[actix_web::test]
async fn create_accepts_missing_or_null_names(#[case] body: Value) {
    let mut command = MockUsersCommand::new();
    command
        .expect_add_user()
        .withf(|draft| draft == &UserDraft::from_parts(Some("Ada".to_owned()), None))
        .times(1)
        .return_once(|draft| Ok(User::new(UserId::new(1), draft)));
    let app = actix_test::init_service(test_app(MockUsersQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, USER_ADDED);
}

#[rstest]
#[case(json!([]))]
#[case(json!({ "firstName": 7 }))]
#[actix_web::test]
async fn create_rejects_malformed_body(#[case] body: Value) {
    let mut command = MockUsersCommand::new();
    command.expect_add_user().never();
    let app = actix_test::init_service(test_app(MockUsersQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value["code"], "invalid_request");
}

#[actix_web::test]
async fn update_with_omitted_name_clears_it() {
    let mut command = MockUsersCommand::new();
    command
        .expect_update_user()
        .withf(|id, draft| {
            *id == UserId::new(3)
                && draft == &UserDraft::from_parts(None, Some("Hopper".to_owned()))
        })
        .times(1)
        .return_once(|_, _| Ok(true));
    let app = actix_test::init_service(test_app(MockUsersQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/users/3")
            .set_json(json!({ "lastName": "Hopper" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, USER_UPDATED);
}

#[actix_web::test]
async fn get_renders_absent_names_as_null() {
    let mut query = MockUsersQuery::new();
    query
        .expect_fetch_user()
        .with(eq(UserId::new(4)))
        .times(1)
        .return_once(|_| Ok(Some(User::new(UserId::new(4), UserDraft::default()))));
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users/4").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value, json!({ "id": 4, "firstName": null, "lastName": null }));
}

#[rstest]
#[case(true, StatusCode::OK, USER_UPDATED)]
#[case(false, StatusCode::NOT_FOUND, "")]
#[actix_web::test]
async fn update_reports_outcome(
    #[case] found: bool,
    #[case] status: StatusCode,
    #[case] body: &str,
) {
    let mut command = MockUsersCommand::new();
    command
        .expect_update_user()
        .withf(|id, draft| *id == UserId::new(3) && draft == &UserDraft::new("Grace", "Hopper"))
        .times(1)
        .return_once(move |_, _| Ok(found));
    let app = actix_test::init_service(test_app(MockUsersQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/users/3")
            .set_json(json!({ "firstName": "Grace", "lastName": "Hopper" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), status);
    assert_eq!(body_text(res).await, body);
}

#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("user repository unavailable")));
    let app = actix_test::init_service(test_app(query, MockUsersCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let value: Value = actix_test::read_body_json(res).await;
    assert_eq!(value["code"], "service_unavailable");
}
