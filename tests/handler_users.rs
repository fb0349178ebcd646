mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_recommendations_from_nearest_neighbor() {
    let server = common::catalog_server();

    // Users 2 and 3 each share film 1 with user 1; the tie goes to user 2.
    let response = server.get("/users/1/recommendations").await;

    response.assert_status_ok();
    assert_eq!(common::film_ids(&response.json::<Value>()), vec![3]);
}

#[tokio::test]
async fn test_recommendations_exclude_liked_films() {
    let server = common::catalog_server();

    let response = server.get("/users/4/recommendations").await;

    response.assert_status_ok();
    let ids = common::film_ids(&response.json::<Value>());
    assert_eq!(ids, vec![1]);
    assert!(!ids.contains(&5));
}

#[tokio::test]
async fn test_recommendations_for_user_without_likes() {
    let server = common::catalog_server();

    let response = server.get("/users/99/recommendations").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_common_friends() {
    let server = common::catalog_server();

    let response = server.get("/users/1/friends/common/4").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json[0]["id"], 3);
    assert_eq!(json[0]["login"], "morpheus");
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_common_friends_with_self_lists_own_friends() {
    let server = common::catalog_server();

    let response = server.get("/users/1/friends/common/1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json[0]["id"], 2);
    assert_eq!(json[1]["id"], 3);
    // User 2 has a blank name.
    assert_eq!(json[0]["name"], "trinity");
}

#[tokio::test]
async fn test_common_friends_disjoint() {
    let server = common::catalog_server();

    let response = server.get("/users/2/friends/common/3").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_invalid_user_id_is_rejected() {
    let server = common::catalog_server();

    let response = server.get("/users/abc/recommendations").await;

    response.assert_status_bad_request();
}
