use std::{sync::Arc, time::Duration};

use httpmock::prelude::*;
use serde_json::json;
use tgb_core::{
    types::{ForceReply, ParseMode},
    Bot, Error, InputFile,
};
use tgb_http::HttpTransport;

const TOKEN: &str = "123456:TEST";

fn bot_for(server: &MockServer) -> Bot {
    let transport =
        HttpTransport::new(Duration::from_secs(2), Duration::from_secs(5)).unwrap();
    Bot::with_urls(
        TOKEN,
        &server.url("/bot"),
        &server.url("/file/bot"),
        Arc::new(transport),
    )
    .unwrap()
}

fn path(method: &str) -> String {
    format!("/bot{TOKEN}/{method}")
}

#[tokio::test]
async fn get_me_uses_get_and_fills_identity() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path(path("getMe"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "ok": true,
                "result": {
                    "id": 123456,
                    "is_bot": true,
                    "first_name": "Test",
                    "username": "test_bot"
                }
            }));
    });

    let bot = bot_for(&server);
    let me = bot.get_me().await.unwrap();
    assert_eq!(me.username.as_deref(), Some("test_bot"));

    // cached: no second request
    assert_eq!(bot.name().await.unwrap(), "@test_bot");
    mock.assert();
}

#[tokio::test]
async fn send_message_posts_json_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("sendMessage"))
            .header("content-type", "application/json")
            .json_body(json!({
                "chat_id": 42,
                "text": "<b>hello</b>",
                "parse_mode": "HTML",
                "reply_markup": {"force_reply": true}
            }));
        then.status(200).json_body(json!({
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1_500_000_000,
                "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                "text": "hello"
            }
        }));
    });

    let bot = bot_for(&server);
    let msg = bot
        .send_message(42, "<b>hello</b>")
        .parse_mode(ParseMode::Html)
        .reply_markup(ForceReply::new())
        .await
        .unwrap();

    assert_eq!(msg.chat.id, 42);
    assert_eq!(msg.text.as_deref(), Some("hello"));
    mock.assert();
}

#[tokio::test]
async fn upload_goes_out_as_multipart() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(path("sendPhoto"))
            .header_includes("content-type", "multipart/form-data")
            .body_includes("name=\"reply_markup\"")
            .body_includes("{\"force_reply\":true}")
            .body_includes("filename=\"cat.jpg\"");
        then.status(200).json_body(json!({
            "ok": true,
            "result": {
                "message_id": 2,
                "date": 1_500_000_000,
                "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                "caption": "cat",
                "photo": [
                    {"file_id": "small", "width": 90, "height": 90},
                    {"file_id": "big", "width": 800, "height": 800, "file_size": 4096}
                ]
            }
        }));
    });

    let bot = bot_for(&server);
    let msg = bot
        .send_photo(42, InputFile::memory("cat.jpg", vec![0xFF, 0xD8, 0xFF]))
        .caption("cat")
        .reply_markup(ForceReply::new())
        .await
        .unwrap();

    assert_eq!(msg.caption.as_deref(), Some("cat"));
    assert_eq!(msg.largest_photo().unwrap().file_id, "big");
    mock.assert();
}

#[tokio::test]
async fn error_statuses_are_mapped() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path(path("getChat"));
        then.status(400).json_body(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path(path("leaveChat"));
        then.status(403).json_body(json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot is not a member of the group chat"
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path(path("getChatMembersCount"));
        then.status(429).json_body(json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 3",
            "parameters": {"retry_after": 3}
        }));
    });

    let bot = bot_for(&server);

    match bot.get_chat(-1).await {
        Err(Error::BadRequest(d)) => assert_eq!(d, "Bad Request: chat not found"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        bot.leave_chat(-1).await,
        Err(Error::Unauthorized(_))
    ));

    let err = bot.get_chat_members_count(-1).await.unwrap_err();
    assert!(matches!(err, Error::RetryAfter { seconds: 3 }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn get_file_then_download() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path(path("getFile"))
            .json_body(json!({"file_id": "AgAD"}));
        then.status(200).json_body(json!({
            "ok": true,
            "result": {"file_id": "AgAD", "file_size": 3, "file_path": "photos/file_1.jpg"}
        }));
    });
    let download = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/file/bot{TOKEN}/photos/file_1.jpg"));
        then.status(200).body("abc");
    });

    let bot = bot_for(&server);
    let file = bot.get_file("AgAD").await.unwrap();
    assert_eq!(
        file.file_path.as_deref(),
        Some(server.url(format!("/file/bot{TOKEN}/photos/file_1.jpg")).as_str())
    );

    let bytes = bot.download_file(&file).await.unwrap();
    assert_eq!(bytes, b"abc".to_vec());
    download.assert();
}
