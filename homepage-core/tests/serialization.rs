use homepage_core::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

fn sample_message() -> Message {
    Message {
        id: "33333333-3333-4333-8333-333333333333".to_string(),
        name: "Ann".to_string(),
        message: "Hi!".to_string(),
        created_at: "2025-11-02T10:20:35Z".to_string(),
    }
}

/*
    Obiettivo test: il Message sul wire usa `id` e `createdAt` (camelCase),
    come si aspetta il frontend.
*/
#[test]
fn message_uses_camel_case_fields() {
    let m = sample_message();
    let v = parse(&json::to_string(&m).expect("serialize"));

    assert_eq!(v["id"], m.id);
    assert_eq!(v["name"], "Ann");
    assert_eq!(v["message"], "Hi!");
    assert_eq!(v["createdAt"], m.created_at);
    assert!(v["created_at"].is_null());
}

/*
    Client scritti per un document store mandano `_id`: deve essere accettato in lettura.
*/
#[test]
fn message_accepts_underscore_id_alias() {
    let raw = r#"{"_id":"33333333-3333-4333-8333-333333333333","name":"Ann","message":"Hi!","createdAt":"2025-11-02T10:20:35Z"}"#;
    let m: Message = json::from_str(raw).expect("deserialize");
    assert_eq!(m, sample_message());
}

/*
    Envelope di successo per la lista: { messages: [...], status: "all good" }
*/
#[test]
fn list_envelope_shape() {
    let resp = ListMessagesResponse::ok(vec![sample_message()]);
    let v = parse(&json::to_string(&resp).expect("serialize"));

    assert_eq!(v["status"], "all good");
    assert_eq!(v["messages"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["messages"][0]["name"], "Ann");

    let empty = parse(&json::to_string(&ListMessagesResponse::ok(vec![])).unwrap());
    assert_eq!(empty["messages"], Value::Array(vec![]));
}

#[test]
fn save_envelope_shape() {
    let resp = SaveMessageResponse::ok(sample_message());
    let v = parse(&json::to_string(&resp).expect("serialize"));

    assert_eq!(v["status"], STATUS_OK);
    assert_eq!(v["message"]["message"], "Hi!");

    let back: SaveMessageResponse = json::from_str(&v.to_string()).expect("deserialize");
    assert_eq!(back, resp);
}

/*
    Envelope di errore: { error: { code, message }, status }, senza altri campi.
*/
#[test]
fn error_envelope_shape() {
    let resp = ErrorResponse {
        error: Error::new(ErrorCode::StorageError, "pool closed"),
        status: STATUS_RETRIEVE_FAILED.to_string(),
    };
    let v = parse(&json::to_string(&resp).expect("serialize"));

    assert_eq!(v["status"], "failed to retrieve messages from the database");
    assert_eq!(v["error"]["code"], "storage_error");
    assert_eq!(v["error"]["message"], "pool closed");
    assert_eq!(v["error"].as_object().map(|o| o.len()), Some(2));
}

#[test]
fn redacted_error_keeps_only_the_code() {
    let err = Error::new(ErrorCode::StorageError, "error returned from database: disk I/O error");
    let redacted = err.redacted();
    assert_eq!(redacted.code, ErrorCode::StorageError);
    assert!(!redacted.message.contains("disk"));
}

/*
    Campi mancanti nella richiesta di salvataggio diventano stringhe vuote (nessuna validazione).
*/
#[test]
fn save_request_defaults_missing_fields() {
    let req: SaveMessageRequest = json::from_str(r#"{"name":"Ann"}"#).expect("deserialize");
    assert_eq!(req.name, "Ann");
    assert_eq!(req.message, "");

    let req: SaveMessageRequest = json::from_str("{}").expect("deserialize");
    assert_eq!(req, SaveMessageRequest::default());
}

#[test]
fn about_content_is_stable_and_uses_img_url() {
    let first = json::to_string(&AboutContent::page()).unwrap();
    let second = json::to_string(&AboutContent::page()).unwrap();
    assert_eq!(first, second);

    let v = parse(&first);
    assert_eq!(v["title"], "Here is a little about me!");
    assert_eq!(v["imgUrl"], "/Jiaying.jpeg");
    assert!(v["body"].as_str().unwrap().starts_with("Hello!"));
}

/*
    Il body della pagina About è servito esattamente come scritto: trattino lungo,
    indentazione delle righe e spazi finali compresi.
*/
#[test]
fn about_body_is_served_verbatim() {
    let body = AboutContent::page().body;
    assert!(body.contains("crocheting—a hobby"));
    assert!(body.contains("with my friends,it was"));
    assert!(body.contains("Computer Science. \n      I’m from New York"));
    assert!(body.ends_with("even more special."));
}

#[test]
fn message_ids_are_normalized() {
    let id = new_message_id();
    assert_eq!(normalize_message_id(&id), Some(id.clone()));
    assert_eq!(normalize_message_id(&id.to_uppercase()), Some(id));
    assert_eq!(normalize_message_id("not-an-id"), None);
    assert_eq!(normalize_message_id(""), None);
}

#[test]
fn timestamps_are_rfc3339_utc() {
    let ts = now_timestamp();
    assert!(ts.ends_with('Z'), "expected UTC timestamp, got {}", ts);
    assert!(ts.contains('T'));
}
