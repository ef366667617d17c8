//! Demonstration sequence
//!
//! Runs the JSON helpers on fixed sample data, then calls every endpoint of
//! the sample service once. Nothing here is configurable.

use crate::client::SampleServiceClient;
use crate::error::Result;
use crate::exit_code::exit_code_for_error;
use crate::json;
use crate::model::{KeyValuePair, UserRecord};
use indexmap::IndexMap;

const BASE_URL: &str = "https://sample-service.com/api/";
const SAMPLE_ID: &str = "someId-1";
const SAMPLE_KEY: &str = "someKey-123";
const UPLOAD_FILE_NAME: &str = "履歴書だワン.pdf";

const SAMPLE_MAPPING: &str = r#"
{
  "fruits-3": "バナナ",
  "fruits-4": "ぶどう"
}
"#;

const SAMPLE_USER: &str = r#"
{
  "token": "token_qwertyuiop@[",
  "userName": "Alice",
  "isExcellent": true,
  "someIntValue": 10,
  "someDoubleValue": null,
  "kvs": [
    {
      "key": "key-1",
      "value": "value-1"
    },
    {
      "key": "key-2",
      "value": "value-2"
    }
  ]
}
"#;

/// Entry point for the demonstration binary
pub fn run() {
    crate::logging::init();

    run_json_samples();

    let code = match run_http_samples() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sample-service-client: error: {}", e);
            exit_code_for_error(&e)
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
}

fn run_json_samples() {
    let mut fruits = IndexMap::new();
    fruits.insert("fruits-1".to_string(), "いちご");
    fruits.insert("fruits-2".to_string(), "りんご");
    println!("{}", json::mapping_to_json(&fruits));

    let mut scores = IndexMap::new();
    scores.insert("国語".to_string(), 80);
    scores.insert("英語".to_string(), 90);
    println!("{}", json::mapping_to_json(&scores));

    for (key, value) in json::json_to_mapping(Some(SAMPLE_MAPPING)) {
        println!("key: {} value: {}", key, value);
    }

    let record = UserRecord {
        token: "token_qwertyuiop@[".to_string(),
        user_name: "Alice".to_string(),
        is_excellent: true,
        some_int_value: 10,
        some_double_value: Some(12.345678901),
        kvs: Some(vec![
            KeyValuePair::new("key-1", "value-1"),
            KeyValuePair::new("key-2", "value-2"),
        ]),
    };
    if let Some(json) = json::record_to_json(&record) {
        println!("{}", json);
    }

    if let Some(user) = json::json_to_record::<UserRecord>(Some(SAMPLE_USER)) {
        println!(
            "token: {} userName: {} isExcellent: {} someIntValue: {} someDoubleValue: {:?} kvs count: {}",
            user.token,
            user.user_name,
            user.is_excellent,
            user.some_int_value,
            user.some_double_value,
            user.kvs.as_ref().map_or(0, Vec::len),
        );
    }
}

/// Calls every endpoint and returns the exit code of the first failure, or 0.
fn run_http_samples() -> Result<i32> {
    let client = SampleServiceClient::new(BASE_URL)?;
    let upload_path = std::env::temp_dir().join(UPLOAD_FILE_NAME);

    let outcomes = [
        ("get", client.get(SAMPLE_ID)),
        ("delete", client.delete(SAMPLE_ID)),
        ("post_json", client.post_json(SAMPLE_KEY)),
        ("post_multipart", client.post_multipart(&upload_path)),
    ];

    let mut code = 0;
    for (operation, outcome) in outcomes {
        match outcome {
            Ok(body) => log::info!("{}: {}", operation, body),
            Err(e) => {
                log::error!("{} failed: {}", operation, e);
                if code == 0 {
                    code = exit_code_for_error(&e);
                }
            }
        }
    }
    Ok(code)
}
