mod error {
    pub use gmail_digest::error::*;
}

mod models {
    pub use gmail_digest::api::models::*;
}

mod threads {
    pub use gmail_digest::api::threads::*;
}

mod client_under_test {
    #![allow(dead_code)]

    include!("../src/api/client.rs");

    #[test]
    fn thread_list_resource_maps_to_summaries() {
        let raw = r#"{
            "threads": [
                {"id": "t-1", "snippet": "first snippet"},
                {"id": "t-2"}
            ],
            "resultSizeEstimate": 2
        }"#;

        let resource: GmailThreadListResource = serde_json::from_str(raw).expect("list json");
        let entries = resource.threads.expect("threads present");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "t-1");
        assert_eq!(entries[0].snippet.as_deref(), Some("first snippet"));
        assert_eq!(entries[1].snippet, None);
    }

    #[test]
    fn empty_thread_list_maps_to_no_threads() {
        let resource: GmailThreadListResource =
            serde_json::from_str(r#"{"resultSizeEstimate": 0}"#).expect("list json");
        assert!(resource.threads.is_none());
    }

    #[test]
    fn endpoint_paths_cover_threads_api() {
        assert_eq!(threads::thread_endpoint("abc"), "/gmail/v1/users/me/threads/abc");
        assert_eq!(threads::list_endpoint(), "/gmail/v1/users/me/threads");

        let get = threads::get_query();
        assert!(get.contains(&("format".to_string(), "full".to_string())));

        let list = threads::list_query(25, Some("is:unread"));
        assert!(list.contains(&("maxResults".to_string(), "25".to_string())));
        assert!(list.contains(&("q".to_string(), "is:unread".to_string())));
    }

    #[test]
    fn forbidden_maps_to_auth_error_with_login_hint() {
        let error = map_api_error(
            StatusCode::FORBIDDEN,
            r#"{"error":{"code":403,"message":"Insufficient Permission","status":"PERMISSION_DENIED"}}"#,
        );

        match error {
            AppError::Auth(message) => {
                assert!(message.contains("Insufficient Permission"));
                assert!(message.contains("gmail-digest auth login"));
            }
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}
