pub fn thread_endpoint(id: &str) -> String {
    format!("/gmail/v1/users/me/threads/{id}")
}

pub fn list_endpoint() -> &'static str {
    "/gmail/v1/users/me/threads"
}

pub fn get_query() -> Vec<(String, String)> {
    vec![("format".to_string(), "full".to_string())]
}

pub fn list_query(limit: u32, query: Option<&str>) -> Vec<(String, String)> {
    let mut params = vec![("maxResults".to_string(), limit.to_string())];
    if let Some(query) = query {
        params.push(("q".to_string(), query.to_string()));
    }
    params
}
