use kurl::{Api, ApiContainer, Endpoint, KurlError, KurlRequest, UrlPattern};
use serde::Serialize;
use serde_json::json;

fn users_request() -> KurlRequest {
    let api = Api::new("https://api.example.com");
    let mut endpoint = Endpoint::new("v1");
    endpoint += "users";
    api.kurl(endpoint, |scope| {
        scope.param("id", "5");
    })
    .build()
}

#[test]
fn url_joins_root_endpoint_and_parameters() {
    assert_eq!(users_request().url(), "https://api.example.com/v1/users?id=5");
    assert_eq!(users_request().to_string(), users_request().url());
}

#[test]
fn root_with_trailing_slash_is_not_doubled() {
    let api = Api::new("https://api.example.com/");
    let request = api.kurl(Endpoint::new("/v1"), |_| {}).build();
    assert_eq!(request.url(), "https://api.example.com/v1");
}

#[test]
fn empty_endpoint_leaves_root_untouched() {
    let api = Api::new("https://api.example.com");
    let request = api.kurl(Endpoint::empty(), |_| {}).build();
    assert_eq!(request.url(), "https://api.example.com");
}

#[test]
fn parameters_keep_insertion_order() {
    let api = Api::new("https://api.example.com");
    let request = api
        .kurl(Endpoint::new("search"), |scope| {
            scope.param("q", "rust").param("page", 2).param("limit", 10);
            scope.param("q", "kurl");
        })
        .build();
    assert_eq!(
        request.url(),
        "https://api.example.com/search?q=kurl&page=2&limit=10"
    );
}

#[test]
fn fragment_is_appended_verbatim() {
    let api = Api::new("https://api.example.com");
    let request = api
        .kurl(Endpoint::new("docs"), |scope| {
            scope.param("lang", "en").fragment("#install");
        })
        .build();
    assert_eq!(request.url(), "https://api.example.com/docs?lang=en#install");

    let bare = api
        .kurl(Endpoint::new("docs"), |scope| {
            scope.fragment("install");
        })
        .build();
    assert_eq!(bare.url(), "https://api.example.com/docsinstall");
}

#[test]
fn headers_stay_out_of_the_url() {
    let api = Api::new("https://api.example.com");
    let request = api
        .kurl(Endpoint::new("v1"), |scope| {
            scope.header("X-Session-Token", "secret").header("X-Retry", 3);
        })
        .build();
    assert_eq!(request.url(), "https://api.example.com/v1");
    assert!(!request.contains("secret", true));
    assert_eq!(request.headers().get("X-Retry"), Some(&json!(3)));

    let map = request.header_map().unwrap();
    assert_eq!(map.get("x-session-token").unwrap(), "secret");
    assert_eq!(map.get("x-retry").unwrap(), "3");
}

#[test]
fn invalid_header_name_is_reported() {
    let api = Api::new("https://api.example.com");
    let request = api
        .kurl(Endpoint::empty(), |scope| {
            scope.header("bad header", "x");
        })
        .build();
    assert!(matches!(
        request.header_map(),
        Err(KurlError::InvalidHeader(_))
    ));
}

#[test]
fn substring_containment_respects_case_flag() {
    let request = users_request();
    assert!(request.contains("users", false));
    assert!(!request.contains("USERS", false));
    assert!(request.contains("USERS", true));
}

#[test]
fn full_match_is_anchored() {
    let request = users_request();
    let inner = UrlPattern::new(r"v1/users").unwrap();
    assert!(request.contains_regex(inner.as_regex()));
    assert!(!request.matches_regex(&inner));

    let whole = UrlPattern::new(r"https://[a-z.]+/v1/users\?id=\d+").unwrap();
    assert!(request.matches_regex(&whole));

    // Leftmost-first alternation must not hide a full match.
    let alternation =
        UrlPattern::new(r"https|https://api\.example\.com/v1/users\?id=5").unwrap();
    assert!(request.matches_regex(&alternation));
}

#[test]
fn full_match_keeps_builder_options() {
    let request = users_request();

    let shouting = UrlPattern::builder(r"HTTPS://API\.EXAMPLE\.COM/V1/USERS\?ID=5")
        .case_insensitive(true)
        .build()
        .unwrap();
    assert!(request.contains_regex(shouting.as_regex()));
    assert!(request.matches_regex(&shouting));

    let verbose = UrlPattern::builder(r"https://api\.example\.com /v1/users \?id=5 # whole url")
        .ignore_whitespace(true)
        .build()
        .unwrap();
    assert!(request.contains_regex(verbose.as_regex()));
    assert!(request.matches_regex(&verbose));

    let tail = UrlPattern::builder(r"v1/users\?id=5$")
        .multi_line(true)
        .build()
        .unwrap();
    assert!(request.contains_regex(tail.as_regex()));
    assert!(!request.matches_regex(&tail));
}

#[test]
fn string_patterns_compile_before_matching() {
    let request = users_request();
    assert!(request.contains_pattern(r"id=\d").unwrap());
    assert!(!request.matches(r"id=\d").unwrap());
    assert!(matches!(
        request.matches("(unclosed"),
        Err(KurlError::InvalidPattern(_))
    ));
    assert!(matches!(
        request.contains_pattern("[z-a]"),
        Err(KurlError::InvalidPattern(_))
    ));
}

#[test]
fn ensure_helpers_report_the_url() {
    let request = users_request();
    assert!(request.ensure_contains("v1/users", false).is_ok());
    assert!(request.ensure_matches(r"https://.*\?id=5").is_ok());

    match request.ensure_contains("orders", false) {
        Err(KurlError::CheckFailed { url, .. }) => assert_eq!(url, request.url()),
        other => panic!("expected CheckFailed, got {other:?}"),
    }
    assert!(matches!(
        request.ensure_matches("("),
        Err(KurlError::InvalidPattern(_))
    ));
}

#[test]
fn to_url_parses_absolute_requests() {
    let parsed = users_request().to_url().unwrap();
    assert_eq!(parsed.host_str(), Some("api.example.com"));
    assert_eq!(parsed.path(), "/v1/users");
    assert_eq!(parsed.query(), Some("id=5"));

    let relative = Api::new("api").kurl(Endpoint::new("v1"), |_| {}).build();
    assert!(matches!(relative.to_url(), Err(KurlError::InvalidUrl(_))));
}

#[test]
fn direct_url_ignores_the_api_root() {
    let api = Api::new("https://api.example.com");
    let request = api
        .kurl_direct("https://other.example.org/ping", |scope| {
            scope.param("v", 1);
        })
        .build();
    assert_eq!(request.url(), "https://other.example.org/ping?v=1");
    assert!(request.endpoint().is_empty());
}

struct Service {
    api: Api,
}

impl ApiContainer for Service {
    fn api(&self) -> &Api {
        &self.api
    }
}

#[test]
fn api_container_forwards_to_its_api() {
    let service = Service {
        api: Api::new("https://api.example.com/base/"),
    };
    let request = service.kurl(Endpoint::new("items"), |_| {}).build();
    assert_eq!(request.url(), "https://api.example.com/base/items");
}

#[test]
fn fluent_builder_matches_closure() {
    let api = Api::new("https://api.example.com");
    let fluent: KurlRequest = api
        .kurl(Endpoint::new("v1") + "users", |_| {})
        .with_param("id", 5)
        .with_header("Accept", "application/json")
        .with_fragment("#top")
        .into();
    let closure = api
        .kurl(Endpoint::new("v1") + "users", |scope| {
            scope
                .param("id", 5)
                .header("Accept", "application/json")
                .fragment("#top");
        })
        .build();
    assert_eq!(fluent, closure);
    assert_eq!(fluent.url(), "https://api.example.com/v1/users?id=5#top");
}

#[derive(Serialize)]
struct FetchOptions {
    limit: Option<i64>,
    before: Option<String>,
    sort: Option<String>,
    include_users: Option<bool>,
}

#[test]
fn params_from_flattens_a_struct() {
    let api = Api::new("https://api.example.com");
    let opts = FetchOptions {
        limit: Some(50),
        before: None,
        sort: Some("Latest".to_string()),
        include_users: Some(true),
    };
    let request = api
        .kurl(Endpoint::new("channels/abc/messages"), |scope| {
            scope.param("nonce", "n1");
            scope.params_from(&opts).unwrap();
        })
        .build();
    assert_eq!(
        request.url(),
        "https://api.example.com/channels/abc/messages?nonce=n1&limit=50&sort=Latest&include_users=true"
    );
}
