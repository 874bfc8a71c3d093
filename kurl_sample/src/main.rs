//! Kurl sample: builds a set of request URLs against an api root and checks
//! each of them against a URL validation pattern.
//!
//! The api root comes from `KURL_API_ROOT` (optionally loaded from an env
//! file). Requests come from a JSON file given with `--config`, or from a
//! built-in demo set.

use std::{env, fs, process};

use kurl::{Api, Endpoint, KurlRequest, UrlPattern};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_API_ROOT: &str = "https://api.example.com";

/// Loose absolute-URL check: scheme, optional credentials, a dotted host with
/// an alphabetic TLD, optional port, then anything without whitespace.
const URL_VALIDATION_PATTERN: &str = r"(?i)^(?:https?|ftp)://(?:\S+(?::\S*)?@)?(?:[a-z0-9\x{00a1}-\x{ffff}](?:[a-z0-9\x{00a1}-\x{ffff}-]*[a-z0-9\x{00a1}-\x{ffff}])?\.)+[a-z\x{00a1}-\x{ffff}]{2,}\.?(?::\d{2,5})?(?:[/?#]\S*)?$";

#[derive(Debug, Clone)]
struct SampleConfig {
    api_root: String,
}

impl SampleConfig {
    fn from_env() -> Self {
        let api_root = env::var("KURL_API_ROOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
        Self { api_root }
    }
}

/// One request as described in the JSON config file.
#[derive(Debug, Deserialize, Clone, Default)]
struct RequestSpec {
    /// Segments chained onto the api root, in order.
    #[serde(default)]
    endpoint: Vec<String>,
    /// Full address used instead of the api root and endpoint.
    #[serde(default)]
    direct: Option<String>,
    #[serde(default)]
    params: Map<String, Value>,
    #[serde(default)]
    headers: Map<String, Value>,
    #[serde(default)]
    fragment: String,
    /// Pattern the whole URL is expected to match.
    #[serde(default)]
    expect: Option<String>,
}

impl RequestSpec {
    fn build(&self, api: &Api) -> KurlRequest {
        let configure = |scope: &mut kurl::KurlScope| {
            for (name, value) in &self.params {
                match value {
                    Value::String(s) => scope.param(name.as_str(), s),
                    other => scope.param(name.as_str(), other),
                };
            }
            for (name, value) in &self.headers {
                scope.header(name.as_str(), value.clone());
            }
            scope.fragment(self.fragment.as_str());
        };

        match &self.direct {
            Some(url) => api.kurl_direct(url, configure).build(),
            None => {
                let mut endpoint = Endpoint::empty();
                for segment in &self.endpoint {
                    endpoint += segment;
                }
                api.kurl(endpoint, configure).build()
            }
        }
    }
}

fn demo_requests() -> Vec<RequestSpec> {
    let mut paging = Map::new();
    paging.insert("limit".into(), Value::from(50));
    paging.insert("sort".into(), Value::from("Latest"));

    let mut by_id = Map::new();
    by_id.insert("id".into(), Value::from("5"));

    let mut auth = Map::new();
    auth.insert("X-Session-Token".into(), Value::from("demo-token"));

    vec![
        RequestSpec {
            endpoint: vec!["v1".into(), "users".into()],
            params: by_id,
            expect: Some(r"https?://.+/v1/users\?id=5".into()),
            ..Default::default()
        },
        RequestSpec {
            endpoint: vec!["/channels/".into(), "/01HZX/".into(), "messages".into()],
            params: paging,
            headers: auth,
            ..Default::default()
        },
        RequestSpec {
            endpoint: vec!["docs".into()],
            fragment: "#getting-started".into(),
            ..Default::default()
        },
        RequestSpec {
            direct: Some("https://status.example.org/ping".into()),
            ..Default::default()
        },
    ]
}

fn load_requests(path: &str) -> Vec<RequestSpec> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read config file `{path}`: {e}");
            process::exit(1);
        }
    };
    match serde_json::from_str::<Vec<RequestSpec>>(&content) {
        Ok(specs) => specs,
        Err(e) => {
            error!("Failed to parse config file `{path}`: {e}");
            process::exit(1);
        }
    }
}

fn print_help() {
    println!(
        "Usage: kurl_sample [OPTIONS]

Options:
  -e, --env-file <FILE>   Load environment variables from FILE (default: .env if present)
  -c, --config <FILE>     JSON file with a list of requests to build
  -v, --verbose           Log at debug level
      --help              Show this help and exit
      --version           Show the version and exit

Environment:
  KURL_API_ROOT           Api root requests are built against (default: {DEFAULT_API_ROOT})
  RUST_LOG                Log filter, overrides --verbose"
    );
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "kurl=trace,kurl_sample=debug"
    } else {
        "kurl=info,kurl_sample=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<String>>();

    if args.iter().any(|a| a == "--help") {
        print_help();
        process::exit(0);
    }

    if args.iter().any(|a| a == "--version") {
        println!("kurl_sample {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let mut env_file: Option<String> = None;
    let mut config_file: Option<String> = None;
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--env-file" | "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("[ERROR] --env-file requires a file name.");
                    process::exit(1);
                }
                env_file = Some(args[i].clone());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("[ERROR] --config requires a file name.");
                    process::exit(1);
                }
                config_file = Some(args[i].clone());
            }
            "--verbose" | "-v" => verbose = true,
            other => {
                eprintln!("[ERROR] Unknown argument `{other}`. See --help.");
                process::exit(1);
            }
        }
        i += 1;
    }

    // The env file may set RUST_LOG, so load it before the subscriber.
    let env_loaded = match &env_file {
        Some(path) => match dotenvy::from_filename(path) {
            Ok(_) => true,
            Err(e) => {
                eprintln!("[ERROR] Failed to load env file `{path}`: {e}");
                process::exit(1);
            }
        },
        None => dotenvy::dotenv().is_ok(),
    };

    init_tracing(verbose);
    if env_loaded {
        debug!("Loaded environment file");
    }

    let config = SampleConfig::from_env();
    info!("Building requests against {}", config.api_root);

    let specs = match &config_file {
        Some(path) => load_requests(path),
        None => demo_requests(),
    };

    let validator = match UrlPattern::new(URL_VALIDATION_PATTERN) {
        Ok(re) => re,
        Err(e) => {
            error!("URL validation pattern does not compile: {e}");
            process::exit(1);
        }
    };

    let api = Api::new(config.api_root);
    let mut failures = 0usize;

    for spec in &specs {
        let request = spec.build(&api);
        debug!(
            endpoint = %request.endpoint(),
            parameters = request.parameters().len(),
            headers = request.headers().len(),
            "built request"
        );
        println!("{request}");

        if !request.matches_regex(&validator) {
            warn!("{request} does not look like a valid absolute URL");
            failures += 1;
        }

        if let Some(pattern) = &spec.expect {
            if let Err(e) = request.ensure_matches(pattern) {
                error!("{e}");
                failures += 1;
            }
        }

        if let Err(e) = request.header_map() {
            error!("Headers for {request} are unusable: {e}");
            failures += 1;
        }
    }

    info!("Built {} request(s), {} check failure(s)", specs.len(), failures);
    if failures > 0 {
        process::exit(2);
    }
}
