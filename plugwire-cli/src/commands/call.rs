//! `plugwire call` - dispatch one request and print the envelope

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use plugwire_api::{CallContext, ExtensionPlugin, PluginRequest};
use plugwire_config::{GEN_CONFIG_ACTION, REQUEST_ACTION_KEY};

/// Call arguments
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Value for the action discriminator
    #[arg(long, default_value = GEN_CONFIG_ACTION)]
    pub action: String,

    /// Send the request without an action field
    #[arg(long, conflicts_with = "action")]
    pub no_action: bool,

    /// Extra request field as key=value (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Give up after this many seconds (overrides call.timeout_secs)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Run call command; returns the envelope's status code
pub async fn run(
    plugin: &dyn ExtensionPlugin,
    args: CallArgs,
    default_timeout: Option<u64>,
) -> Result<i32> {
    let request = build_request(&args);
    let ctx = match args.timeout_secs.or(default_timeout) {
        Some(secs) => CallContext::new().with_timeout(Duration::from_secs(secs)),
        None => CallContext::new(),
    };

    let canceller = ctx.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling call");
            canceller.cancel();
        }
    });

    tracing::debug!(plugin = %plugin.name(), fields = request.len(), "Dispatching call");
    let response = plugin.call(&ctx, &request).await;
    interrupt.abort();

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.status().code)
}

fn build_request(args: &CallArgs) -> PluginRequest {
    let mut request: PluginRequest = args.params.iter().cloned().collect();
    if args.no_action {
        request.remove(REQUEST_ACTION_KEY);
    } else {
        request.insert(REQUEST_ACTION_KEY.to_string(), args.action.clone());
    }
    request
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugwire_api::ConfigMap;
    use plugwire_config::{StaticConfigPlugin, new_config_plugin};

    fn args(action: &str) -> CallArgs {
        CallArgs {
            action: action.to_string(),
            no_action: false,
            params: vec![],
            timeout_secs: None,
        }
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("a=b").unwrap(),
            ("a".to_string(), "b".to_string())
        );
        assert_eq!(
            parse_param("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert_eq!(parse_param("a=").unwrap(), ("a".to_string(), String::new()));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_build_request_sets_action() {
        let mut call = args("genConfig");
        call.params = vec![("extra".into(), "1".into())];

        let request = build_request(&call);

        assert_eq!(request.get("action").map(String::as_str), Some("genConfig"));
        assert_eq!(request.get("extra").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_build_request_action_flag_wins_over_param() {
        let mut call = args("genConfig");
        call.params = vec![("action".into(), "other".into())];

        let request = build_request(&call);
        assert_eq!(request.get("action").map(String::as_str), Some("genConfig"));
    }

    #[test]
    fn test_build_request_without_action() {
        let mut call = args("genConfig");
        call.no_action = true;
        call.params = vec![("action".into(), "other".into())];

        assert!(!build_request(&call).contains_key("action"));
    }

    #[tokio::test]
    async fn test_run_returns_status_code() {
        let plugin = new_config_plugin(StaticConfigPlugin::new(
            "static",
            ConfigMap::from([("base".to_string(), "{}".to_string())]),
        ));

        assert_eq!(run(&plugin, args("genConfig"), None).await.unwrap(), 0);
        assert_eq!(run(&plugin, args("nope"), Some(5)).await.unwrap(), 1);
    }
}
