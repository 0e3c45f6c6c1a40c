use clap::Parser;
use mailchimp_client::{Client, Params};
use serde_json::Value;

#[derive(Debug, Parser, Clone)]
#[command(name = "mailchimp-client")]
#[command(about = "Issue a single request against the Mailchimp v3 API")]
struct Cli {
    #[arg(short, long, env = "MAILCHIMP_API_KEY")]
    api_key: String,
    /// HTTP verb: get, head, put, post, patch or delete
    method: String,
    /// Resource path relative to the API root, e.g. "lists"
    resource: String,
    /// Request arguments as key=value pairs. Values are parsed as JSON when
    /// possible and kept as plain strings otherwise, so `-p count=10` sends a
    /// number and `-p fields=lists.id` sends a string.
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, Value)>,
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got \"{raw}\""))?;
    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let client = Client::new(&args.api_key)?;

    let mut params = Params::new();
    for (key, value) in args.params {
        params.insert(key, value);
    }

    let result = client.request(&args.resource, params, &args.method).await?;
    println!("{}", serde_json::to_string_pretty(result.as_value())?);

    Ok(())
}
