// CLI module for contentful-query
// Author: kelexine (https://github.com/kelexine)

use crate::error::{ContentfulError, Result};
use crate::models::{ContentfulRequest, Variables};
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// contentful-query - Run a GraphQL query against the Contentful content API
#[derive(Parser, Debug)]
#[command(name = "contentful-query", version, about, long_about = None)]
pub struct Args {
    /// GraphQL query text
    #[arg(short, long, conflicts_with = "query_file", required_unless_present = "query_file")]
    pub query: Option<String>,

    /// Read the GraphQL query from a file
    #[arg(short = 'f', long)]
    pub query_file: Option<PathBuf>,

    /// Query variable as name=value; the value is parsed as JSON, falling back to a string
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// GraphQL endpoint (overrides CONTENTFUL_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// API token (overrides CONTENTFUL_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Build the request described by the arguments.
    pub fn request(&self) -> Result<ContentfulRequest> {
        let query = match (&self.query, &self.query_file) {
            (Some(query), _) => query.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                return Err(ContentfulError::Config(
                    "Either --query or --query-file is required".to_string(),
                ))
            }
        };

        Ok(ContentfulRequest::new(query).with_variables(parse_vars(&self.vars)?))
    }
}

/// Parse `name=value` pairs into GraphQL variables.
pub fn parse_vars(vars: &[String]) -> Result<Variables> {
    vars.iter()
        .map(|var| {
            let (name, raw) = var.split_once('=').ok_or_else(|| {
                ContentfulError::Config(format!("Invalid variable '{}', expected NAME=VALUE", var))
            })?;
            let value =
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            Ok((name.trim().to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_vars() {
        let vars = parse_vars(&[
            "limit=2".to_string(),
            "locale=en-US".to_string(),
            "preview=true".to_string(),
            r#"where={"slug":"intro"}"#.to_string(),
        ])
        .unwrap();

        assert_eq!(vars["limit"], json!(2));
        assert_eq!(vars["locale"], json!("en-US"));
        assert_eq!(vars["preview"], json!(true));
        assert_eq!(vars["where"], json!({ "slug": "intro" }));
    }

    #[test]
    fn test_parse_vars_rejects_missing_value() {
        let err = parse_vars(&["limit".to_string()]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_args_build_request() {
        let args = Args::parse_from([
            "contentful-query",
            "--query",
            "{ a }",
            "--var",
            "limit=2",
        ]);

        let request = args.request().unwrap();
        assert_eq!(request.query, "{ a }");
        assert_eq!(request.variables["limit"], json!(2));
    }

    #[test]
    fn test_args_require_a_query() {
        assert!(Args::try_parse_from(["contentful-query"]).is_err());
    }
}
