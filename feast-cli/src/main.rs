use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, ensure, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use feast_types::feature_row::event_timestamp;
use feast_types::feature_set::{Schema, SchemaSet};
use feast_types::proto::FeatureRow;
use feast_types::{build_feature_row, row_from_feature_row, Row, Value};
use prost::Message;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{prelude::*, EnvFilter};

mod field_arg;

use field_arg::{parse_field, FieldArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Protobuf,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(long, env)]
    feature_set: String,
    /// RFC 3339 event time; defaults to now
    #[clap(long, env)]
    event_timestamp: Option<DateTime<Utc>>,
    /// name=type:value, where type is one of string, int32, int64, double, bool, bytes
    /// (bytes are taken verbatim from the text)
    #[clap(short = 'f', long = "field", value_parser = parse_field)]
    fields: Vec<FieldArg>,
    /// JSON array of feature set schemata to validate against
    #[clap(long, env)]
    schema: Option<PathBuf>,
    #[clap(long, env, value_enum, default_value_t = Format::Json)]
    format: Format,
}

impl Args {
    fn load_schema_set(&self) -> Result<Option<SchemaSet>> {
        let Some(path) = &self.schema else {
            return Ok(None);
        };
        let file = fs::OpenOptions::new().read(true).open(path)?;
        let rdr = io::BufReader::new(file);
        let schemata: Vec<Schema> = serde_json::from_reader(rdr)?;
        Ok(Some(SchemaSet::new(schemata)))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let schema_set = args.load_schema_set().context("Loading schema")?;
    let mut out = io::stdout().lock();
    run(args, schema_set.as_ref(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(args: Args, schema_set: Option<&SchemaSet>, out: &mut impl Write) -> Result<()> {
    let mut row = Row::with_capacity(args.fields.len());
    for FieldArg { name, value } in args.fields {
        ensure!(!row.contains_key(&name), "duplicate field: {}", name);
        row.insert(name, value);
    }

    let ts = args.event_timestamp.unwrap_or_else(Utc::now);
    let mut feature_row = build_feature_row(args.feature_set, ts, row);
    if let Some(schema_set) = schema_set {
        feature_row = schema_set
            .sanitize(&feature_row)
            .map_err(|msg| anyhow!("feature row validation error: {}", msg))?;
    }
    tracing::info!(
        feature_set = %feature_row.feature_set,
        fields = feature_row.fields.len(),
        "assembled feature row"
    );

    match args.format {
        Format::Json => write_json(&feature_row, out)?,
        Format::Protobuf => out.write_all(&feature_row.encode_to_vec())?,
    }
    Ok(())
}

fn write_json(feature_row: &FeatureRow, out: &mut impl Write) -> Result<()> {
    let fields = row_from_feature_row(feature_row)?
        .into_iter()
        .collect::<BTreeMap<_, _>>();
    // JSON has no representation for NaN or infinities
    for (name, value) in &fields {
        if let Value::Double(d) = value {
            ensure!(
                d.is_finite(),
                "field {} is {}, not representable in JSON",
                name,
                d
            );
        }
    }
    let json = serde_json::json!({
        "feature_set": feature_row.feature_set,
        "event_timestamp": event_timestamp(feature_row).map(|ts| ts.to_rfc3339()),
        "fields": fields,
    });
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
