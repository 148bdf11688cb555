use anyhow::{anyhow, ensure, Result};
use chrono::{DateTime, TimeZone, Utc};
use feast_stub::types::{self, FeatureRow, Field};

use crate::conversion::convert_timestamp;
use crate::value::{Row, Value};

pub fn build_feature_row(
    feature_set: impl Into<String>,
    event_timestamp: DateTime<Utc>,
    row: Row,
) -> FeatureRow {
    let mut fields = row
        .into_iter()
        .map(|(name, value)| Field {
            name,
            value: Some(types::Value::from(value)),
        })
        .collect::<Vec<_>>();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    let feature_row = FeatureRow {
        fields,
        event_timestamp: Some(convert_timestamp(event_timestamp)),
        feature_set: feature_set.into(),
    };
    tracing::debug!(
        feature_set = %feature_row.feature_set,
        fields = feature_row.fields.len(),
        "built feature row"
    );
    feature_row
}

pub fn row_from_feature_row(feature_row: &FeatureRow) -> Result<Row> {
    let mut row = Row::with_capacity(feature_row.fields.len());
    for Field { name, value } in &feature_row.fields {
        let value = value
            .clone()
            .ok_or_else(|| anyhow!("field {} has no value", name))?;
        let value = Value::try_from(value).map_err(|e| anyhow!("field {}: {}", name, e))?;
        let prev = row.insert(name.clone(), value);
        ensure!(prev.is_none(), "duplicate field: {}", name);
    }
    Ok(row)
}

/// Rows without an event timestamp are treated as happening at the epoch.
pub fn event_timestamp(feature_row: &FeatureRow) -> Option<DateTime<Utc>> {
    let ts = types::feature_row::get_timestamp(feature_row);
    let nanos = u32::try_from(ts.nanos).ok()?;
    Utc.timestamp_opt(ts.seconds, nanos).single()
}
