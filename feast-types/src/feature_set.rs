use feast_stub::types::{FeatureRow, Field};
use serde::{Deserialize, Serialize};

use crate::failsafe::FailsafeFeatureRow;
use crate::value::ValueType;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<FieldSchema>,
}

impl Schema {
    fn validate(&self, normalized_row: &FeatureRow) -> Result<(), String> {
        if self.fields.len() != normalized_row.fields.len() {
            return Err(format!(
                "Mismatched the number of fields: expected: {}, actual: {}",
                self.fields.len(),
                normalized_row.fields.len()
            ));
        }
        for (idx, (field_schema, field)) in self
            .fields
            .iter()
            .zip(normalized_row.fields.iter())
            .enumerate()
        {
            field_schema
                .validate(field)
                .map_err(|e| format!("fields[{idx}]: {e}"))?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.fields.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub value_type: ValueType,
}

impl FieldSchema {
    fn validate(&self, Field { name, value }: &Field) -> Result<(), String> {
        self.validate_name(name)?;
        let val = value
            .as_ref()
            .and_then(|v| v.val.as_ref())
            .ok_or("no value")?;
        if !self.value_type.matches(val) {
            return Err(format!("{name} is not {}", self.value_type));
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), String> {
        if self.name != *name {
            return Err(format!(
                "Mismatched field name: expected: {}, actual: {}",
                &self.name, name
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SchemaSet {
    schemata: Vec<Schema>,
}

impl SchemaSet {
    pub fn new(mut schemata: Vec<Schema>) -> Self {
        schemata.sort_by(|a, b| a.name.cmp(&b.name));
        for schema in &mut schemata {
            schema.normalize();
        }
        Self::new_unchecked(schemata)
    }

    pub fn new_unchecked(schemata: Vec<Schema>) -> Self {
        Self { schemata }
    }

    pub fn sanitize(&self, feature_row: &FeatureRow) -> Result<FeatureRow, String> {
        let mut normalized_row = feature_row.clone();
        normalize_feature_row(&mut normalized_row);
        self.validate(&normalized_row)?;
        Ok(normalized_row)
    }

    pub fn validate(&self, normalized_row: &FeatureRow) -> Result<(), String> {
        let schema = self
            .find_schema_by_name(&normalized_row.feature_set)
            .ok_or_else(|| {
                format!(
                    "No matched schema for feature set {}",
                    &normalized_row.feature_set
                )
            })?;
        schema.validate(normalized_row)?;
        Ok(())
    }

    /// Sanitizes `feature_row`, recording the failure on the returned row instead of dropping it.
    pub fn validate_failsafe(
        &self,
        feature_row: FeatureRow,
    ) -> FailsafeFeatureRow<FeatureRow, FeatureRow> {
        match self.sanitize(&feature_row) {
            Ok(sanitized) => FailsafeFeatureRow::of(feature_row, sanitized),
            Err(e) => {
                tracing::warn!(feature_set = %feature_row.feature_set, error = %e, "invalid feature row");
                FailsafeFeatureRow::of(feature_row.clone(), feature_row).with_error_message(e)
            }
        }
    }

    pub fn find_schema_by_name(&self, feature_set: &str) -> Option<&Schema> {
        self.schemata
            .iter()
            .find(|schema| feature_set == schema.name)
    }
}

fn normalize_feature_row(feature_row: &mut FeatureRow) {
    feature_row.fields.sort_by(|a, b| a.name.cmp(&b.name))
}
