use anyhow::{anyhow, Result};
use feast_types::{Value, ValueType};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldArg {
    pub name: String,
    pub value: Value,
}

impl FieldArg {
    /// Parses `name=type:value`, e.g. `customer_id=int64:1001`.
    pub fn parse(s: &str) -> Result<Self> {
        let (name, typed) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected name=type:value, got {}", s))?;
        let (value_type, raw) = typed
            .split_once(':')
            .ok_or_else(|| anyhow!("expected type:value for field {}", name))?;
        if name.is_empty() {
            return Err(anyhow!("empty field name in {}", s));
        }
        let value_type: ValueType = value_type.parse()?;
        let value = value_type.parse_value(raw)?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

pub fn parse_field(s: &str) -> Result<FieldArg, String> {
    FieldArg::parse(s).map_err(|e| format!("{:#}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use feast_types::{bytes_val, double_val, int64_val, str_val};

    #[test]
    fn test_parse_field() {
        let arg = FieldArg::parse("customer_id=int64:1001").unwrap();
        assert_eq!(arg.name, "customer_id");
        assert_eq!(arg.value, int64_val(1001));

        let arg = FieldArg::parse("note=string:a:b=c").unwrap();
        assert_eq!(arg.value, str_val("a:b=c"));

        let arg = FieldArg::parse("ratio=double:-0.25").unwrap();
        assert_eq!(arg.value, double_val(-0.25));

        let arg = FieldArg::parse("raw=bytes:").unwrap();
        assert_eq!(arg.value, bytes_val(Vec::new()));
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(FieldArg::parse("customer_id").is_err());
        assert!(FieldArg::parse("customer_id=1001").is_err());
        assert!(FieldArg::parse("=int64:1").is_err());
        assert!(FieldArg::parse("flag=bool:yes").is_err());
        assert!(parse_field("x=float:1").unwrap_err().contains("unknown value type"));
    }
}
