pub mod conversion;
pub mod failsafe;
pub mod feature_row;
pub mod feature_set;
pub mod value;

pub use failsafe::FailsafeFeatureRow;
pub use feature_row::{build_feature_row, row_from_feature_row};
pub use value::{bool_val, bytes_val, double_val, int32_val, int64_val, str_val};
pub use value::{Row, Value, ValueType};

pub use feast_stub::types as proto;
