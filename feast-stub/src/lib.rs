pub mod types {
    tonic::include_proto!("feast.types");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("feast_types_descriptor");

    pub mod feature_row {
        pub fn get_timestamp(row: &super::FeatureRow) -> prost_types::Timestamp {
            row.event_timestamp.clone().unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::types::FILE_DESCRIPTOR_SET;

    #[test]
    fn test_file_descriptor_set() {
        let set = prost_types::FileDescriptorSet::decode(FILE_DESCRIPTOR_SET).unwrap();
        let mut names = set
            .file
            .iter()
            .filter_map(|f| f.name.as_deref())
            .filter(|name| name.starts_with("feast/"))
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(
            names,
            [
                "feast/types/FeatureRow.proto",
                "feast/types/Field.proto",
                "feast/types/Value.proto",
            ]
        );
        let value = set
            .file
            .iter()
            .flat_map(|f| f.message_type.iter())
            .find(|m| m.name() == "Value")
            .unwrap();
        assert_eq!(value.oneof_decl.len(), 1);
        assert_eq!(value.field.len(), 6);
    }
}
