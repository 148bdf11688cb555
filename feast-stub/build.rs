use std::{env, path::PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    tonic_build::configure()
        .build_client(false)
        .build_server(false)
        .file_descriptor_set_path(out_dir.join("feast_types_descriptor.bin"))
        .compile(
            &[
                "proto/feast/types/Value.proto",
                "proto/feast/types/Field.proto",
                "proto/feast/types/FeatureRow.proto",
            ],
            &["proto"],
        )
        .unwrap_or_else(|e| panic!("Failed to compile protos {:?}", e));
}
