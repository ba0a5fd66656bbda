use std::path::PathBuf;

fn main() {
    let generated_dir = PathBuf::from("src/generated");
    std::fs::create_dir_all(&generated_dir).unwrap();

    // The MAT schema is plain proto3, so the pure-Rust parser is enough and
    // no protoc install is needed.
    protobuf_codegen::Codegen::new()
        .pure()
        .input("proto/parsimony.proto")
        .include("proto")
        .out_dir(&generated_dir)
        .run()
        .expect("Protobuf codegen failed");

    println!("cargo:rerun-if-changed=proto/parsimony.proto");
}
