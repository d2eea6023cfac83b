use std::{fs, path::Path};

pub fn load_payload(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

pub fn load_payload_bytes(path: impl AsRef<Path>) -> Vec<u8> {
    fs::read(path).unwrap()
}
