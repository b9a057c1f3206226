//! Embedded lyrics corpus
//!
//! Compiled into the binary at build time from `data/lyrics.txt`.

include!(concat!(env!("OUT_DIR"), "/lyrics.rs"));
