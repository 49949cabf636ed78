//! Print every catalogue entry with the result of its self-test.
//!
//! Run: `cargo run -p crc-engine --example catalog [NAME]`

use crc::{CrcBasic, catalog};

fn main() {
  println!("optimal backend: {}", catalog::Crc32::backend_name());
  println!("basic backend: {}", CrcBasic::<u64>::backend_name());

  if let Some(name) = std::env::args().nth(1) {
    match catalog::find(&name) {
      Some(params) => println!("{params}"),
      None => {
        eprintln!("unknown CRC: {name}");
        std::process::exit(1);
      }
    }
    return;
  }

  for params in catalog::CATALOG {
    let status = match params.verify() {
      Ok(()) => "ok".to_owned(),
      Err(e) => e.to_string(),
    };
    println!("{params}  [{status}]");
  }
}
