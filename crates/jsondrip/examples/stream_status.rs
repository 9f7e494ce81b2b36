//! Watches a document's status evolve while it arrives in network-sized
//! chunks, then prints the rebuilt tree once the stream ends.
//!
//! Producers that send configuration over a socket rarely align their writes
//! with document boundaries; the chunks below split keys and values
//! mid-string on purpose. After every chunk the builder still knows exactly
//! where the document stands, so a consumer can show progress, keep waiting,
//! or drop the connection at the first offending character.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsondrip --example stream_status
//! ```

use jsondrip::{Status, TreeBuilder};

fn main() {
    // A scene description as a socket might deliver it.
    let chunks = [
        "{\"scene\"",
        ":{\"came",
        "ra\":\"main\",\"light\":{\"ambient\":[\"0.8\",",
        "\"0.8\",\"0.8\"]",
        ",\"spotangle\":\"180\"}}",
        "}",
    ];

    let mut builder = TreeBuilder::new();
    for chunk in chunks {
        if let Err(err) = builder.feed(chunk) {
            eprintln!("stream rejected: {err}");
            return;
        }
        println!("{:42} -> {}", format!("{chunk:?}"), builder.status());
    }

    assert_eq!(builder.status(), Status::Valid);
    if let Some(tree) = builder.output() {
        println!("\n{tree}");
    }
}
