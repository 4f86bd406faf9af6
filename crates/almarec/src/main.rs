//! # almarec
//!
//! A thin command-line client over the `almarecords` library. The binary only
//! invokes `cli::run()` and handles process termination; everything it does
//! to a record goes through the library.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                        │
//! │  - clap argument parsing (setup.rs)          │
//! │  - config, logging, dispatch (commands.rs)   │
//! │  - human-readable output (render.rs)         │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  FsTransport (store.rs)                      │
//! │  - <data_dir>/<resource>/<id>.json files     │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  almarecords                                 │
//! │  - RecordsApi over the transport             │
//! │  - records, segments and the merge policy    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Two ways to work:
//! - **Offline**: `show` and `merge` operate on wire documents in files
//!   (or `-` for stdin) and print the result.
//! - **Against a data directory**: `get`, `put` and `list` use the
//!   directory-backed transport rooted at `data_dir`, which lives in this
//!   crate: the library itself never touches the filesystem.

mod cli;
mod store;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
