//! # QuickShrink
//!
//! A photo compressor: pick one or more photos, compress them with a
//! quality preset (optionally resizing to a social-media dimension
//! preset), and export the results with a before/after size report.
//!
//! # Architecture: One Workflow, Four Services
//!
//! All logic lives in a single state machine, [`workflow::CompressionWorkflow`]:
//!
//! ```text
//! Idle --select--> Selected --compress--> Compressing --ok--> Compressed --export--> (stays)
//!                     ^                        |
//!                     +------- failure --------+
//! ```
//!
//! Everything with a side effect sits behind a service trait — picking
//! images, querying file sizes, the resize/encode codec, and the export
//! destination. This separation exists for three reasons:
//!
//! - **Testability**: the workflow's ordering, all-or-nothing commits, and
//!   failure transitions are exercised with recording mocks, without
//!   decoding a single image.
//! - **Portability**: the CLI binds a path picker and a directory
//!   exporter; a GUI shell would bind a file dialog and a share sheet to
//!   the same workflow.
//! - **Narrow contracts**: each service does one thing, so the production
//!   implementations stay small enough to read in one sitting.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`workflow`] | The select → compress → export state machine and its error taxonomy |
//! | [`presets`] | Immutable preset tables: compression levels and social resize targets |
//! | [`stats`] | Pure size accounting: unit formatting and savings math |
//! | [`services`] | Service traits plus production implementations (path picker, JPEG codec, fs sizer, directory exporter) |
//! | [`config`] | `quickshrink.toml` loading: sparse overrides, unknown keys rejected |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers, plus the JSON report |
//!
//! # Design Decisions
//!
//! ## JPEG-Only Output
//!
//! Compressed output is always JPEG. It is the one lossy format with a
//! universally understood quality dial, and every destination a shrunken
//! photo is headed for accepts it. A single output format keeps the codec
//! to one encode path and the presets to one number.
//!
//! ## All-or-Nothing Commits
//!
//! Neither selection nor compression ever commits partial state. A
//! selection only replaces the previous one after every picked image has
//! been sized; a batch compress that fails at image k discards the k
//! outputs already produced and returns to `Selected` with the failing
//! index in the error. The displayed totals are therefore always
//! internally consistent.
//!
//! ## Pure-Rust Imaging
//!
//! The codec uses the `image` crate (Lanczos3 resampling, pure Rust JPEG
//! encoder) — no ImageMagick, no system libraries. The binary is fully
//! self-contained.
//!
//! ## Sequential Batch Processing
//!
//! Images compress one at a time, in selection order, and outputs are
//! reported in that order. The `Compressing` state makes "one compress at
//! a time" part of the contract rather than an accident of the
//! implementation.

pub mod config;
pub mod output;
pub mod presets;
pub mod services;
pub mod stats;
pub mod workflow;
