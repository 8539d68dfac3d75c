#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::should_implement_trait)]

//! # Copydesk
//!
//! Terminal content-generation wizard - research a topic, tune SEO settings,
//! draft an article and send it to a technical reviewer.
//!
//! The library holds two independent state machines and the seams around
//! them:
//!
//! - [`wizard::Wizard`]: input → research → SEO settings → article
//! - [`review::ReviewSession`]: fixed-duration analysis → revision → hand-back
//! - [`services`]: research, generation and review traits with mock backends
//! - [`persistence`]: best-effort storage of research sessions and articles
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the interactive wizard
//! copydesk
//!
//! # One-shot generation, written to ./articolo-marketing-AI.txt
//! copydesk generate "Come usare ChatGPT per il marketing locale" --keyword "marketing AI"
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::redundant_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unnecessary_literal_bound)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::use_self)]

pub mod app;
pub mod core;
pub mod handoff;
pub mod persistence;
pub mod review;
pub mod services;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use app::App;
pub use core::{Config, ResearchResult, SeoSettings, Tone};
pub use handoff::{Mailbox, ReviewRequest, ReviewReturn};
pub use persistence::{InMemoryGateway, JsonFileGateway, PersistenceGateway, SessionId};
pub use review::{ReviewEntry, ReviewPhase, ReviewSession};
pub use services::Services;
pub use wizard::{Wizard, WizardError, WizardPhase, WizardSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "copydesk";
