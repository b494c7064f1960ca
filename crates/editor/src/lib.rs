//! Editing core for Postlette.
//!
//! The pieces, from the bottom up:
//!
//! - [`Buffer`]: rope text, one selection, undo history
//! - [`apply_selection_transform`]: rewrites the selected text and reselects
//!   the output so transforms can be chained
//! - [`list`]: bullet, dash and numbered list insertion and the line-break
//!   continuation state machine
//! - [`Session`]: a headless model of the editor window (file path, dirty
//!   state, status notices) that GUI shells drive
//!
//! Everything runs synchronously on the caller's thread.

pub mod buffer;
pub mod clipboard;
pub mod file;
mod history;
pub mod list;
pub mod notice;
pub mod session;
pub mod transform;

pub use buffer::Buffer;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use file::FileError;
pub use history::MAX_UNDO;
pub use list::{LineBreak, ListPrefix, ListStyle, handle_line_break, insert_list, unstyle_with_lists};
pub use notice::{AutoDismiss, Notice, NoticeCenter, NoticeKind};
pub use postlette_styles::Style;
pub use session::{SaveOutcome, Session, SessionOptions};
pub use transform::{TextTransform, TransformOutcome, apply_selection_transform, transform_selection_with};
