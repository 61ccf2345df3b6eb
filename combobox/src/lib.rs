//! A combobox/select widget rendered into a `tuidom` element tree.
//!
//! The widget comes in two variants: a *select* with a read-only display
//! surface and a *search* with an editable field driving filtering. Both
//! pair the field with a dropdown of options loaded from a static list or
//! an async loader, and report proposed selection changes to the owner,
//! which holds the selection.
//!
//! # Example
//!
//! ```ignore
//! use combobox::prelude::*;
//!
//! let doc = Document::with_viewport(80, 24);
//! let select = Select::new(
//!     SelectProps::new()
//!         .kind(SelectType::Search)
//!         .filterable(true)
//!         .options(OptionSource::loader(|query| async move { fetch(query).await })),
//! );
//! select.mount(&doc);
//! doc.set_root(select.render());
//! ```

pub mod change;
pub mod dropdown;
pub mod filter;
pub mod input;
pub mod loader;
pub mod option;
pub mod overrides;
pub mod props;
pub mod select;
pub mod style;
pub mod tag;

pub use change::{ChangeEvent, ChangeType, EventResult, TextInputEvent};
pub use filter::{default_filter_option, filter_options, fuzzy_filter_option};
pub use loader::{LoadError, LoadState, Loader, OptionSource};
pub use option::{Label, SelectOption};
pub use overrides::{Override, Overrides, Slot};
pub use props::{Callbacks, SelectConfig, SelectProps, SelectType};
pub use select::{Select, SelectId};
pub use style::SelectTheme;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ChangeEvent, ChangeType, EventResult, Label, LoadError, LoadState, OptionSource,
        Override, Overrides, Select, SelectConfig, SelectOption, SelectProps, SelectTheme,
        SelectType, Slot, TextInputEvent,
    };
    pub use tuidom::{Document, Element, Event, Key, Modifiers};
}
