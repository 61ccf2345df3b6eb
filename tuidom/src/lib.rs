pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod text_input;
pub mod types;

pub use document::{Document, ListenerGuard, Phase, Propagation};
pub use element::{find_by_attr, find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{ancestors, contains};
pub use text_input::{TextEditResult, TextInputData};
pub use types::*;
