pub mod element;
pub mod enhance;
pub mod event;
pub mod focus;
pub mod measure;
pub mod selector;
pub mod text;

pub use element::{find_element, find_element_mut, insert_before, parent_id_of, Content, Element};
pub use enhance::{handle_event, toggle, Disclosure, DisclosureConfig, Locale};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use measure::natural_height;
pub use selector::{query_all, Selector};
