mod component;
pub mod icon;
pub mod scale;
pub mod size;
pub mod state;

pub use component::*;
pub use icon::{deprecated_icon_warning, AvatarIcon, NamedIcon, NamedIconView};
pub use scale::{text_scale, DEFAULT_GAP};
pub use size::{AvatarShape, AvatarSize, SizeParseError};
pub use state::{transition, AvatarStatus, FallbackMachine, LoadEvent};
