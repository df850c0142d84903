mod announcement;
mod id;
mod key;
mod login;
mod snapshot;
mod timestamp;
mod ttl;

pub use announcement::*;
pub use id::*;
pub use key::*;
pub use login::*;
pub use snapshot::*;
pub use timestamp::*;
pub use ttl::*;
