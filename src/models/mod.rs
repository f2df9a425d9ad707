pub mod user;
pub mod item;
pub mod task;

pub use user::{AuthResponse, Credentials, RegisterForm, Role, User, UserId, UserStats};
pub use item::{Item, ItemDraft, ItemFilter, ItemId, ItemPage, ItemStatus};
pub use task::{Task, TaskId, TaskScope, TaskStatus};
