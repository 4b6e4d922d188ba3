pub mod del;
pub mod hours;
pub mod month_view;
pub mod save;
pub mod validate;

pub use del::DeleteLogic;
pub use month_view::build_month_view;
pub use save::SaveLogic;
pub use validate::{EntryDraft, ValidEntry, validate};
