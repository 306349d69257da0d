pub mod create_history_entry;
pub mod get_history;
