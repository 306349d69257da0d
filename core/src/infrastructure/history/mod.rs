pub mod http_history_store;
