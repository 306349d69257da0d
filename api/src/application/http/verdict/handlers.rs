pub mod create_verdict;
