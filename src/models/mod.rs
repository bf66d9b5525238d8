pub mod listing;
pub mod review;
