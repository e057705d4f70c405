pub mod aggregate;
pub mod date_range;
pub mod entry;
pub mod export;
pub mod formatter;
pub mod input;
pub mod layout;
pub mod messages;
pub mod pivot;
pub mod report;
pub mod utilization;
pub mod view;
