pub mod charts;
pub mod panels;
pub mod sink;
pub mod table;
