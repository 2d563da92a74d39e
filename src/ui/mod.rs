pub mod balloons;
pub mod panels;
pub mod table;
