pub mod event;
pub mod observation;
pub mod patient;
pub mod persona;
pub mod scale;
pub mod scenario;
pub mod similar;
pub mod summary;
