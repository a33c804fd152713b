//! Ports (trait seams) the domain depends on.

mod employee_store;

pub use employee_store::EmployeeStore;
